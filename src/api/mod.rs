// Gateway module for the portfolio API - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod client;
mod error;
mod traits;
mod types;

// Public re-exports - the ONLY way to access API functionality
pub use client::ApiClient;
#[cfg(test)]
pub(crate) use client::test_server;
pub use error::{ApiError, ApiErrorKind};
pub use traits::ChatBackend;
#[cfg(test)]
pub use traits::MockChatBackend;
pub use types::{ChatRequest, ChatResponse, Experience, Profile, Project, Skill};
