pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod constants;
pub mod runtime;
pub mod sections;
pub mod tui;
pub mod utils;

pub use api::{ApiClient, ApiError, ChatBackend};
pub use app::{load_config, Config};
pub use chat::{ChatWidget, ConversationStore, Dispatcher, SendOutcome};
pub use tui::run_ui;
pub use utils::FolioError;
