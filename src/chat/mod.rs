//! Chat widget core: conversation state, request lifecycle and error fallback.

mod dispatcher;
mod fallback;
mod message;
mod store;
mod widget;

pub use dispatcher::{DispatchState, Dispatcher, PendingRequest, RejectReason, SendOutcome, Ticket};
pub use fallback::FallbackKind;
pub use message::{Message, Role};
pub use store::ConversationStore;
pub use widget::ChatWidget;
