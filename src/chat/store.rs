use super::message::{Message, Role};

/// Ordered, append-only message history plus the backend session id.
///
/// There is no way to edit, remove or reorder messages, and the session id
/// is pinned by the first non-empty value handed to [`capture_session`].
///
/// [`capture_session`]: ConversationStore::capture_session
#[derive(Debug, Default, Clone)]
pub struct ConversationStore {
    messages: Vec<Message>,
    session_id: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the end of the conversation
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Record the session id unless one is already set.
    /// Returns true if this call set it.
    pub fn capture_session(&mut self, id: &str) -> bool {
        if self.session_id.is_some() || id.is_empty() {
            return false;
        }
        self.session_id = Some(id.to_string());
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
