use chrono::{DateTime, Local};
use serde::Serialize;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label used when rendering the conversation
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// One entry of a conversation. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    role: Role,
    content: String,
    #[serde(skip)]
    created_at: DateTime<Local>,
}

impl Message {
    pub(crate) fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Local::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl PartialEq for Message {
    // Timestamps are display-only
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.content == other.content
    }
}

impl Eq for Message {}
