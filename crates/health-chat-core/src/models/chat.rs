//! Chat message models.

use serde::{Deserialize, Serialize};

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageSender {
    /// The person using the app
    User,
    /// The language model
    Assistant,
    /// App-generated status messages (e.g., "extracted 4 results")
    System,
}

/// A single message in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Local UUID, generated at construction
    pub id: String,
    /// Message body
    pub text: String,
    /// Message origin
    pub sender: MessageSender,
    /// Creation timestamp (RFC3339)
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a message with a fresh id and timestamp.
    pub fn new(text: String, sender: MessageSender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a user message.
    pub fn user(text: String) -> Self {
        Self::new(text, MessageSender::User)
    }

    /// Create an assistant message.
    pub fn assistant(text: String) -> Self {
        Self::new(text, MessageSender::Assistant)
    }

    /// Create a system status message.
    pub fn system(text: String) -> Self {
        Self::new(text, MessageSender::System)
    }

    /// Check whether this message came from the user.
    pub fn is_user(&self) -> bool {
        self.sender == MessageSender::User
    }

    /// Check whether this is an app-generated status message.
    pub fn is_system(&self) -> bool {
        self.sender == MessageSender::System
    }
}
