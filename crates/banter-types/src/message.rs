use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message in a chat history.
///
/// The serialized shape is the external persistence/export format:
/// `sender` is lowercased and the streaming flag appears as `isStreaming`
/// only while a bot reply is mid-reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// RFC 3339 creation time
    pub timestamp: String,
    /// True only on the in-progress bot message during a streaming reveal
    #[serde(rename = "isStreaming", default, skip_serializing_if = "is_false")]
    pub is_streaming: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User, false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot, false)
    }

    /// An empty bot message that a streaming reveal will grow into
    pub fn streaming_bot() -> Self {
        Self::new(String::new(), Sender::Bot, true)
    }

    fn new(text: String, sender: Sender, is_streaming: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_streaming,
        }
    }
}
