use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events emitted by the chat engine.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A full history was loaded for the active identity
    HistoryLoaded { messages: Vec<Message> },

    /// A message was appended to the history (user or finished bot)
    MessageAppended { message: Message },

    /// The bot is "thinking" — show the typing indicator
    TypingStarted,

    /// A streaming bot message was created and is about to grow
    StreamStarted { message: Message },

    /// The in-progress bot message now reads `text`
    StreamDelta { message_id: String, text: String },

    /// The streaming message finished with this final text
    StreamCompleted { message_id: String, text: String },

    /// A send turn finished (queue may dispatch the next one)
    TurnComplete,

    /// History was cleared for the active identity
    HistoryCleared,

    /// History was replaced wholesale (import)
    HistoryReplaced { messages: Vec<Message> },

    /// A user-visible, dismissable error
    Error { message: String },
}
