//! UI-level state that drives rendering.
//! This is a read-only projection of the chat engine state, updated each
//! frame by draining the EventBus.

use banter_types::event::ChatEvent;
use banter_types::message::Message;
use banter_types::theme::Theme;
use banter_types::user::UserProfile;

/// State visible to UI panels
pub struct UiState {
    /// Displayed messages, including the in-progress streaming reply
    pub messages: Vec<Message>,
    /// Bot is "thinking" — show the typing indicator
    pub typing: bool,
    /// Dismissable error banner
    pub error: Option<String>,
    /// Input field content
    pub input_text: String,
    /// Active color theme
    pub theme: Theme,
    /// Signed-in user, if any
    pub user: Option<UserProfile>,
    /// Whether the auth modal is open
    pub show_auth: bool,
    /// A clear request awaiting confirmation
    pub confirm_clear: bool,
    /// Login/signup form state
    pub auth_form: AuthForm,
}

/// Fields of the login/signup modal
#[derive(Default)]
pub struct AuthForm {
    pub signup_mode: bool,
    pub name: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub pending: bool,
}

impl AuthForm {
    pub fn reset(&mut self) {
        *self = AuthForm::default();
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            typing: false,
            error: None,
            input_text: String::new(),
            theme: Theme::default(),
            user: None,
            show_auth: false,
            confirm_clear: false,
            auth_form: AuthForm::default(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::HistoryLoaded { messages } => {
                    self.messages = messages;
                    self.typing = false;
                }
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                ChatEvent::TypingStarted => {
                    self.typing = true;
                    self.error = None;
                }
                ChatEvent::StreamStarted { message } => {
                    self.typing = false;
                    self.messages.push(message);
                }
                ChatEvent::StreamDelta { message_id, text } => {
                    if let Some(msg) = self.messages.iter_mut().find(|m| m.id == message_id) {
                        msg.text = text;
                    }
                }
                ChatEvent::StreamCompleted { message_id, text } => {
                    if let Some(msg) = self.messages.iter_mut().find(|m| m.id == message_id) {
                        msg.text = text;
                        msg.is_streaming = false;
                    }
                }
                ChatEvent::TurnComplete => {
                    self.typing = false;
                }
                ChatEvent::HistoryCleared => {
                    self.messages.clear();
                    self.typing = false;
                }
                ChatEvent::HistoryReplaced { messages } => {
                    self.messages = messages;
                    self.typing = false;
                }
                ChatEvent::Error { message } => {
                    log::warn!("Chat error surfaced to UI: {}", message);
                    self.error = Some(message);
                    self.typing = false;
                }
            }
        }
    }

    /// A turn is in flight: thinking or mid-reveal
    pub fn is_busy(&self) -> bool {
        self.typing || self.messages.iter().any(|m| m.is_streaming)
    }

    /// Identity for history scoping: the signed-in email, or None
    pub fn identity(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.email.clone())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
