#[cfg(test)]
mod tests {
    use crate::state::*;
    use banter_types::event::ChatEvent;
    use banter_types::message::{Message, Sender};
    use banter_types::theme::Theme;
    use banter_types::user::UserProfile;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.messages.is_empty());
        assert!(!state.typing);
        assert!(state.error.is_none());
        assert!(state.input_text.is_empty());
        assert_eq!(state.theme, Theme::Light);
        assert!(state.user.is_none());
        assert!(!state.show_auth);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_history_loaded() {
        let mut state = UiState::new();
        state.typing = true;
        state.process_events(vec![ChatEvent::HistoryLoaded {
            messages: vec![Message::user("hi"), Message::bot("hello")],
        }]);
        assert_eq!(state.messages.len(), 2);
        assert!(!state.typing);
    }

    #[test]
    fn test_ui_state_message_appended() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::MessageAppended {
            message: Message::user("hello"),
        }]);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].sender, Sender::User);
    }

    #[test]
    fn test_ui_state_typing_clears_error() {
        let mut state = UiState::new();
        state.error = Some("old error".to_string());
        state.process_events(vec![ChatEvent::TypingStarted]);
        assert!(state.typing);
        assert!(state.error.is_none());
        assert!(state.is_busy());
    }

    #[test]
    fn test_ui_state_stream_lifecycle() {
        let mut state = UiState::new();
        let streaming = Message::streaming_bot();
        let id = streaming.id.clone();

        state.process_events(vec![
            ChatEvent::TypingStarted,
            ChatEvent::StreamStarted { message: streaming },
        ]);
        assert!(!state.typing, "typing indicator ends when streaming starts");
        assert!(state.is_busy(), "still busy while streaming");

        state.process_events(vec![
            ChatEvent::StreamDelta {
                message_id: id.clone(),
                text: "alpha".to_string(),
            },
            ChatEvent::StreamDelta {
                message_id: id.clone(),
                text: "alpha beta".to_string(),
            },
        ]);
        assert_eq!(state.messages[0].text, "alpha beta");
        assert!(state.messages[0].is_streaming);

        state.process_events(vec![
            ChatEvent::StreamCompleted {
                message_id: id,
                text: "alpha beta gamma".to_string(),
            },
            ChatEvent::TurnComplete,
        ]);
        assert_eq!(state.messages[0].text, "alpha beta gamma");
        assert!(!state.messages[0].is_streaming);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_stream_delta_unknown_id_is_ignored() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::StreamDelta {
            message_id: "ghost".to_string(),
            text: "boo".to_string(),
        }]);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_ui_state_history_cleared() {
        let mut state = UiState::new();
        state.messages.push(Message::user("hi"));
        state.typing = true;
        state.process_events(vec![ChatEvent::HistoryCleared]);
        assert!(state.messages.is_empty());
        assert!(!state.typing);
    }

    #[test]
    fn test_ui_state_history_replaced() {
        let mut state = UiState::new();
        state.messages.push(Message::user("old"));
        state.process_events(vec![ChatEvent::HistoryReplaced {
            messages: vec![Message::user("new one"), Message::bot("new two")],
        }]);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].text, "new one");
    }

    #[test]
    fn test_ui_state_error_event() {
        let mut state = UiState::new();
        state.typing = true;
        state.process_events(vec![ChatEvent::Error {
            message: "Failed to get a response. Please try again.".to_string(),
        }]);
        assert!(state.error.as_deref().unwrap().contains("try again"));
        assert!(!state.typing, "error halts the typing indicator");
    }

    #[test]
    fn test_ui_state_identity() {
        let mut state = UiState::new();
        assert!(state.identity().is_none());
        state.user = Some(UserProfile::new("Demo", "demo@example.com"));
        assert_eq!(state.identity().as_deref(), Some("demo@example.com"));
    }

    #[test]
    fn test_ui_state_full_turn_lifecycle() {
        let mut state = UiState::new();
        let streaming = Message::streaming_bot();
        let id = streaming.id.clone();

        state.process_events(vec![
            ChatEvent::MessageAppended {
                message: Message::user("Tell me about AI"),
            },
            ChatEvent::TypingStarted,
        ]);
        assert!(state.is_busy());

        state.process_events(vec![
            ChatEvent::StreamStarted { message: streaming },
            ChatEvent::StreamDelta {
                message_id: id.clone(),
                text: "Here".to_string(),
            },
            ChatEvent::StreamCompleted {
                message_id: id,
                text: "Here you go".to_string(),
            },
            ChatEvent::TurnComplete,
        ]);

        assert!(!state.is_busy());
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].text, "Here you go");
    }

    #[test]
    fn test_auth_form_reset() {
        let mut form = AuthForm {
            signup_mode: true,
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            password: "pw".to_string(),
            error: Some("nope".to_string()),
            pending: true,
        };
        form.reset();
        assert!(!form.signup_mode);
        assert!(form.name.is_empty());
        assert!(form.error.is_none());
        assert!(!form.pending);
    }
}
