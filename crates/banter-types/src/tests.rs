#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::message::*;
    use crate::theme::*;
    use crate::transfer::*;
    use crate::user::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello");
        assert!(!msg.is_streaming);
        assert!(!msg.id.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_bot() {
        let msg = Message::bot("Hi there");
        assert_eq!(msg.sender, Sender::Bot);
        assert!(!msg.is_streaming);
    }

    #[test]
    fn test_message_streaming_bot() {
        let msg = Message::streaming_bot();
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.text.is_empty());
        assert!(msg.is_streaming);
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_external_shape() {
        let msg = Message::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        // Streaming flag is omitted when false
        assert!(json.get("isStreaming").is_none());

        let streaming = Message::streaming_bot();
        let json = serde_json::to_value(&streaming).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["isStreaming"], true);
    }

    #[test]
    fn test_message_deserialize_without_streaming_flag() {
        let json = r#"{"id":"1","text":"hi","sender":"bot","timestamp":"2026-01-01T00:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender, Sender::Bot);
        assert!(!msg.is_streaming);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("round trip");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, msg.id);
        assert_eq!(back.text, msg.text);
        assert_eq!(back.sender, msg.sender);
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_theme_cycle_order() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::NeonSunset);
        assert_eq!(Theme::NeonSunset.next(), Theme::Light);
    }

    #[test]
    fn test_theme_literals_roundtrip() {
        for theme in [Theme::Light, Theme::Dark, Theme::NeonSunset] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_theme_parse_unknown_falls_back_to_light() {
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    // ─── Export Format Tests ─────────────────────────────────

    #[test]
    fn test_export_field_names() {
        let export = ChatExport::new("demo@example.com", vec![Message::user("hi")]);
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["user"], "demo@example.com");
        assert!(json["exportDate"].is_string());
        assert!(json["messages"].is_array());
    }

    #[test]
    fn test_export_only_messages_required_on_import() {
        let json = r#"{"messages":[]}"#;
        let export: ChatExport = serde_json::from_str(json).unwrap();
        assert!(export.user.is_none());
        assert!(export.export_date.is_none());
        assert!(export.messages.is_empty());
    }

    #[test]
    fn test_export_missing_messages_is_an_error() {
        let json = r#"{"user":"demo@example.com"}"#;
        assert!(serde_json::from_str::<ChatExport>(json).is_err());
    }

    #[test]
    fn test_export_filename() {
        let mut export = ChatExport::new("demo@example.com", Vec::new());
        export.export_date = Some("2026-08-25T12:00:00Z".to_string());
        assert_eq!(export.filename(), "chat-export-demo@example.com-2026-08-25.json");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_stream_delay_scales_with_token_length() {
        let cfg = StreamConfig::default();
        assert_eq!(cfg.delay_for("a"), 50); // clamped up
        assert_eq!(cfg.delay_for("alpha"), 100); // 5 * 20
        assert_eq!(cfg.delay_for("incomprehensibilities"), 150); // clamped down
    }

    #[test]
    fn test_latency_defaults() {
        let cfg = LatencyConfig::default();
        assert!(cfg.min_ms <= cfg.max_ms);
        assert_eq!(cfg.min_ms, 1000);
    }

    // ─── User Tests ──────────────────────────────────────────

    #[test]
    fn test_user_profile_avatar() {
        let user = UserProfile::new("demo", "demo@example.com");
        assert_eq!(user.avatar, "DE");
        assert!(!user.id.is_empty());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");

        let err = ChatError::Generation;
        assert!(err.to_string().contains("try again"));
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<Message>("not json").unwrap_err();
        let err: ChatError = parse_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
