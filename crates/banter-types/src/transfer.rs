use serde::{Deserialize, Serialize};

use crate::message::Message;

/// The export file format: `{ "user", "exportDate", "messages" }`.
/// Import accepts the same shape; only `messages` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExport {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(rename = "exportDate", default)]
    pub export_date: Option<String>,
    pub messages: Vec<Message>,
}

impl ChatExport {
    pub fn new(user: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            user: Some(user.into()),
            export_date: Some(chrono::Utc::now().to_rfc3339()),
            messages,
        }
    }

    /// Suggested download filename, e.g. `chat-export-demo@example.com-2026-08-25.json`
    pub fn filename(&self) -> String {
        let owner = self.user.as_deref().unwrap_or("anonymous");
        let date = self
            .export_date
            .as_deref()
            .and_then(|d| d.split('T').next())
            .unwrap_or("unknown-date");
        format!("chat-export-{}-{}.json", owner, date)
    }
}
