//! Message history manager.
//!
//! Owns the in-memory ordered message list for the active identity and
//! mirrors every terminal mutation to the persistent store. The store is
//! best-effort: write failures are logged and the in-memory state stands;
//! missing or malformed persisted data loads as an empty history.

use std::cell::RefCell;
use std::rc::Rc;

use banter_types::message::{Message, Sender};

use crate::keys;
use crate::ports::StoragePort;

pub struct HistoryStore {
    storage: Rc<dyn StoragePort>,
    identity: RefCell<String>,
    messages: RefCell<Vec<Message>>,
}

impl HistoryStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self {
            storage,
            identity: RefCell::new(keys::ANONYMOUS.to_string()),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn identity(&self) -> String {
        self.identity.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    fn storage_key(&self) -> String {
        keys::history_key(Some(&self.identity.borrow()))
    }

    /// Load the history for `identity`, replacing whatever is in memory.
    /// Never fails: a missing key or unparseable value becomes an empty list.
    pub async fn load(&self, identity: Option<&str>) {
        *self.identity.borrow_mut() = identity.unwrap_or(keys::ANONYMOUS).to_string();

        let key = self.storage_key();
        let loaded = match self.storage.get(&key).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Message>>(&bytes) {
                Ok(messages) => messages,
                Err(e) => {
                    log::warn!("Malformed history under {}: {}. Starting empty.", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read history {}: {}. Starting empty.", key, e);
                Vec::new()
            }
        };
        *self.messages.borrow_mut() = loaded;
    }

    /// Append a message and persist the full sequence.
    pub async fn append(&self, message: Message) {
        self.messages.borrow_mut().push(message);
        self.persist().await;
    }

    /// Add a message in memory without persisting — the streaming
    /// placeholder, which only reaches the store once it completes.
    pub fn stage(&self, message: Message) {
        self.messages.borrow_mut().push(message);
    }

    /// Update the text/streaming flag of the message with `id` in place.
    /// In-memory only — streaming increments are not persisted.
    pub fn update_text(&self, id: &str, text: &str, is_streaming: bool) {
        if let Some(msg) = self.messages.borrow_mut().iter_mut().find(|m| m.id == id) {
            msg.text = text.to_string();
            msg.is_streaming = is_streaming;
        }
    }

    /// Remove the message with `id` (an abandoned streaming placeholder).
    pub fn remove(&self, id: &str) {
        self.messages.borrow_mut().retain(|m| m.id != id);
    }

    /// Empty the history and delete its persisted state. Irreversible.
    pub async fn clear(&self) {
        self.messages.borrow_mut().clear();
        let key = self.storage_key();
        if let Err(e) = self.storage.delete(&key).await {
            log::error!("Failed to delete history {}: {}", key, e);
        }
    }

    /// Replace the history wholesale (import path) and persist.
    pub async fn replace(&self, messages: Vec<Message>) {
        *self.messages.borrow_mut() = messages;
        self.persist().await;
    }

    /// Drop everything after the most recent user message (the bot or
    /// streaming reply) and persist. Returns that user message's text,
    /// or None (and no mutation) when no user message exists.
    pub async fn truncate_after_last_user(&self) -> Option<String> {
        let (index, text) = {
            let messages = self.messages.borrow();
            let (index, msg) = messages
                .iter()
                .enumerate()
                .rev()
                .find(|(_, m)| m.sender == Sender::User)?;
            (index, msg.text.clone())
        };
        self.messages.borrow_mut().truncate(index + 1);
        self.persist().await;
        Some(text)
    }

    /// Persist the current sequence under the active identity's key.
    /// Best-effort: failures are logged, memory is never rolled back.
    pub async fn persist(&self) {
        let key = self.storage_key();
        let bytes = match serde_json::to_vec(&*self.messages.borrow()) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&key, &bytes).await {
            log::error!("Failed to persist history {}: {}", key, e);
        }
    }
}
