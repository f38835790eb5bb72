//! Chat engine — orchestrates one conversation.
//!
//! A send turn runs: append user message → persist → typing indicator →
//! simulated latency → generate reply → token-by-token streaming reveal →
//! persist final state. Everything is single-threaded and cooperative;
//! mutation happens between awaits, so no locks are needed.
//!
//! Sends are serialized through an internal queue: a send that arrives
//! while a turn is active is queued and dispatched when the engine goes
//! idle, never interleaved.
//!
//! Cancellation uses a generation epoch: `clear`, `activate`, and `import`
//! bump it, and an in-flight turn that observes a stale epoch after any
//! await abandons itself without persisting partial state.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use banter_types::config::ChatConfig;
use banter_types::event::ChatEvent;
use banter_types::message::Message;
use banter_types::transfer::ChatExport;
use banter_types::{ChatError, Result};

use crate::event_bus::EventBus;
use crate::history::HistoryStore;
use crate::ports::{DelayPort, StoragePort};
use crate::responder::Responder;

pub struct ChatEngine {
    history: HistoryStore,
    responder: Responder,
    bus: EventBus,
    delay: Rc<dyn DelayPort>,
    config: ChatConfig,
    epoch: Cell<u64>,
    busy: Cell<bool>,
    queue: RefCell<VecDeque<String>>,
}

impl ChatEngine {
    pub fn new(
        storage: Rc<dyn StoragePort>,
        delay: Rc<dyn DelayPort>,
        bus: EventBus,
        config: ChatConfig,
    ) -> Self {
        Self {
            history: HistoryStore::new(storage),
            responder: Responder::new(),
            bus,
            delay,
            config,
            epoch: Cell::new(0),
            busy: Cell::new(false),
            queue: RefCell::new(VecDeque::new()),
        }
    }

    pub fn event_bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.history.messages()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Follow-up prompts for the current conversation state.
    pub fn suggestions(&self) -> &'static [&'static str] {
        self.responder.suggestions(&self.history.messages())
    }

    /// Switch to `identity`'s history (sign-in, sign-out, startup).
    /// Cancels any in-flight stream; histories are disjoint, never merged.
    pub async fn activate(&self, identity: Option<&str>) {
        self.supersede();
        self.history.load(identity).await;
        self.bus.emit(ChatEvent::HistoryLoaded {
            messages: self.history.messages(),
        });
    }

    /// Submit user text. Queued if a turn is already running.
    /// Empty or whitespace-only input is ignored.
    pub async fn send(&self, text: impl Into<String>) {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.queue.borrow_mut().push_back(text.to_string());
        if self.busy.get() {
            log::debug!("Send queued behind an active turn");
            return;
        }
        self.busy.set(true);
        self.pump().await;
        self.busy.set(false);
        self.bus.emit(ChatEvent::TurnComplete);
    }

    /// Re-issue the most recent user message: the bot (or streaming) reply
    /// after it is dropped and a fresh reply is generated. No-op when no
    /// user message exists or a turn is running.
    pub async fn retry_last(&self) {
        if self.busy.get() {
            log::debug!("Retry ignored while a turn is active");
            return;
        }
        let Some(text) = self.history.truncate_after_last_user().await else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        self.busy.set(true);
        self.bus.emit(ChatEvent::HistoryReplaced {
            messages: self.history.messages(),
        });
        let epoch = self.epoch.get();
        self.respond(&text, epoch).await;
        // Sends queued during the retry still need dispatching
        self.pump().await;
        self.busy.set(false);
        self.bus.emit(ChatEvent::TurnComplete);
    }

    /// Empty the active history and its persisted state. Cancels any
    /// in-flight stream; the partial reply is discarded, not persisted.
    /// Irreversible — the caller confirms intent before calling.
    pub async fn clear(&self) {
        self.supersede();
        self.history.clear().await;
        self.bus.emit(ChatEvent::HistoryCleared);
    }

    /// Serialize the active history to a downloadable export file.
    /// Returns the suggested filename and pretty-printed JSON bytes.
    pub fn export(&self) -> Result<(String, Vec<u8>)> {
        let export = ChatExport::new(self.history.identity(), self.history.messages());
        let bytes = serde_json::to_vec_pretty(&export)?;
        Ok((export.filename(), bytes))
    }

    /// Replace the active history with the messages from an export file.
    /// A destructive overwrite, not a merge. On any failure the current
    /// history is left untouched. Returns the imported message count.
    pub async fn import(&self, bytes: &[u8]) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| ChatError::ImportInvalid(format!("the file is not valid JSON: {}", e)))?;
        if !value.get("messages").map(|m| m.is_array()).unwrap_or(false) {
            return Err(ChatError::ImportInvalid(
                "missing \"messages\" array".to_string(),
            ));
        }
        let export: ChatExport = serde_json::from_value(value)
            .map_err(|e| ChatError::ImportInvalid(format!("unrecognized message shape: {}", e)))?;

        let mut messages = export.messages;
        // Transient streaming flags never survive an import
        for m in &mut messages {
            m.is_streaming = false;
        }

        self.supersede();
        let count = messages.len();
        self.history.replace(messages.clone()).await;
        self.bus.emit(ChatEvent::HistoryReplaced { messages });
        log::info!("Imported {} messages", count);
        Ok(count)
    }

    /// Invalidate in-flight turns and pending sends.
    fn supersede(&self) {
        self.epoch.set(self.epoch.get() + 1);
        self.queue.borrow_mut().clear();
    }

    /// Drain the send queue, one turn at a time.
    async fn pump(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(text) => self.run_turn(text).await,
                None => break,
            }
        }
    }

    async fn run_turn(&self, text: String) {
        let epoch = self.epoch.get();
        let recent = self.history.messages();

        let message = Message::user(text.clone());
        self.history.append(message.clone()).await;
        self.bus.emit(ChatEvent::MessageAppended { message });
        if self.stale(epoch) {
            return;
        }

        // Reply is computed up front; the reveal below only animates it
        let reply = self.responder.generate(&text, &recent);

        self.bus.emit(ChatEvent::TypingStarted);
        let latency = self
            .responder
            .jitter_ms(self.config.latency.min_ms, self.config.latency.max_ms);
        self.delay.sleep_ms(latency).await;
        if self.stale(epoch) {
            return;
        }

        self.stream_reply(&reply, epoch).await;
    }

    /// Respond to `text` without appending a user message (retry path).
    async fn respond(&self, text: &str, epoch: u64) {
        let recent = self.history.messages();
        let reply = self.responder.generate(text, &recent);

        self.bus.emit(ChatEvent::TypingStarted);
        let latency = self
            .responder
            .jitter_ms(self.config.latency.min_ms, self.config.latency.max_ms);
        self.delay.sleep_ms(latency).await;
        if self.stale(epoch) {
            return;
        }

        self.stream_reply(&reply, epoch).await;
    }

    /// Reveal `reply` token by token into one in-progress bot message.
    /// Only the terminal state is persisted; a superseded stream removes
    /// its placeholder and persists nothing.
    async fn stream_reply(&self, reply: &str, epoch: u64) {
        let message = Message::streaming_bot();
        let id = message.id.clone();
        self.history.stage(message.clone());
        self.bus.emit(ChatEvent::StreamStarted { message });

        let tokens: Vec<&str> = reply.split_whitespace().collect();
        let mut revealed = String::new();

        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                revealed.push(' ');
            }
            revealed.push_str(token);
            let last = i + 1 == tokens.len();

            self.history.update_text(&id, &revealed, !last);
            self.bus.emit(ChatEvent::StreamDelta {
                message_id: id.clone(),
                text: revealed.clone(),
            });

            if !last {
                self.delay.sleep_ms(self.config.stream.delay_for(token)).await;
                if self.stale(epoch) {
                    self.history.remove(&id);
                    return;
                }
            }
        }

        self.history.persist().await;
        self.bus.emit(ChatEvent::StreamCompleted {
            message_id: id,
            text: revealed,
        });
    }

    fn stale(&self, epoch: u64) -> bool {
        if self.epoch.get() != epoch {
            log::debug!("Turn superseded (epoch {} -> {})", epoch, self.epoch.get());
            true
        } else {
            false
        }
    }
}
