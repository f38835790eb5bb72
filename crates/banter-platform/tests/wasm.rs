//! WASM-target tests for banter-platform (Node.js runtime).
//!
//! Tests MemoryStorage and BrowserDelay under wasm32-unknown-unknown via
//! `wasm-pack test --node`. LocalStorage needs a real window and is
//! exercised in a browser run (`wasm-pack test --chrome`).

use std::rc::Rc;

use wasm_bindgen_test::*;

use banter_core::ports::{DelayPort, StoragePort};
use banter_core::{history::HistoryStore, keys};
use banter_platform::delay::BrowserDelay;
use banter_platform::storage::MemoryStorage;
use banter_types::message::Message;

// ─── MemoryStorage Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", b"value1").await.unwrap();
    assert_eq!(storage.get("key1").await.unwrap(), Some(b"value1".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap(), Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", b"val").await.unwrap();
    storage.delete("key").await.unwrap();
    assert!(storage.get("key").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_list_keys() {
    let storage = MemoryStorage::new();
    storage.set("chat:history:a", b"1").await.unwrap();
    storage.set("chat:history:b", b"2").await.unwrap();
    storage.set("chat:theme", b"dark").await.unwrap();

    let mut keys = storage.list_keys("chat:history:").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["chat:history:a", "chat:history:b"]);
}

#[wasm_bindgen_test]
async fn memory_storage_exists() {
    let storage = MemoryStorage::new();
    storage.set("key", b"val").await.unwrap();
    assert!(storage.exists("key").await.unwrap());
    assert!(!storage.exists("other").await.unwrap());
}

// ─── HistoryStore over MemoryStorage ─────────────────────────

#[wasm_bindgen_test]
async fn history_round_trip_through_storage() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let history = HistoryStore::new(storage.clone());
    history.load(Some("demo@example.com")).await;
    history.append(Message::user("persist me")).await;

    let reloaded = HistoryStore::new(storage);
    reloaded.load(Some("demo@example.com")).await;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.messages()[0].text, "persist me");
}

#[wasm_bindgen_test]
async fn history_clear_removes_persisted_key() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let history = HistoryStore::new(storage.clone());
    history.load(Some("demo@example.com")).await;
    history.append(Message::user("gone soon")).await;
    history.clear().await;

    let key = keys::history_key(Some("demo@example.com"));
    assert!(!storage.exists(&key).await.unwrap());
}

// ─── BrowserDelay Tests ──────────────────────────────────────

#[wasm_bindgen_test]
async fn browser_delay_completes() {
    // Just verify the timer future resolves
    BrowserDelay.sleep_ms(1).await;
}
