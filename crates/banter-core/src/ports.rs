//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `banter-core` (pure Rust).
//! Implementations live in `banter-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use banter_types::Result;

// ─── Storage Port ────────────────────────────────────────────

/// Key-value storage. Values are opaque bytes; every value Banter stores
/// happens to be UTF-8 JSON, which the localStorage adapter relies on.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Delay Port ──────────────────────────────────────────────

/// Cooperative timed suspension. The browser adapter uses a real timer;
/// tests use an instant no-op so engine turns run synchronously under
/// `futures::executor::block_on`.
#[async_trait(?Send)]
pub trait DelayPort {
    async fn sleep_ms(&self, ms: u64);
}
