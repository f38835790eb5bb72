//! localStorage backend.
//! Persistent across page reloads; the API is synchronous, so the async
//! port methods complete immediately. Values must be UTF-8 (everything
//! Banter stores is JSON text).

use async_trait::async_trait;
use web_sys::Storage;

use banter_core::ports::StoragePort;
use banter_types::{ChatError, Result};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Grab `window.localStorage`. Fails when the browser denies access
    /// (private mode in some engines, or no window at all).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| ChatError::Storage(format!("value is not UTF-8: {}", e)))?;
        // set_item fails on quota exhaustion
        self.storage
            .set_item(key, text)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self
            .storage
            .length()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Ok(Some(key)) = self.storage.key(i) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
