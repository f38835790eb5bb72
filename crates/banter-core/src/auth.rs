//! Simulated authentication.
//!
//! There is no server: "registered" users live in the persistent store as a
//! JSON map keyed by email, and a successful login mints a mock token. The
//! artificial delay stands in for a network round trip. Credentials are
//! stored in the clear — this is a demo backend, not security.

use std::collections::HashMap;
use std::rc::Rc;

use banter_types::user::{RegisteredUser, UserProfile};
use banter_types::{ChatError, Result};

use crate::keys;
use crate::ports::{DelayPort, StoragePort};

const SIMULATED_ROUNDTRIP_MS: u64 = 1000;

pub struct AuthService {
    storage: Rc<dyn StoragePort>,
    delay: Rc<dyn DelayPort>,
}

impl AuthService {
    pub fn new(storage: Rc<dyn StoragePort>, delay: Rc<dyn DelayPort>) -> Self {
        Self { storage, delay }
    }

    /// Restore a previous session on startup. Malformed persisted data
    /// clears the session keys and returns None rather than failing.
    pub async fn restore(&self) -> Option<UserProfile> {
        let token = self.storage.get(keys::TOKEN_KEY).await.ok()??;
        if token.is_empty() {
            return None;
        }
        let user_bytes = self.storage.get(keys::USER_KEY).await.ok()??;
        match serde_json::from_slice::<UserProfile>(&user_bytes) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored session is malformed ({}); signing out", e);
                let _ = self.storage.delete(keys::TOKEN_KEY).await;
                let _ = self.storage.delete(keys::USER_KEY).await;
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        self.delay.sleep_ms(SIMULATED_ROUNDTRIP_MS).await;

        if email.is_empty() || password.is_empty() {
            return Err(ChatError::Auth(
                "Email and password are required".to_string(),
            ));
        }

        let registry = self.registry().await;
        match registry.get(email) {
            Some(record) if record.password == password => {
                let user = UserProfile {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    email: email.to_string(),
                    avatar: record.avatar.clone(),
                };
                self.persist_session(&user).await?;
                Ok(user)
            }
            _ => Err(ChatError::Auth(
                "Invalid email or password. Please check your credentials \
                 or sign up if you don't have an account."
                    .to_string(),
            )),
        }
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        self.delay.sleep_ms(SIMULATED_ROUNDTRIP_MS).await;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ChatError::Auth("All fields are required".to_string()));
        }

        let mut registry = self.registry().await;
        if registry.contains_key(email) {
            return Err(ChatError::Auth(
                "An account with this email already exists. Please login instead.".to_string(),
            ));
        }

        let user = UserProfile::new(name, email);
        registry.insert(
            email.to_string(),
            RegisteredUser {
                id: user.id.clone(),
                name: user.name.clone(),
                password: password.to_string(),
                avatar: user.avatar.clone(),
            },
        );

        let bytes = serde_json::to_vec(&registry)?;
        self.storage
            .set(keys::REGISTRY_KEY, &bytes)
            .await
            .map_err(|e| ChatError::Auth(format!("Signup failed: {}", e)))?;

        self.persist_session(&user).await?;
        Ok(user)
    }

    pub async fn logout(&self) {
        if let Err(e) = self.storage.delete(keys::TOKEN_KEY).await {
            log::warn!("Failed to remove token: {}", e);
        }
        if let Err(e) = self.storage.delete(keys::USER_KEY).await {
            log::warn!("Failed to remove user profile: {}", e);
        }
    }

    /// The sign-up registry; a missing or unparseable record is empty.
    async fn registry(&self) -> HashMap<String, RegisteredUser> {
        match self.storage.get(keys::REGISTRY_KEY).await {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                log::warn!("Malformed user registry: {}. Treating as empty.", e);
                HashMap::new()
            }),
            _ => HashMap::new(),
        }
    }

    async fn persist_session(&self, user: &UserProfile) -> Result<()> {
        let token = format!("mock-token-{}", uuid::Uuid::new_v4());
        self.storage
            .set(keys::TOKEN_KEY, token.as_bytes())
            .await
            .map_err(|e| ChatError::Auth(format!("Login failed: {}", e)))?;
        let bytes = serde_json::to_vec(user)?;
        self.storage
            .set(keys::USER_KEY, &bytes)
            .await
            .map_err(|e| ChatError::Auth(format!("Login failed: {}", e)))?;
        Ok(())
    }
}
