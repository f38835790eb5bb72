//! Storage key layout.
//!
//! History is scoped per identity; everything else is global. Switching
//! identities switches to a disjoint history — keys never merge.

/// Sentinel identity used when nobody is signed in
pub const ANONYMOUS: &str = "anonymous";

/// Global theme preference, stored as its string literal
pub const THEME_KEY: &str = "chat:theme";

/// Mock auth token for the signed-in user
pub const TOKEN_KEY: &str = "chat:token";

/// Profile of the signed-in user (JSON `UserProfile`)
pub const USER_KEY: &str = "chat:user";

/// Registry of simulated sign-ups (JSON map email → `RegisteredUser`)
pub const REGISTRY_KEY: &str = "chat:registered_users";

/// Resolve an identity to its history storage key.
/// `None` (signed out) resolves to the anonymous history.
pub fn history_key(identity: Option<&str>) -> String {
    format!("chat:history:{}", identity.unwrap_or(ANONYMOUS))
}
