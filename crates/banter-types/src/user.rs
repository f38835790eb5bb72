use serde::{Deserialize, Serialize};

/// The profile of a signed-in user, as persisted under the user key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Two-letter initials shown in the avatar badge
    pub avatar: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = initials(&name);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email: email.into(),
            avatar,
        }
    }
}

/// A record in the simulated registration registry.
/// Passwords are stored in the clear — this is a mock backend, not security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub password: String,
    pub avatar: String,
}

fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}
