//! User record type.

use serde::{Deserialize, Serialize};

/// The current-user record observed from the system store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Optional display nickname
    pub nickname: Option<String>,
    /// UTC offset of the user's timezone, e.g. `+02:00`
    pub utc_offset: Option<String>,
}

impl User {
    /// Create a user with a freshly minted id.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            username: username.into(),
            nickname: None,
            utc_offset: None,
        }
    }

    /// Name to show in the UI: nickname when set, otherwise username.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let mut user = User::new("jdoe");
        assert_eq!(user.display_name(), "jdoe");
        user.nickname = Some("Jay".to_string());
        assert_eq!(user.display_name(), "Jay");
    }
}
