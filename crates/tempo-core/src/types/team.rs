//! Team record type.

use serde::{Deserialize, Serialize};

/// A team as shown in the channel list header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier
    pub id: String,
    /// Team display name
    pub display_name: String,
}

impl Team {
    /// Create a team with a freshly minted id.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            display_name: display_name.into(),
        }
    }
}
