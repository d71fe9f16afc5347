//! Channel record type.

use serde::{Deserialize, Serialize};

/// A channel entry as rendered in the sidebar channel list.
///
/// `highlight` is display-only; it marks the row visually (unread or
/// mentioned) and carries no behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel identifier
    pub id: String,
    /// Channel display name
    pub name: String,
    /// Whether the row is rendered highlighted
    pub highlight: bool,
}

impl Channel {
    /// Create a channel with a freshly minted id.
    pub fn new(name: impl Into<String>, highlight: bool) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.into(),
            highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_channel_has_unique_id() {
        let a = Channel::new("town-square", false);
        let b = Channel::new("town-square", false);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "town-square");
        assert!(!a.highlight);
    }
}
