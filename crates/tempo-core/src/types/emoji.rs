//! Emoji picker section descriptors.

use serde::{Deserialize, Serialize};

/// A section of the emoji picker.
///
/// `id` doubles as the localization key for the section title; `icon`
/// names the glyph shown in the category bar and is also the literal
/// fallback text when no localized title exists for `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiSection {
    /// Section identifier / localization key
    pub id: String,
    /// Icon name, also the fallback display text
    pub icon: String,
}

impl EmojiSection {
    pub fn new(id: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
        }
    }
}

/// The fixed emoji picker sections, in picker order.
pub const EMOJI_SECTIONS: &[(&str, &str)] = &[
    ("emoji_picker.recent", "clock-outline"),
    ("emoji_picker.smileys-emotion", "emoticon-happy-outline"),
    ("emoji_picker.people-body", "account-outline"),
    ("emoji_picker.animals-nature", "leaf-outline"),
    ("emoji_picker.food-drink", "food-apple"),
    ("emoji_picker.travel-places", "airplane-variant"),
    ("emoji_picker.activities", "basketball"),
    ("emoji_picker.objects", "lightbulb-outline"),
    ("emoji_picker.symbols", "heart-outline"),
    ("emoji_picker.flags", "flag-outline"),
    ("emoji_picker.custom", "emoticon-custom-outline"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_unique_ids() {
        let mut ids: Vec<&str> = EMOJI_SECTIONS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EMOJI_SECTIONS.len());
    }
}
