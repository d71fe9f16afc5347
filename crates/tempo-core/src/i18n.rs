//! Message localization.
//!
//! A fixed English message table for now. `format_message` mirrors the
//! usual intl contract: look the id up, fall back to the caller's
//! default text when the id has no translation.

/// Look up the localized string for a message id.
pub fn localize(id: &str) -> Option<&'static str> {
    let message = match id {
        // Custom status clear-after modal
        "mobile.custom_status.modal_confirm" => "Done",
        "mobile.routes.custom_status_clear_after" => "Clear Custom Status After",
        "mobile.custom_status.clear_after.dont_clear" => "Don't clear",
        "mobile.custom_status.clear_after.thirty_minutes" => "30 minutes",
        "mobile.custom_status.clear_after.one_hour" => "1 hour",
        "mobile.custom_status.clear_after.four_hours" => "4 hours",
        "mobile.custom_status.clear_after.today" => "Today",
        "mobile.custom_status.clear_after.this_week" => "This week",
        "mobile.custom_status.clear_after.date_and_time" => "Date and Time",

        // Emoji picker section titles
        "emoji_picker.recent" => "Recently Used",
        "emoji_picker.smileys-emotion" => "Smileys & Emotion",
        "emoji_picker.people-body" => "People & Body",
        "emoji_picker.animals-nature" => "Animals & Nature",
        "emoji_picker.food-drink" => "Food & Drink",
        "emoji_picker.travel-places" => "Travel & Places",
        "emoji_picker.activities" => "Activities",
        "emoji_picker.objects" => "Objects",
        "emoji_picker.symbols" => "Symbols",
        "emoji_picker.flags" => "Flags",

        _ => return None,
    };
    Some(message)
}

/// Localized string for `id`, or `default` when none exists.
pub fn format_message<'a>(id: &str, default: &'a str) -> &'a str {
    localize(id).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_known_id() {
        assert_eq!(
            localize("emoji_picker.smileys-emotion"),
            Some("Smileys & Emotion")
        );
    }

    #[test]
    fn test_localize_unknown_id() {
        assert_eq!(localize("emoji_picker.custom"), None);
    }

    #[test]
    fn test_format_message_falls_back_to_default() {
        assert_eq!(
            format_message("emoji_picker.custom", "emoticon-custom-outline"),
            "emoticon-custom-outline"
        );
        assert_eq!(format_message("emoji_picker.flags", "flag-outline"), "Flags");
    }
}
