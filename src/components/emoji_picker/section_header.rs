//! Emoji picker section header row.

use dioxus::prelude::*;
use tempo_core::i18n;
use tempo_core::theme::{change_opacity, Theme};
use tempo_core::types::EmojiSection;

use super::SECTION_HEADER_HEIGHT;

/// Fixed-height header for one emoji section.
///
/// The label is the localized string for `section.id`, falling back to
/// the literal `section.icon` text. Props are `PartialEq`, so the row
/// only re-renders when the descriptor or theme actually changes.
#[component]
pub fn SectionHeader(section: EmojiSection, theme: Theme) -> Element {
    let title_color = change_opacity(&theme.center_channel_color, 0.2);
    let label = i18n::format_message(&section.id, &section.icon);

    rsx! {
        div {
            class: "emoji-section-header",
            style: "height: {SECTION_HEADER_HEIGHT}px; background-color: {theme.center_channel_bg};",
            span {
                class: "emoji-section-title",
                style: "color: {title_color};",
                "{label}"
            }
        }
    }
}
