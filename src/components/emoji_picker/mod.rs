//! Emoji picker pieces.

mod section_header;

pub use section_header::SectionHeader;

use dioxus::prelude::*;
use tempo_core::theme::Theme;
use tempo_core::types::{EmojiSection, EMOJI_SECTIONS};

/// Fixed height of a section header row, in px.
pub const SECTION_HEADER_HEIGHT: f32 = 28.0;

/// Emoji picker panel: the fixed sections with their headers.
///
/// The emoji grid itself is not rendered yet; the panel currently
/// shows the section structure only.
#[component]
pub fn EmojiPicker(theme: Theme) -> Element {
    rsx! {
        div {
            class: "emoji-picker",
            style: "background-color: {theme.center_channel_bg};",
            for (id, icon) in EMOJI_SECTIONS.iter() {
                SectionHeader {
                    key: "{id}",
                    section: EmojiSection::new(*id, *icon),
                    theme: theme.clone(),
                }
            }
        }
    }
}
