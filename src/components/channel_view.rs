//! Channel detail pane.

use dioxus::prelude::*;
use tempo_core::theme::{change_opacity, Theme};

use super::emoji_picker::EmojiPicker;

/// Message area for one channel.
///
/// Rendered inline on tablet-class layouts and as its own screen
/// otherwise. Messages are not loaded yet; the pane shows an empty
/// state and the emoji picker toggle.
#[component]
pub fn ChannelView(channel_name: String, theme: Theme) -> Element {
    let mut show_emoji_picker = use_signal(|| false);
    let muted = change_opacity(&theme.center_channel_color, 0.56);

    rsx! {
        section {
            class: "channel-view",
            style: "background-color: {theme.center_channel_bg};",

            header {
                class: "channel-view-header",
                style: "color: {theme.center_channel_color};",
                h2 { "{channel_name}" }
            }

            div { class: "channel-view-body",
                p { class: "channel-view-empty", style: "color: {muted};",
                    "No messages yet"
                }
            }

            if show_emoji_picker() {
                EmojiPicker { theme: theme.clone() }
            }

            footer { class: "channel-view-footer",
                button {
                    class: "emoji-toggle",
                    style: "color: {muted};",
                    onclick: move |_| show_emoji_picker.set(!show_emoji_picker()),
                    "\u{1F642}"
                }
                input {
                    class: "message-input",
                    r#type: "text",
                    placeholder: "Message {channel_name}...",
                }
            }
        }
    }
}
