//! A single channel row.

use dioxus::prelude::*;
use tempo_core::theme::{change_opacity, Theme};

/// One row in the channel list.
///
/// `highlight` only changes how the row is drawn; it carries no
/// behavior.
#[component]
pub fn ChannelItem(name: String, highlight: bool, theme: Theme) -> Element {
    let row_class = if highlight {
        "channel-item highlighted"
    } else {
        "channel-item"
    };
    let text_color = if highlight {
        theme.sidebar_text.clone()
    } else {
        change_opacity(&theme.sidebar_text, 0.72)
    };

    rsx! {
        div { class: "{row_class}",
            // Globe glyph, matching the public-channel icon
            svg {
                class: "channel-item-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "{text_color}",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M2 12h20" }
                path { d: "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" }
            }
            span {
                class: "channel-item-name",
                style: "color: {text_color};",
                "{name}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_row_class_when_highlighted() {
        let highlight = true;
        let row_class = if highlight {
            "channel-item highlighted"
        } else {
            "channel-item"
        };
        assert_eq!(row_class, "channel-item highlighted");
    }

    #[test]
    fn test_row_class_when_plain() {
        let highlight = false;
        let row_class = if highlight {
            "channel-item highlighted"
        } else {
            "channel-item"
        };
        assert_eq!(row_class, "channel-item");
    }
}
