//! Channel detail screen (non-tablet layouts).

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ChannelView;
use crate::context::use_theme;

/// Full-width channel screen, reached from the threads button or a
/// channel row on phone-class layouts.
#[component]
pub fn ChannelScreen(id: String) -> Element {
    let theme = use_theme();
    let router = use_navigator();

    let channel_name = if id.is_empty() {
        "Channel".to_string()
    } else {
        id.clone()
    };

    rsx! {
        div { class: "channel-screen",
            header { class: "channel-screen-header",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        router.push(Route::ChannelListScreen {
                            direction: "back".to_string(),
                        });
                    },
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        polyline { points: "15 18 9 12 15 6" }
                    }
                }
            }
            ChannelView { channel_name, theme: theme() }
        }
    }
}
