//! Threads entry above the categories.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use tempo_core::navigation::{NavOptions, Screen};
use tempo_core::theme::{typography, Theme, TypeKind};

use crate::context::use_navigation;

/// Tappable "Threads" row that requests navigation to the channel
/// screen.
///
/// TODO: hide the row when no followed threads exist and add the
/// unread-count badge on the right.
#[component]
pub fn ThreadsButton(theme: Theme) -> Element {
    let navigation = use_navigation();
    let text_css = typography(TypeKind::Body, 200).css();

    rsx! {
        button {
            class: "threads-button",
            onclick: move |_| {
                navigation.go_to_screen(
                    Screen::Channel,
                    "Channel",
                    BTreeMap::new(),
                    NavOptions { top_bar_visible: false },
                );
            },

            svg {
                class: "threads-icon",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "{theme.sidebar_text}",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
            }
            span {
                class: "threads-label",
                style: "color: {theme.sidebar_text}; {text_css} font-weight: 600;",
                "Threads"
            }
        }
    }
}
