//! Channel list header: team name, affordances, server name.

use dioxus::prelude::*;
use tempo_core::theme::{change_opacity, typography, Theme, TypeKind};
use tempo_core::types::Team;

use crate::context::use_server_display_name;

/// Team header above the channel list.
///
/// The chevron (expand/collapse) and plus (create) affordances render
/// but are not wired to any action yet.
#[component]
pub fn ChannelListHeader(
    team: Team,
    #[props(default = false)] icon_pad: bool,
    theme: Theme,
) -> Element {
    let server_name = use_server_display_name();

    let heading_css = typography(TypeKind::Heading, 700).css();
    let sub_heading_css = typography(TypeKind::Heading, 50).css();
    let sub_heading_color = change_opacity(&theme.sidebar_text, 0.64);
    let affordance_color = change_opacity(&theme.sidebar_text, 0.8);
    let plus_bg = change_opacity(&theme.sidebar_text, 0.08);
    let container_class = if icon_pad {
        "channel-list-header icon-pad"
    } else {
        "channel-list-header"
    };

    rsx! {
        div { class: "{container_class}",
            div { class: "header-row",
                div { class: "header-row",
                    h1 {
                        class: "team-heading",
                        style: "color: {theme.sidebar_text}; {heading_css}",
                        "{team.display_name}"
                    }
                    button { class: "chevron-button",
                        svg {
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "{affordance_color}",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            polyline { points: "6 9 12 15 18 9" }
                        }
                    }
                }
                button {
                    class: "plus-button",
                    style: "background-color: {plus_bg};",
                    svg {
                        width: "18",
                        height: "18",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "{affordance_color}",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        line { x1: "12", y1: "5", x2: "12", y2: "19" }
                        line { x1: "5", y1: "12", x2: "19", y2: "12" }
                    }
                }
            }
            p {
                class: "server-name",
                style: "color: {sub_heading_color}; {sub_heading_css}",
                "{server_name}"
            }
        }
    }
}
