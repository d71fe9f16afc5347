//! Channel list sidebar: team header, threads entry, category rows.

mod category_body;
mod category_header;
mod channel_item;
mod header;
mod threads_button;

pub use category_body::CategoryBody;
pub use category_header::CategoryHeader;
pub use channel_item::ChannelItem;
pub use header::ChannelListHeader;
pub use threads_button::ThreadsButton;

use dioxus::prelude::*;
use tempo_core::theme::Theme;
use tempo_core::types::{Channel, Team};

/// The channel list pane of the home screen.
#[component]
pub fn ChannelList(
    team: Team,
    channels: Vec<Channel>,
    theme: Theme,
    /// Opens the custom-status clear-after modal
    on_set_status: EventHandler<()>,
    /// Summary of the committed clear-after choice, empty when unset
    #[props(default)]
    status_summary: String,
) -> Element {
    let summary_color = tempo_core::theme::change_opacity(&theme.sidebar_text, 0.64);

    rsx! {
        aside {
            class: "channel-list",
            style: "background-color: {theme.sidebar_bg};",

            ChannelListHeader { team, theme: theme.clone() }
            ThreadsButton { theme: theme.clone() }
            CategoryHeader { heading: "Channels", theme: theme.clone() }
            CategoryBody { channels, theme: theme.clone() }

            footer { class: "channel-list-footer",
                button {
                    class: "custom-status-button",
                    style: "color: {theme.sidebar_text};",
                    onclick: move |_| on_set_status.call(()),
                    "Set status clear time"
                }
                if !status_summary.is_empty() {
                    p {
                        class: "custom-status-summary",
                        style: "color: {summary_color};",
                        "{status_summary}"
                    }
                }
            }
        }
    }
}
