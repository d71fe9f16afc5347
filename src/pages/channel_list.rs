//! Channel list screen: team sidebar, channel list, optional detail
//! pane, and the focus fade/slide transition.

use std::rc::Rc;

use dioxus::prelude::*;
use tempo_core::animation::screen_transition;
use tempo_core::custom_status::{format_expiry, ClearAfterDuration};
use tempo_core::navigation::NavigationRequest;
use tempo_core::types::{Channel, Team};

use crate::components::{ChannelList, ChannelView, TeamSidebar};
use crate::context::{use_device, use_navigation, use_store, use_theme};
use crate::pages::ClearAfterModal;

/// Home screen composing the sidebar regions in a single row.
///
/// The screen counts as focused while no modal overlay is open; losing
/// focus plays the fade/slide transition, tilted left when the route
/// carried a `direction` parameter.
#[component]
pub fn ChannelListScreen(direction: String) -> Element {
    let theme = use_theme();
    let device = use_device();
    let navigation = use_navigation();
    let store = use_store();

    let show_clear_after = use_signal(|| false);
    let clear_after = use_signal(|| ClearAfterDuration::DontClear);
    let status_expires_at = use_signal(String::new);

    let team = use_signal(|| Team::new("Engineering"));
    let channels = use_signal(seed_channels);

    // While the clear-after overlay is open it is the top screen;
    // honor pop requests by closing it.
    let _pop_sub = use_hook(|| {
        Rc::new(navigation.subscribe(move |request| {
            if *request == NavigationRequest::Pop {
                let mut show = show_clear_after;
                show.set(false);
            }
        }))
    });

    let status_summary = if status_expires_at().is_empty() {
        String::new()
    } else {
        format!(
            "Clears {}",
            format_expiry(&status_expires_at(), store.current_user().as_ref())
        )
    };

    let is_focused = !show_clear_after();
    let transition = screen_transition(
        is_focused,
        (!direction.is_empty()).then_some(direction.as_str()),
    );
    let transition_css = transition.css();

    rsx! {
        div { class: "channel-list-screen", style: "{transition_css}",
            TeamSidebar { team: team(), theme: theme() }
            ChannelList {
                team: team(),
                channels: channels(),
                theme: theme(),
                on_set_status: move |_| {
                    let mut show = show_clear_after;
                    show.set(true);
                },
                status_summary,
            }
            if device.show_tablet_layout() {
                ChannelView {
                    channel_name: "town-square".to_string(),
                    theme: theme(),
                }
            }
        }

        if show_clear_after() {
            ClearAfterModal {
                initial_duration: clear_after(),
                handle_clear_after_click: move |(duration, expires_at): (ClearAfterDuration, String)| {
                    tracing::info!(
                        duration = duration.id(),
                        expires_at = %expires_at,
                        "custom status clear-after committed"
                    );
                    let mut committed = clear_after;
                    committed.set(duration);
                    let mut expiry = status_expires_at;
                    expiry.set(expires_at);
                },
                theme: theme(),
            }
        }
    }
}

fn seed_channels() -> Vec<Channel> {
    vec![
        Channel::new("town-square", true),
        Channel::new("off-topic", false),
        Channel::new("release-planning", false),
        Channel::new("design-reviews", true),
        Channel::new("random", false),
    ]
}
