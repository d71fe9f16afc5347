use dioxus::prelude::*;
use tempo_core::device::DeviceInfo;
use tempo_core::navigation as nav;
use tempo_core::store::SystemStore;
use tempo_core::theme::Theme;
use tempo_core::types::User;

use crate::pages::{ChannelListScreen, ChannelScreen};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Channel list screen; an optional `direction` query parameter
///   tilts the unfocus transition
/// - `/channels/:id` - Channel detail screen
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/?:direction")]
    ChannelListScreen { direction: String },
    #[route("/channels/:id")]
    ChannelScreen { id: String },
}

/// Root application component.
///
/// Provides global styles, the system store, navigation buses, and the
/// device/theme/server contexts, then hands off to the router.
#[component]
pub fn App() -> Element {
    let store = use_context_provider(SystemStore::new);
    use_context_provider(nav::Navigator::new);
    use_context_provider(nav::NavButtonEvents::new);
    use_context_provider(|| Signal::new(Theme::denim()));
    use_context_provider(|| DeviceInfo::from_window_width(crate::WINDOW_WIDTH));
    use_context_provider(|| Signal::new(crate::get_server_display_name()));

    // Resolve the current-user record before anything can interact
    // with the clear-after modal.
    use_effect(move || {
        let mut user = User::new("you");
        user.nickname = Some("You".to_string());
        store.set_current_user(user);
        tracing::info!("current user record resolved");
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Router shell: renders the active page and pumps pending navigation
/// requests from components into actual route changes.
#[component]
fn AppShell() -> Element {
    let navigation = crate::context::use_navigation();
    let router = use_navigator();

    use_future(move || {
        let navigation = navigation.clone();
        async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                for request in navigation.drain_pending() {
                    handle_request(&router, request);
                }
            }
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}

fn handle_request(router: &Navigator, request: nav::NavigationRequest) {
    match request {
        nav::NavigationRequest::Push { screen, params, .. } => match screen {
            nav::Screen::Channel => {
                let id = params.get("channel_id").cloned().unwrap_or_default();
                router.push(Route::ChannelScreen { id });
            }
            nav::Screen::ChannelList => {
                let direction = params.get("direction").cloned().unwrap_or_default();
                router.push(Route::ChannelListScreen { direction });
            }
            // The clear-after modal is overlay-hosted, never routed.
            nav::Screen::CustomStatusClearAfter => {
                tracing::warn!("clear-after modal is hosted as an overlay, push ignored");
            }
        },
        // Pop requests are consumed by whichever screen hosts the open
        // modal overlay; the router stack itself does not move.
        nav::NavigationRequest::Pop => {}
    }
}
