//! Context hooks for app-wide collaborators.
//!
//! All of these are provided once in [`App`] and consumed by pages and
//! components. The theme is deliberately *not* consumed by leaf
//! components directly: pages read the theme signal here and pass the
//! value down as an explicit prop so rendering stays deterministic.
//!
//! [`App`]: crate::app::App

use dioxus::prelude::*;
use tempo_core::device::DeviceInfo;
use tempo_core::navigation::{NavButtonEvents, Navigator};
use tempo_core::store::SystemStore;
use tempo_core::theme::Theme;

/// Hook to access the system record store.
pub fn use_store() -> SystemStore {
    use_context::<SystemStore>()
}

/// Hook to access the navigation request queue.
pub fn use_navigation() -> Navigator {
    use_context::<Navigator>()
}

/// Hook to access the top-bar button event bus.
pub fn use_nav_buttons() -> NavButtonEvents {
    use_context::<NavButtonEvents>()
}

/// Hook to access the active theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access device capability flags.
pub fn use_device() -> DeviceInfo {
    use_context::<DeviceInfo>()
}

/// Hook to access the current server's display name.
pub fn use_server_display_name() -> Signal<String> {
    use_context::<Signal<String>>()
}
