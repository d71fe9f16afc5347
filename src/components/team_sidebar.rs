//! Fixed-width team sidebar.

use dioxus::prelude::*;
use tempo_core::theme::{change_opacity, Theme};
use tempo_core::types::Team;

/// Width of the team sidebar, in px.
pub const TEAM_SIDEBAR_WIDTH: f32 = 72.0;

/// Vertical strip of team avatars on the far left.
#[component]
pub fn TeamSidebar(team: Team, theme: Theme) -> Element {
    let initial = team
        .display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let avatar_bg = change_opacity(&theme.sidebar_text, 0.16);

    rsx! {
        nav {
            class: "team-sidebar",
            style: "width: {TEAM_SIDEBAR_WIDTH}px; background-color: {theme.sidebar_bg};",
            div {
                class: "team-avatar selected",
                style: "background-color: {avatar_bg}; color: {theme.sidebar_text};",
                title: "{team.display_name}",
                "{initial}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_team_initial() {
        let display_name = "engineering";
        let initial = display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        assert_eq!(initial, "E");
    }

    #[test]
    fn test_team_initial_empty_name() {
        let display_name = "";
        let initial = display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        assert_eq!(initial, "");
    }
}
