//! Custom status "clear after" modal.
//!
//! Overlay modal with its own top bar. The "Done" button goes through
//! the nav-button event bus under the fixed id
//! [`DONE_BUTTON_ID`]; the modal listens for that id while mounted,
//! commits the selection through the caller's callback, and requests a
//! pop. The host screen closes the overlay when it sees the pop.

use std::rc::Rc;

use chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc};
use dioxus::prelude::*;
use tempo_core::custom_status::{
    format_expiry, ClearAfterDuration, ClearAfterState, DONE_BUTTON_ID,
};
use tempo_core::i18n;
use tempo_core::theme::{change_opacity, Theme};
use tempo_core::types::User;

use crate::context::{use_nav_buttons, use_navigation, use_store};

/// The clear-after selection modal.
#[component]
pub fn ClearAfterModal(
    initial_duration: ClearAfterDuration,
    /// Commit callback, invoked with `(duration, expires_at)` on Done
    handle_clear_after_click: EventHandler<(ClearAfterDuration, String)>,
    theme: Theme,
) -> Element {
    let store = use_store();
    let navigation = use_navigation();
    let events = use_nav_buttons();

    let state = use_signal(|| ClearAfterState::new(initial_duration));
    let current_user = use_signal(|| store.current_user());

    // Observe the current-user record for the modal's lifetime.
    let _user_sub = use_hook({
        let store = store.clone();
        move || {
            Rc::new(store.subscribe_current_user(move |user| {
                let mut current_user = current_user;
                current_user.set(Some(user.clone()));
            }))
        }
    });

    // Done commits the current selection and asks for exactly one pop.
    let on_done = {
        let navigation = navigation.clone();
        move || {
            let snapshot = state.read().clone();
            handle_clear_after_click.call((snapshot.duration, snapshot.expires_at));
            navigation.pop_top_screen();
        }
    };

    // Button events are honored for the fixed Done id only, and only
    // while the modal is mounted.
    let _button_sub = use_hook({
        let events = events.clone();
        move || {
            Rc::new(events.listen(move |button_id| {
                if button_id == DONE_BUTTON_ID {
                    on_done();
                }
            }))
        }
    });

    let handle_item_click = move |(duration, expires_at): (ClearAfterDuration, String)| {
        let mut state = state;
        state.write().select(duration, expires_at);
    };

    let rows = ClearAfterDuration::menu_rows();
    let snapshot = state.read().clone();

    let scroll_bg = change_opacity(&theme.center_channel_color, 0.03);
    let block_border = change_opacity(&theme.center_channel_color, 0.1);
    let title = i18n::format_message(
        "mobile.routes.custom_status_clear_after",
        "Clear Custom Status After",
    );
    let done_label = i18n::format_message("mobile.custom_status.modal_confirm", "Done");

    rsx! {
        div {
            class: "modal-overlay",
            onclick: {
                let navigation = navigation.clone();
                move |_| navigation.pop_top_screen()
            },

            div {
                class: "clear-after-modal",
                onclick: move |e| e.stop_propagation(),

                header {
                    class: "modal-top-bar",
                    style: "background-color: {theme.sidebar_bg};",
                    h2 {
                        class: "modal-title",
                        style: "color: {theme.sidebar_header_text_color};",
                        "{title}"
                    }
                    button {
                        class: "done-button",
                        style: "color: {theme.sidebar_header_text_color};",
                        onclick: move |_| events.emit(DONE_BUTTON_ID),
                        "{done_label}"
                    }
                }

                div {
                    class: "clear-after-scroll",
                    style: "background-color: {scroll_bg};",

                    if !rows.is_empty() {
                        div {
                            class: "block",
                            style: "border-color: {block_border};",
                            for row in rows.iter() {
                                ClearAfterMenuItem {
                                    key: "{row.duration.id()}",
                                    duration: row.duration,
                                    is_selected: snapshot.duration == row.duration,
                                    separator: row.separator,
                                    current_user: current_user(),
                                    on_click: handle_item_click,
                                    theme: theme.clone(),
                                }
                            }
                        }
                    }

                    // The custom date/time row always renders, below the
                    // generated menu.
                    div {
                        class: "block",
                        style: "border-color: {block_border};",
                        ClearAfterMenuItem {
                            duration: ClearAfterDuration::DateAndTime,
                            expiry_time: snapshot.expires_at.clone(),
                            is_selected: snapshot.custom_row_selected(),
                            separator: false,
                            show_date_time_picker: snapshot.duration
                                == ClearAfterDuration::DateAndTime,
                            show_expiry_time: snapshot.show_expiry_time,
                            current_user: current_user(),
                            on_click: handle_item_click,
                            theme: theme.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// One selectable row of the clear-after menu.
#[component]
fn ClearAfterMenuItem(
    duration: ClearAfterDuration,
    #[props(default)] expiry_time: String,
    is_selected: bool,
    separator: bool,
    #[props(default = false)] show_date_time_picker: bool,
    #[props(default = false)] show_expiry_time: bool,
    current_user: Option<User>,
    on_click: EventHandler<(ClearAfterDuration, String)>,
    theme: Theme,
) -> Element {
    let label = duration.label();
    let row_class = if separator {
        "clear-after-item separator"
    } else {
        "clear-after-item"
    };
    let separator_border = change_opacity(&theme.center_channel_color, 0.1);
    let expiry_color = change_opacity(&theme.center_channel_color, 0.56);
    let expiry_label = format_expiry(&expiry_time, current_user.as_ref());

    let handle_row_click = move |_| {
        let expires_at = duration.expires_at_string(Utc::now());
        on_click.call((duration, expires_at));
    };

    let handle_picker_input = move |event: FormEvent| {
        let value = event.value();
        match NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M") {
            Ok(at) => {
                let expires_at = Utc
                    .from_utc_datetime(&at)
                    .to_rfc3339_opts(SecondsFormat::Secs, true);
                on_click.call((ClearAfterDuration::DateAndTime, expires_at));
            }
            Err(_) => tracing::warn!(value = %value, "unparseable date/time picker value"),
        }
    };

    rsx! {
        div {
            class: "{row_class}",
            style: "border-color: {separator_border};",

            button {
                class: "clear-after-row",
                onclick: handle_row_click,

                span {
                    class: "clear-after-check",
                    style: "color: {theme.button_bg};",
                    if is_selected { "\u{2713}" }
                }
                span {
                    class: "clear-after-label",
                    style: "color: {theme.center_channel_color};",
                    "{label}"
                }
                if show_expiry_time {
                    span {
                        class: "clear-after-expiry",
                        style: "color: {expiry_color};",
                        "{expiry_label}"
                    }
                }
            }

            if show_date_time_picker {
                input {
                    class: "expiry-picker",
                    r#type: "datetime-local",
                    oninput: handle_picker_input,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tempo_core::custom_status::{ClearAfterDuration, ClearAfterState, DONE_BUTTON_ID};
    use tempo_core::navigation::{NavButtonEvents, NavigationRequest, Navigator};

    /// Mirrors the modal's Done wiring: select, press Done, observe
    /// one commit with the exact pair and one pop request.
    #[test]
    fn test_done_commits_once_and_pops_once() {
        let navigation = Navigator::new();
        let events = NavButtonEvents::new();
        let state = Rc::new(RefCell::new(ClearAfterState::new(
            ClearAfterDuration::DontClear,
        )));
        let committed: Rc<RefCell<Vec<(ClearAfterDuration, String)>>> =
            Rc::new(RefCell::new(Vec::new()));

        state
            .borrow_mut()
            .select(ClearAfterDuration::OneHour, "2026-08-23T18:00:00Z");

        let on_done = {
            let state = Rc::clone(&state);
            let committed = Rc::clone(&committed);
            let navigation = navigation.clone();
            move || {
                let snapshot = state.borrow().clone();
                committed
                    .borrow_mut()
                    .push((snapshot.duration, snapshot.expires_at));
                navigation.pop_top_screen();
            }
        };
        let _sub = events.listen(move |button_id| {
            if button_id == DONE_BUTTON_ID {
                on_done();
            }
        });

        // Other button ids are no-ops.
        events.emit("close-settings");
        events.emit(DONE_BUTTON_ID);

        assert_eq!(
            *committed.borrow(),
            vec![(
                ClearAfterDuration::OneHour,
                "2026-08-23T18:00:00Z".to_string()
            )]
        );
        assert_eq!(navigation.drain_pending(), vec![NavigationRequest::Pop]);
    }

    #[test]
    fn test_row_class_with_separator() {
        let separator = true;
        let row_class = if separator {
            "clear-after-item separator"
        } else {
            "clear-after-item"
        };
        assert_eq!(row_class, "clear-after-item separator");
    }
}
