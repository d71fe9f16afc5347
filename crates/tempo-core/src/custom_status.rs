//! Custom status "clear after" durations and modal state.
//!
//! The clear-after modal lets the user pick when their custom status
//! expires. The selectable menu is generated from [`ClearAfterDuration`]
//! in declaration order, excluding the terminal [`DateAndTime`] variant,
//! which is rendered as its own unconditional row with a date/time
//! picker below the generated list.
//!
//! [`DateAndTime`]: ClearAfterDuration::DateAndTime

use chrono::{DateTime, Days, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TempoError, TempoResult};
use crate::i18n;

/// Top-bar button id that commits the clear-after selection.
pub const DONE_BUTTON_ID: &str = "update-custom-status-clear-after";

/// How long a custom status stays set before it is cleared.
///
/// Declaration order is part of the contract: the modal menu walks the
/// variants in order and drops the last one, so the terminal sentinel
/// must stay last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearAfterDuration {
    DontClear,
    ThirtyMinutes,
    OneHour,
    FourHours,
    Today,
    ThisWeek,
    /// Terminal sentinel: user-chosen date and time. Never part of the
    /// generated menu; rendered separately with its own picker.
    DateAndTime,
}

impl ClearAfterDuration {
    /// Every variant, in menu order.
    pub const ALL: [ClearAfterDuration; 7] = [
        ClearAfterDuration::DontClear,
        ClearAfterDuration::ThirtyMinutes,
        ClearAfterDuration::OneHour,
        ClearAfterDuration::FourHours,
        ClearAfterDuration::Today,
        ClearAfterDuration::ThisWeek,
        ClearAfterDuration::DateAndTime,
    ];

    /// Stable string id, used in serialized payloads and test hooks.
    pub fn id(&self) -> &'static str {
        match self {
            ClearAfterDuration::DontClear => "dont_clear",
            ClearAfterDuration::ThirtyMinutes => "thirty_minutes",
            ClearAfterDuration::OneHour => "one_hour",
            ClearAfterDuration::FourHours => "four_hours",
            ClearAfterDuration::Today => "today",
            ClearAfterDuration::ThisWeek => "this_week",
            ClearAfterDuration::DateAndTime => "date_and_time",
        }
    }

    /// Localization key for the row label.
    pub fn message_id(&self) -> String {
        format!("mobile.custom_status.clear_after.{}", self.id())
    }

    /// English label used when no localized string exists.
    pub fn default_label(&self) -> &'static str {
        match self {
            ClearAfterDuration::DontClear => "Don't clear",
            ClearAfterDuration::ThirtyMinutes => "30 minutes",
            ClearAfterDuration::OneHour => "1 hour",
            ClearAfterDuration::FourHours => "4 hours",
            ClearAfterDuration::Today => "Today",
            ClearAfterDuration::ThisWeek => "This week",
            ClearAfterDuration::DateAndTime => "Date and Time",
        }
    }

    /// Localized row label with English fallback.
    pub fn label(&self) -> String {
        i18n::format_message(&self.message_id(), self.default_label()).to_string()
    }

    /// Whether this is the terminal sentinel excluded from the menu.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClearAfterDuration::DateAndTime)
    }

    /// The generated selectable menu: every variant except the last.
    pub fn menu() -> &'static [ClearAfterDuration] {
        menu_from(&Self::ALL)
    }

    /// Menu rows paired with their separator flag.
    ///
    /// Every row shows a separator except the last generated one (the
    /// row immediately preceding the custom date/time row).
    pub fn menu_rows() -> Vec<MenuRow> {
        let menu = Self::menu();
        menu.iter()
            .enumerate()
            .map(|(i, duration)| MenuRow {
                duration: *duration,
                separator: i + 1 < menu.len(),
            })
            .collect()
    }

    /// Compute the expiry instant implied by this duration.
    ///
    /// Returns `None` for [`DontClear`] (no expiry) and for
    /// [`DateAndTime`] (the user supplies the instant).
    ///
    /// [`DontClear`]: ClearAfterDuration::DontClear
    /// [`DateAndTime`]: ClearAfterDuration::DateAndTime
    pub fn expires_at_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ClearAfterDuration::DontClear | ClearAfterDuration::DateAndTime => None,
            ClearAfterDuration::ThirtyMinutes => Some(now + Duration::minutes(30)),
            ClearAfterDuration::OneHour => Some(now + Duration::hours(1)),
            ClearAfterDuration::FourHours => Some(now + Duration::hours(4)),
            ClearAfterDuration::Today => end_of_day(now),
            ClearAfterDuration::ThisWeek => end_of_week(now),
        }
    }

    /// ISO-8601 expiry string for this duration, empty when there is
    /// no computed expiry.
    pub fn expires_at_string(&self, now: DateTime<Utc>) -> String {
        self.expires_at_from(now)
            .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }
}

/// A generated menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub duration: ClearAfterDuration,
    pub separator: bool,
}

/// Generated menu for an arbitrary ordering: all values except the
/// last. Empty input yields an empty menu rather than panicking.
pub fn menu_from(values: &[ClearAfterDuration]) -> &[ClearAfterDuration] {
    match values.len() {
        0 => &[],
        n => &values[..n - 1],
    }
}

/// Parse an ISO-8601 expiry string produced by this module.
pub fn parse_expires_at(value: &str) -> TempoResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| TempoError::InvalidTimestamp(value.to_string()))
}

/// Human-readable expiry line, shifted into the user's timezone when
/// the user record carries a parseable UTC offset.
///
/// An unparseable expiry string degrades to itself; this path renders
/// display text and must not fail.
pub fn format_expiry(expires_at: &str, user: Option<&crate::types::User>) -> String {
    let Ok(at) = parse_expires_at(expires_at) else {
        return expires_at.to_string();
    };

    let offset = user
        .and_then(|u| u.utc_offset.as_deref())
        .and_then(|o| o.parse::<chrono::FixedOffset>().ok());

    match offset {
        Some(offset) => at.with_timezone(&offset).format("%b %d, %Y %H:%M").to_string(),
        None => at.format("%b %d, %Y %H:%M").to_string(),
    }
}

fn end_of_day(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    now.date_naive()
        .and_hms_opt(23, 59, 59)
        .map(|at| at.and_utc())
}

fn end_of_week(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    use chrono::Datelike;
    let days_until_sunday = 6 - u64::from(now.weekday().num_days_from_monday());
    now.date_naive()
        .checked_add_days(Days::new(days_until_sunday))
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|at| at.and_utc())
}

/// Selection state of the clear-after modal.
///
/// `show_expiry_time` is derived: true only when the custom date/time
/// variant is selected and an expiry has actually been chosen. It is
/// recomputed on every [`select`] and never set on its own.
///
/// [`select`]: ClearAfterState::select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearAfterState {
    pub duration: ClearAfterDuration,
    /// ISO-8601 expiry, empty until an explicit date/time is chosen.
    pub expires_at: String,
    pub show_expiry_time: bool,
}

impl ClearAfterState {
    /// Initial state for a freshly opened modal.
    pub fn new(initial_duration: ClearAfterDuration) -> Self {
        Self {
            duration: initial_duration,
            expires_at: String::new(),
            show_expiry_time: false,
        }
    }

    /// Replace the selection. This is the only mutation path.
    pub fn select(&mut self, duration: ClearAfterDuration, expires_at: impl Into<String>) {
        let expires_at = expires_at.into();
        self.show_expiry_time =
            duration == ClearAfterDuration::DateAndTime && !expires_at.is_empty();
        self.duration = duration;
        self.expires_at = expires_at;
    }

    /// Whether the custom row should be drawn as selected: the custom
    /// variant is active but no explicit instant has been chosen yet.
    pub fn custom_row_selected(&self) -> bool {
        self.duration == ClearAfterDuration::DateAndTime && self.expires_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_duration() -> impl Strategy<Value = ClearAfterDuration> {
        prop::sample::select(ClearAfterDuration::ALL.to_vec())
    }

    #[test]
    fn test_menu_excludes_terminal_sentinel() {
        let menu = ClearAfterDuration::menu();
        assert_eq!(menu.len(), ClearAfterDuration::ALL.len() - 1);
        assert!(!menu.contains(&ClearAfterDuration::DateAndTime));
        assert_eq!(menu[0], ClearAfterDuration::DontClear);
    }

    #[test]
    fn test_menu_from_empty_is_empty() {
        assert!(menu_from(&[]).is_empty());
    }

    #[test]
    fn test_menu_rows_separators() {
        let rows = ClearAfterDuration::menu_rows();
        assert_eq!(rows.len(), 6);
        for row in &rows[..rows.len() - 1] {
            assert!(row.separator, "{:?} should have a separator", row.duration);
        }
        assert!(!rows.last().unwrap().separator);
        assert_eq!(rows.last().unwrap().duration, ClearAfterDuration::ThisWeek);
    }

    #[test]
    fn test_state_initialization() {
        let state = ClearAfterState::new(ClearAfterDuration::OneHour);
        assert_eq!(state.duration, ClearAfterDuration::OneHour);
        assert_eq!(state.expires_at, "");
        assert!(!state.show_expiry_time);
    }

    #[test]
    fn test_select_recomputes_show_expiry_time() {
        let mut state = ClearAfterState::new(ClearAfterDuration::DontClear);

        state.select(ClearAfterDuration::DateAndTime, "");
        assert!(!state.show_expiry_time);
        assert!(state.custom_row_selected());

        state.select(ClearAfterDuration::DateAndTime, "2026-08-23T18:00:00Z");
        assert!(state.show_expiry_time);
        assert!(!state.custom_row_selected());

        state.select(ClearAfterDuration::Today, "2026-08-23T23:59:59Z");
        assert!(!state.show_expiry_time);
    }

    #[test]
    fn test_relative_expiry_computation() {
        let now = "2026-08-19T10:00:00Z".parse::<DateTime<Utc>>().unwrap();

        assert_eq!(
            ClearAfterDuration::ThirtyMinutes.expires_at_string(now),
            "2026-08-19T10:30:00Z"
        );
        assert_eq!(
            ClearAfterDuration::OneHour.expires_at_string(now),
            "2026-08-19T11:00:00Z"
        );
        assert_eq!(
            ClearAfterDuration::FourHours.expires_at_string(now),
            "2026-08-19T14:00:00Z"
        );
    }

    #[test]
    fn test_end_of_day_and_week_expiry() {
        // 2026-08-19 is a Wednesday; the ISO week ends Sunday 2026-08-23.
        let now = "2026-08-19T10:00:00Z".parse::<DateTime<Utc>>().unwrap();

        assert_eq!(
            ClearAfterDuration::Today.expires_at_string(now),
            "2026-08-19T23:59:59Z"
        );
        assert_eq!(
            ClearAfterDuration::ThisWeek.expires_at_string(now),
            "2026-08-23T23:59:59Z"
        );

        // A Sunday stays within the same day.
        let sunday = "2026-08-23T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            ClearAfterDuration::ThisWeek.expires_at_string(sunday),
            "2026-08-23T23:59:59Z"
        );
    }

    #[test]
    fn test_no_expiry_for_sentinels() {
        let now = Utc::now();
        assert_eq!(ClearAfterDuration::DontClear.expires_at_string(now), "");
        assert_eq!(ClearAfterDuration::DateAndTime.expires_at_string(now), "");
    }

    #[test]
    fn test_parse_expires_at_roundtrip() {
        let now = "2026-08-19T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let encoded = ClearAfterDuration::OneHour.expires_at_string(now);
        let decoded = parse_expires_at(&encoded).unwrap();
        assert_eq!(decoded, now + Duration::hours(1));
    }

    #[test]
    fn test_parse_expires_at_rejects_garbage() {
        assert!(matches!(
            parse_expires_at("tomorrowish"),
            Err(TempoError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_format_expiry_applies_user_offset() {
        let mut user = crate::types::User::new("jdoe");
        user.utc_offset = Some("+02:00".to_string());

        assert_eq!(
            format_expiry("2026-08-19T10:00:00Z", Some(&user)),
            "Aug 19, 2026 12:00"
        );
        assert_eq!(
            format_expiry("2026-08-19T10:00:00Z", None),
            "Aug 19, 2026 10:00"
        );
    }

    #[test]
    fn test_format_expiry_degrades_on_garbage() {
        assert_eq!(format_expiry("soon", None), "soon");
    }

    #[test]
    fn test_labels_resolve() {
        assert_eq!(ClearAfterDuration::DontClear.label(), "Don't clear");
        assert_eq!(ClearAfterDuration::ThisWeek.label(), "This week");
    }

    proptest! {
        /// show_expiry_time holds iff the custom variant is selected
        /// with a non-empty expiry, over any sequence of selections.
        #[test]
        fn prop_show_expiry_time_is_derived(
            initial in any_duration(),
            selections in prop::collection::vec(
                (any_duration(), prop::option::of("[a-zA-Z0-9:TZ+-]{1,24}")),
                0..16,
            ),
        ) {
            let mut state = ClearAfterState::new(initial);
            prop_assert!(!state.show_expiry_time);

            for (duration, expiry) in selections {
                let expiry = expiry.unwrap_or_default();
                state.select(duration, expiry.clone());
                prop_assert_eq!(
                    state.show_expiry_time,
                    duration == ClearAfterDuration::DateAndTime && !expiry.is_empty()
                );
            }
        }

        /// The generated menu never contains the last element, for any
        /// ordering of the enumeration.
        #[test]
        fn prop_menu_drops_terminal_for_any_ordering(
            ordering in Just(ClearAfterDuration::ALL.to_vec()).prop_shuffle(),
        ) {
            let menu = menu_from(&ordering);
            let terminal = *ordering.last().unwrap();
            prop_assert_eq!(menu.len(), ordering.len() - 1);
            // Variants are distinct, so the dropped tail value must be gone.
            prop_assert!(!menu.contains(&terminal));
        }
    }
}
