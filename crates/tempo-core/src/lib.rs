//! Tempo Core Library
//!
//! View state and presentation logic for the Tempo chat client,
//! independent of any UI framework.
//!
//! ## Overview
//!
//! The desktop frontend (`tempo`) is a thin Dioxus layer; everything it
//! renders is driven by values and state machines defined here:
//!
//! - **Records**: channels, teams, the current user, emoji sections
//! - **Custom status**: the "clear after" duration enumeration and the
//!   reducer behind the clear-after modal
//! - **Theme**: explicit color tokens and typography, passed into
//!   components as plain values rather than resolved ambiently
//! - **Store**: an observable record store with explicit
//!   subscribe/cancel semantics for the current-user record
//! - **Navigation**: screen push/pop requests and the top-bar button
//!   event bus consumed by modal screens
//!
//! ## Quick Start
//!
//! ```
//! use tempo_core::custom_status::{ClearAfterDuration, ClearAfterState};
//!
//! let mut state = ClearAfterState::new(ClearAfterDuration::DontClear);
//! state.select(ClearAfterDuration::OneHour, "2026-08-23T18:00:00Z");
//! assert!(!state.show_expiry_time);
//! ```

pub mod animation;
pub mod custom_status;
pub mod device;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod store;
pub mod theme;
pub mod types;

// Re-exports
pub use animation::{screen_transition, ScreenTransition};
pub use custom_status::{ClearAfterDuration, ClearAfterState};
pub use device::DeviceInfo;
pub use error::{TempoError, TempoResult};
pub use navigation::{NavButtonEvents, NavOptions, NavigationRequest, Navigator, Screen};
pub use store::{Subscription, SystemStore, CURRENT_USER_ID};
pub use theme::Theme;
pub use types::*;
