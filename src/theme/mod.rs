//! Global styles for the Tempo desktop shell.
//!
//! Layout and spacing live here; color tokens come from the explicit
//! [`Theme`](tempo_core::theme::Theme) value components receive as a
//! prop.

mod styles;

pub use styles::GLOBAL_STYLES;
