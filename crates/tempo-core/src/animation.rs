//! Focus transition targets for the channel list screen.
//!
//! The transition is purely cosmetic: losing focus fades the screen out
//! and nudges it left when the route carried a `direction` parameter;
//! regaining focus reverses both. The UI layer feeds these targets into
//! a CSS transition.

/// Transition length in milliseconds.
pub const SCREEN_TRANSITION_MS: u32 = 150;

/// Horizontal offset applied when unfocusing with a direction present.
pub const UNFOCUSED_DIRECTION_OFFSET: f64 = -25.0;

/// Target values for the focus transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransition {
    pub opacity: f32,
    pub translate_x: f64,
    pub duration_ms: u32,
}

impl ScreenTransition {
    /// Inline CSS for the target state plus the timing.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}px); \
             transition: opacity {}ms ease, transform {}ms ease;",
            self.opacity, self.translate_x, self.duration_ms, self.duration_ms
        )
    }
}

/// Compute the transition target for the current focus state.
///
/// A missing or empty `direction` parameter defaults to a zero offset.
pub fn screen_transition(is_focused: bool, direction: Option<&str>) -> ScreenTransition {
    if is_focused {
        return ScreenTransition {
            opacity: 1.0,
            translate_x: 0.0,
            duration_ms: SCREEN_TRANSITION_MS,
        };
    }

    let has_direction = direction.is_some_and(|d| !d.is_empty());
    ScreenTransition {
        opacity: 0.0,
        translate_x: if has_direction {
            UNFOCUSED_DIRECTION_OFFSET
        } else {
            0.0
        },
        duration_ms: SCREEN_TRANSITION_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_target() {
        let t = screen_transition(true, Some("left"));
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.duration_ms, 150);
    }

    #[test]
    fn test_unfocused_without_direction_keeps_zero_offset() {
        assert_eq!(screen_transition(false, None).translate_x, 0.0);
        assert_eq!(screen_transition(false, Some("")).translate_x, 0.0);
    }

    #[test]
    fn test_unfocused_with_direction_offsets_left() {
        let t = screen_transition(false, Some("left"));
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.translate_x, -25.0);
    }

    #[test]
    fn test_css_contains_timing() {
        let css = screen_transition(false, Some("right")).css();
        assert!(css.contains("translateX(-25px)"));
        assert!(css.contains("150ms"));
    }
}
