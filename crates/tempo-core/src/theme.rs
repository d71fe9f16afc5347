//! Theme tokens and style helpers.
//!
//! A [`Theme`] is a plain value passed explicitly into components as a
//! prop. Rendering never reaches into an ambient theme context, which
//! keeps every style computation deterministic and testable.

use serde::{Deserialize, Serialize};

/// Named color tokens for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub sidebar_bg: String,
    pub sidebar_text: String,
    pub sidebar_header_text_color: String,
    pub center_channel_bg: String,
    pub center_channel_color: String,
    pub button_bg: String,
    pub link_color: String,
    pub error_text_color: String,
}

impl Theme {
    /// The default "Denim" theme.
    pub fn denim() -> Self {
        Self {
            sidebar_bg: "#1e325c".to_string(),
            sidebar_text: "#ffffff".to_string(),
            sidebar_header_text_color: "#ffffff".to_string(),
            center_channel_bg: "#ffffff".to_string(),
            center_channel_color: "#3f4350".to_string(),
            button_bg: "#1c58d9".to_string(),
            link_color: "#386fe5".to_string(),
            error_text_color: "#d24b4e".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::denim()
    }
}

/// Render a hex color at the given opacity as an `rgba(...)` string.
///
/// Accepts `#rgb` and `#rrggbb`. Anything else is returned unchanged so
/// a malformed token degrades to its original value instead of failing.
pub fn change_opacity(color: &str, alpha: f32) -> String {
    let alpha = alpha.clamp(0.0, 1.0);
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };

    let channels = match hex.len() {
        3 => hex
            .chars()
            .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16))
            .collect::<Result<Vec<_>, _>>(),
        6 => (0..3)
            .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16))
            .collect(),
        _ => return color.to_string(),
    };

    match channels {
        Ok(rgb) => format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha),
        Err(_) => color.to_string(),
    }
}

/// Typography family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Heading,
    Body,
}

/// A resolved typography style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_size_px: f32,
    pub line_height_px: f32,
    pub font_weight: u16,
}

impl Typography {
    /// Inline CSS fragment for this style.
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; line-height: {}px; font-weight: {};",
            self.font_size_px, self.line_height_px, self.font_weight
        )
    }
}

/// Resolve a typography token from the fixed scale.
///
/// Sizes outside the scale clamp to the nearest defined step.
pub fn typography(kind: TypeKind, size: u16) -> Typography {
    let (font_size_px, line_height_px) = match size {
        0..=25 => (10.0, 16.0),
        26..=50 => (11.0, 16.0),
        51..=75 => (12.0, 16.0),
        76..=100 => (12.0, 20.0),
        101..=200 => (14.0, 20.0),
        201..=300 => (16.0, 24.0),
        301..=400 => (18.0, 24.0),
        401..=500 => (20.0, 28.0),
        501..=600 => (22.0, 28.0),
        601..=700 => (25.0, 30.0),
        701..=800 => (28.0, 36.0),
        801..=900 => (32.0, 40.0),
        _ => (40.0, 48.0),
    };
    let font_weight = match kind {
        TypeKind::Heading => 600,
        TypeKind::Body => 400,
    };
    Typography {
        font_size_px,
        line_height_px,
        font_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_opacity_full_hex() {
        assert_eq!(change_opacity("#1e325c", 0.64), "rgba(30, 50, 92, 0.64)");
        assert_eq!(change_opacity("#ffffff", 0.08), "rgba(255, 255, 255, 0.08)");
    }

    #[test]
    fn test_change_opacity_short_hex() {
        assert_eq!(change_opacity("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_change_opacity_clamps_alpha() {
        assert_eq!(change_opacity("#000000", 2.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_change_opacity_passes_through_malformed() {
        assert_eq!(change_opacity("tomato", 0.5), "tomato");
        assert_eq!(change_opacity("#12345", 0.5), "#12345");
        assert_eq!(change_opacity("#zzzzzz", 0.5), "#zzzzzz");
    }

    #[test]
    fn test_typography_scale() {
        let heading = typography(TypeKind::Heading, 700);
        assert_eq!(heading.font_size_px, 25.0);
        assert_eq!(heading.font_weight, 600);

        let body = typography(TypeKind::Body, 200);
        assert_eq!(body.font_size_px, 14.0);
        assert_eq!(body.font_weight, 400);
    }

    #[test]
    fn test_typography_css() {
        let css = typography(TypeKind::Heading, 75).css();
        assert_eq!(css, "font-size: 12px; line-height: 16px; font-weight: 600;");
    }
}
