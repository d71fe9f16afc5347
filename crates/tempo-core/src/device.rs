//! Device capability flags.

/// Display capabilities relevant to screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    /// Tablet-class display
    pub is_tablet: bool,
    /// Two logical panes currently share the screen
    pub split_view: bool,
}

/// Minimum window width treated as a tablet-class display.
pub const TABLET_MIN_WIDTH: f64 = 768.0;

impl DeviceInfo {
    /// Classify a desktop window by its logical width.
    pub fn from_window_width(width: f64) -> Self {
        Self {
            is_tablet: width >= TABLET_MIN_WIDTH,
            split_view: false,
        }
    }

    /// Whether the channel list screen shows the inline detail pane.
    pub fn show_tablet_layout(&self) -> bool {
        self.is_tablet && !self.split_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablet_without_split_view_shows_detail_pane() {
        let device = DeviceInfo {
            is_tablet: true,
            split_view: false,
        };
        assert!(device.show_tablet_layout());
    }

    #[test]
    fn test_phone_or_split_view_hides_detail_pane() {
        let phone = DeviceInfo {
            is_tablet: false,
            split_view: false,
        };
        let split = DeviceInfo {
            is_tablet: true,
            split_view: true,
        };
        assert!(!phone.show_tablet_layout());
        assert!(!split.show_tablet_layout());
    }

    #[test]
    fn test_from_window_width() {
        assert!(DeviceInfo::from_window_width(1200.0).is_tablet);
        assert!(!DeviceInfo::from_window_width(420.0).is_tablet);
    }
}
