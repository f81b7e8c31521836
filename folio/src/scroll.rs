use std::fmt;

/// Offset past which the navbar switches to its scrolled style
pub const SCROLL_THRESHOLD: f64 = 50.0;

const TOP_CLASSES: &str = "nav nav-top";
const SCROLLED_CLASSES: &str = "nav nav-scrolled";

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavStyle {
    /// Transparent bar blended over the hero
    #[default]
    Top,
    /// Opaque, blurred bar with themed text
    Scrolled,
}

impl NavStyle {
    pub fn from_offset(offset: f64) -> Self {
        if is_scrolled(offset) {
            NavStyle::Scrolled
        } else {
            NavStyle::Top
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            NavStyle::Top => TOP_CLASSES,
            NavStyle::Scrolled => SCROLLED_CLASSES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavStyle::Top => "top",
            NavStyle::Scrolled => "scrolled",
        }
    }
}

impl fmt::Display for NavStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_or_below_threshold() {
        for offset in [0.0, 1.0, 25.5, 49.99, 50.0] {
            assert!(!is_scrolled(offset), "offset {offset}");
            assert_eq!(NavStyle::from_offset(offset), NavStyle::Top);
        }
    }

    #[test]
    fn test_above_threshold() {
        for offset in [50.01, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "offset {offset}");
            assert_eq!(NavStyle::from_offset(offset), NavStyle::Scrolled);
        }
    }

    #[test]
    fn test_odd_offsets() {
        // Overscroll bounce reports negative offsets
        assert_eq!(NavStyle::from_offset(-20.0), NavStyle::Top);
        assert_eq!(NavStyle::from_offset(f64::NAN), NavStyle::Top);
        assert_eq!(NavStyle::from_offset(f64::INFINITY), NavStyle::Scrolled);
    }

    #[test]
    fn test_classes_differ() {
        assert_ne!(NavStyle::Top.classes(), NavStyle::Scrolled.classes());
        assert!(NavStyle::Scrolled.classes().contains("nav-scrolled"));
    }
}
