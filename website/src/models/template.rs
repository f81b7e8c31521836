use chrono::{Datelike, Utc};
use folio::{
    navigator::{MenuItem, Navigator, ScrollBehavior},
    scroll::{NavStyle, SCROLL_THRESHOLD},
    theme::Theme,
};

use super::Pref;

/// Navbar state rendered on the server; the browser script takes over
/// style switching from the embedded threshold and class sets.
#[derive(Clone)]
pub struct NavBar {
    pub style: NavStyle,
    pub threshold: f64,
    pub top_classes: &'static str,
    pub scrolled_classes: &'static str,
    pub behavior: ScrollBehavior,
    pub items: Vec<MenuItem>,
}

impl NavBar {
    pub fn new(navigator: &Navigator) -> Self {
        NavBar {
            style: NavStyle::from_offset(0.0),
            threshold: SCROLL_THRESHOLD,
            top_classes: NavStyle::Top.classes(),
            scrolled_classes: NavStyle::Scrolled.classes(),
            behavior: navigator.behavior(),
            items: navigator.menu(),
        }
    }
}

#[derive(Clone)]
pub struct TemplateData {
    pub theme: Theme,
    pub title: String,
    pub year: i32,
    pub nav: NavBar,
}

impl TemplateData {
    pub fn new(pref: &Pref) -> TemplateData {
        TemplateData {
            theme: pref.theme,
            title: String::from(""),
            year: Utc::now().year(),
            nav: NavBar::new(&Navigator::page()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_nav_is_top() {
        let t = TemplateData::new(&Pref::default());
        assert_eq!(t.theme, Theme::Light);
        assert_eq!(t.nav.style, NavStyle::Top);
        assert_eq!(t.nav.threshold, 50.0);
        assert_eq!(t.nav.items.len(), 3);
    }
}
