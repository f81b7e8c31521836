use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::error::InvalidThemeSnafu;

/// Key under which the theme preference is persisted
pub const THEME_KEY: &str = "theme";

/// Class set on the document root to enable dark styling
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Flips light and dark. Applying it twice yields the original theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads a persisted value, falling back to light when the value
    /// is missing or not one of the two known themes.
    pub fn from_persisted(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Class list for the document root element
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    /// Label for the toggle control, naming the theme it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }

    /// Icon shown on the toggle: a moon while light, a sun while dark
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        ensure!(
            s == "light" || s == "dark",
            InvalidThemeSnafu {
                value: s.to_string()
            }
        );

        if s == "dark" {
            Ok(Theme::Dark)
        } else {
            Ok(Theme::Light)
        }
    }
}

/// Key-value storage for user preferences
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// Holds the current theme and writes every change through to the store.
pub struct ThemeManager<S: PrefStore> {
    theme: Theme,
    store: S,
}

impl<S: PrefStore> ThemeManager<S> {
    pub fn load(store: S) -> Self {
        let persisted = store.get(THEME_KEY);
        let theme = Theme::from_persisted(persisted.as_deref());

        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let mut store = Self::default();
            store.values.insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PrefStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.writes += 1;
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_from_persisted() {
        assert_eq!(Theme::from_persisted(None), Theme::Light);
        assert_eq!(Theme::from_persisted(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_persisted(Some("light")), Theme::Light);
        assert_eq!(Theme::from_persisted(Some("solarized")), Theme::Light);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::Dark.root_class(), "dark");
        assert_eq!(Theme::Light.root_class(), "");
    }

    #[test]
    fn test_fresh_load_is_light() {
        let manager = ThemeManager::load(MemoryStore::default());
        assert_eq!(manager.theme(), Theme::Light);

        // Loading alone never writes
        assert_eq!(manager.into_store().writes, 0);
    }

    #[test]
    fn test_corrupt_value_loads_as_light() {
        let manager = ThemeManager::load(MemoryStore::with(THEME_KEY, "purple"));
        assert_eq!(manager.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut manager = ThemeManager::load(MemoryStore::default());

        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.store.get(THEME_KEY).as_deref(), Some("dark"));

        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(manager.store.writes, 2);
    }

    #[test]
    fn test_set_persists() {
        let mut manager = ThemeManager::load(MemoryStore::with(THEME_KEY, "dark"));
        assert_eq!(manager.theme(), Theme::Dark);

        manager.set(Theme::Light);
        let store = manager.into_store();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }
}
