use folio::theme::Theme;

/// Preferences resolved for the current request
#[derive(Debug, Clone, Default)]
pub struct Pref {
    pub theme: Theme,
}

impl Pref {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}
