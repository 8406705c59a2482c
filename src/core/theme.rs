use crate::constants::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a stored value. Anything other than the two literals falls
    /// back to the default.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon offered by the toggle: the glyph of the theme it switches to.
    #[inline]
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    fn load_theme(&self) -> Theme {
        Theme::from_stored(self.get(THEME_STORAGE_KEY).as_deref())
    }

    fn save_theme(&mut self, theme: Theme) {
        self.set(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Flip `current`, persist the result and return it.
pub fn toggle_theme(store: &mut impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save_theme(next);
    next
}
