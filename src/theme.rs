//! Light/dark theme preference.
//!
//! The preference lives in three places the toggle keeps in sync: the
//! `data-bs-theme` attribute on `<html>` (what the stylesheet reacts to),
//! localStorage under [`STORAGE_KEY`] (what survives navigation), and the
//! toggle button's icon. The code-highlight stylesheets follow the theme
//! too; see the `wasm::theme` controller.

/// localStorage key the preference persists under.
pub const STORAGE_KEY: &str = "theme";

/// Attribute carrying the active theme on the document root.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse a stored or attribute value; anything unrecognized is light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Icon classes for the toggle button: the sun offers a way out of
    /// the dark, and vice versa.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Dark => "bi bi-sun-fill fs-5",
            ThemePreference::Light => "bi bi-moon-fill fs-5",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_values_default_to_light() {
        assert_eq!(ThemePreference::parse("solarized"), ThemePreference::Light);
        assert_eq!(ThemePreference::parse(""), ThemePreference::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(
            ThemePreference::Light.toggled().toggled(),
            ThemePreference::Light
        );
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn icon_shows_the_other_mode() {
        assert!(ThemePreference::Dark.icon_class().contains("sun"));
        assert!(ThemePreference::Light.icon_class().contains("moon"));
    }
}
