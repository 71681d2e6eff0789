//! Color scheme shared by every header instance on the page

use serde::{Deserialize, Serialize};

/// Color scheme (dark / light)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    /// Class applied to `<body>` while this scheme is active
    pub fn body_class(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark-mode",
            ColorScheme::Light => "light-mode",
        }
    }

    /// Header bar background
    pub fn bar_background(self) -> &'static str {
        match self {
            ColorScheme::Dark => "#121212",
            ColorScheme::Light => "#fff",
        }
    }

    /// Icon shown inside the theme switch
    pub fn icon(self) -> ThemeIcon {
        match self {
            ColorScheme::Dark => ThemeIcon::Moon,
            ColorScheme::Light => ThemeIcon::Sun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            other => Err(format!("unknown color scheme '{}' (expected dark|light)", other)),
        }
    }
}

/// Glyph displayed by the theme switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn alt_text(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "moon icon",
            ThemeIcon::Sun => "sun icon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
        assert!(ColorScheme::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_once() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
    }

    #[test]
    fn test_bar_background_per_scheme() {
        assert_eq!(ColorScheme::Dark.bar_background(), "#121212");
        assert_eq!(ColorScheme::Light.bar_background(), "#fff");
    }

    #[test]
    fn test_icon_follows_scheme() {
        // Checked (dark) shows the moon, unchecked (light) the sun
        assert_eq!(ColorScheme::Dark.icon(), ThemeIcon::Moon);
        assert_eq!(ColorScheme::Light.icon(), ThemeIcon::Sun);
        assert_eq!(ThemeIcon::Moon.alt_text(), "moon icon");
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("Light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert!("sepia".parse::<ColorScheme>().is_err());

        let json = serde_json::to_string(&ColorScheme::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }
}
