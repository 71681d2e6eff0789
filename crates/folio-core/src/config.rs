//! Header configuration
//!
//! Loaded from a TOML file (`folio.toml`). Every key is optional; missing
//! keys fall back to the values the portfolio page ships with.

use crate::error::{CoreError, Result};
use folio_types::{Breakpoint, ColorScheme, DismissPolicy, ScrollRequest, DEFAULT_SCROLL_DURATION_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest scroll animation accepted from config
const MAX_SCROLL_DURATION_MS: u32 = 10_000;

/// Site header configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Text of the logo / home link
    pub logo_text: String,
    /// Which click region closes an open slide menu
    pub dismiss_policy: DismissPolicy,
    /// Min viewport width (px) of the desktop presentation
    pub breakpoint_px: u32,
    /// Scheme used when no preference is stored yet
    pub default_scheme: ColorScheme,
    /// Key under which the dark-mode preference is stored
    pub storage_key: String,
    /// Duration of every smooth-scroll trigger
    pub scroll_duration_ms: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_text: "j.russ".to_string(),
            dismiss_policy: DismissPolicy::OutsidePanel,
            breakpoint_px: Breakpoint::MEDIUM.min_width_px,
            default_scheme: ColorScheme::Dark,
            storage_key: "darkMode".to_string(),
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }
}

impl HeaderConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HeaderConfig = toml::from_str(content).map_err(|e| CoreError::TomlParse {
            message: e.message().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded header config");
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.logo_text.trim().is_empty() {
            return Err(CoreError::invalid_config("logo_text", "must not be empty"));
        }
        if self.breakpoint_px == 0 {
            return Err(CoreError::invalid_config(
                "breakpoint_px",
                "must be greater than zero",
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::invalid_config("storage_key", "must not be empty"));
        }
        if self.scroll_duration_ms > MAX_SCROLL_DURATION_MS {
            return Err(CoreError::invalid_config(
                "scroll_duration_ms",
                format!("must be at most {} ms", MAX_SCROLL_DURATION_MS),
            ));
        }
        Ok(())
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }

    /// Apply the configured duration to a trigger's request
    pub fn scroll_request(&self, request: ScrollRequest) -> ScrollRequest {
        request.with_duration(self.scroll_duration_ms)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Serialize {
            what: "header config",
            message: e.to_string(),
        })
    }
}
