//! Dark-mode preference persistence
//!
//! The stored value is a JSON boolean (`true` = dark) under a single key, the
//! same shape the browser build writes to `localStorage`. The native
//! file-backed store keeps it in `<config_dir>/folio/<key>.json`.

use crate::error::{CoreError, Result};
use folio_types::ColorScheme;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Backend holding the persisted color scheme
pub trait PreferenceStore: Send + Sync {
    /// Stored scheme, `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<ColorScheme>>;

    fn save(&self, scheme: ColorScheme) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<ColorScheme>> {
        (**self).load()
    }

    fn save(&self, scheme: ColorScheme) -> Result<()> {
        (**self).save(scheme)
    }
}

/// Encode a scheme the way it is persisted
pub fn encode_scheme(scheme: ColorScheme) -> String {
    serde_json::Value::Bool(scheme.is_dark()).to_string()
}

/// Decode a persisted value, `None` if it is not a JSON boolean
pub fn decode_scheme(raw: &str) -> Option<ColorScheme> {
    serde_json::from_str::<bool>(raw.trim())
        .ok()
        .map(ColorScheme::from_dark)
}

/// In-memory store (tests, and pages without persistent storage)
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<ColorScheme>>,
    saves: Mutex<usize>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(scheme: ColorScheme) -> Self {
        Self {
            value: Mutex::new(Some(scheme)),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<ColorScheme>> {
        Ok(*self.value.lock())
    }

    fn save(&self, scheme: ColorScheme) -> Result<()> {
        *self.value.lock() = Some(scheme);
        *self.saves.lock() += 1;
        Ok(())
    }
}

/// File-backed store used by the CLI
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
        }
    }

    /// Store under the platform config directory (`~/.config/folio` on Linux)
    pub fn in_config_dir(key: &str) -> Result<Self> {
        let dir = dirs::config_dir().ok_or(CoreError::NoConfigDir)?;
        Ok(Self::new(&dir.join("folio"), key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load(&self) -> Result<Option<ColorScheme>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CoreError::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str::<bool>(content.trim())
            .map(|dark| Some(ColorScheme::from_dark(dark)))
            .map_err(|source| CoreError::JsonParse {
                path: self.path.clone(),
                message: "expected a boolean".to_string(),
                source,
            })
    }

    fn save(&self, scheme: ColorScheme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, encode_scheme(scheme)).map_err(|source| CoreError::FileWrite {
            path: self.path.clone(),
            source,
        })
    }
}
