//! folio-core - Core library for the folio site header
//!
//! Provides the headless header model, the shared dark-mode service with its
//! preference stores, scoped click listeners, smooth-scroll easing and config
//! loading. Browser bindings live in `folio-web`.

pub mod config;
pub mod dark_mode;
pub mod error;
pub mod header;
pub mod listeners;
pub mod preferences;
pub mod scroll;

pub use config::HeaderConfig;
pub use dark_mode::DarkMode;
pub use error::{CoreError, Result};
pub use header::{HeaderModel, HeaderView, Navigator, Surface, SwitchView};
pub use listeners::{ClickListeners, ListenerHandle};
pub use preferences::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use scroll::{ease_in_out_quart, landing_position, ScrollAnimation, ScrollGeneration};
