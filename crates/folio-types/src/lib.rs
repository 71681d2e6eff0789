//! folio-types - Shared data types for the folio site header
//!
//! This crate contains pure data structures without heavy dependencies.
//! No I/O, no browser APIs - just serde-serializable types.
//!
//! Used by:
//! - folio-core (headless header model, preferences, config)
//! - folio-web (Leptos components compiled to WASM)
//! - folio (CLI)

pub mod layout;
pub mod menu;
pub mod nav;
pub mod theme;

pub use layout::{Breakpoint, Presentation};
pub use menu::{ClickRegion, DismissPolicy, MenuEvent, MenuState};
pub use nav::{Anchor, NavLink, ScrollRequest, DEFAULT_SCROLL_DURATION_MS, HOME_LINK, NAV_LINKS};
pub use theme::{ColorScheme, ThemeIcon};
