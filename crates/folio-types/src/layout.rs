//! Responsive breakpoint

use serde::{Deserialize, Serialize};

/// Which header layout is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Hamburger button + slide menu
    Mobile,
    /// Inline desktop nav
    Desktop,
}

/// The "medium" breakpoint switching mobile and desktop presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width_px: u32,
}

impl Breakpoint {
    pub const MEDIUM: Breakpoint = Breakpoint { min_width_px: 768 };

    pub fn new(min_width_px: u32) -> Self {
        Self { min_width_px }
    }

    pub fn media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_width_px)
    }

    pub fn presentation_for(&self, viewport_width_px: f64) -> Presentation {
        if viewport_width_px >= f64::from(self.min_width_px) {
            Presentation::Desktop
        } else {
            Presentation::Mobile
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::MEDIUM
    }
}
