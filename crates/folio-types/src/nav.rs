//! Navigation targets and smooth-scroll requests
//!
//! The link table is defined once here and rendered by both the desktop nav
//! and the mobile slide menu, so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// Scroll duration used by every header trigger
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 500;

/// Named page section that a trigger scrolls to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    Project,
    Skill,
    Work,
    About,
    Contact,
}

impl Anchor {
    /// Element id on the page
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Project => "project",
            Anchor::Skill => "skill",
            Anchor::Work => "work",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    /// Fallback hyperlink used when scripting is unavailable
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Vertical landing offset compensating for the fixed header
    pub fn offset_px(self) -> i32 {
        match self {
            Anchor::Home => 0,
            Anchor::Contact => 50,
            Anchor::Project | Anchor::Skill | Anchor::Work | Anchor::About => -80,
        }
    }
}

/// Request handed to the smooth-scroll driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub target: Anchor,
    pub offset_px: i32,
    pub duration_ms: u32,
}

impl ScrollRequest {
    pub fn to(target: Anchor) -> Self {
        Self {
            target,
            offset_px: target.offset_px(),
            duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// A labelled navigation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

impl NavLink {
    pub const fn new(label: &'static str, anchor: Anchor) -> Self {
        Self { label, anchor }
    }

    pub fn href(&self) -> String {
        self.anchor.href()
    }

    pub fn scroll_request(&self) -> ScrollRequest {
        ScrollRequest::to(self.anchor)
    }
}

/// Logo trigger back to the top of the page
pub const HOME_LINK: NavLink = NavLink::new("Home", Anchor::Home);

/// Entries of the navigation list, in display order
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink::new("Projects", Anchor::Project),
    NavLink::new("Skills", Anchor::Skill),
    NavLink::new("Work", Anchor::Work),
    NavLink::new("About", Anchor::About),
    NavLink::new("Contact", Anchor::Contact),
];
