//! Mobile slide-menu state machine

use serde::{Deserialize, Serialize};

/// Visibility of the mobile slide menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where a document click landed, relative to the header's interactive parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    /// Inside the slide-menu panel
    Panel,
    /// On the hamburger button that opens the menu
    Toggle,
    /// Anywhere else (including the dimming overlay)
    Outside,
}

/// Which click region dismisses an open menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissPolicy {
    /// Clicks inside the panel close it, clicks elsewhere are ignored
    InsidePanel,
    /// Clicks outside the panel close it
    #[default]
    OutsidePanel,
}

impl DismissPolicy {
    pub fn dismisses(self, region: ClickRegion) -> bool {
        match (self, region) {
            (_, ClickRegion::Toggle) => false,
            (DismissPolicy::InsidePanel, ClickRegion::Panel) => true,
            (DismissPolicy::InsidePanel, ClickRegion::Outside) => false,
            (DismissPolicy::OutsidePanel, ClickRegion::Panel) => false,
            (DismissPolicy::OutsidePanel, ClickRegion::Outside) => true,
        }
    }
}

/// Input to the menu state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    HamburgerPressed,
    DocumentClick(ClickRegion),
    LinkActivated,
    /// Viewport crossed into the desktop presentation
    ViewportWidened,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Overlay is rendered only while the menu is open
    pub fn overlay_visible(self) -> bool {
        self.is_open()
    }

    pub fn transition(self, event: MenuEvent, policy: DismissPolicy) -> MenuState {
        match event {
            MenuEvent::HamburgerPressed => MenuState::Open,
            MenuEvent::LinkActivated | MenuEvent::ViewportWidened => MenuState::Closed,
            MenuEvent::DocumentClick(region) => {
                if self.is_open() && policy.dismisses(region) {
                    MenuState::Closed
                } else {
                    self
                }
            }
        }
    }
}
