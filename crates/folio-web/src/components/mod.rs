//! Leptos UI components

mod icons;
mod nav_list;
mod site_header;
mod slide_menu;
mod theme_switch;

pub use icons::{HamburgerIcon, ThemeIconView};
pub use nav_list::{NavList, ScrollLink};
pub use site_header::SiteHeader;
pub use slide_menu::{Overlay, SlideMenu};
pub use theme_switch::ThemeSwitch;
