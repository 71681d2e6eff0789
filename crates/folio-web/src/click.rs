//! Document click classification for the slide-menu dismiss handler

use folio_types::ClickRegion;
use web_sys::Node;

/// Classify a click target against the hamburger button and the menu panel.
///
/// Either reference may be unattached (`None`); an unattached panel never
/// contains anything, so the click counts as outside.
pub fn classify_click(target: Option<&Node>, panel: Option<&Node>, toggle: Option<&Node>) -> ClickRegion {
    let Some(target) = target else {
        return ClickRegion::Outside;
    };

    if toggle.is_some_and(|t| t.contains(Some(target))) {
        ClickRegion::Toggle
    } else if panel.is_some_and(|p| p.contains(Some(target))) {
        ClickRegion::Panel
    } else {
        ClickRegion::Outside
    }
}
