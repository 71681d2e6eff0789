//! Headless site header
//!
//! `HeaderModel` carries the behaviour of the rendered header without a DOM:
//! menu state, the document click listener bound to the mount lifetime, theme
//! switching and scroll requests. The Leptos `SiteHeader` in `folio-web` owns
//! one and forwards browser events to it; menu changes flow back through
//! `on_menu_change`.

use crate::config::HeaderConfig;
use crate::dark_mode::DarkMode;
use crate::listeners::{ClickListeners, ListenerHandle};
use folio_types::{
    ClickRegion, ColorScheme, DismissPolicy, MenuEvent, MenuState, NavLink, Presentation,
    ScrollRequest, ThemeIcon, HOME_LINK, NAV_LINKS,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Smooth-scroll collaborator
pub trait Navigator: Send + Sync {
    fn scroll_to(&self, request: ScrollRequest);
}

/// Where a control was activated; the nav list and theme switch exist twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Desktop,
    Mobile,
}

/// Rendered state of one theme switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchView {
    pub checked: bool,
    pub icon: ThemeIcon,
}

impl From<ColorScheme> for SwitchView {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            checked: scheme.is_dark(),
            icon: scheme.icon(),
        }
    }
}

/// Snapshot of everything the header renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub logo_text: String,
    pub menu: MenuState,
    pub overlay_visible: bool,
    pub desktop_links: Vec<NavLink>,
    pub mobile_links: Vec<NavLink>,
    pub desktop_switch: SwitchView,
    pub mobile_switch: SwitchView,
}

type MenuObserver = Arc<dyn Fn(MenuState) + Send + Sync>;

#[derive(Default)]
struct MenuCell {
    state: Mutex<MenuState>,
    observers: Mutex<Vec<MenuObserver>>,
}

impl MenuCell {
    fn get(&self) -> MenuState {
        *self.state.lock()
    }

    /// Apply `event`, notifying observers when the state actually changes
    fn apply(&self, event: MenuEvent, policy: DismissPolicy) -> MenuState {
        let (prev, next) = {
            let mut state = self.state.lock();
            let prev = *state;
            *state = prev.transition(event, policy);
            (prev, *state)
        };

        if next != prev {
            tracing::debug!(?event, ?next, "Menu state changed");
            let observers: Vec<MenuObserver> = self.observers.lock().clone();
            for observer in observers {
                observer(next);
            }
        }
        next
    }
}

/// A mounted header instance
pub struct HeaderModel {
    menu: Arc<MenuCell>,
    dark_mode: DarkMode,
    navigator: Arc<dyn Navigator>,
    config: HeaderConfig,
    _listener: ListenerHandle,
}

impl HeaderModel {
    /// Mount: menu starts closed and one click listener is attached to `document`
    pub fn mount(
        document: &ClickListeners,
        dark_mode: DarkMode,
        navigator: Arc<dyn Navigator>,
        config: HeaderConfig,
    ) -> Self {
        let menu = Arc::new(MenuCell::default());
        let policy = config.dismiss_policy;

        let listener = {
            let menu = Arc::clone(&menu);
            document.add(move |region: ClickRegion| {
                menu.apply(MenuEvent::DocumentClick(region), policy);
            })
        };

        Self {
            menu,
            dark_mode,
            navigator,
            config,
            _listener: listener,
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.get()
    }

    /// Register a callback fired whenever the menu opens or closes
    pub fn on_menu_change(&self, observer: impl Fn(MenuState) + Send + Sync + 'static) {
        self.menu.observers.lock().push(Arc::new(observer));
    }

    pub fn overlay_visible(&self) -> bool {
        self.menu_state().overlay_visible()
    }

    pub fn press_hamburger(&self) {
        self.apply(MenuEvent::HamburgerPressed);
    }

    /// Viewport width changed; the menu resets when the desktop layout takes over
    pub fn viewport_resized(&self, width_px: f64) {
        if self.config.breakpoint().presentation_for(width_px) == Presentation::Desktop {
            self.apply(MenuEvent::ViewportWidened);
        }
    }

    /// Activate a navigation trigger (or the logo via `HOME_LINK`)
    pub fn activate_link(&self, surface: Surface, link: &NavLink) -> ScrollRequest {
        let request = self.config.scroll_request(link.scroll_request());
        if surface == Surface::Mobile {
            self.apply(MenuEvent::LinkActivated);
        }
        self.navigator.scroll_to(request);
        request
    }

    pub fn activate_logo(&self) -> ScrollRequest {
        self.activate_link(Surface::Desktop, &HOME_LINK)
    }

    /// Flip the shared preference from either switch
    pub fn toggle_theme(&self, surface: Surface) -> ColorScheme {
        let scheme = self.dark_mode.toggle();
        tracing::debug!(?surface, %scheme, "Theme switch toggled");
        scheme
    }

    pub fn view(&self) -> HeaderView {
        let menu = self.menu_state();
        let switch = SwitchView::from(self.dark_mode.scheme());

        HeaderView {
            logo_text: self.config.logo_text.clone(),
            menu,
            overlay_visible: menu.overlay_visible(),
            desktop_links: NAV_LINKS.to_vec(),
            mobile_links: NAV_LINKS.to_vec(),
            desktop_switch: switch,
            mobile_switch: switch,
        }
    }

    /// Unmount, detaching the document listener
    pub fn unmount(self) {}

    fn apply(&self, event: MenuEvent) {
        self.menu.apply(event, self.config.dismiss_policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferenceStore;
    use folio_types::Anchor;

    #[derive(Default)]
    struct RecordingNavigator {
        requests: Mutex<Vec<ScrollRequest>>,
    }

    impl Navigator for RecordingNavigator {
        fn scroll_to(&self, request: ScrollRequest) {
            self.requests.lock().push(request);
        }
    }

    struct Fixture {
        document: ClickListeners,
        dark_mode: DarkMode,
        navigator: Arc<RecordingNavigator>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                document: ClickListeners::new(),
                dark_mode: DarkMode::new(MemoryPreferenceStore::new(), ColorScheme::Dark),
                navigator: Arc::new(RecordingNavigator::default()),
            }
        }

        fn mount(&self, policy: DismissPolicy) -> HeaderModel {
            let config = HeaderConfig {
                dismiss_policy: policy,
                ..HeaderConfig::default()
            };
            HeaderModel::mount(
                &self.document,
                self.dark_mode.clone(),
                self.navigator.clone(),
                config,
            )
        }
    }

    #[test]
    fn test_mount_starts_closed() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());

        assert_eq!(header.menu_state(), MenuState::Closed);
        assert!(!header.overlay_visible());
        assert_eq!(fx.document.len(), 1);
    }

    #[test]
    fn test_hamburger_opens_with_overlay() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());

        header.press_hamburger();
        assert_eq!(header.menu_state(), MenuState::Open);
        assert!(header.view().overlay_visible);
    }

    #[test]
    fn test_hamburger_click_bubbling_keeps_menu_open() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::OutsidePanel);

        header.press_hamburger();
        fx.document.dispatch(ClickRegion::Toggle);
        assert!(header.menu_state().is_open());
    }

    #[test]
    fn test_outside_click_closes_by_default() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());
        header.press_hamburger();

        fx.document.dispatch(ClickRegion::Panel);
        assert_eq!(header.menu_state(), MenuState::Open);

        fx.document.dispatch(ClickRegion::Outside);
        assert_eq!(header.menu_state(), MenuState::Closed);
        assert!(!header.overlay_visible());
    }

    #[test]
    fn test_inside_panel_policy_scenario() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::InsidePanel);
        assert_eq!(header.menu_state(), MenuState::Closed);

        header.press_hamburger();
        assert!(header.overlay_visible());

        fx.document.dispatch(ClickRegion::Outside);
        assert_eq!(header.menu_state(), MenuState::Open);

        fx.document.dispatch(ClickRegion::Panel);
        assert_eq!(header.menu_state(), MenuState::Closed);
        assert!(!header.overlay_visible());
    }

    #[test]
    fn test_theme_toggle_shared_by_both_switches() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());
        assert!(header.view().desktop_switch.checked);

        header.toggle_theme(Surface::Mobile);
        let view = header.view();
        assert!(!fx.dark_mode.value());
        assert_eq!(view.desktop_switch, view.mobile_switch);
        assert_eq!(view.desktop_switch.icon, ThemeIcon::Sun);

        header.toggle_theme(Surface::Desktop);
        let view = header.view();
        assert!(fx.dark_mode.value());
        assert_eq!(view.mobile_switch.icon, ThemeIcon::Moon);
    }

    #[test]
    fn test_theme_shared_across_instances() {
        let fx = Fixture::new();
        let first = fx.mount(DismissPolicy::default());
        let second = fx.mount(DismissPolicy::default());

        first.toggle_theme(Surface::Desktop);
        assert!(!second.view().mobile_switch.checked);
    }

    #[test]
    fn test_links_request_documented_scrolls() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());

        header.activate_logo();
        for link in NAV_LINKS.iter() {
            header.activate_link(Surface::Desktop, link);
        }

        let requests = fx.navigator.requests.lock().clone();
        let summary: Vec<(Anchor, i32, u32)> = requests
            .iter()
            .map(|r| (r.target, r.offset_px, r.duration_ms))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Anchor::Home, 0, 500),
                (Anchor::Project, -80, 500),
                (Anchor::Skill, -80, 500),
                (Anchor::Work, -80, 500),
                (Anchor::About, -80, 500),
                (Anchor::Contact, 50, 500),
            ]
        );
    }

    #[test]
    fn test_desktop_and_mobile_lists_identical() {
        let fx = Fixture::new();
        let view = fx.mount(DismissPolicy::default()).view();
        assert_eq!(view.desktop_links, view.mobile_links);
        assert_eq!(view.logo_text, "j.russ");
    }

    #[test]
    fn test_mobile_link_closes_menu() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());
        header.press_hamburger();

        let request = header.activate_link(Surface::Mobile, &NAV_LINKS[4]);
        assert_eq!(request.target, Anchor::Contact);
        assert_eq!(header.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_widening_viewport_resets_menu() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());
        header.press_hamburger();

        header.viewport_resized(500.0);
        assert!(header.menu_state().is_open());

        header.viewport_resized(1024.0);
        assert_eq!(header.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_unmount_detaches_listener() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::OutsidePanel);
        let menu = Arc::clone(&header.menu);
        header.press_hamburger();

        header.unmount();
        assert!(fx.document.is_empty());

        fx.document.dispatch(ClickRegion::Outside);
        assert_eq!(menu.get(), MenuState::Open);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak_listeners() {
        let fx = Fixture::new();
        for _ in 0..10 {
            let header = fx.mount(DismissPolicy::default());
            assert_eq!(fx.document.len(), 1);
            drop(header);
        }
        assert!(fx.document.is_empty());
    }

    #[test]
    fn test_menu_observers_see_changes_only() {
        let fx = Fixture::new();
        let header = fx.mount(DismissPolicy::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        header.on_menu_change(move |state| log.lock().push(state));

        header.press_hamburger();
        header.press_hamburger();
        fx.document.dispatch(ClickRegion::Toggle);
        fx.document.dispatch(ClickRegion::Outside);
        header.viewport_resized(1024.0);

        assert_eq!(*seen.lock(), vec![MenuState::Open, MenuState::Closed]);
    }
}
