//! Fixed site header with desktop nav, hamburger and slide-in mobile menu

use crate::click::classify_click;
use crate::components::{HamburgerIcon, NavList, Overlay, ScrollLink, SlideMenu, ThemeSwitch};
use crate::dark_mode::use_dark_mode;
use crate::layout::breakpoint_styles;
use crate::scroll::use_navigator;
use folio_core::{ClickListeners, HeaderConfig, HeaderModel, Surface};
use folio_types::{NavLink, HOME_LINK};
use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Site header
///
/// Mounts a `HeaderModel` and forwards browser events to it. A window click
/// listener is attached while the header is mounted and removed on cleanup;
/// it classifies each click against the panel and the hamburger button and
/// hands the region to the model's document listener.
///
/// The click target registry comes from context when one is provided, so a
/// page (or a test) can observe which listeners are attached.
#[component]
pub fn SiteHeader(config: HeaderConfig) -> impl IntoView {
    let dark_mode = use_dark_mode();
    let navigator = use_navigator();
    let document = use_context::<ClickListeners>().unwrap_or_default();
    let styles = breakpoint_styles(config.breakpoint());

    let model = HeaderModel::mount(&document, dark_mode.service(), navigator.0.clone(), config);
    let logo_text = model.view().logo_text;

    let menu = RwSignal::new(model.menu_state());
    model.on_menu_change(move |state| menu.set(state));

    let model = StoredValue::new(Some(model));
    let with_model = move |f: &dyn Fn(&HeaderModel)| {
        model.try_with_value(|model| {
            if let Some(model) = model {
                f(model);
            }
        });
    };

    let panel_ref = NodeRef::<html::Aside>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    let click_handle = window_event_listener(ev::click, move |e| {
        let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let panel = panel_ref.get_untracked();
        let toggle = toggle_ref.get_untracked();

        let region = classify_click(
            target.as_ref(),
            panel.as_ref().map(|el| el.unchecked_ref::<web_sys::Node>()),
            toggle.as_ref().map(|el| el.unchecked_ref::<web_sys::Node>()),
        );
        document.dispatch(region);
    });

    let resize_handle = window_event_listener(ev::resize, move |_| {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        if let Some(width) = width {
            with_model(&|model: &HeaderModel| model.viewport_resized(width));
        }
    });

    on_cleanup(move || {
        click_handle.remove();
        resize_handle.remove();
        if let Some(model) = model.try_update_value(Option::take).flatten() {
            model.unmount();
        }
    });

    let navigate = Callback::new(move |(surface, link): (Surface, NavLink)| {
        with_model(&|model: &HeaderModel| {
            model.activate_link(surface, &link);
        });
    });
    let toggle_theme = Callback::new(move |surface: Surface| {
        with_model(&|model: &HeaderModel| {
            model.toggle_theme(surface);
        });
    });

    view! {
        <header
            class="site-header"
            style:background-color=move || dark_mode.scheme().bar_background()
        >
            <style>{styles}</style>
            <div class="wrapper">
                <div>
                    <ScrollLink
                        link=HOME_LINK
                        class="logo-title"
                        on_activate=Callback::new(move |_: NavLink| {
                            with_model(&|model: &HeaderModel| {
                                model.activate_logo();
                            })
                        })
                    >
                        {logo_text}
                    </ScrollLink>
                </div>
                <div class="spacer"></div>
                <button
                    node_ref=toggle_ref
                    type="button"
                    class="btn-icon mobile-icon-menu"
                    class:fill-white=move || dark_mode.is_dark()
                    aria-label="Open menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| with_model(&|model: &HeaderModel| model.press_hamburger())
                >
                    <HamburgerIcon />
                </button>
                <nav class="desktop-menu" aria-label="Sections">
                    <NavList surface=Surface::Desktop on_navigate=navigate />
                    <div class="switch-wrapper">
                        <ThemeSwitch surface=Surface::Desktop on_toggle=toggle_theme />
                    </div>
                </nav>
            </div>
            <SlideMenu
                menu=menu.into()
                panel_ref
                on_navigate=navigate
                on_toggle_theme=toggle_theme
            />
            <Show when=move || menu.get().overlay_visible()>
                <Overlay />
            </Show>
        </header>
    }
}
