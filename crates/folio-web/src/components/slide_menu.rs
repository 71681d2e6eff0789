//! Off-canvas mobile menu and its dimming overlay

use crate::components::{NavList, ThemeSwitch};
use crate::dark_mode::use_dark_mode;
use folio_core::Surface;
use folio_types::{MenuState, NavLink};
use leptos::html;
use leptos::prelude::*;

/// Panel sliding in from the right; hidden by CSS at the desktop breakpoint
#[component]
pub fn SlideMenu(
    menu: Signal<MenuState>,
    panel_ref: NodeRef<html::Aside>,
    on_navigate: Callback<(Surface, NavLink)>,
    on_toggle_theme: Callback<Surface>,
) -> impl IntoView {
    let dark_mode = use_dark_mode();

    view! {
        <div class="slide-menu" class:is-dark=move || dark_mode.is_dark()>
            <aside
                node_ref=panel_ref
                class:open=move || menu.get().is_open()
                aria-hidden=move || (!menu.get().is_open()).to_string()
            >
                <div>
                    <NavList surface=Surface::Mobile on_navigate />
                    <div class="switch-wrapper">
                        <ThemeSwitch surface=Surface::Mobile on_toggle=on_toggle_theme />
                    </div>
                </div>
            </aside>
        </div>
    }
}

/// Full-screen dimming layer behind the open panel
#[component]
pub fn Overlay() -> impl IntoView {
    view! { <div class="overlay" aria-hidden="true"></div> }
}
