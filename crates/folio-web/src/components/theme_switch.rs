//! Light/dark switch bound to the shared dark-mode context

use crate::components::ThemeIconView;
use crate::dark_mode::use_dark_mode;
use folio_core::Surface;
use leptos::prelude::*;

/// Checked (dark) shows the moon, unchecked (light) the sun
#[component]
pub fn ThemeSwitch(surface: Surface, on_toggle: Callback<Surface>) -> impl IntoView {
    let dark_mode = use_dark_mode();

    view! {
        <button
            type="button"
            role="switch"
            class="theme-switch"
            class:checked=move || dark_mode.is_dark()
            aria-checked=move || dark_mode.is_dark().to_string()
            aria-label="Toggle dark mode"
            on:click=move |_| on_toggle.run(surface)
        >
            <span class="theme-switch-thumb">
                {move || view! { <ThemeIconView icon=dark_mode.scheme().icon() /> }}
            </span>
        </button>
    }
}
