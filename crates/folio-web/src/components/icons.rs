//! Inline SVG icons

use folio_types::ThemeIcon;
use leptos::prelude::*;

/// Three-bar menu glyph
#[component]
pub fn HamburgerIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true">
            <rect x="2" y="5" width="20" height="2" rx="1" />
            <rect x="2" y="11" width="20" height="2" rx="1" />
            <rect x="8" y="17" width="14" height="2" rx="1" />
        </svg>
    }
}

/// Sun / moon glyph shown inside the theme switch
#[component]
pub fn ThemeIconView(icon: ThemeIcon) -> impl IntoView {
    let label = icon.alt_text();
    match icon {
        ThemeIcon::Moon => view! {
            <svg class="theme-icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="currentColor" role="img" aria-label=label>
                <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
            </svg>
        }
        .into_any(),
        ThemeIcon::Sun => view! {
            <svg class="theme-icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" role="img" aria-label=label>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" />
            </svg>
        }
        .into_any(),
    }
}
