//! Navigation list rendered by both the desktop nav and the slide menu

use folio_core::Surface;
use folio_types::{NavLink, NAV_LINKS};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Anchor that smooth-scrolls when scripting is available and falls back to a
/// plain `#anchor` jump otherwise
#[component]
pub fn ScrollLink(
    link: NavLink,
    #[prop(into)] on_activate: Callback<NavLink>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=link.href()
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_activate.run(link);
            }
        >
            {children()}
        </a>
    }
}

/// The five section links, in display order
#[component]
pub fn NavList(surface: Surface, on_navigate: Callback<(Surface, NavLink)>) -> impl IntoView {
    view! {
        <ul class="menu-items">
            {NAV_LINKS
                .iter()
                .copied()
                .map(|link| {
                    view! {
                        <li class="menu-list">
                            <ScrollLink
                                link=link
                                on_activate=Callback::new(move |link: NavLink| {
                                    on_navigate.run((surface, link))
                                })
                            >
                                {link.label}
                            </ScrollLink>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
