//! Root Leptos component: dark-mode provider, header and the page sections
//! the header navigates between

use crate::components::SiteHeader;
use crate::dark_mode::DarkModeProvider;
use folio_core::HeaderConfig;
use folio_types::{NavLink, HOME_LINK, NAV_LINKS};
use leptos::prelude::*;

/// Parse the embedded `folio.toml`, falling back to defaults on error
pub fn load_embedded_config(content: &str) -> HeaderConfig {
    match HeaderConfig::from_toml_str(content) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("Invalid embedded header config, using defaults: {}", e);
            HeaderConfig::default()
        }
    }
}

/// Main App component
#[component]
pub fn App(config: HeaderConfig) -> impl IntoView {
    let header_config = config.clone();
    let sections: Vec<NavLink> = std::iter::once(HOME_LINK).chain(NAV_LINKS).collect();

    view! {
        <DarkModeProvider config>
            <SiteHeader config=header_config />
            <main class="page">
                {sections
                    .into_iter()
                    .map(|link| {
                        view! {
                            <section id=link.anchor.id() class="page-section">
                                <h2>{link.label}</h2>
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
        </DarkModeProvider>
    }
}
