//! WASM entry point for the Leptos CSR bundle

use folio_web::{load_embedded_config, App};
use leptos::mount::mount_to_body;
use leptos::prelude::*;

/// Header settings baked into the bundle at build time
const CONFIG: &str = include_str!("../folio.toml");

fn main() {
    console_error_panic_hook::set_once();
    let config = load_embedded_config(CONFIG);
    mount_to_body(move || view! { <App config /> });
}
