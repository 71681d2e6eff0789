//! folio-web - Leptos site header for the folio portfolio page
//!
//! Client-side rendered (WASM via Trunk). With the `server` feature the crate
//! also exposes an Axum preview server for the built bundle.

#![recursion_limit = "1024"]

pub mod app;
pub mod click;
pub mod components;
pub mod dark_mode;
pub mod layout;
pub mod scroll;

#[cfg(feature = "server")]
pub mod router;

pub use app::{load_embedded_config, App};
pub use components::SiteHeader;
pub use dark_mode::{use_dark_mode, DarkModeContext, DarkModeProvider, LocalStoragePreferenceStore};
pub use scroll::{use_navigator, NavigatorContext, WindowNavigator};

#[cfg(feature = "server")]
pub use router::create_router;

#[cfg(feature = "server")]
/// Run the preview server until Ctrl-C
pub async fn run(dist_dir: std::path::PathBuf, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router(dist_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Preview server listening on http://{}", addr);
    println!("Preview server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down preview server");
        })
        .await?;

    Ok(())
}
