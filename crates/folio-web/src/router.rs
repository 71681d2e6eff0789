//! Preview server for the Trunk-built bundle

use axum::{response::Html, routing::get, Json, Router};
use folio_types::NAV_LINKS;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Create the preview router serving `dist_dir`
pub fn create_router(dist_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = dist_dir.join("index.html");
    let frontend_built = index.is_file();

    let router = Router::new().route(
        "/api/health",
        get(move || async move {
            Json(serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "frontend_built": frontend_built,
                "nav_links": NAV_LINKS.len(),
            }))
        }),
    );

    let router = if frontend_built {
        tracing::info!(dist = %dist_dir.display(), "Serving built frontend");
        router.fallback_service(ServeDir::new(&dist_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!(dist = %dist_dir.display(), "No index.html in dist directory, serving build instructions");
        router.fallback(placeholder_handler)
    };

    router.layer(cors)
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>folio - Build required</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 4rem auto; line-height: 1.6; }
        code { background: #eee; padding: 0 0.3rem; }
    </style>
</head>
<body>
    <h1>Build required</h1>
    <p>The site header bundle has not been built yet.</p>
    <ol>
        <li><code>cargo install trunk</code></li>
        <li><code>rustup target add wasm32-unknown-unknown</code></li>
        <li><code>cd crates/folio-web && trunk build --release</code></li>
        <li><code>folio serve</code></li>
    </ol>
    <p>Health: <a href="/api/health">/api/health</a></p>
</body>
</html>"#,
    )
}
