pub mod config;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use config::ServerConfig;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

async fn health_check() -> &'static str {
    "OK"
}

/// Router that serves the compiled site bundle.
///
/// Paths that don't match a file get `index.html`, so any URL opens the site on its home
/// page.
pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));
    Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
