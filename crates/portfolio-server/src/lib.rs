//! # Portfolio Site Server
//!
//! HTTP service for the portfolio projects page.
//!
//! ## Routes
//!
//! - `GET /projects`: the server-rendered page
//! - `GET /api/projects`: the catalogue as JSON
//! - `GET /images/*`: logo assets from `<ASSETS_DIR>/images`
//! - `GET /health`: liveness probe
//! - `GET /`: redirects to `/projects`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Axum HTTP Server                         │
//! │              (CORS, request tracing, ServeDir)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  portfolio-frontend                         │
//! │            (Leptos components, rendered to HTML)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   portfolio-domain                          │
//! │                 (static project catalogue)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod export;

use std::path::Path;

use axum::{
    Json, Router,
    http::{HeaderValue, Method, Uri},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_domain::{CATALOGUE, LOGO_DIR, Logo, ProjectEntry};
use portfolio_frontend::render_projects_page;

pub use config::{Config, ConfigError, LogFormat};
pub use error::{SiteError, SiteResult};
pub use export::{ExportSummary, export_site};

/// Rendered projects page
pub async fn projects_page() -> Html<String> {
    Html(render_projects_page())
}

/// Catalogue as JSON, in display order
pub async fn projects_json() -> Json<&'static [ProjectEntry]> {
    Json(CATALOGUE)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "OK"
}

async fn not_found(uri: Uri) -> SiteError {
    SiteError::NotFound {
        path: uri.path().to_string(),
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Build the Axum router
pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/projects") }))
        .route("/projects", get(projects_page))
        .route("/api/projects", get(projects_json))
        .route("/health", get(health_check))
        .nest_service("/images", ServeDir::new(config.images_dir()))
        .fallback(not_found)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Logos with no file under `<assets_dir>/images/logos`.
#[must_use]
pub fn missing_logos(assets_dir: &Path) -> Vec<Logo> {
    let dir = assets_dir.join(LOGO_DIR);
    Logo::ALL
        .into_iter()
        .filter(|logo| !dir.join(logo.file_name()).is_file())
        .collect()
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
