//! Release Site Server
//!
//! Serves the download buttons and release notes of the desktop app.
//! The release list is fetched once from the hosting API and shared by every page.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::GithubReleaseClient;
use app::ReleaseFeed;
use config::Config;
use domain::ports::ReleaseSource;

/// Application state shared across all handlers
pub struct AppState<RS>
where
    RS: ReleaseSource + 'static,
{
    pub release_feed: Arc<ReleaseFeed<RS>>,
    /// Language tag used when a request carries none
    pub default_lang: String,
}

impl<RS> Clone for AppState<RS>
where
    RS: ReleaseSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            release_feed: Arc::clone(&self.release_feed),
            default_lang: self.default_lang.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    releases_requested: bool,
}

async fn health<RS>(State(state): State<AppState<RS>>) -> Json<HealthResponse>
where
    RS: ReleaseSource + 'static,
{
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        releases_requested: state.release_feed.is_started(),
    })
}

/// Build the router over any release source
pub fn router<RS>(state: AppState<RS>) -> Router
where
    RS: ReleaseSource + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health::<RS>))
        // Host page
        .route("/", get(handlers::get_page::<RS>))
        // Fragments (HTML or JSON)
        .route("/releases", get(handlers::get_releases::<RS>))
        .route("/downloads", get(handlers::get_downloads::<RS>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,release_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting release site...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        repo = %format!("{}/{}", config.repo_owner, config.repo_name),
        "Serving releases"
    );

    // Create adapters
    let github = Arc::new(
        GithubReleaseClient::new(&config).context("Failed to build releases API client")?,
    );

    // Create application services
    let release_feed = Arc::new(ReleaseFeed::new(github));

    // Create app state
    let state = AppState {
        release_feed,
        default_lang: config.default_lang.clone(),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
