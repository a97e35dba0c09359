// HTTP server assembly

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use fetcharr_core::{Config, DispatchService, SearchService};
use fetcharr_providers::JellyfinClient;

use crate::http;

/// Shared handler state: the two broker services plus the identity
/// client, built once at startup.
pub struct AppState {
    pub search: SearchService,
    pub dispatch: DispatchService,
    pub jellyfin: JellyfinClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            search: SearchService::new(config),
            dispatch: DispatchService::new(config),
            jellyfin: JellyfinClient::new(config.jellyfin.url.clone().unwrap_or_default()),
        }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/login", post(http::auth::login))
        .route("/api/search", get(http::search::search))
        .route("/api/request", post(http::request::submit))
        .route("/health", get(http::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.http_address();
    let state = Arc::new(AppState::new(&config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("HTTP server listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
