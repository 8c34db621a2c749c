//! HTTP server for the recommendation API

use super::handler::{
    activity_handler, analytics_handler, content_handler, groups_handler, influencers_handler,
    reload_handler, similar_users_handler, status_handler, AppState,
};
use crate::config::ServerConfig;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/users/:id/similar", get(similar_users_handler))
        .route("/api/users/:id/content", get(content_handler))
        .route("/api/users/:id/groups", get(groups_handler))
        .route("/api/users/:id/analytics", get(analytics_handler))
        .route("/api/users/:id/activity", post(activity_handler))
        .route("/api/graph/influencers", get(influencers_handler))
        .route("/api/graph/reload", post(reload_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server exposing the social graph
pub struct HttpServer {
    state: AppState,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// Bind and serve until the process stops
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone());

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Recommendation API listening on http://{}", addr);

        axum::serve(listener, app).await
    }
}
