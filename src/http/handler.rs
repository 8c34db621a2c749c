//! HTTP handlers for the recommendation API

use crate::algo::PageRankConfig;
use crate::graph::{EdgeType, GraphError, NodeId};
use crate::loader::DataSource;
use crate::service::{ServiceError, SocialGraph};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_LIMIT: usize = 10;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub graph: SocialGraph,
    /// Source used by `/api/graph/reload`
    pub source: Arc<dyn DataSource>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

impl LimitParams {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Body of an activity update
#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    pub activity_type: EdgeType,
    #[serde(default)]
    pub target_id: Option<String>,
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (status, Json(json!({ "error": message.to_string() }))).into_response()
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.graph.statistics().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "source": state.source.name(),
        "graph": stats,
    }))
}

pub async fn similar_users_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    let recs = state
        .graph
        .find_similar_users(&NodeId::from(user_id), params.limit())
        .await;
    Json(recs)
}

pub async fn content_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    let recs = state
        .graph
        .find_recommended_content(&NodeId::from(user_id), params.limit())
        .await;
    Json(recs)
}

pub async fn groups_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    let recs = state
        .graph
        .find_optimal_groups(&NodeId::from(user_id), params.limit())
        .await;
    Json(recs)
}

pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    match state.graph.network_analytics(&NodeId::from(user_id.as_str())).await {
        Some(analytics) => Json(analytics).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("User {} not found", user_id)),
    }
}

pub async fn activity_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ActivityRequest>,
) -> Response {
    let target = payload.target_id.map(NodeId::from);
    let result = state
        .graph
        .update_user_activity(&NodeId::from(user_id), payload.activity_type, target.as_ref())
        .await;

    match result {
        Ok(outcome) => Json(outcome).into_response(),
        Err(ServiceError::Graph(e @ GraphError::WrongNodeType { .. })) => {
            error_response(StatusCode::CONFLICT, e)
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, e),
    }
}

pub async fn influencers_handler(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    let top = state
        .graph
        .top_influencers(&PageRankConfig::default(), params.limit())
        .await;
    Json(top)
}

/// Rebuild the graph from the configured source
pub async fn reload_handler(State(state): State<AppState>) -> Response {
    info!("Reloading graph from {}", state.source.name());
    match state.graph.initialize(state.source.as_ref()).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            warn!("Graph reload failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, e)
        }
    }
}
