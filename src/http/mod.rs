//! HTTP query interface
//!
//! JSON over axum. Recommendation lists are returned as arrays of
//! `{type, target_id, score, reasoning, confidence}`.

pub mod handler;
pub mod server;

pub use handler::{AppState, DEFAULT_LIMIT};
pub use server::{router, HttpServer};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeType, GraphStore, Node, NodeType};
    use crate::graph::keys;
    use crate::loader::{Dataset, UserRecord};
    use crate::service::SocialGraph;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sample_state() -> AppState {
        let mut store = GraphStore::new();
        for (id, interests, level) in [
            ("a", vec!["fitness", "nutrition"], 5i64),
            ("b", vec!["fitness", "sports"], 3),
            ("c", vec!["chess"], 20),
        ] {
            store.add_node(
                Node::new(id, NodeType::User)
                    .with_property(keys::INTERESTS, interests)
                    .with_property(keys::LEVEL, level),
            );
        }
        store.add_edge(Edge::new("a", "b", EdgeType::Follows, 0.5)).unwrap();

        let source = Dataset {
            users: vec![UserRecord { id: "z".into(), interests: vec![], level: 1.0 }],
            ..Default::default()
        };
        AppState {
            graph: SocialGraph::with_store(store),
            source: Arc::new(source),
        }
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status() {
        let (status, body) = send(sample_state(), get("/api/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["graph"]["node_count"], 3);
    }

    #[tokio::test]
    async fn test_similar_users() {
        let (status, body) = send(sample_state(), get("/api/users/a/similar?limit=5")).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body.as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["type"], "user");
        assert_eq!(recs[0]["target_id"], "b");
    }

    #[tokio::test]
    async fn test_unknown_user_lists_are_empty() {
        for path in ["similar", "content", "groups"] {
            let (status, body) = send(sample_state(), get(&format!("/api/users/nobody/{}", path))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, Value::Array(vec![]));
        }
    }

    #[tokio::test]
    async fn test_analytics() {
        let (status, body) = send(sample_state(), get("/api/users/a/analytics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["directConnections"], 1);

        let (status, body) = send(sample_state(), get("/api/users/nonexistent/analytics")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_activity() {
        let state = sample_state();
        let request = post_json(
            "/api/users/a/activity",
            serde_json::json!({ "activity_type": "likes", "target_id": "content5" }),
        );
        let (status, body) = send(state.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["edge"]["weight"], 0.1);
        assert_eq!(body["created_target"], true);

        let node = state.graph.get_node(&"content5".into()).await.unwrap();
        assert_eq!(node.node_type, NodeType::Content);
        assert_eq!(body["edge"]["id"], "a-content5-likes");
    }

    #[tokio::test]
    async fn test_self_follow_is_bad_request() {
        let state = sample_state();
        let request = post_json(
            "/api/users/a/activity",
            serde_json::json!({ "activity_type": "follows", "target_id": "a" }),
        );
        let (status, body) = send(state.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("itself"));
        assert_eq!(state.graph.statistics().await.edge_count, 1);
    }

    #[tokio::test]
    async fn test_reload() {
        let state = sample_state();
        let (status, body) = send(state.clone(), post_json("/api/graph/reload", Value::Null)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["node_count"], 1);
        assert!(state.graph.get_node(&"a".into()).await.is_none());
    }
}
