//! Content recommendations
//!
//! Two score sources, summed per node:
//! 1. collaborative: for each of the top similar users, every content or
//!    activity node they touch gains `similarity * edgeWeight * 0.8`
//! 2. content-based: every content or activity node whose `category` is
//!    one of the user's interests gains a flat 0.5
//!
//! Scores are not capped before ranking; only confidence is.

use super::users::rank_similar_users;
use super::{plural, Recommendation, RecommendationKind};
use crate::graph::{keys, GraphStore, Node, NodeId, NodeType};
use indexmap::IndexMap;
use wellgraph_algorithms::{rank_top_k, Ranked};

/// How many similar users seed the collaborative stage
pub const SIMILAR_USER_FANOUT: usize = 5;

pub const COLLABORATIVE_FACTOR: f64 = 0.8;

pub const CATEGORY_BOOST: f64 = 0.5;

fn is_recommendable(node: &Node) -> bool {
    matches!(node.node_type, NodeType::Content | NodeType::Activity)
}

#[derive(Debug)]
struct ContentScore {
    id: NodeId,
    collaborative: f64,
    category_match: Option<String>,
    endorsers: Vec<NodeId>,
    total: f64,
}

impl Ranked for ContentScore {
    type Key = NodeId;

    fn score(&self) -> f64 {
        self.total
    }

    fn key(&self) -> &NodeId {
        &self.id
    }
}

impl ContentScore {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            collaborative: 0.0,
            category_match: None,
            endorsers: Vec::new(),
            total: 0.0,
        }
    }

    fn reasoning(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.endorsers.is_empty() {
            reasons.push(format!(
                "Popular with {} similar to you",
                plural(self.endorsers.len(), "user", "users")
            ));
        }
        if let Some(category) = &self.category_match {
            reasons.push(format!("Matches your interest in {}", category));
        }
        reasons
    }

    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            kind: RecommendationKind::Content,
            reasoning: self.reasoning(),
            confidence: self.total.min(1.0),
            score: self.total,
            target_id: self.id,
        }
    }
}

/// Content and activity recommendations for `user_id`, best first
pub fn find_recommended_content(store: &GraphStore, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
    let Ok(user) = store.get_typed_node(user_id, NodeType::User) else {
        return Vec::new();
    };

    let mut scores: IndexMap<NodeId, ContentScore> = IndexMap::new();

    for similar in rank_similar_users(store, user_id, SIMILAR_USER_FANOUT) {
        for edge in store.get_node_connections(&similar.user_id) {
            let Some(node) = edge
                .other_end(&similar.user_id)
                .and_then(|other| store.get_node(other))
            else {
                continue;
            };
            if !is_recommendable(node) {
                continue;
            }

            let entry = scores.entry(node.id.clone()).or_insert_with(|| ContentScore::new(node.id.clone()));
            entry.collaborative += similar.score * edge.weight * COLLABORATIVE_FACTOR;
            if !entry.endorsers.contains(&similar.user_id) {
                entry.endorsers.push(similar.user_id.clone());
            }
        }
    }

    let interests = user.string_set(keys::INTERESTS);
    let categorized = store
        .nodes_of_type(NodeType::Content)
        .into_iter()
        .chain(store.nodes_of_type(NodeType::Activity));
    for node in categorized {
        let Some(category) = node.string(keys::CATEGORY) else {
            continue;
        };
        if interests.contains(category) {
            let entry = scores.entry(node.id.clone()).or_insert_with(|| ContentScore::new(node.id.clone()));
            entry.category_match = Some(category.to_string());
        }
    }

    let candidates: Vec<ContentScore> = scores
        .into_values()
        .map(|mut score| {
            score.total = score.collaborative
                + if score.category_match.is_some() { CATEGORY_BOOST } else { 0.0 };
            score
        })
        .filter(|score| score.total > 0.0)
        .collect();

    rank_top_k(candidates, limit)
        .into_iter()
        .map(ContentScore::into_recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeType};

    fn user(id: &str, interests: Vec<&str>, level: i64) -> Node {
        Node::new(id, NodeType::User)
            .with_property(keys::INTERESTS, interests)
            .with_property(keys::LEVEL, level)
    }

    fn content(id: &str, category: &str) -> Node {
        Node::new(id, NodeType::Content).with_property(keys::CATEGORY, category)
    }

    fn sample_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_node(user("me", vec!["fitness", "nutrition"], 5));
        store.add_node(user("peer", vec!["fitness", "sports"], 3));
        store.add_node(content("c1", "sports"));
        store.add_node(content("c2", "nutrition"));
        store.add_node(content("c3", "sleep"));
        store.add_node(Node::new("a1", NodeType::Activity).with_property(keys::CATEGORY, "fitness"));
        store.add_edge(Edge::new("peer", "c1", EdgeType::Likes, 0.5)).unwrap();
        store.add_edge(Edge::new("peer", "c2", EdgeType::Shares, 1.0)).unwrap();
        store
    }

    #[test]
    fn test_both_score_sources_merge() {
        let store = sample_store();
        let recs = find_recommended_content(&store, &"me".into(), 10);
        let peer_score = 0.6 / 3.0 + 0.3 * 0.8;

        let by_id = |id: &str| recs.iter().find(|r| r.target_id.as_str() == id).unwrap();

        // c2: collaborative (weight 1.0) plus category boost
        let c2 = by_id("c2");
        assert!((c2.score - (peer_score * 1.0 * 0.8 + 0.5)).abs() < 1e-9);
        assert_eq!(c2.reasoning.len(), 2);

        // c1: collaborative only
        let c1 = by_id("c1");
        assert!((c1.score - peer_score * 0.5 * 0.8).abs() < 1e-9);
        assert_eq!(c1.reasoning, vec!["Popular with 1 user similar to you".to_string()]);

        // a1: category only, activity nodes count as content
        assert_eq!(by_id("a1").score, 0.5);

        // c3 matches nothing
        assert!(recs.iter().all(|r| r.target_id.as_str() != "c3"));
        assert_eq!(recs[0].target_id.as_str(), "c2");
        assert!(recs.iter().all(|r| r.kind == RecommendationKind::Content));
    }

    #[test]
    fn test_sorted_and_truncated() {
        let store = sample_store();
        let recs = find_recommended_content(&store, &"me".into(), 2);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].score >= recs[1].score);
    }

    #[test]
    fn test_confidence_capped() {
        let mut store = sample_store();
        store.add_node(user("twin", vec!["fitness", "nutrition"], 5));
        store.add_edge(Edge::new("twin", "c2", EdgeType::Likes, 1.0)).unwrap();

        let recs = find_recommended_content(&store, &"me".into(), 1);
        assert!(recs[0].score > 1.0);
        assert_eq!(recs[0].confidence, 1.0);
    }

    #[test]
    fn test_non_user_is_empty() {
        let store = sample_store();
        assert!(find_recommended_content(&store, &"c1".into(), 10).is_empty());
        assert!(find_recommended_content(&store, &"nobody".into(), 10).is_empty());
    }
}
