//! Similar-user recommendations
//!
//! `score = 0.6 * interestJaccard + 0.3 * levelSimilarity + 0.1 * mutualConnections`
//!
//! The mutual-connection term is not normalized, so a score can exceed 1;
//! confidence is capped instead.

use super::{plural, Recommendation, RecommendationKind};
use crate::graph::{keys, GraphStore, Node, NodeId, NodeType};
use rayon::prelude::*;
use std::collections::HashSet;
use wellgraph_algorithms::{jaccard, level_similarity, rank_top_k, Ranked};

pub const INTEREST_WEIGHT: f64 = 0.6;
pub const LEVEL_WEIGHT: f64 = 0.3;
pub const MUTUAL_CONNECTION_WEIGHT: f64 = 0.1;

/// Candidates must score strictly above this
pub const MIN_SIMILARITY_SCORE: f64 = 0.1;

/// Multiplier from score to confidence, before capping at 1
pub const CONFIDENCE_BOOST: f64 = 1.2;

/// Similarity of one candidate to the query user, with its components
#[derive(Debug, Clone, PartialEq)]
pub struct UserSimilarity {
    pub user_id: NodeId,
    pub interest_jaccard: f64,
    pub level_similarity: f64,
    pub mutual_connections: usize,
    /// Sorted, for stable reasoning text
    pub shared_interests: Vec<String>,
    pub score: f64,
}

impl Ranked for UserSimilarity {
    type Key = NodeId;

    fn score(&self) -> f64 {
        self.score
    }

    fn key(&self) -> &NodeId {
        &self.user_id
    }
}

impl UserSimilarity {
    fn between(store: &GraphStore, user: &Node, user_interests: &HashSet<&str>, candidate: &Node) -> Self {
        let candidate_interests = candidate.string_set(keys::INTERESTS);
        let interest_jaccard = jaccard(user_interests, &candidate_interests);

        let level = user.number(keys::LEVEL).unwrap_or(0.0);
        let candidate_level = candidate.number(keys::LEVEL).unwrap_or(0.0);
        let level_similarity = level_similarity(level, candidate_level);

        let mutual_connections = store.mutual_connection_count(&user.id, &candidate.id);

        let mut shared_interests: Vec<String> = user_interests
            .intersection(&candidate_interests)
            .map(|s| s.to_string())
            .collect();
        shared_interests.sort();

        let score = INTEREST_WEIGHT * interest_jaccard
            + LEVEL_WEIGHT * level_similarity
            + MUTUAL_CONNECTION_WEIGHT * mutual_connections as f64;

        Self {
            user_id: candidate.id.clone(),
            interest_jaccard,
            level_similarity,
            mutual_connections,
            shared_interests,
            score,
        }
    }

    fn reasoning(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        reasons.push(
            if self.score >= 0.7 {
                "Highly compatible wellness profile"
            } else if self.score >= 0.4 {
                "Compatible interests and level"
            } else {
                "Some common ground"
            }
            .to_string(),
        );

        if !self.shared_interests.is_empty() {
            reasons.push(format!("Shared interests: {}", self.shared_interests.join(", ")));
        }
        if self.level_similarity >= 0.8 {
            reasons.push("Similar wellness level".to_string());
        }
        if self.mutual_connections > 0 {
            reasons.push(plural(self.mutual_connections, "mutual connection", "mutual connections"));
        }

        reasons
    }

    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            kind: RecommendationKind::User,
            target_id: self.user_id.clone(),
            score: self.score,
            reasoning: self.reasoning(),
            confidence: (self.score * CONFIDENCE_BOOST).min(1.0),
        }
    }
}

/// Users similar to `user_id`, best first, at most `limit`.
///
/// Ties are broken by user id ascending. Empty when `user_id` is not a user.
pub fn rank_similar_users(store: &GraphStore, user_id: &NodeId, limit: usize) -> Vec<UserSimilarity> {
    let Ok(user) = store.get_typed_node(user_id, NodeType::User) else {
        return Vec::new();
    };
    let user_interests = user.string_set(keys::INTERESTS);

    let candidates: Vec<UserSimilarity> = store
        .nodes_of_type(NodeType::User)
        .par_iter()
        .filter(|candidate| &candidate.id != user_id)
        .map(|candidate| UserSimilarity::between(store, user, &user_interests, candidate))
        .filter(|similarity| similarity.score > MIN_SIMILARITY_SCORE)
        .collect();

    rank_top_k(candidates, limit)
}

/// Similar-user recommendations for `user_id`
pub fn find_similar_users(store: &GraphStore, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
    rank_similar_users(store, user_id, limit)
        .iter()
        .map(UserSimilarity::to_recommendation)
        .collect()
}
