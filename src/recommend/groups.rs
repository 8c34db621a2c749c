//! Group recommendations
//!
//! `score = 0.4 * interestOverlap + 0.3 * levelCompatibility
//!        + 0.2 * groupActivity + 0.1 * sizeBonus`
//!
//! `interestOverlap` is a raw count of shared interests, not a ratio.

use super::{plural, Recommendation, RecommendationKind};
use crate::graph::{keys, GraphStore, Node, NodeId, NodeType};
use std::collections::HashSet;
use wellgraph_algorithms::{overlap_count, rank_top_k, Ranked};

pub const INTEREST_OVERLAP_WEIGHT: f64 = 0.4;
pub const LEVEL_COMPATIBILITY_WEIGHT: f64 = 0.3;
pub const GROUP_ACTIVITY_WEIGHT: f64 = 0.2;
pub const SIZE_WEIGHT: f64 = 0.1;

/// Level gap that drives compatibility to zero
pub const LEVEL_COMPATIBILITY_SCALE: f64 = 10.0;

/// Bonus for groups in the comfortable size range
pub const SIZE_BONUS: f64 = 0.1;
pub const MIN_GROUP_SIZE: i64 = 5;
pub const MAX_GROUP_SIZE: i64 = 50;

/// Groups must score strictly above this
pub const MIN_GROUP_SCORE: f64 = 0.3;

#[derive(Debug)]
struct GroupFit {
    group_id: NodeId,
    interest_overlap: usize,
    level_compatibility: f64,
    activity_score: f64,
    member_count: i64,
    size_bonus: f64,
    score: f64,
}

impl Ranked for GroupFit {
    type Key = NodeId;

    fn score(&self) -> f64 {
        self.score
    }

    fn key(&self) -> &NodeId {
        &self.group_id
    }
}

impl GroupFit {
    fn evaluate(user_interests: &HashSet<&str>, user_level: f64, group: &Node) -> Self {
        let group_interests = group.string_set(keys::INTERESTS);
        let interest_overlap = overlap_count(group_interests.iter(), user_interests);

        let group_level = group.number(keys::AVG_LEVEL).unwrap_or(0.0);
        let level_compatibility = 1.0 - (user_level - group_level).abs() / LEVEL_COMPATIBILITY_SCALE;

        let activity_score = group.number(keys::ACTIVITY_SCORE).unwrap_or(0.0);
        let member_count = group.number(keys::MEMBER_COUNT).unwrap_or(0.0) as i64;
        let size_bonus = if (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&member_count) {
            SIZE_BONUS
        } else {
            0.0
        };

        let score = INTEREST_OVERLAP_WEIGHT * interest_overlap as f64
            + LEVEL_COMPATIBILITY_WEIGHT * level_compatibility
            + GROUP_ACTIVITY_WEIGHT * activity_score
            + SIZE_WEIGHT * size_bonus;

        Self {
            group_id: group.id.clone(),
            interest_overlap,
            level_compatibility,
            activity_score,
            member_count,
            size_bonus,
            score,
        }
    }

    fn reasoning(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if self.interest_overlap > 0 {
            reasons.push(plural(self.interest_overlap, "shared interest", "shared interests"));
        }
        if self.level_compatibility >= 0.7 {
            reasons.push("Members at a similar level".to_string());
        }
        if self.activity_score >= 0.5 {
            reasons.push("Active community".to_string());
        }
        if self.size_bonus > 0.0 {
            reasons.push(format!("Comfortable group size ({} members)", self.member_count));
        }
        reasons
    }

    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            kind: RecommendationKind::Group,
            reasoning: self.reasoning(),
            confidence: self.score.clamp(0.0, 1.0),
            score: self.score,
            target_id: self.group_id,
        }
    }
}

/// Groups that fit `user_id`, best first
pub fn find_optimal_groups(store: &GraphStore, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
    let Ok(user) = store.get_typed_node(user_id, NodeType::User) else {
        return Vec::new();
    };
    let user_interests = user.string_set(keys::INTERESTS);
    let user_level = user.number(keys::LEVEL).unwrap_or(0.0);

    let candidates: Vec<GroupFit> = store
        .nodes_of_type(NodeType::Group)
        .into_iter()
        .map(|group| GroupFit::evaluate(&user_interests, user_level, group))
        .filter(|fit| fit.score > MIN_GROUP_SCORE)
        .collect();

    rank_top_k(candidates, limit)
        .into_iter()
        .map(GroupFit::into_recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, interests: Vec<&str>, avg_level: f64, activity: f64, members: i64) -> Node {
        Node::new(id, NodeType::Group)
            .with_property(keys::INTERESTS, interests)
            .with_property(keys::AVG_LEVEL, avg_level)
            .with_property(keys::ACTIVITY_SCORE, activity)
            .with_property(keys::MEMBER_COUNT, members)
    }

    fn store_with_user() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_node(
            Node::new("u1", NodeType::User)
                .with_property(keys::INTERESTS, vec!["yoga", "sleep"])
                .with_property(keys::LEVEL, 4i64),
        );
        store
    }

    #[test]
    fn test_group_score() {
        let mut store = store_with_user();
        store.add_node(group("g1", vec!["yoga", "sleep", "running"], 6.0, 0.5, 20));

        let recs = find_optimal_groups(&store, &"u1".into(), 5);
        assert_eq!(recs.len(), 1);
        let expected = 0.4 * 2.0 + 0.3 * 0.8 + 0.2 * 0.5 + 0.1 * 0.1;
        assert!((recs[0].score - expected).abs() < 1e-9);
        assert_eq!(recs[0].confidence, 1.0);
        assert_eq!(
            recs[0].reasoning,
            vec![
                "2 shared interests".to_string(),
                "Members at a similar level".to_string(),
                "Active community".to_string(),
                "Comfortable group size (20 members)".to_string(),
            ]
        );
    }

    #[test]
    fn test_size_bonus_range() {
        let mut store = store_with_user();
        store.add_node(group("big", vec!["yoga"], 4.0, 0.0, 60));
        store.add_node(group("mid", vec!["yoga"], 4.0, 0.0, 20));

        let recs = find_optimal_groups(&store, &"u1".into(), 5);
        let score = |id: &str| recs.iter().find(|r| r.target_id.as_str() == id).unwrap().score;
        assert!(score("mid") > score("big"));
        assert!((score("mid") - score("big") - 0.01).abs() < 1e-9);
        assert_eq!(recs[0].target_id.as_str(), "mid");
    }

    #[test]
    fn test_threshold() {
        let mut store = store_with_user();
        // No overlap, distant level, idle: 0.3 * 0.0 = 0
        store.add_node(group("far", vec!["chess"], 14.0, 0.0, 3));
        // Exactly at the threshold is excluded: 0.3 * 1.0 = 0.3
        store.add_node(group("edge", vec![], 4.0, 0.0, 100));

        assert!(find_optimal_groups(&store, &"u1".into(), 5).is_empty());
    }

    #[test]
    fn test_limit_and_bad_input() {
        let mut store = store_with_user();
        for i in 0..5 {
            store.add_node(group(&format!("g{}", i), vec!["yoga"], 4.0, 0.1 * i as f64, 10));
        }
        let recs = find_optimal_groups(&store, &"u1".into(), 3);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].target_id.as_str(), "g4");
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));

        assert!(find_optimal_groups(&store, &"g1".into(), 3).is_empty());
    }
}
