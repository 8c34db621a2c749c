//! Per-user network analytics and activity-driven graph updates
//!
//! Metrics:
//! - `directConnections`: edges touching the user
//! - `networkReach`: distinct nodes two hops away, excluding the user
//!   (direct neighbors that are also two hops away are counted)
//! - `influenceScore`: `min(Σ weights of touching edges / 10, 1)`
//! - `communityRank`: `min(Σ incoming weights / 5, 1)`, a one-hop
//!   approximation of rank, not PageRank (see [`crate::algo::page_rank`])
//! - `engagementLevel`: `0.7 * activity + 0.3 * recency` where activity
//!   saturates at 100 actions and recency decays linearly over 30 days

pub mod activity;

use crate::graph::{keys, GraphStore, NodeId, NodeType};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use wellgraph_algorithms::{linear_decay, saturating_ratio};

pub use activity::{update_user_activity, ActivityOutcome};

pub const INFLUENCE_NORMALIZER: f64 = 10.0;
pub const COMMUNITY_RANK_NORMALIZER: f64 = 5.0;
pub const ACTIVITY_WEIGHT: f64 = 0.7;
pub const RECENCY_WEIGHT: f64 = 0.3;
pub const ACTIVITY_SATURATION: f64 = 100.0;
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnalytics {
    pub user_id: NodeId,
    pub direct_connections: usize,
    pub network_reach: usize,
    pub influence_score: f64,
    pub community_rank: f64,
    pub engagement_level: f64,
}

/// Analytics for `user_id` as of `now_ms` (Unix millis).
///
/// `None` when the id is unknown or not a user.
pub fn network_analytics(store: &GraphStore, user_id: &NodeId, now_ms: i64) -> Option<NetworkAnalytics> {
    let user = store.get_typed_node(user_id, NodeType::User).ok()?;
    let connections = store.get_node_connections(user_id);

    let mut reach: FxHashSet<&NodeId> = FxHashSet::default();
    if let Some(neighbors) = store.neighbors(user_id) {
        for neighbor in neighbors {
            if let Some(second) = store.neighbors(neighbor) {
                reach.extend(second.iter().filter(|id| *id != user_id));
            }
        }
    }

    let total_weight: f64 = connections.iter().map(|edge| edge.weight).sum();
    let incoming_weight: f64 = connections
        .iter()
        .filter(|edge| edge.ends_at(user_id))
        .map(|edge| edge.weight)
        .sum();

    let activity_score = saturating_ratio(
        user.number(keys::ACTIVITY_COUNT).unwrap_or(0.0),
        ACTIVITY_SATURATION,
    );
    let recency_score = user
        .get_property(keys::LAST_ACTIVITY)
        .and_then(|value| value.as_datetime())
        .map(|last| {
            let days_since = (now_ms - last) as f64 / MILLIS_PER_DAY;
            linear_decay(days_since, RECENCY_WINDOW_DAYS)
        })
        .unwrap_or(0.0);

    Some(NetworkAnalytics {
        user_id: user_id.clone(),
        direct_connections: connections.len(),
        network_reach: reach.len(),
        influence_score: saturating_ratio(total_weight, INFLUENCE_NORMALIZER),
        community_rank: saturating_ratio(incoming_weight, COMMUNITY_RANK_NORMALIZER),
        engagement_level: ACTIVITY_WEIGHT * activity_score + RECENCY_WEIGHT * recency_score,
    })
}
