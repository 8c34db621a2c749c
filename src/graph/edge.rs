//! Edge implementation for the social graph
//!
//! Edges are directed and carry a weight in [0, 1]. Activity reinforces a
//! weight in fixed steps and never pushes it past 1.0.

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeType, NodeId};
use serde::Serialize;

/// Weight given to an edge created by user activity
pub const ACTIVITY_EDGE_WEIGHT: f64 = 0.1;

/// Weight added each time existing activity is repeated
pub const REINFORCEMENT_STEP: f64 = 0.1;

/// Upper bound for any edge weight
pub const MAX_WEIGHT: f64 = 1.0;

/// Rounding grid that absorbs float drift from repeated 0.1 steps
const WEIGHT_PRECISION: f64 = 1e9;

/// A directed, weighted edge
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Derived from `(source, target, edge_type)`
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Type of relationship
    pub edge_type: EdgeType,

    /// Strength of the relationship, in [0, 1]
    pub weight: f64,

    /// Properties associated with this edge
    pub properties: PropertyMap,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Edge {
    /// Create a new directed edge. The weight is clamped to [0, 1].
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, edge_type: EdgeType, weight: f64) -> Self {
        let source = source.into();
        let target = target.into();
        Edge {
            id: EdgeId::derive(&source, &target, edge_type),
            source,
            target,
            edge_type,
            weight: clamp_weight(weight),
            properties: PropertyMap::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Strengthen the edge by one step, saturating at [`MAX_WEIGHT`].
    ///
    /// Starting from [`ACTIVITY_EDGE_WEIGHT`], nine reinforcements reach
    /// exactly 1.0.
    pub fn reinforce(&mut self) -> f64 {
        let next = (self.weight + REINFORCEMENT_STEP).min(MAX_WEIGHT);
        self.weight = ((next * WEIGHT_PRECISION).round() / WEIGHT_PRECISION).min(MAX_WEIGHT);
        self.weight
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other_end(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source == node {
            Some(&self.target)
        } else if &self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        &self.target == node
    }
}

fn clamp_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, MAX_WEIGHT)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("u1", "u2", EdgeType::Follows, 0.5);

        assert_eq!(edge.id.to_string(), "u1-u2-follows");
        assert_eq!(edge.source.as_str(), "u1");
        assert_eq!(edge.target.as_str(), "u2");
        assert_eq!(edge.weight, 0.5);
    }

    #[test]
    fn test_weight_clamped() {
        assert_eq!(Edge::new("a", "b", EdgeType::Likes, 3.0).weight, 1.0);
        assert_eq!(Edge::new("a", "b", EdgeType::Likes, -1.0).weight, 0.0);
        assert_eq!(Edge::new("a", "b", EdgeType::Likes, f64::NAN).weight, 0.0);
    }

    #[test]
    fn test_reinforce_saturates_exactly() {
        let mut edge = Edge::new("u1", "c5", EdgeType::Likes, ACTIVITY_EDGE_WEIGHT);
        for _ in 0..9 {
            edge.reinforce();
        }
        assert_eq!(edge.weight, 1.0);

        edge.reinforce();
        assert_eq!(edge.weight, 1.0);
    }

    #[test]
    fn test_other_end() {
        let edge = Edge::new("u1", "u2", EdgeType::Mentors, 0.3);
        let u1 = NodeId::new("u1");
        let u2 = NodeId::new("u2");

        assert_eq!(edge.other_end(&u1), Some(&u2));
        assert_eq!(edge.other_end(&u2), Some(&u1));
        assert_eq!(edge.other_end(&NodeId::new("u3")), None);
        assert!(edge.ends_at(&u2));
        assert!(!edge.ends_at(&u1));
    }
}
