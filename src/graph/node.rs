//! Node implementation for the social graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{NodeId, NodeType};
use serde::Serialize;
use std::collections::HashSet;

/// Well-known property keys
pub mod keys {
    pub const INTERESTS: &str = "interests";
    pub const LEVEL: &str = "level";
    pub const ACTIVITY_COUNT: &str = "activityCount";
    pub const LAST_ACTIVITY: &str = "lastActivity";
    pub const CATEGORY: &str = "category";
    pub const ENGAGEMENT: &str = "engagement";
    pub const POPULARITY: &str = "popularity";
    pub const ACTIVITY_TYPE: &str = "activityType";
    pub const AVG_LEVEL: &str = "avgLevel";
    pub const ACTIVITY_SCORE: &str = "activityScore";
    pub const MEMBER_COUNT: &str = "memberCount";
    pub const LAST_INTERACTION: &str = "lastInteraction";
}

/// A typed node in the social graph
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// What the node represents
    pub node_type: NodeType,

    /// Type-dependent attributes
    pub properties: PropertyMap,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Node {
    /// Create a new node without properties
    pub fn new(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Self::new_with_properties(id, node_type, PropertyMap::new())
    }

    /// Create a new node with properties
    pub fn new_with_properties(
        id: impl Into<NodeId>,
        node_type: NodeType,
        properties: PropertyMap,
    ) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Node {
            id: id.into(),
            node_type,
            properties,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set a property value, returning the previous one
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        let old = self.properties.insert(key.into(), value.into());
        self.updated_at = chrono::Utc::now().timestamp_millis();
        old
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Numeric property, integers widened to f64
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get_property(key).and_then(PropertyValue::as_number)
    }

    /// String property
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get_property(key).and_then(PropertyValue::as_string)
    }

    /// Tag-list property as a set; empty when absent
    pub fn string_set(&self, key: &str) -> HashSet<&str> {
        self.get_property(key)
            .and_then(PropertyValue::as_string_set)
            .unwrap_or_default()
    }

    pub fn is(&self, node_type: NodeType) -> bool {
        self.node_type == node_type
    }
}
