//! Raw records as delivered by a data source, and their node/edge mapping

use crate::graph::{keys, Edge, EdgeType, Node, NodeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub relationship_type: EdgeType,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub category: String,
    #[serde(default)]
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRecord {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub popularity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub avg_level: f64,
    #[serde(default)]
    pub activity_score: f64,
    #[serde(default)]
    pub member_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub engagement: f64,
}

/// Every collection in one document. Also usable directly as an
/// in-memory [`DataSource`](super::DataSource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub relationships: Vec<RelationshipRecord>,
    pub activities: Vec<ActivityRecord>,
    pub interests: Vec<InterestRecord>,
    pub groups: Vec<GroupRecord>,
    pub content: Vec<ContentRecord>,
}

impl From<&UserRecord> for Node {
    fn from(r: &UserRecord) -> Self {
        Node::new(r.id.as_str(), NodeType::User)
            .with_property(keys::INTERESTS, r.interests.clone())
            .with_property(keys::LEVEL, r.level)
            .with_property(keys::ACTIVITY_COUNT, 0i64)
    }
}

impl From<&ActivityRecord> for Node {
    fn from(r: &ActivityRecord) -> Self {
        Node::new(r.id.as_str(), NodeType::Activity)
            .with_property(keys::ACTIVITY_TYPE, r.activity_type.as_str())
            .with_property(keys::CATEGORY, r.category.as_str())
            .with_property(keys::ENGAGEMENT, r.engagement)
    }
}

impl From<&InterestRecord> for Node {
    fn from(r: &InterestRecord) -> Self {
        Node::new(r.id.as_str(), NodeType::Interest)
            .with_property(keys::CATEGORY, r.category.as_str())
            .with_property(keys::POPULARITY, r.popularity)
    }
}

impl From<&GroupRecord> for Node {
    fn from(r: &GroupRecord) -> Self {
        Node::new(r.id.as_str(), NodeType::Group)
            .with_property(keys::INTERESTS, r.interests.clone())
            .with_property(keys::AVG_LEVEL, r.avg_level)
            .with_property(keys::ACTIVITY_SCORE, r.activity_score)
            .with_property(keys::MEMBER_COUNT, r.member_count)
    }
}

impl From<&ContentRecord> for Node {
    fn from(r: &ContentRecord) -> Self {
        Node::new(r.id.as_str(), NodeType::Content)
            .with_property(keys::CATEGORY, r.category.as_str())
            .with_property(keys::ENGAGEMENT, r.engagement)
    }
}

impl From<&RelationshipRecord> for Edge {
    fn from(r: &RelationshipRecord) -> Self {
        Edge::new(r.from.as_str(), r.to.as_str(), r.relationship_type, r.strength)
    }
}
