//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a node (user id, content id, group id, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Identifier for an edge: the `(from, to, type)` triple.
///
/// Two edges with the same endpoints and type share an id, so inserting
/// the second overwrites the first. The components are kept apart, so
/// ids containing `-` never collide; `Display` renders `from-to-type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub from: NodeId,
    pub to: NodeId,
    pub edge_type: EdgeType,
}

impl EdgeId {
    pub fn derive(from: &NodeId, to: &NodeId, edge_type: EdgeType) -> Self {
        EdgeId {
            from: from.clone(),
            to: to.clone(),
            edge_type,
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.from, self.to, self.edge_type)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kind of entity a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    User,
    Content,
    Group,
    Activity,
    Interest,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::User => "user",
            NodeType::Content => "content",
            NodeType::Group => "group",
            NodeType::Activity => "activity",
            NodeType::Interest => "interest",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    Follows,
    Likes,
    Shares,
    MemberOf,
    InterestedIn,
    SimilarTo,
    Mentors,
    Collaborates,
}

impl EdgeType {
    pub const ALL: [EdgeType; 8] = [
        EdgeType::Follows,
        EdgeType::Likes,
        EdgeType::Shares,
        EdgeType::MemberOf,
        EdgeType::InterestedIn,
        EdgeType::SimilarTo,
        EdgeType::Mentors,
        EdgeType::Collaborates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Follows => "follows",
            EdgeType::Likes => "likes",
            EdgeType::Shares => "shares",
            EdgeType::MemberOf => "member_of",
            EdgeType::InterestedIn => "interested_in",
            EdgeType::SimilarTo => "similar_to",
            EdgeType::Mentors => "mentors",
            EdgeType::Collaborates => "collaborates",
        }
    }

    /// Node type to create when an activity of this kind targets an
    /// id the graph has not seen yet.
    pub fn implied_target_type(&self) -> NodeType {
        match self {
            EdgeType::Likes | EdgeType::Shares => NodeType::Content,
            EdgeType::MemberOf => NodeType::Group,
            EdgeType::InterestedIn => NodeType::Interest,
            EdgeType::Follows
            | EdgeType::SimilarTo
            | EdgeType::Mentors
            | EdgeType::Collaborates => NodeType::User,
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown edge type '{}'", s))
    }
}
