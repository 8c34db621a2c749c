//! Property values for graph nodes and edges
//!
//! Node properties depend on the node type: a user carries `interests`,
//! `level`, `activityCount` and `lastActivity`, a group carries
//! `interests`, `avgLevel`, `activityScore` and `memberCount`, content and
//! activity nodes carry `category`.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A single property value. Serializes as the bare JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    DateTime(i64), // Unix timestamp in milliseconds
    /// Tag lists such as `interests`
    Tags(Vec<String>),
}

impl PropertyValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of integers and floats
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Integer(i) => Some(*i as f64),
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            PropertyValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Tags as a set, duplicates collapsed
    pub fn as_string_set(&self) -> Option<HashSet<&str>> {
        match self {
            PropertyValue::Tags(tags) => Some(tags.iter().map(String::as_str).collect()),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(tags: Vec<String>) -> Self {
        PropertyValue::Tags(tags)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(tags: Vec<&str>) -> Self {
        PropertyValue::Tags(tags.into_iter().map(str::to_string).collect())
    }
}

pub type PropertyMap = HashMap<String, PropertyValue>;
