//! Recommendation engine
//!
//! Three independent recommenders over the same store:
//! - [`find_similar_users`]: interest/level/mutual-connection similarity
//! - [`find_recommended_content`]: collaborative propagation from similar
//!   users plus a category boost from the user's own interests
//! - [`find_optimal_groups`]: attribute fit against each group
//!
//! Unknown ids, or ids that are not users, yield an empty list rather than
//! an error so bulk callers can render "nothing to show".

pub mod content;
pub mod groups;
pub mod users;

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

pub use content::find_recommended_content;
pub use groups::find_optimal_groups;
pub use users::{find_similar_users, rank_similar_users, UserSimilarity};

/// What a recommendation points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    User,
    Content,
    Group,
}

/// One suggestion, as rendered by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub target_id: NodeId,
    pub score: f64,
    /// Human-readable explanations, derived deterministically from the score parts
    pub reasoning: Vec<String>,
    /// Score mapped into [0, 1]
    pub confidence: f64,
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let rec = Recommendation {
            kind: RecommendationKind::Group,
            target_id: NodeId::new("g1"),
            score: 0.5,
            reasoning: vec!["Active community".into()],
            confidence: 0.5,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "group");
        assert_eq!(json["target_id"], "g1");
        assert_eq!(json["reasoning"][0], "Active community");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "mutual connection", "mutual connections"), "1 mutual connection");
        assert_eq!(plural(3, "mutual connection", "mutual connections"), "3 mutual connections");
    }
}
