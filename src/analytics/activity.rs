//! Runtime graph mutation driven by user activity
//!
//! An activity bumps the actor's `activityCount` and `lastActivity`. With a
//! target it also creates an edge at weight 0.1 or reinforces the existing
//! one by 0.1, capped at 1.0.

use crate::graph::{
    keys, Edge, EdgeId, EdgeType, GraphError, GraphResult, GraphStore, Node, NodeId, NodeType,
    PropertyValue, ACTIVITY_EDGE_WEIGHT,
};
use serde::Serialize;
use tracing::debug;

/// What an activity update changed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityOutcome {
    pub user_id: NodeId,
    pub activity_count: i64,
    /// The actor did not exist and was created
    pub created_user: bool,
    /// The target did not exist and was created
    pub created_target: bool,
    pub edge: Option<EdgeUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeUpdate {
    pub id: EdgeId,
    pub weight: f64,
    pub created: bool,
}

/// Record an activity by `user_id` at `now_ms`.
///
/// Unknown actors are created as bare user nodes; unknown targets are
/// created with the node type the activity implies (a like targets
/// content, `member_of` a group, ...). Fails without touching the graph
/// if `user_id` names a node that is not a user, or if the activity
/// targets the actor itself.
pub fn update_user_activity(
    store: &mut GraphStore,
    user_id: &NodeId,
    activity_type: EdgeType,
    target_id: Option<&NodeId>,
    now_ms: i64,
) -> GraphResult<ActivityOutcome> {
    if target_id == Some(user_id) {
        return Err(GraphError::SelfLoop(user_id.clone()));
    }

    let created_user = match store.get_node(user_id) {
        Some(node) if node.node_type != NodeType::User => {
            return Err(GraphError::WrongNodeType {
                id: user_id.clone(),
                expected: NodeType::User,
                actual: node.node_type,
            });
        }
        Some(_) => false,
        None => {
            debug!("Creating user {} from activity", user_id);
            store.add_node(
                Node::new(user_id.clone(), NodeType::User)
                    .with_property(keys::INTERESTS, Vec::<String>::new())
                    .with_property(keys::LEVEL, 0i64)
                    .with_property(keys::ACTIVITY_COUNT, 0i64),
            );
            true
        }
    };

    let activity_count = store
        .get_node(user_id)
        .and_then(|node| node.number(keys::ACTIVITY_COUNT))
        .unwrap_or(0.0) as i64
        + 1;
    store.set_node_property(user_id, keys::ACTIVITY_COUNT, activity_count)?;
    store.set_node_property(user_id, keys::LAST_ACTIVITY, PropertyValue::DateTime(now_ms))?;

    let mut outcome = ActivityOutcome {
        user_id: user_id.clone(),
        activity_count,
        created_user,
        created_target: false,
        edge: None,
    };

    let Some(target_id) = target_id else {
        return Ok(outcome);
    };

    if !store.has_node(target_id) {
        let node_type = activity_type.implied_target_type();
        debug!("Creating {} {} from activity", node_type, target_id);
        store.add_node(Node::new(target_id.clone(), node_type));
        outcome.created_target = true;
    }

    let edge_id = EdgeId::derive(user_id, target_id, activity_type);
    let update = match store.get_edge_mut(&edge_id) {
        Some(edge) => {
            let weight = edge.reinforce();
            edge.set_property(keys::LAST_INTERACTION, PropertyValue::DateTime(now_ms));
            EdgeUpdate { id: edge_id, weight, created: false }
        }
        None => {
            let mut edge = Edge::new(user_id.clone(), target_id.clone(), activity_type, ACTIVITY_EDGE_WEIGHT);
            edge.created_at = now_ms;
            edge.set_property(keys::LAST_INTERACTION, PropertyValue::DateTime(now_ms));
            let weight = edge.weight;
            store.add_edge(edge)?;
            EdgeUpdate { id: edge_id, weight, created: true }
        }
    };

    outcome.edge = Some(update);
    Ok(outcome)
}
