//! Node lifecycle states.
//!
//! States are totally ordered by lifecycle progress. Moving up the order is
//! progress (a node becoming ready for presentation); moving down is a
//! regression (a node leaving active presentation).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a node.
///
/// A node with no recorded state is [`NodeState::NotInitialized`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// The node has no live resolved state. It may or may not have data.
    #[default]
    NotInitialized,

    /// The node is resolved and backed by live data.
    Initialized,
}

impl NodeState {
    /// Check if this is the initialized state.
    pub fn is_initialized(self) -> bool {
        self == NodeState::Initialized
    }

    /// Classify a move from this state to `next`.
    pub fn transition_to(self, next: NodeState) -> Transition {
        match self.cmp(&next) {
            Ordering::Less => Transition::Progress,
            Ordering::Equal => Transition::Unchanged,
            Ordering::Greater => Transition::Regression,
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::NotInitialized => f.write_str("not_initialized"),
            NodeState::Initialized => f.write_str("initialized"),
        }
    }
}

/// Direction of a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same state before and after.
    Unchanged,

    /// Forward in lifecycle order. Requires live data.
    Progress,

    /// Backward in lifecycle order.
    Regression,
}

impl Transition {
    /// Check if the state actually changed.
    pub fn is_change(self) -> bool {
        self != Transition::Unchanged
    }
}
