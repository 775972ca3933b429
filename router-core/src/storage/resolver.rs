//! Resolved State Tracking
//!
//! The tracker records the authoritative [`NodeState`] of every node and
//! derives new states for the nodes of an affected tree.
//!
//! # Algorithm
//!
//! [`ResolvedStateTracker::resolve`] walks the tree parents-first and, for
//! each node:
//!
//! 1. Looks up the parent's state: the state derived earlier in this pass,
//!    else the recorded state. The tree root uses the anchor's recorded
//!    state, or counts as gated open if it is the navigation root.
//! 2. Decides reachability: attached, live in its slot, parent reachable.
//! 3. Resolves to `Initialized` only if reachable and the parent is
//!    `Initialized`.
//!
//! Resolving is pure. The result is a [`Resolution`] that the caller applies
//! with [`ResolvedStateTracker::record`] once supporting data is in place.
//! Nodes outside the tree are never part of a resolution.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::node::{Node, NodeState, Transition};
use crate::tree::{NodeTree, Slot, Visit};

/// Outcome of resolving one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep<N> {
    pub node: N,

    /// Recorded state before the pass.
    pub previous: NodeState,

    /// Derived state.
    pub resolved: NodeState,

    /// Whether the node still has a live slot reachable from the root.
    pub reachable: bool,
}

impl<N> ResolutionStep<N> {
    pub fn transition(&self) -> Transition {
        self.previous.transition_to(self.resolved)
    }

    pub fn is_changed(&self) -> bool {
        self.transition().is_change()
    }
}

/// Ordered result of one resolving pass.
#[derive(Debug, Clone)]
pub struct Resolution<N: Node> {
    /// One step per node, in first-visit order.
    steps: IndexMap<N, ResolutionStep<N>>,
}

impl<N: Node> Resolution<N> {
    /// Steps in traversal order.
    pub fn steps(&self) -> impl Iterator<Item = &ResolutionStep<N>> {
        self.steps.values()
    }

    pub fn step(&self, node: &N) -> Option<&ResolutionStep<N>> {
        self.steps.get(node)
    }

    /// Nodes whose state changed, in traversal order.
    pub fn changed(&self) -> impl Iterator<Item = &N> {
        self.steps
            .values()
            .filter(|step| step.is_changed())
            .map(|step| &step.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Mapping from node identity to its resolved state.
///
/// Only initialized nodes have an entry. Every other node is implicitly
/// [`NodeState::NotInitialized`].
#[derive(Debug, Clone)]
pub struct ResolvedStateTracker<N> {
    states: HashMap<N, NodeState>,
}

impl<N: Node> ResolvedStateTracker<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
        }
    }

    /// Get the recorded state, defaulting to not initialized.
    pub fn state_for(&self, node: &N) -> NodeState {
        self.states.get(node).copied().unwrap_or_default()
    }

    /// All nodes currently recorded as initialized.
    pub fn initialized_nodes(&self) -> HashSet<N> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_initialized())
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Record a node's state.
    ///
    /// Recording the default state drops the entry.
    pub fn record(&mut self, node: &N, state: NodeState) {
        if state == NodeState::default() {
            self.states.remove(node);
        } else {
            self.states.insert(node.clone(), state);
        }
    }

    /// Forget a node's state. Returns the state it had.
    pub fn clear(&mut self, node: &N) -> NodeState {
        self.states.remove(node).unwrap_or_default()
    }

    /// Derive new states for every node of `tree`.
    pub fn resolve(&self, tree: &NodeTree<N>) -> Resolution<N> {
        let anchor_state = match tree.anchor() {
            Some(anchor) => self.state_for(anchor),
            None => NodeState::Initialized,
        };
        self.resolve_visits(anchor_state, tree.walk())
    }

    /// Derive new states for a parent-before-child sequence of visits.
    ///
    /// A node visited twice resolves from the same inputs both times, so the
    /// second visit replaces its step with an identical one.
    pub(crate) fn resolve_visits<'a, I>(&self, anchor_state: NodeState, visits: I) -> Resolution<N>
    where
        N: 'a,
        I: IntoIterator<Item = Visit<'a, N>>,
    {
        let mut steps: IndexMap<N, ResolutionStep<N>> = IndexMap::new();

        for visit in visits {
            let (parent_state, parent_reachable) = match visit.parent {
                Some(parent) => steps
                    .get(parent)
                    .map(|step| (step.resolved, step.reachable))
                    .unwrap_or_else(|| (self.state_for(parent), true)),
                None => (anchor_state, true),
            };

            let reachable = visit.attached && visit.slot == Slot::Live && parent_reachable;
            let resolved = if reachable && parent_state.is_initialized() {
                NodeState::Initialized
            } else {
                NodeState::NotInitialized
            };

            steps.insert(
                visit.node.clone(),
                ResolutionStep {
                    node: visit.node.clone(),
                    previous: self.state_for(visit.node),
                    resolved,
                    reachable,
                },
            );
        }

        Resolution { steps }
    }
}

impl<N: Node> Default for ResolvedStateTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}
