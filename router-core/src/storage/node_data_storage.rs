//! Storage Façade
//!
//! [`NodeDataStorage`] is the single entry point for hosts. It owns the data
//! store and the state tracker, applies recomputation passes, and forwards
//! every observable change to the delegate.

use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument, trace};

use super::data::{Fetched, NodeDataStore};
use super::delegate::NodeDataStorageDelegate;
use super::options::StorageOptions;
use super::resolver::ResolvedStateTracker;
use crate::node::{Node, NodeState, Transition};
use crate::tree::NodeTree;

/// Per-node data and resolved state for one navigation tree.
///
/// # Type Parameters
///
/// - `N`: node identity.
/// - `D`: data created for each node by the factory passed to [`new`](Self::new).
///
/// Both internal maps are only mutated through this type.
pub struct NodeDataStorage<N: Node, D> {
    data: NodeDataStore<N, D>,
    states: ResolvedStateTracker<N>,
    options: StorageOptions,

    /// Non-owning. Upgraded for each notification.
    delegate: Option<Weak<dyn NodeDataStorageDelegate<N, D>>>,
}

impl<N: Node, D> NodeDataStorage<N, D> {
    /// Create storage with default options.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&N) -> D + 'static,
    {
        Self::with_options(StorageOptions::default(), factory)
    }

    /// Create storage with explicit options.
    pub fn with_options<F>(options: StorageOptions, factory: F) -> Self
    where
        F: Fn(&N) -> D + 'static,
    {
        Self {
            data: NodeDataStore::with_capacity(options.initial_capacity, factory),
            states: ResolvedStateTracker::with_capacity(options.initial_capacity),
            options,
            delegate: None,
        }
    }

    /// Register the delegate, replacing any previous one.
    ///
    /// Only a weak reference is kept. Dropping the last `Rc` silently
    /// unregisters it.
    pub fn set_delegate<T>(&mut self, delegate: &Rc<T>)
    where
        T: NodeDataStorageDelegate<N, D> + 'static,
    {
        let weak: Weak<T> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn delegate(&self) -> Option<Rc<dyn NodeDataStorageDelegate<N, D>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // ------------------------------------------------------------------------
    // Data
    // ------------------------------------------------------------------------

    pub fn has_data_for_node(&self, node: &N) -> bool {
        self.data.has(node)
    }

    /// Get the node's data, creating it on first access.
    ///
    /// Creation is reported to the delegate before the data is returned.
    pub fn data_for_node(&mut self, node: &N) -> Rc<D> {
        let Fetched { data, created } = self.data.get(node);
        if created {
            trace!(?node, "created node data");
            if let Some(delegate) = self.delegate() {
                delegate.did_create_data(self, node, &data);
            }
        }
        data
    }

    /// Discard the node's data and its resolved state.
    ///
    /// No-op if the node has no data. The delegate is told before the data
    /// goes away. No state-change notification is fired.
    pub fn reset_data_for_node(&mut self, node: &N) {
        let Some(data) = self.data.peek(node).cloned() else {
            return;
        };

        debug!(?node, "resetting node data");
        if let Some(delegate) = self.delegate() {
            delegate.will_reset_data(self, node, &data);
        }

        self.data.remove(node);
        self.states.clear(node);
    }

    /// Get the number of nodes with live data.
    pub fn data_count(&self) -> usize {
        self.data.len()
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    pub fn resolved_initialized_nodes(&self) -> HashSet<N> {
        self.states.initialized_nodes()
    }

    pub fn resolved_state_for_node(&self, node: &N) -> NodeState {
        self.states.state_for(node)
    }

    /// Recompute resolved state for every node of `tree`.
    ///
    /// Nodes outside the tree are left untouched. Returns the nodes whose
    /// state changed, parents before children, which is also the order the
    /// delegate is notified in.
    #[instrument(level = "debug", skip_all, fields(root = ?tree.root(), nodes = tree.node_count()))]
    pub fn update_resolved_state_for_affected_node_tree(&mut self, tree: &NodeTree<N>) -> Vec<N> {
        let resolution = self.states.resolve(tree);

        for step in resolution.steps() {
            if !step.reachable && self.options.discard_unreachable_data {
                self.reset_data_for_node(&step.node);
            }

            if step.transition() == Transition::Progress {
                self.data_for_node(&step.node);
            }

            if step.is_changed() {
                trace!(
                    node = ?step.node,
                    from = %step.previous,
                    to = %step.resolved,
                    "resolved state changed"
                );
            }
            self.states.record(&step.node, step.resolved);
        }

        let changed: Vec<N> = resolution.changed().cloned().collect();
        if let Some(delegate) = self.delegate() {
            for node in &changed {
                delegate.did_change_resolved_state(self, node);
            }
        }

        debug!(
            visited = resolution.len(),
            changed = changed.len(),
            "resolved state updated"
        );
        changed
    }
}

impl<N: Node, D> fmt::Debug for NodeDataStorage<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDataStorage")
            .field("data", &self.data)
            .field("states", &self.states)
            .field("options", &self.options)
            .field("has_delegate", &self.delegate().is_some())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
