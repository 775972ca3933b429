//! Node Data Store
//!
//! Owns the lazily created data object of every node that has one.
//!
//! # Lifecycle
//!
//! 1. Data is created by the factory on the first [`NodeDataStore::get`].
//! 2. Every later `get` returns the same `Rc` until the node is removed.
//! 3. [`NodeDataStore::remove`] discards the data. The next `get` creates a
//!    fresh instance.
//!
//! The store never notifies anyone. It reports creation through
//! [`Fetched::created`] and leaves notification to the façade, which can
//! inspect data with [`NodeDataStore::peek`] before removing it.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::node::Node;

/// Result of [`NodeDataStore::get`].
#[derive(Debug)]
pub struct Fetched<D> {
    /// The node's data.
    pub data: Rc<D>,

    /// True if this call created the data.
    pub created: bool,
}

/// Lazily populated mapping from node identity to node data.
pub struct NodeDataStore<N, D> {
    entries: HashMap<N, Rc<D>>,

    /// Builds data for a node on first access.
    factory: Box<dyn Fn(&N) -> D>,
}

impl<N: Node, D> NodeDataStore<N, D> {
    /// Create an empty store that builds data with `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&N) -> D + 'static,
    {
        Self::with_capacity(0, factory)
    }

    /// Create an empty store pre-sized for `capacity` nodes.
    pub fn with_capacity<F>(capacity: usize, factory: F) -> Self
    where
        F: Fn(&N) -> D + 'static,
    {
        Self {
            entries: HashMap::with_capacity(capacity),
            factory: Box::new(factory),
        }
    }

    /// Check if the node has live data.
    pub fn has(&self, node: &N) -> bool {
        self.entries.contains_key(node)
    }

    /// Get the node's data without creating it.
    pub fn peek(&self, node: &N) -> Option<&Rc<D>> {
        self.entries.get(node)
    }

    /// Get the node's data, creating it on first access.
    pub fn get(&mut self, node: &N) -> Fetched<D> {
        if let Some(data) = self.entries.get(node) {
            return Fetched {
                data: Rc::clone(data),
                created: false,
            };
        }

        let data = Rc::new((self.factory)(node));
        self.entries.insert(node.clone(), Rc::clone(&data));
        Fetched {
            data,
            created: true,
        }
    }

    /// Discard the node's data.
    ///
    /// Returns the removed data, or `None` if the node had none.
    pub fn remove(&mut self, node: &N) -> Option<Rc<D>> {
        self.entries.remove(node)
    }

    /// Get the number of nodes with live data.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nodes with live data, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.entries.keys()
    }
}

impl<N: Node, D> fmt::Debug for NodeDataStore<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDataStore")
            .field("nodes", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
