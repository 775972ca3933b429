//! Affected tree storage and traversal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::TreeError;
use crate::node::Node;

/// Whether a node currently occupies its navigational slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The node is live in its slot.
    #[default]
    Live,

    /// Another node took over the slot. The node stays in the tree only so
    /// that its state can be demoted.
    Superseded,
}

/// Per-node record inside a tree.
#[derive(Debug, Clone)]
struct Entry<N> {
    /// `None` for the root and for detached nodes.
    parent: Option<N>,

    /// Children in insertion order.
    children: SmallVec<[N; 4]>,

    slot: Slot,
}

impl<N> Entry<N> {
    fn new(parent: Option<N>, slot: Slot) -> Self {
        Self {
            parent,
            children: SmallVec::new(),
            slot,
        }
    }
}

/// One step of a parent-before-child traversal.
#[derive(Debug, PartialEq, Eq)]
pub struct Visit<'a, N> {
    /// The visited node.
    pub node: &'a N,

    /// Its parent inside the tree, if any.
    pub parent: Option<&'a N>,

    /// Whether the node has a parent chain to the tree root.
    pub attached: bool,

    /// Slot occupancy reported by the tree-mutation layer.
    pub slot: Slot,
}

impl<N> Clone for Visit<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Visit<'_, N> {}

/// Description of the subtree affected by one navigation mutation.
///
/// The tree is only read during a recomputation pass and is not retained
/// afterwards.
#[derive(Debug, Clone)]
pub struct NodeTree<N: Node> {
    root: N,

    /// Surviving node outside the tree that the root hangs off.
    anchor: Option<N>,

    /// All nodes, indexed by identity, in insertion order.
    entries: IndexMap<N, Entry<N>>,
}

impl<N: Node> NodeTree<N> {
    /// Create a tree rooted at the navigation root.
    pub fn new(root: N) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(root.clone(), Entry::new(None, Slot::Live));
        Self {
            root,
            anchor: None,
            entries,
        }
    }

    /// Create a tree whose root is a child of `anchor`.
    ///
    /// The anchor is not part of the tree. Its recorded state decides whether
    /// the root may become initialized. Inserting the anchor later fails with
    /// [`TreeError::AnchorInTree`]; passing it as the root is a contract
    /// violation.
    pub fn anchored(root: N, anchor: N) -> Self {
        let mut tree = Self::new(root);
        tree.anchor = Some(anchor);
        tree
    }

    /// Add `node` as the last child of `parent`.
    pub fn insert(&mut self, parent: &N, node: N) -> Result<(), TreeError> {
        self.insert_with_slot(parent, node, Slot::Live)
    }

    /// Add `node` as a child of `parent` that lost its slot.
    pub fn insert_superseded(&mut self, parent: &N, node: N) -> Result<(), TreeError> {
        self.insert_with_slot(parent, node, Slot::Superseded)
    }

    /// Add `node` under `parent` with an explicit slot.
    pub fn insert_with_slot(&mut self, parent: &N, node: N, slot: Slot) -> Result<(), TreeError> {
        self.check_new(&node)?;
        let Some(parent_entry) = self.entries.get_mut(parent) else {
            return Err(TreeError::unknown_parent(&node, parent));
        };
        parent_entry.children.push(node.clone());
        self.entries.insert(node, Entry::new(Some(parent.clone()), slot));
        Ok(())
    }

    /// Add an affected node that no longer has a parent chain to the root.
    pub fn detach(&mut self, node: N) -> Result<(), TreeError> {
        self.check_new(&node)?;
        self.entries.insert(node, Entry::new(None, Slot::Live));
        Ok(())
    }

    fn check_new(&self, node: &N) -> Result<(), TreeError> {
        if self.anchor.as_ref() == Some(node) {
            return Err(TreeError::anchor(node));
        }
        if self.entries.contains_key(node) {
            return Err(TreeError::duplicate(node));
        }
        Ok(())
    }

    /// Mark an existing node as superseded.
    ///
    /// Returns false if the node is not part of the tree.
    pub fn supersede(&mut self, node: &N) -> bool {
        match self.entries.get_mut(node) {
            Some(entry) => {
                entry.slot = Slot::Superseded;
                true
            }
            None => false,
        }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn anchor(&self) -> Option<&N> {
        self.anchor.as_ref()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.entries.contains_key(node)
    }

    /// Get the total number of nodes in the tree, detached ones included.
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.entries.keys()
    }

    pub fn parent_of(&self, node: &N) -> Option<&N> {
        self.entries.get(node)?.parent.as_ref()
    }

    pub fn children_of(&self, node: &N) -> &[N] {
        self.entries
            .get(node)
            .map_or(&[][..], |entry| entry.children.as_slice())
    }

    pub fn slot_of(&self, node: &N) -> Option<Slot> {
        self.entries.get(node).map(|entry| entry.slot)
    }

    /// Walk parent links from `node` towards the root, excluding `node`.
    pub fn ancestors(&self, node: &N) -> Ancestors<'_, N> {
        Ancestors {
            tree: self,
            next: self.parent_of(node),
        }
    }

    /// Check if `node` has a parent chain to the root.
    pub fn is_attached(&self, node: &N) -> bool {
        if !self.contains(node) {
            return false;
        }
        node == &self.root || self.ancestors(node).last() == Some(&self.root)
    }

    /// Enumerate every node, parents before children.
    ///
    /// The root's subtree is visited first in depth-first pre-order with
    /// children in insertion order, then each detached subtree the same way.
    pub fn walk(&self) -> Vec<Visit<'_, N>> {
        let mut visits = Vec::with_capacity(self.entries.len());
        self.walk_from(&self.root, true, &mut visits);

        for (node, entry) in &self.entries {
            if entry.parent.is_none() && node != &self.root {
                self.walk_from(node, false, &mut visits);
            }
        }

        visits
    }

    fn walk_from<'a>(&'a self, start: &'a N, attached: bool, visits: &mut Vec<Visit<'a, N>>) {
        let mut stack: Vec<&'a N> = vec![start];

        while let Some(node) = stack.pop() {
            let Some(entry) = self.entries.get(node) else {
                continue;
            };
            visits.push(Visit {
                node,
                parent: entry.parent.as_ref(),
                attached,
                slot: entry.slot,
            });
            // Reversed so the first child is popped first.
            stack.extend(entry.children.iter().rev());
        }
    }
}

/// Iterator over a node's ancestors inside a [`NodeTree`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a, N: Node> {
    tree: &'a NodeTree<N>,
    next: Option<&'a N>,
}

impl<'a, N: Node> Iterator for Ancestors<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}
