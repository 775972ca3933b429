//! Affected Node Trees
//!
//! A [`NodeTree`] describes the part of the navigation tree that a single
//! mutation touched: inserted, removed and reparented nodes together with
//! their surviving ancestors and descendants. It is built by the
//! tree-mutation layer and consumed by one recomputation pass.
//!
//! # Shape
//!
//! - The **root** is either the navigation root, or the top of a subtree that
//!   hangs off an **anchor**: a surviving node outside the affected tree whose
//!   recorded state gates the root.
//! - Every other node is inserted under a parent that is already present.
//! - A node can occupy its slot (`Live`) or be `Superseded`, e.g. replaced by
//!   a sibling presenting in the same navigational slot.
//! - **Detached** nodes were affected but have no parent chain to the root
//!   any more (typically removed nodes). They may carry detached children.
//!
//! # Traversal
//!
//! [`NodeTree::walk`] yields every node exactly once, parents before
//! children. The root's subtree comes first, followed by each detached
//! subtree in insertion order.

mod error;
mod node_tree;

pub use error::TreeError;
pub use node_tree::{Ancestors, NodeTree, Slot, Visit};
