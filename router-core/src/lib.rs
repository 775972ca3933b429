//! Router Core
//!
//! This crate keeps the per-node bookkeeping of a Router navigation tree.
//! It implements:
//!
//! - Lazily created, identity-stable data per node
//! - Resolved lifecycle state per node, recomputed over affected subtrees
//! - Ordered change notifications for a presentation-layer delegate
//!
//! The content behind a node, the tree-mutation layer and the presentation
//! logic reacting to changes all live outside this crate.
//!
//! # Architecture
//!
//! - `node`: node identity and lifecycle states
//! - `tree`: description of the subtree affected by one mutation
//! - `storage`: data store, state tracker and the [`NodeDataStorage`] façade
//!
//! # Example
//!
//! ```rust
//! use router_core::{NodeDataStorage, NodeState, NodeTree};
//!
//! let mut storage = NodeDataStorage::new(|screen: &&str| format!("{screen} content"));
//!
//! let mut tree = NodeTree::new("root");
//! tree.insert(&"root", "inbox").unwrap();
//!
//! let changed = storage.update_resolved_state_for_affected_node_tree(&tree);
//! assert_eq!(changed, vec!["root", "inbox"]);
//! assert_eq!(storage.resolved_state_for_node(&"inbox"), NodeState::Initialized);
//! assert_eq!(*storage.data_for_node(&"inbox"), "inbox content");
//! ```

pub mod node;
pub mod storage;
pub mod tree;

pub use node::{Node, NodeId, NodeState, Transition};
pub use storage::{NodeDataStorage, NodeDataStorageDelegate, StorageOptions};
pub use tree::{NodeTree, Slot, TreeError};
