//! Node Data Storage
//!
//! This module holds the bookkeeping engine: per-node data, per-node
//! resolved state, and the façade that ties both to a delegate.
//!
//! # Overview
//!
//! - [`NodeDataStore`] lazily creates and caches one data object per node.
//! - [`ResolvedStateTracker`] records resolved states and derives new ones
//!   for an affected tree.
//! - [`NodeDataStorage`] combines both and fires delegate notifications.
//!
//! # Notification Order
//!
//! Within one recomputation pass:
//!
//! 1. Data creation and reset notifications fire while the tree is walked,
//!    parents before children.
//! 2. State-change notifications fire after the walk, once per changed node,
//!    in the same parent-before-child order.
//!
//! A node's data is therefore always reported created before the node is
//! reported initialized.
//!
//! # Threading
//!
//! Storage is single-threaded (`!Send`). All mutation happens on the thread
//! that owns the navigation tree, and callers serialize access.

mod data;
mod delegate;
mod node_data_storage;
mod options;
mod resolver;

pub use data::{Fetched, NodeDataStore};
pub use delegate::NodeDataStorageDelegate;
pub use node_data_storage::NodeDataStorage;
pub use options::StorageOptions;
pub use resolver::{Resolution, ResolutionStep, ResolvedStateTracker};
