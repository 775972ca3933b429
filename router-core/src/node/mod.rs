//! Nodes
//!
//! A node is an identity-bearing unit of navigation structure: a screen, a
//! container of screens, anything the host places in its navigation tree.
//! This crate never owns nodes. It only keys its bookkeeping by them.
//!
//! # Identity
//!
//! The only capability required of a node type is stable identity and
//! equality, expressed by the [`Node`] trait. Parent links are not part of
//! the node itself; they are carried by the [`NodeTree`](crate::tree::NodeTree)
//! describing a recomputation pass.
//!
//! [`NodeId`] is a ready-made identity for hosts that do not have one.

mod id;
mod state;

use std::fmt::Debug;
use std::hash::Hash;

pub use id::NodeId;
pub use state::{NodeState, Transition};

/// Identity capability required of anything used as a node.
///
/// Two nodes that compare equal are the same node. Reusing an identity for a
/// semantically different entity is a caller contract violation and is not
/// detected.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug {}
