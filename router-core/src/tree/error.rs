//! Tree construction errors.

/// Errors raised while describing an affected tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The node is already part of the tree.
    #[error("node {0} is already part of the tree")]
    DuplicateNode(String),

    /// The parent was never added to the tree.
    #[error("parent {parent} of node {node} is not part of the tree")]
    UnknownParent {
        /// Node being inserted.
        node: String,
        /// Missing parent.
        parent: String,
    },

    /// The node is the anchor the tree hangs off, so it cannot also be
    /// inside the tree.
    #[error("node {0} is the anchor of the tree")]
    AnchorInTree(String),
}

impl TreeError {
    pub(crate) fn duplicate(node: &impl std::fmt::Debug) -> Self {
        Self::DuplicateNode(format!("{node:?}"))
    }

    pub(crate) fn anchor(node: &impl std::fmt::Debug) -> Self {
        Self::AnchorInTree(format!("{node:?}"))
    }

    pub(crate) fn unknown_parent(node: &impl std::fmt::Debug, parent: &impl std::fmt::Debug) -> Self {
        Self::UnknownParent {
            node: format!("{node:?}"),
            parent: format!("{parent:?}"),
        }
    }
}
