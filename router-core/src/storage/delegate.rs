//! Storage delegate.
//!
//! The delegate is the presentation layer's window into storage changes.
//! Storage holds it weakly: the caller owns the delegate, and a dropped
//! delegate simply stops receiving notifications.

use std::rc::Rc;

use super::NodeDataStorage;
use crate::node::Node;

/// Observer notified of data and resolved-state changes.
///
/// All methods have empty default bodies so implementors only override what
/// they need. Callbacks receive shared access to the storage and therefore
/// cannot start another recomputation pass from inside a notification.
pub trait NodeDataStorageDelegate<N: Node, D> {
    /// Data was just created for `node`.
    fn did_create_data(&self, _storage: &NodeDataStorage<N, D>, _node: &N, _data: &Rc<D>) {}

    /// Data for `node` is about to be discarded.
    ///
    /// The storage still reports the data as present during this call.
    fn will_reset_data(&self, _storage: &NodeDataStorage<N, D>, _node: &N, _data: &Rc<D>) {}

    /// The resolved state of `node` changed.
    ///
    /// The new state is available through
    /// [`NodeDataStorage::resolved_state_for_node`].
    fn did_change_resolved_state(&self, _storage: &NodeDataStorage<N, D>, _node: &N) {}
}
