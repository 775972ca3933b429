//! Integration Tests for Node Data Storage
//!
//! These tests walk through complete navigation scenarios against the public
//! façade and check the notifications a presentation layer would observe.

use std::cell::RefCell;
use std::rc::Rc;

use router_core::{NodeDataStorage, NodeDataStorageDelegate, NodeId, NodeState, NodeTree};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Created(NodeId),
    WillReset(NodeId),
    Changed(NodeId),
}

#[derive(Default)]
struct EventLog {
    events: RefCell<Vec<Event>>,
}

impl EventLog {
    fn take(&self) -> Vec<Event> {
        self.events.take()
    }
}

impl NodeDataStorageDelegate<NodeId, Screen> for EventLog {
    fn did_create_data(&self, _storage: &NodeDataStorage<NodeId, Screen>, node: &NodeId, _data: &Rc<Screen>) {
        self.events.borrow_mut().push(Event::Created(*node));
    }

    fn will_reset_data(&self, _storage: &NodeDataStorage<NodeId, Screen>, node: &NodeId, _data: &Rc<Screen>) {
        self.events.borrow_mut().push(Event::WillReset(*node));
    }

    fn did_change_resolved_state(&self, _storage: &NodeDataStorage<NodeId, Screen>, node: &NodeId) {
        self.events.borrow_mut().push(Event::Changed(*node));
    }
}

/// Stand-in for presentation content backing a node.
#[derive(Debug)]
struct Screen {
    title: String,
}

fn setup() -> (NodeDataStorage<NodeId, Screen>, Rc<EventLog>) {
    let mut storage = NodeDataStorage::new(|node: &NodeId| Screen {
        title: format!("screen {node}"),
    });
    let log = Rc::new(EventLog::default());
    storage.set_delegate(&log);
    (storage, log)
}

/// Root A with child B: explicit creation of A, then a pass over {A, B}.
#[test]
fn root_and_child_initialize_in_order() {
    let (mut storage, log) = setup();
    let (a, b) = (NodeId::new(), NodeId::new());

    let mut tree = NodeTree::new(a);
    tree.insert(&a, b).unwrap();

    storage.data_for_node(&a);
    storage.update_resolved_state_for_affected_node_tree(&tree);

    assert_eq!(
        log.take(),
        vec![
            Event::Created(a),
            Event::Created(b),
            Event::Changed(a),
            Event::Changed(b),
        ]
    );
    assert_eq!(storage.resolved_state_for_node(&a), NodeState::Initialized);
    assert_eq!(storage.resolved_state_for_node(&b), NodeState::Initialized);
    assert_eq!(storage.data_for_node(&b).title, format!("screen {b}"));
}

/// Resetting a child only affects the child.
#[test]
fn resetting_child_clears_only_the_child() {
    let (mut storage, log) = setup();
    let (a, b) = (NodeId::new(), NodeId::new());

    let mut tree = NodeTree::new(a);
    tree.insert(&a, b).unwrap();
    storage.update_resolved_state_for_affected_node_tree(&tree);
    log.take();

    storage.reset_data_for_node(&b);

    assert_eq!(log.take(), vec![Event::WillReset(b)]);
    assert!(!storage.has_data_for_node(&b));
    assert_eq!(storage.resolved_state_for_node(&b), NodeState::NotInitialized);
    assert_eq!(storage.resolved_state_for_node(&a), NodeState::Initialized);
    assert!(storage.has_data_for_node(&a));
}

/// A lone root recomputed twice only reports changes the first time.
#[test]
fn second_pass_over_same_tree_is_silent() {
    let (mut storage, log) = setup();
    let a = NodeId::new();
    let tree = NodeTree::new(a);

    storage.update_resolved_state_for_affected_node_tree(&tree);
    assert_eq!(log.take(), vec![Event::Created(a), Event::Changed(a)]);

    let changed = storage.update_resolved_state_for_affected_node_tree(&tree);
    assert!(changed.is_empty());
    assert!(log.take().is_empty());
}

/// A child replaced by a sibling in its slot is demoted and loses its data.
#[test]
fn superseded_child_is_demoted_and_reset() {
    let (mut storage, log) = setup();
    let (a, b, c) = (NodeId::new(), NodeId::new(), NodeId::new());

    let mut before = NodeTree::new(a);
    before.insert(&a, b).unwrap();
    storage.update_resolved_state_for_affected_node_tree(&before);
    let old_data = storage.data_for_node(&b);
    log.take();

    let mut after = NodeTree::new(a);
    after.insert_superseded(&a, b).unwrap();
    after.insert(&a, c).unwrap();
    let changed = storage.update_resolved_state_for_affected_node_tree(&after);

    assert_eq!(changed, vec![b, c]);
    assert_eq!(
        log.take(),
        vec![
            Event::WillReset(b),
            Event::Created(c),
            Event::Changed(b),
            Event::Changed(c),
        ]
    );
    assert_eq!(storage.resolved_state_for_node(&b), NodeState::NotInitialized);
    assert!(!storage.has_data_for_node(&b));

    // The old data stays usable by whoever still holds it.
    assert_eq!(old_data.title, format!("screen {b}"));
}

/// Data lifetime follows explicit calls.
#[test]
fn data_exists_between_first_access_and_reset() {
    let (mut storage, _log) = setup();
    let n = NodeId::new();

    assert!(!storage.has_data_for_node(&n));
    let first = storage.data_for_node(&n);
    assert!(storage.has_data_for_node(&n));
    let second = storage.data_for_node(&n);
    assert!(Rc::ptr_eq(&first, &second));

    storage.reset_data_for_node(&n);
    assert!(!storage.has_data_for_node(&n));
    assert_eq!(storage.resolved_state_for_node(&n), NodeState::NotInitialized);

    let third = storage.data_for_node(&n);
    assert!(!Rc::ptr_eq(&first, &third));
}

/// Resetting or querying an unknown node does nothing.
#[test]
fn unknown_nodes_are_no_ops() {
    let (mut storage, log) = setup();
    let n = NodeId::new();

    storage.reset_data_for_node(&n);
    assert_eq!(storage.resolved_state_for_node(&n), NodeState::NotInitialized);
    assert!(storage.resolved_initialized_nodes().is_empty());
    assert!(log.take().is_empty());
}

/// A child cannot initialize below a parent that is not initialized.
#[test]
fn children_are_gated_by_their_parent() {
    let (mut storage, log) = setup();
    let (outside, a, b) = (NodeId::new(), NodeId::new(), NodeId::new());

    let mut tree = NodeTree::anchored(a, outside);
    tree.insert(&a, b).unwrap();
    let changed = storage.update_resolved_state_for_affected_node_tree(&tree);

    assert!(changed.is_empty());
    assert_eq!(storage.resolved_state_for_node(&a), NodeState::NotInitialized);
    assert_eq!(storage.resolved_state_for_node(&b), NodeState::NotInitialized);
    assert!(!storage.has_data_for_node(&b));
    assert!(log.take().is_empty());
}

/// Nodes outside the affected tree keep their state and receive no events.
#[test]
fn passes_never_touch_nodes_outside_the_tree() {
    let (mut storage, log) = setup();
    let (root, left, right, leaf) = (NodeId::new(), NodeId::new(), NodeId::new(), NodeId::new());

    let mut full = NodeTree::new(root);
    full.insert(&root, left).unwrap();
    full.insert(&root, right).unwrap();
    storage.update_resolved_state_for_affected_node_tree(&full);
    log.take();

    // Only the right branch changed: a leaf was pushed under it.
    let mut affected = NodeTree::anchored(right, root);
    affected.insert(&right, leaf).unwrap();
    let changed = storage.update_resolved_state_for_affected_node_tree(&affected);

    assert_eq!(changed, vec![leaf]);
    assert_eq!(log.take(), vec![Event::Created(leaf), Event::Changed(leaf)]);
    assert_eq!(storage.resolved_state_for_node(&left), NodeState::Initialized);
}

/// Removed nodes reported as detached are demoted and reset.
#[test]
fn detached_nodes_are_demoted_and_reset() {
    let (mut storage, log) = setup();
    let (root, child, grandchild) = (NodeId::new(), NodeId::new(), NodeId::new());

    let mut full = NodeTree::new(root);
    full.insert(&root, child).unwrap();
    full.insert(&child, grandchild).unwrap();
    storage.update_resolved_state_for_affected_node_tree(&full);
    log.take();

    let mut removal = NodeTree::new(root);
    removal.detach(child).unwrap();
    removal.insert(&child, grandchild).unwrap();
    let changed = storage.update_resolved_state_for_affected_node_tree(&removal);

    assert_eq!(changed, vec![child, grandchild]);
    assert_eq!(
        log.take(),
        vec![
            Event::WillReset(child),
            Event::WillReset(grandchild),
            Event::Changed(child),
            Event::Changed(grandchild),
        ]
    );
    assert_eq!(storage.resolved_initialized_nodes().len(), 1);
    assert!(storage.resolved_initialized_nodes().contains(&root));
}
