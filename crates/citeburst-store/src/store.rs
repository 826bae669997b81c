//! The store: state, dispatch, and ordered subscriber fan-out.
//!
//! Dispatch is synchronous and single-writer (`&mut self` is the
//! serialization point), so concurrent event submission is impossible
//! by construction. After a transition commits, every subscriber
//! observes the new state in registration order; a failed transition
//! notifies nobody.
//!
//! # Subscriber lifecycle
//!
//! `subscribe` returns a [`SubscriberId`]; `unsubscribe` releases it.
//! Dropping the store releases every remaining subscriber. Ids are
//! never reused within one store.

use citeburst_tree::FlatNode;
use tracing::{debug, error, warn};

use crate::action::Action;
use crate::state::AppState;
use crate::{StoreResult, Selection};

/// Handle identifying one registered subscriber.
pub type SubscriberId = u64;

type Callback = Box<dyn FnMut(&AppState)>;

/// Application store: one [`AppState`] plus its subscribers.
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<(SubscriberId, Callback)>,
    next_subscriber: SubscriberId,
}

impl Store {
    /// Store with empty state and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current state snapshot.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action and, on success, notify every subscriber in
    /// registration order with the committed state.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        let name = action.name();
        if let Err(err) = self.state.apply(action) {
            warn!(action = name, %err, "transition rejected, state unchanged");
            return Err(err);
        }
        debug!(
            action = name,
            root = self.state.root_id(),
            subscribers = self.subscribers.len(),
            "transition committed"
        );
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
        Ok(())
    }

    /// Register a callback invoked after every committed transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&AppState) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` when the id was already
    /// released (safe to call from teardown paths twice).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    // --- View-adapter surface ---------------------------------------

    /// Chart callback: clicking an arc re-roots the view at that node.
    pub fn on_node_clicked(&mut self, id: impl Into<String>) -> StoreResult<()> {
        self.dispatch(Action::SetRoot(id.into()))
    }

    /// Tree-browser callback: selecting a row re-roots the view.
    pub fn on_row_selected(&mut self, id: impl Into<String>) -> StoreResult<()> {
        self.dispatch(Action::SetRoot(id.into()))
    }

    /// Chart callback: hover moved onto a node (or off, with `None`).
    pub fn on_node_hovered(&mut self, id: Option<String>) -> StoreResult<()> {
        self.dispatch(Action::HoverNode(id))
    }

    /// Checkbox-tree callback: the selection changed.
    pub fn on_selection_changed(&mut self, selection: Selection) -> StoreResult<()> {
        self.dispatch(Action::SelectIds(selection))
    }

    /// The flattened derived tree, ready for the chart renderer.
    ///
    /// Empty when the derived tree is empty (display root deselected).
    #[must_use]
    pub fn chart_nodes(&self) -> Vec<FlatNode> {
        let Some(derived) = self.state.derived_tree() else {
            return Vec::new();
        };
        match citeburst_tree::flatten(derived, derived.root_id()) {
            Ok(nodes) => nodes,
            Err(err) => {
                // The derived root always resolves in its own snapshot;
                // reaching this means the snapshot is corrupt.
                error!(%err, "failed to flatten derived tree");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
