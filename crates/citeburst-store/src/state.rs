//! Application state snapshot and the transition function.
//!
//! There is no mode enum; the state machine is defined entirely by
//! which derived fields each event recomputes:
//!
//! | Event        | Recomputes                                        |
//! |--------------|---------------------------------------------------|
//! | `LoadRaw`    | everything (tree rebuilt, selection reset to all) |
//! | `SetRoot`    | derived tree, root parent path, hover cleared     |
//! | `SelectIds`  | derived tree only                                 |
//! | `HoverNode`  | hover fields only                                 |
//!
//! Transitions are all-or-nothing: every fallible step (id resolution,
//! tree build, derived-tree recompute) runs before the first field is
//! written, so a failed action leaves the previous state bit-identical.

use std::collections::HashSet;

use citeburst_tree::{
    Citation, CitationTree, build, filter, parent_id_set, parent_path_ids,
};

use crate::action::Action;
use crate::selection::Selection;
use crate::{StoreError, StoreResult};

/// One snapshot of the application state.
///
/// `raw`, `full_tree` and the id table inside it are replaced wholesale
/// on load and otherwise never mutated; derived fields are recomputed
/// per the transition table above.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    raw: Vec<Citation>,
    full_tree: CitationTree,
    root_id: String,
    selection: Selection,
    derived_tree: Option<CitationTree>,
    root_parent_path: Vec<String>,
    hovered_node_id: Option<String>,
    hovered_node_parent_ids: Option<HashSet<String>>,
}

impl AppState {
    /// Empty state: a root-only tree, everything selected, no hover.
    #[must_use]
    pub fn new() -> Self {
        let full_tree = CitationTree::new();
        Self {
            raw: Vec::new(),
            root_id: full_tree.root_id().to_string(),
            selection: Selection::all_of(&full_tree),
            derived_tree: Some(full_tree.clone()),
            root_parent_path: Vec::new(),
            hovered_node_id: None,
            hovered_node_parent_ids: None,
            full_tree,
        }
    }

    /// Apply one event, recomputing exactly the fields it invalidates.
    pub fn apply(&mut self, action: Action) -> StoreResult<()> {
        match action {
            Action::LoadRaw(records) => self.load_raw(records),
            Action::SetRoot(id) => self.set_root(id),
            Action::SelectIds(selection) => self.select_ids(selection),
            Action::HoverNode(id) => self.hover_node(id),
        }
    }

    fn load_raw(&mut self, records: Vec<Citation>) -> StoreResult<()> {
        let full_tree = build(&records)?;
        self.raw = records;
        self.root_id = full_tree.root_id().to_string();
        self.selection = Selection::all_of(&full_tree);
        self.derived_tree = Some(full_tree.clone());
        self.root_parent_path = Vec::new();
        self.hovered_node_id = None;
        self.hovered_node_parent_ids = None;
        self.full_tree = full_tree;
        Ok(())
    }

    fn set_root(&mut self, id: String) -> StoreResult<()> {
        let node = self.full_tree.node(&id)?;
        let root_parent_path = parent_path_ids(&self.full_tree, node);
        let derived_tree = self.derive_tree(&id)?;

        self.root_id = id;
        self.derived_tree = derived_tree;
        self.root_parent_path = root_parent_path;
        // Hover context from the previous subtree must not leak across
        // a root change.
        self.hovered_node_id = None;
        self.hovered_node_parent_ids = None;
        Ok(())
    }

    fn select_ids(&mut self, selection: Selection) -> StoreResult<()> {
        let previous = std::mem::replace(&mut self.selection, selection);
        match self.derive_tree(&self.root_id) {
            Ok(derived) => {
                self.derived_tree = derived;
                Ok(())
            }
            Err(err) => {
                self.selection = previous;
                Err(err)
            }
        }
    }

    fn hover_node(&mut self, id: Option<String>) -> StoreResult<()> {
        match id {
            Some(id) => {
                let node = self.full_tree.node(&id)?;
                self.hovered_node_parent_ids = Some(parent_id_set(&self.full_tree, node));
                self.hovered_node_id = Some(id);
            }
            None => {
                self.hovered_node_id = None;
                self.hovered_node_parent_ids = None;
            }
        }
        Ok(())
    }

    /// Subtree at `root_id`, pruned by the current selection.
    ///
    /// Recomputed from the requested root's subtree each time, so
    /// selected ids outside that subtree simply never match. The
    /// selection sets themselves are left untouched by root changes.
    fn derive_tree(&self, root_id: &str) -> StoreResult<Option<CitationTree>> {
        let selection = &self.selection;
        Ok(filter(&self.full_tree, root_id, |node| {
            selection.includes(&node.id)
        })?)
    }

    /// The raw records the current tree was built from.
    #[must_use]
    pub fn raw(&self) -> &[Citation] {
        &self.raw
    }

    /// The complete, unfiltered aggregation tree.
    #[must_use]
    pub fn full_tree(&self) -> &CitationTree {
        &self.full_tree
    }

    /// Id of the node currently treated as the display root.
    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Current selection sets.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Subtree at the display root pruned by the selection; `None` when
    /// the root itself is deselected.
    #[must_use]
    pub fn derived_tree(&self) -> Option<&CitationTree> {
        self.derived_tree.as_ref()
    }

    /// Ancestor ids of the display root, nearest first.
    #[must_use]
    pub fn root_parent_path(&self) -> &[String] {
        &self.root_parent_path
    }

    /// Currently hovered node id, if any.
    #[must_use]
    pub fn hovered_node_id(&self) -> Option<&str> {
        self.hovered_node_id.as_deref()
    }

    /// Ancestor ids of the hovered node; `None` when nothing is hovered.
    #[must_use]
    pub fn hovered_node_parent_ids(&self) -> Option<&HashSet<String>> {
        self.hovered_node_parent_ids.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
