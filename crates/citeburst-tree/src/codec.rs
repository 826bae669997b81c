//! Pure conversions between tree snapshots and their derived views.
//!
//! Three codecs, all non-destructive:
//!
//! - [`flatten`] - BFS level-order array for renderers that cannot walk
//!   recursive structures (the sunburst chart).
//! - [`filter`] - prune a subtree to nodes passing a predicate,
//!   producing a fresh detached snapshot (selection filtering).
//! - [`clone_shallow`] - detach a single node from its ancestry.
//!
//! # Design Invariants
//!
//! 1. **Parent before child**: `flatten` emits every non-start node
//!    strictly after its parent; sibling order is the original child
//!    order.
//! 2. **Prune at first failure**: `filter` never promotes orphans — a
//!    failing node drops its entire subtree, so membership in the output
//!    implies an unbroken chain of passing ancestors.
//! 3. **Detached outputs**: the start node is emitted/rebuilt with
//!    `parent: None`, so consumers cannot walk back above the chosen
//!    root.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::error;

use crate::node::{FlatNode, TreeNode};
use crate::tree::CitationTree;
use crate::TreeResult;

/// Flatten the subtree at `start` into BFS level order.
///
/// The start node is treated as a fresh root (`parent: None`).
/// Aggregate nodes carry `grouped_value`, leaves carry `value`. A
/// `processed` set guards against revisiting an id already enqueued; a
/// well-formed snapshot never triggers it, but the guard stays as cheap
/// protection against cyclic input.
pub fn flatten(tree: &CitationTree, start: &str) -> TreeResult<Vec<FlatNode>> {
    let start_node = tree.node(start)?;

    let mut out = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<&TreeNode> = VecDeque::new();
    let mut processed: HashSet<&str> = HashSet::new();
    queue.push_back(start_node);
    processed.insert(start_node.id.as_str());

    while let Some(node) = queue.pop_front() {
        let is_start = node.id == start_node.id;
        let mut flat = FlatNode {
            id: node.id.clone(),
            parent: if is_start { None } else { node.parent.clone() },
            kind: node.kind,
            name: node.name.clone(),
            year_range: node.year_range,
            value: None,
            grouped_value: None,
        };
        if node.is_leaf() {
            flat.value = Some(node.value);
        } else {
            flat.grouped_value = Some(node.value);
        }
        out.push(flat);

        for child_id in node.child_ids() {
            if !processed.insert(child_id.as_str()) {
                continue;
            }
            match tree.get(child_id) {
                Some(child) => queue.push_back(child),
                // Table and child list out of sync; degrade, don't crash.
                None => error!(id = %child_id, "flatten: child id missing from node table"),
            }
        }
    }
    Ok(out)
}

/// Prune the subtree at `start` to nodes passing `predicate`.
///
/// Returns `Ok(None)` when the start node itself fails. Otherwise the
/// result is a new snapshot containing exactly the surviving connected
/// subtree, every surviving node shallow-cloned and re-attached under
/// its surviving parent; children of a failing node are dropped with it.
pub fn filter<P>(tree: &CitationTree, start: &str, predicate: P) -> TreeResult<Option<CitationTree>>
where
    P: Fn(&TreeNode) -> bool,
{
    let start_node = tree.node(start)?;
    if !predicate(start_node) {
        return Ok(None);
    }

    let mut nodes: HashMap<String, TreeNode> = HashMap::new();
    let mut root = clone_common(start_node);
    root.parent = None;
    let root_id = root.id.clone();
    nodes.insert(root_id.clone(), root);

    let mut queue: VecDeque<&TreeNode> = VecDeque::new();
    let mut processed: HashSet<&str> = HashSet::new();
    queue.push_back(start_node);
    processed.insert(start_node.id.as_str());

    while let Some(node) = queue.pop_front() {
        for child_id in node.child_ids() {
            if !processed.insert(child_id.as_str()) {
                continue;
            }
            let Some(child) = tree.get(child_id) else {
                error!(id = %child_id, "filter: child id missing from node table");
                continue;
            };
            if !predicate(child) {
                continue;
            }
            let mut clone = clone_common(child);
            clone.parent = Some(node.id.clone());
            nodes.insert(clone.id.clone(), clone);
            if let Some(parent) = nodes.get_mut(&node.id)
                && let Some(children) = parent.children.as_mut()
            {
                children.push(child_id.clone());
            }
            queue.push_back(child);
        }
    }

    Ok(Some(CitationTree::from_parts(nodes, root_id)))
}

/// Copy a node without its ancestry or descendants.
///
/// Scalars are kept; `parent` and `children` are cleared so the clone
/// can stand alone as a display root.
#[must_use]
pub fn clone_shallow(node: &TreeNode) -> TreeNode {
    let mut clone = clone_common(node);
    clone.parent = None;
    clone.children = None;
    clone
}

/// Copy scalars, keep the parent id, reset children to an empty list
/// (kept `None` for leaves).
fn clone_common(node: &TreeNode) -> TreeNode {
    TreeNode {
        id: node.id.clone(),
        parent: node.parent.clone(),
        kind: node.kind,
        name: node.name.clone(),
        year_range: node.year_range,
        value: node.value,
        children: node.children.as_ref().map(|_| Vec::new()),
    }
}
