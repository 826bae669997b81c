//! Lazy ancestor walks over parent ids.
//!
//! Ancestor chains power hover highlighting and breadcrumb display.
//! Depth is bounded by construction (at most 4 ancestors), so callers
//! collect eagerly; the iterator exists so a data-integrity fault can
//! truncate the walk instead of crashing it.

use std::collections::HashSet;

use tracing::error;

use crate::node::TreeNode;
use crate::tree::CitationTree;

/// Iterator over a node's ancestors, nearest first.
///
/// Walks `parent` ids through the caller-supplied lookup. If a parent
/// id fails to resolve the tree and its id table are out of sync; the
/// fault is logged and the walk ends at the last good ancestor —
/// truncated, not crashed.
pub struct ParentPath<'a, F>
where
    F: Fn(&str) -> Option<&'a TreeNode>,
{
    next_id: Option<String>,
    lookup: F,
}

impl<'a, F> ParentPath<'a, F>
where
    F: Fn(&str) -> Option<&'a TreeNode>,
{
    /// Start a walk at `node`'s parent.
    pub fn new(node: &TreeNode, lookup: F) -> Self {
        Self {
            next_id: node.parent.clone(),
            lookup,
        }
    }
}

impl<'a, F> Iterator for ParentPath<'a, F>
where
    F: Fn(&str) -> Option<&'a TreeNode>,
{
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next_id.take()?;
        match (self.lookup)(&id) {
            Some(node) => {
                self.next_id = node.parent.clone();
                Some(node)
            }
            None => {
                error!(id = %id, "parent traversal: node not found, truncating path");
                None
            }
        }
    }
}

/// Ancestor ids of `node` in nearest-first order.
#[must_use]
pub fn parent_path_ids(tree: &CitationTree, node: &TreeNode) -> Vec<String> {
    ParentPath::new(node, |id| tree.get(id))
        .map(|n| n.id.clone())
        .collect()
}

/// Ancestor ids of `node` as a set, for membership-style highlighting.
#[must_use]
pub fn parent_id_set(tree: &CitationTree, node: &TreeNode) -> HashSet<String> {
    ParentPath::new(node, |id| tree.get(id))
        .map(|n| n.id.clone())
        .collect()
}
