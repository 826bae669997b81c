//! Arena-backed aggregation tree.
//!
//! A [`CitationTree`] is one immutable snapshot of the aggregation: a
//! single id-keyed node table plus the root id. Parent/child relations
//! are id references into the table, never live references, which keeps
//! snapshots cheap to clone, trivially serializable, and free of
//! aliasing between state versions.
//!
//! # Design Invariants
//!
//! 1. **Closed id space**: every `parent` and child id stored in a node
//!    resolves within the same snapshot's table (the filter codec
//!    maintains this when pruning).
//! 2. **Single root**: exactly one node has `parent: None`, and it is
//!    the node at `root_id`.
//! 3. **Loud lookups**: callers that require a node use [`CitationTree::node`],
//!    which fails with `TreeError::NotFound` instead of silently skipping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node::{NodeKind, TreeNode, YearRange};
use crate::{TreeError, TreeResult};

/// Id of the synthetic root node.
pub const ROOT_ID: &str = "/";

/// Display name of the synthetic root node.
pub const ROOT_NAME: &str = "Universities";

/// One snapshot of the aggregation tree.
///
/// The node table doubles as the id map: all O(1) node lookups go
/// through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationTree {
    nodes: HashMap<String, TreeNode>,
    root_id: String,
}

impl CitationTree {
    /// Create a tree containing only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        let root = TreeNode {
            id: ROOT_ID.to_string(),
            parent: None,
            kind: NodeKind::Root,
            name: ROOT_NAME.to_string(),
            year_range: YearRange::EMPTY,
            value: 0,
            children: Some(Vec::new()),
        };
        let mut nodes = HashMap::new();
        nodes.insert(root.id.clone(), root);
        Self {
            nodes,
            root_id: ROOT_ID.to_string(),
        }
    }

    /// Create a tree from a prepared node table and root id.
    ///
    /// Used by the codec when rebuilding pruned snapshots. The root id
    /// must be present in the table.
    pub(crate) fn from_parts(nodes: HashMap<String, TreeNode>, root_id: String) -> Self {
        debug_assert!(nodes.contains_key(&root_id));
        Self { nodes, root_id }
    }

    /// Id of this snapshot's root node.
    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        // Invariant 2: the root id always resolves.
        &self.nodes[&self.root_id]
    }

    /// Look up a node, `None` when absent.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Look up a node that must exist.
    pub fn node(&self, id: &str) -> TreeResult<&TreeNode> {
        self.nodes.get(id).ok_or_else(|| TreeError::NotFound {
            id: id.to_string(),
        })
    }

    /// Whether `id` resolves in this snapshot.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the synthetic root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over every node id in the table.
    ///
    /// Order is unspecified (hash order); callers needing render order
    /// use [`flatten`](crate::flatten).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Mutable access for the builder and codec.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id)
    }

    /// Insert a node into the table, returning any displaced node.
    pub(crate) fn insert(&mut self, node: TreeNode) -> Option<TreeNode> {
        self.nodes.insert(node.id.clone(), node)
    }
}

impl Default for CitationTree {
    fn default() -> Self {
        Self::new()
    }
}
