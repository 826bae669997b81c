//! Fully/half selection sets from the checkbox tree.

use std::collections::HashSet;

use citeburst_tree::CitationTree;

/// User-controlled inclusion state.
///
/// `fully` holds ids whose whole subtree is checked, `half` ids with a
/// mix of checked and unchecked descendants. For derived-tree filtering
/// the two are equivalent: a node survives when its id is in either set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub fully: HashSet<String>,
    pub half: HashSet<String>,
}

impl Selection {
    /// Selection with explicit fully/half sets.
    #[must_use]
    pub fn new(fully: HashSet<String>, half: HashSet<String>) -> Self {
        Self { fully, half }
    }

    /// Every id of `tree` fully selected — the post-load default.
    #[must_use]
    pub fn all_of(tree: &CitationTree) -> Self {
        Self {
            fully: tree.ids().map(str::to_string).collect(),
            half: HashSet::new(),
        }
    }

    /// Whether the node at `id` survives selection filtering.
    #[must_use]
    pub fn includes(&self, id: &str) -> bool {
        self.fully.contains(id) || self.half.contains(id)
    }
}
