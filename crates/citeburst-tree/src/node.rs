//! Node types shared across the aggregation tree and its derived views.

use serde::{Deserialize, Serialize};

/// Aggregation level of a tree node.
///
/// Depth is fixed by construction: `Root` is always depth 0 and `Person`
/// nodes are always leaves at depth 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    University,
    Faculty,
    Department,
    Person,
}

impl NodeKind {
    /// Whether nodes of this kind carry children.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Person)
    }
}

/// Inclusive year bounds of the records folded into a node.
///
/// Starts at the empty sentinel (`min > max`) and only ever widens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// The empty range: no record has contributed yet.
    pub const EMPTY: Self = Self {
        min: i32::MAX,
        max: i32::MIN,
    };

    /// Range covering a single year.
    #[must_use]
    pub const fn single(year: i32) -> Self {
        Self {
            min: year,
            max: year,
        }
    }

    /// Whether any record has contributed to this range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widen the range to include `year`.
    pub fn widen(&mut self, year: i32) {
        if year < self.min {
            self.min = year;
        }
        if year > self.max {
            self.max = year;
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A node of the aggregation tree.
///
/// Nodes live in an id-keyed arena ([`CitationTree`](crate::CitationTree));
/// `parent` and `children` hold ids into that arena, never references, so
/// snapshots can be cloned and shared without aliasing hazards.
/// `children: None` marks a leaf (person); `Some(vec![])` is only seen
/// transiently during construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    /// Parent node id; `None` only for a (possibly detached) root.
    pub parent: Option<String>,
    pub kind: NodeKind,
    /// Display label.
    pub name: String,
    /// Union of contributing records' years.
    pub year_range: YearRange,
    /// Citation total of this node's subtree (own records for a leaf).
    pub value: u64,
    /// Child ids in first-seen order; `None` for leaves.
    pub children: Option<Vec<String>>,
}

impl TreeNode {
    /// Whether this node is a leaf (no child list).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Child ids, empty for leaves.
    #[must_use]
    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A node as handed to the chart renderer: no recursion, camelCase wire
/// names, and the aggregate/own distinction made explicit.
///
/// Aggregate nodes carry `grouped_value` (their subtree total) and leaves
/// carry `value`, so the chart can size arcs without re-summing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    pub id: String,
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    pub year_range: YearRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped_value: Option<u64>,
}
