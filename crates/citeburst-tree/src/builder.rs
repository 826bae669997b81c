//! Single-pass tree construction from raw citation records.
//!
//! The builder folds records left to right; the arena's node table is
//! the only "have I seen this key" state. Child order is first-seen,
//! which fixes render order for identical input order across reloads.
//!
//! A malformed record aborts the whole build: partial trees from
//! partially-bad input are explicitly unsupported, so callers can treat
//! a returned tree as a complete aggregation of all its input.

use tracing::debug;

use crate::citation::Citation;
use crate::identity::{display_name, node_id};
use crate::node::{NodeKind, TreeNode, YearRange};
use crate::tree::CitationTree;
use crate::TreeResult;

/// Fold `records` into an aggregation tree.
///
/// Empty input yields a root-only tree with value 0 and an empty year
/// range. Errors never yield a partial tree.
pub fn build(records: &[Citation]) -> TreeResult<CitationTree> {
    let mut tree = CitationTree::new();

    for (index, record) in records.iter().enumerate() {
        // Derive every id up front so a malformed record fails before
        // any node for it is created.
        let university_id = node_id(NodeKind::University, record, index)?;
        let faculty_id = node_id(NodeKind::Faculty, record, index)?;
        let department_id = node_id(NodeKind::Department, record, index)?;
        let person_id = node_id(NodeKind::Person, record, index)?;

        let root_id = tree.root_id().to_string();
        fold_level(&mut tree, &university_id, &root_id, NodeKind::University, record);
        fold_level(&mut tree, &faculty_id, &university_id, NodeKind::Faculty, record);
        fold_level(&mut tree, &department_id, &faculty_id, NodeKind::Department, record);
        fold_leaf(&mut tree, &person_id, &department_id, record);

        if let Some(root) = tree.get_mut(&root_id) {
            root.value += record.pubs;
            root.year_range.widen(record.year);
        }
    }

    debug!(
        records = records.len(),
        nodes = tree.len(),
        total = tree.root().value,
        "built aggregation tree"
    );
    Ok(tree)
}

/// Get-or-create an org-level node and fold the record into it.
fn fold_level(
    tree: &mut CitationTree,
    id: &str,
    parent_id: &str,
    kind: NodeKind,
    record: &Citation,
) {
    if let Some(node) = tree.get_mut(id) {
        node.value += record.pubs;
        node.year_range.widen(record.year);
        return;
    }
    let node = TreeNode {
        id: id.to_string(),
        parent: Some(parent_id.to_string()),
        kind,
        name: display_name(kind, record),
        year_range: YearRange::single(record.year),
        value: record.pubs,
        children: Some(Vec::new()),
    };
    attach(tree, node, parent_id);
}

/// Create (or fold into) the person leaf for this record.
///
/// Leaves are created per record, deduplicated only by the year-scoped
/// person id: a second record for the same person and year folds into
/// the existing leaf rather than shadowing it in the id table.
fn fold_leaf(tree: &mut CitationTree, id: &str, parent_id: &str, record: &Citation) {
    if let Some(node) = tree.get_mut(id) {
        node.value += record.pubs;
        node.year_range.widen(record.year);
        return;
    }
    let node = TreeNode {
        id: id.to_string(),
        parent: Some(parent_id.to_string()),
        kind: NodeKind::Person,
        name: display_name(NodeKind::Person, record),
        year_range: YearRange::single(record.year),
        value: record.pubs,
        children: None,
    };
    attach(tree, node, parent_id);
}

fn attach(tree: &mut CitationTree, node: TreeNode, parent_id: &str) {
    let id = node.id.clone();
    tree.insert(node);
    if let Some(parent) = tree.get_mut(parent_id) {
        if let Some(children) = parent.children.as_mut() {
            children.push(id);
        }
    }
}
