//! Deterministic node identity and display names.
//!
//! Ids must be stable across rebuilds of the same input so that render
//! order, selections, and hover state survive a reload. Org-level ids
//! are deliberately human-debuggable: a one-character level tag plus the
//! short code most institution labels carry in a trailing parenthetical,
//! e.g. `"Some School (ABC)"` → `"uABC"` at the university level. Labels
//! without a well-formed parenthetical fall back to the full field text.
//!
//! Person ids are year-scoped (`p{id}_{year}`): the same person cited in
//! two different years is two distinct leaves.

use crate::citation::Citation;
use crate::node::NodeKind;
use crate::{TreeError, TreeResult};

/// Extract the short code from a trailing parenthetical, if present.
///
/// Accepts only a non-empty run of alphanumeric/underscore characters
/// between `(` and a final `)`; anything else returns `None` and the
/// caller falls back to the full label.
#[must_use]
pub fn short_code(label: &str) -> Option<&str> {
    let trimmed = label.trim_end();
    let rest = trimmed.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let code = &rest[open + 1..];
    if code.is_empty() || !code.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some(code)
}

fn org_field(kind: NodeKind, record: &Citation) -> (&'static str, &str) {
    match kind {
        NodeKind::University => ("university", &record.university),
        NodeKind::Faculty => ("faculty", &record.faculty),
        NodeKind::Department => ("department", &record.department),
        _ => unreachable!("org_field is only called for org levels"),
    }
}

const fn level_tag(kind: NodeKind) -> char {
    match kind {
        NodeKind::University => 'u',
        NodeKind::Faculty => 'f',
        NodeKind::Department => 'd',
        NodeKind::Person => 'p',
        NodeKind::Root => '/',
    }
}

/// Derive the aggregation id of `record` at `kind`.
///
/// `index` is the record's position in the input, used only for error
/// reporting. Fails when the backing field is empty: an id derived from
/// an empty label would collapse unrelated records into one node.
pub fn node_id(kind: NodeKind, record: &Citation, index: usize) -> TreeResult<String> {
    match kind {
        NodeKind::University | NodeKind::Faculty | NodeKind::Department => {
            let (field, label) = org_field(kind, record);
            if label.trim().is_empty() {
                return Err(TreeError::MalformedRecord { index, field });
            }
            let code = short_code(label).unwrap_or(label);
            Ok(format!("{}{code}", level_tag(kind)))
        }
        NodeKind::Person => {
            if record.id.trim().is_empty() {
                return Err(TreeError::MalformedRecord { index, field: "id" });
            }
            Ok(format!("p{}_{}", record.id, record.year))
        }
        NodeKind::Root => Ok(crate::tree::ROOT_ID.to_string()),
    }
}

/// Display name of `record` at `kind`.
///
/// Org levels show the raw field text; persons are year-qualified so two
/// leaves for the same person remain distinguishable.
#[must_use]
pub fn display_name(kind: NodeKind, record: &Citation) -> String {
    match kind {
        NodeKind::University => record.university.clone(),
        NodeKind::Faculty => record.faculty.clone(),
        NodeKind::Department => record.department.clone(),
        NodeKind::Person => format!("{} ({})", record.name, record.year),
        NodeKind::Root => crate::tree::ROOT_NAME.to_string(),
    }
}
