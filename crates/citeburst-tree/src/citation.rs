//! Raw citation records and strict JSON loading.
//!
//! A [`Citation`] is one row of the flat input the aggregation tree is
//! built from. Loading is deliberately strict: a single malformed record
//! fails the whole load, because a partially built tree would silently
//! under-report aggregate counts.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `TreeError::Parse` | Missing field, wrong type | Whole load rejected |
//! | `TreeError::MalformedRecord` | Field present but empty (caught later, in the builder) | Whole build rejected |

use serde::{Deserialize, Serialize};

use crate::{TreeError, TreeResult};

/// A single citation record as supplied by the data source.
///
/// Field presence is enforced at parse time; emptiness of the org fields
/// is enforced by the builder when ids are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source-assigned person identifier. Opaque; only used for leaf ids.
    pub id: String,
    /// Person display name.
    pub name: String,
    /// Publication year of the cited work.
    pub year: i32,
    /// Citation count contributed by this record.
    pub pubs: u64,
    /// Department label, e.g. `"Computer Science (CS)"`.
    pub department: String,
    /// Faculty label.
    pub faculty: String,
    /// University label.
    pub university: String,
}

/// Parse a JSON array of citation records.
///
/// Any schema violation anywhere in the array fails the whole parse.
pub fn from_json_str(json: &str) -> TreeResult<Vec<Citation>> {
    serde_json::from_str(json).map_err(|e| TreeError::Parse(e.to_string()))
}

/// Parse a JSON array of citation records from a reader.
pub fn from_json_reader<R: std::io::Read>(reader: R) -> TreeResult<Vec<Citation>> {
    serde_json::from_reader(reader).map_err(|e| TreeError::Parse(e.to_string()))
}
