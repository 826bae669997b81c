#![forbid(unsafe_code)]

//! Citation aggregation tree for citeburst.
//!
//! This crate folds flat citation records into a fixed four-level
//! aggregation hierarchy (university → faculty → department → person
//! beneath a synthetic root) and provides the pure tree operations the
//! application store is built on.
//!
//! # Key Components
//!
//! - [`Citation`] - A raw citation record plus strict JSON loading
//! - [`CitationTree`] - Arena-backed aggregation tree with an id-keyed node table
//! - [`build`] - Single-pass fold of records into a tree
//! - [`flatten`] - BFS flattening for renderers that cannot consume recursion
//! - [`filter`] - Selection-driven subtree pruning
//! - [`ParentPath`] - Lazy ancestor walk for hover/breadcrumb highlighting
//!
//! # Role in citeburst
//! `citeburst-tree` owns everything that is a pure function of the input
//! records: identity derivation, aggregation, and derived-view codecs.
//! Stateful event handling lives in `citeburst-store`, which treats the
//! trees produced here as immutable snapshots.

use std::fmt;

pub mod builder;
pub mod citation;
pub mod codec;
pub mod identity;
pub mod node;
pub mod path;
pub mod tree;

pub use builder::build;
pub use citation::Citation;
pub use codec::{clone_shallow, filter, flatten};
pub use node::{FlatNode, NodeKind, TreeNode, YearRange};
pub use path::{ParentPath, parent_id_set, parent_path_ids};
pub use tree::CitationTree;

/// Errors raised while loading records or operating on a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A record field required for aggregation is empty or unusable.
    MalformedRecord {
        /// Zero-based position of the record in the input sequence.
        index: usize,
        /// The offending field name.
        field: &'static str,
    },
    /// A node id was looked up that does not exist in the tree.
    NotFound {
        /// The id that failed to resolve.
        id: String,
    },
    /// The raw input could not be parsed as a citation list.
    Parse(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { index, field } => {
                write!(f, "record {index}: field `{field}` is missing or empty")
            }
            Self::NotFound { id } => write!(f, "node `{id}` not found in tree"),
            Self::Parse(msg) => write!(f, "citation parse error: {msg}"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Standard result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
