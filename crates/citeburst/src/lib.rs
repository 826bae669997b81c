#![forbid(unsafe_code)]

//! Citeburst public facade crate.
//!
//! Re-exports the common types from the tree and store crates and
//! offers a lightweight prelude for day-to-day usage.

use std::fmt;

// --- Tree re-exports -------------------------------------------------------

pub use citeburst_tree::{
    Citation, CitationTree, FlatNode, NodeKind, ParentPath, TreeError, TreeNode, YearRange, build,
    clone_shallow, filter, flatten, parent_id_set, parent_path_ids,
};

pub use citeburst_tree::citation::{from_json_reader, from_json_str};

// --- Store re-exports ------------------------------------------------------

pub use citeburst_store::{Action, AppState, Selection, Store, StoreError, SubscriberId};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for citeburst consumers.
#[derive(Debug)]
pub enum Error {
    /// Record loading or tree operation failure.
    Tree(TreeError),
    /// Store transition failure.
    Store(StoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tree(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TreeError> for Error {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Standard result type for citeburst APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, AppState, Citation, CitationTree, Error, FlatNode, NodeKind, Result, Selection,
        Store, TreeNode, YearRange,
    };
}
