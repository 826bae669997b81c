#![forbid(unsafe_code)]

//! Application state store for citeburst.
//!
//! The store is a single-writer, synchronous state machine over the
//! trees built by `citeburst-tree`: four events (load, set root, update
//! selection, hover) drive pure transitions that recompute exactly the
//! derived views each event invalidates and leave every other field
//! untouched.
//!
//! # Key Components
//!
//! - [`Action`] - The four store events
//! - [`AppState`] - State snapshot plus the transition function
//! - [`Selection`] - Fully/half selected id sets from the checkbox tree
//! - [`Store`] - State + ordered subscriber fan-out + view-adapter surface
//!
//! # How it fits in the system
//! View adapters (chart renderer, tree browser) call the `on_*` methods
//! on [`Store`], which dispatch actions; after each committed transition
//! every subscriber observes the new state, in registration order. The
//! store never renders and never blocks.

use std::fmt;

use citeburst_tree::TreeError;

pub mod action;
pub mod selection;
pub mod state;
pub mod store;

pub use action::Action;
pub use selection::Selection;
pub use state::AppState;
pub use store::{Store, SubscriberId};

/// Errors surfaced by store transitions.
///
/// A failed transition is all-or-nothing: the previous state is left
/// fully intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An event referenced a node id absent from the current id map —
    /// typically a stale UI operating across a reload.
    NotFound {
        /// The id that failed to resolve.
        id: String,
    },
    /// Loading raw records failed; the previous tree is kept.
    Load(TreeError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "node `{id}` not found in current tree"),
            Self::Load(err) => write!(f, "load failed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Load(err) => Some(err),
        }
    }
}

impl From<TreeError> for StoreError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::NotFound { id } => Self::NotFound { id },
            other => Self::Load(other),
        }
    }
}

/// Standard result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
