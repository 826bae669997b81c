//! Store events.

use citeburst_tree::Citation;

use crate::selection::Selection;

/// An event applied to the store.
///
/// Actions are plain data; all behavior lives in
/// [`AppState::apply`](crate::AppState::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the raw records and rebuild the full tree.
    LoadRaw(Vec<Citation>),
    /// Treat the node at this id as the display root.
    SetRoot(String),
    /// Replace the selection and re-derive the filtered tree.
    SelectIds(Selection),
    /// Hover a node (`None` clears the hover).
    HoverNode(Option<String>),
}

impl Action {
    /// Short event name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadRaw(_) => "load-raw",
            Self::SetRoot(_) => "set-root",
            Self::SelectIds(_) => "select-ids",
            Self::HoverNode(_) => "hover-node",
        }
    }
}
