//! Error types for formatting dispatch.

use thiserror::Error;

/// Errors returned at the dispatch boundary.
///
/// The formatting functions themselves cannot fail; these only come from
/// resolving an action id or checking its preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// No action with this id is registered.
    #[error("unknown formatting action: {0}")]
    UnknownAction(String),

    /// The action needs a non-empty selection.
    #[error("formatting action {0} requires a selection")]
    SelectionRequired(String),
}

impl FormatError {
    /// Whether callers should treat this as a silent no-op.
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::UnknownAction(_))
    }
}
