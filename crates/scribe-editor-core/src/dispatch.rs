//! Action dispatch.
//!
//! Maps a registry id to its formatting function and runs it against the
//! current text and UI selection. This is the central entry point the
//! toolbar and keyboard shortcuts go through.

use tracing::trace;

use crate::error::FormatError;
use crate::formatting::{FormatAction, apply_formatting};
use crate::options::FormatOptions;
use crate::registry::{FormattingActionDescriptor, get_formatting_action};
use crate::types::{EditorSelection, FormatResult, Range};

/// Run the action registered under `id`.
///
/// The `-1` no-selection sentinel in `selection` is collapsed to a caret
/// before the action sees it.
pub fn dispatch(
    id: &str,
    text: &str,
    selection: EditorSelection,
    options: &FormatOptions,
) -> Result<FormatResult, FormatError> {
    let descriptor =
        get_formatting_action(id).ok_or_else(|| FormatError::UnknownAction(id.to_owned()))?;
    let action = FormatAction::from_id(descriptor.id)
        .ok_or_else(|| FormatError::UnknownAction(id.to_owned()))?;
    let range = selection.to_range();

    check_selection(descriptor, range)?;

    trace!(
        id,
        start = range.start,
        end = range.end,
        "dispatching formatting action"
    );
    Ok(apply_formatting(&action, text, range, options))
}

/// Enforce `requires_selection` for a descriptor.
pub fn check_selection(
    descriptor: &FormattingActionDescriptor,
    range: Range,
) -> Result<(), FormatError> {
    if descriptor.requires_selection && range.is_caret() {
        return Err(FormatError::SelectionRequired(descriptor.id.to_owned()));
    }
    Ok(())
}
