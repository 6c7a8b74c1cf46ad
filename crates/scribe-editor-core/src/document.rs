//! Editor document trait and a plain implementation.
//!
//! The document owns the authoritative text and selection. Formatting
//! results are applied through [`EditorDocument::apply`], which replaces both
//! in one step so the next action always sees what the last one returned.

use tracing::debug;

use crate::dispatch::dispatch;
use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::types::{EditorSelection, FormatResult, Range};

/// Core trait for the text surface the formatting engine drives.
pub trait EditorDocument {
    /// Get the full content.
    fn content(&self) -> &str;

    /// Get the current selection as the UI tracks it.
    fn selection(&self) -> EditorSelection;

    /// Replace content and selection with a formatting result.
    fn apply(&mut self, result: FormatResult);

    /// Formatting options for this document.
    fn options(&self) -> &FormatOptions;

    /// Dispatch an action by id and apply the result.
    ///
    /// Returns `Ok(false)` without touching the document for unknown ids.
    fn run_action(&mut self, id: &str) -> Result<bool, FormatError> {
        match dispatch(id, self.content(), self.selection(), self.options()) {
            Ok(result) => {
                self.apply(result);
                Ok(true)
            }
            Err(err) if err.is_no_op() => {
                debug!(id, "ignoring unknown formatting action");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

/// Simple field-based implementation of EditorDocument.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainEditor {
    content: String,
    selection: Range,
    options: FormatOptions,
}

impl PlainEditor {
    /// Create an editor with the caret at the end of `content`.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let end = content.encode_utf16().count();
        Self {
            content,
            selection: Range::caret(end),
            options: FormatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the selection, accepting the UI's `-1` sentinel.
    pub fn set_selection(&mut self, selection: EditorSelection) {
        self.selection = selection.to_range();
    }

    pub fn set_range(&mut self, range: Range) {
        self.selection = range.normalize();
    }

    /// Current selection as a range.
    pub fn range(&self) -> Range {
        self.selection
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl EditorDocument for PlainEditor {
    fn content(&self) -> &str {
        &self.content
    }

    fn selection(&self) -> EditorSelection {
        if self.selection.is_caret() {
            EditorSelection::caret(self.selection.start)
        } else {
            EditorSelection::from(self.selection)
        }
    }

    fn apply(&mut self, result: FormatResult) {
        self.selection = result.selection();
        self.content = result.formatted_text;
    }

    fn options(&self) -> &FormatOptions {
        &self.options
    }
}
