//! Core formatting types: ranges, UI-layer selections, and results.
//!
//! All offsets are UTF-16 code units, matching browser selection semantics.

use serde::{Deserialize, Serialize};

/// A range in the document, measured in UTF-16 code unit offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Normalize, then pull both bounds into `0..=len`.
    pub fn clamp(self, len: usize) -> Self {
        let range = self.normalize();
        Self {
            start: range.start.min(len),
            end: range.end.min(len),
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(r: Range) -> Self {
        r.start..r.end
    }
}

/// Selection as the UI layer tracks it.
///
/// Editor state stores `-1` in `start`/`end` when nothing is selected. The
/// formatting functions never see that sentinel: `to_range` turns it into a
/// caret at `cursor` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSelection {
    pub start: i64,
    pub end: i64,
    pub cursor: usize,
}

impl EditorSelection {
    /// Sentinel for "no selection".
    pub const NONE: i64 = -1;

    pub fn new(start: i64, end: i64, cursor: usize) -> Self {
        Self { start, end, cursor }
    }

    /// No selection, caret at `cursor`.
    pub fn caret(cursor: usize) -> Self {
        Self {
            start: Self::NONE,
            end: Self::NONE,
            cursor,
        }
    }

    /// Whether a non-empty selection is present.
    pub fn has_selection(&self) -> bool {
        self.start >= 0 && self.end >= 0 && self.start != self.end
    }

    /// Collapse to the range form the formatting functions take.
    pub fn to_range(&self) -> Range {
        match (usize::try_from(self.start), usize::try_from(self.end)) {
            (Ok(start), Ok(end)) => Range::new(start, end).normalize(),
            _ => Range::caret(self.cursor),
        }
    }
}

impl From<Range> for EditorSelection {
    fn from(range: Range) -> Self {
        let range = range.normalize();
        Self {
            start: range.start as i64,
            end: range.end as i64,
            cursor: range.end,
        }
    }
}

/// Output of every formatting operation.
///
/// `formatted_text` replaces the whole input text. The selection is what the
/// caller should restore after applying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub formatted_text: String,
    pub cursor_position: usize,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl FormatResult {
    pub fn new(formatted_text: String, selection: Range, cursor_position: usize) -> Self {
        Self {
            formatted_text,
            cursor_position,
            selection_start: selection.start,
            selection_end: selection.end,
        }
    }

    /// The selection to restore.
    pub fn selection(&self) -> Range {
        Range::new(self.selection_start, self.selection_end)
    }
}
