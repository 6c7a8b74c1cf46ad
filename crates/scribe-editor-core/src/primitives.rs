//! Range transform primitives.
//!
//! Every formatting action is built from these: wrap a range in markers,
//! insert text at a caret, or toggle a prefix on the current line. Each takes
//! the full text and returns a complete `FormatResult`; nothing is mutated.
//!
//! Offsets outside `0..=len` are clamped and a reversed range is reordered
//! before any work happens, so these functions are total.

use tracing::debug;

use crate::text::{TextBuffer, Utf16Text, utf16_len};
use crate::text_helpers::{find_line_end, find_line_start};
use crate::types::{FormatResult, Range};

/// Wrap `text[start..end]` in `before` / `after`.
///
/// The returned selection covers the original selected text, now between
/// the markers. The cursor sits after the closing marker.
pub fn wrap_selection(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: &str,
) -> FormatResult {
    let text = Utf16Text::from_str(text);
    let range = clamp_range(&text, Range::new(selection_start, selection_end));
    wrap_range(&text, range, before, after)
}

/// Wrap with the same marker on both sides.
pub fn wrap_selection_symmetric(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    marker: &str,
) -> FormatResult {
    wrap_selection(text, selection_start, selection_end, marker, marker)
}

/// Splice `insert_text` in at `cursor_position` and select it.
pub fn insert_at_cursor(text: &str, cursor_position: usize, insert_text: &str) -> FormatResult {
    let text = Utf16Text::from_str(text);
    let offset = clamp_offset(&text, cursor_position);
    insert_at(&text, offset, insert_text)
}

/// Toggle `prefix` at the start of the line containing `cursor_position`.
///
/// If the line already starts with `prefix` it is removed, otherwise it is
/// added. The result is a caret.
pub fn prefix_line(text: &str, cursor_position: usize, prefix: &str) -> FormatResult {
    let text = Utf16Text::from_str(text);
    let offset = clamp_offset(&text, cursor_position);
    prefix_line_at(&text, offset, prefix)
}

/// Remove `before` / `after` if they already enclose the selection.
///
/// Markers are looked for just outside the selection first, then at its
/// edges. Returns None when neither matches or the selection is empty.
pub fn unwrap_selection(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: &str,
) -> Option<FormatResult> {
    let text = Utf16Text::from_str(text);
    let range = clamp_range(&text, Range::new(selection_start, selection_end));
    unwrap_range(&text, range, before, after)
}

pub(crate) fn clamp_range(text: &Utf16Text, range: Range) -> Range {
    let clamped = range.clamp(text.len_units());
    if clamped != range {
        debug!(
            requested = ?range,
            clamped = ?clamped,
            len = text.len_units(),
            "selection outside document, clamped"
        );
    }
    clamped
}

pub(crate) fn clamp_offset(text: &Utf16Text, offset: usize) -> usize {
    clamp_range(text, Range::caret(offset)).start
}

pub(crate) fn wrap_range(
    text: &Utf16Text,
    range: Range,
    before: &str,
    after: &str,
) -> FormatResult {
    // Insert end marker first so start position stays valid.
    let wrapped = text
        .insert(range.end, after)
        .insert(range.start, before);

    let selection_start = range.start + utf16_len(before);
    let selection_end = selection_start + range.len();

    FormatResult::new(
        wrapped.to_string_lossy(),
        Range::new(selection_start, selection_end),
        selection_end + utf16_len(after),
    )
}

pub(crate) fn insert_at(text: &Utf16Text, offset: usize, insert_text: &str) -> FormatResult {
    let inserted = text.insert(offset, insert_text);
    let end = offset + utf16_len(insert_text);
    FormatResult::new(inserted.to_string_lossy(), Range::new(offset, end), end)
}

pub(crate) fn prefix_line_at(text: &Utf16Text, cursor: usize, prefix: &str) -> FormatResult {
    let line_start = find_line_start(text, cursor);
    let line_end = find_line_end(text, cursor);
    let prefix_len = utf16_len(prefix);

    let has_prefix =
        line_start + prefix_len <= line_end && text.starts_with_at(line_start, prefix);

    let (updated, cursor) = if has_prefix {
        let stripped = text.delete(line_start..line_start + prefix_len);
        (stripped, cursor.saturating_sub(prefix_len).max(line_start))
    } else {
        (text.insert(line_start, prefix), cursor + prefix_len)
    };

    FormatResult::new(updated.to_string_lossy(), Range::caret(cursor), cursor)
}

pub(crate) fn unwrap_range(
    text: &Utf16Text,
    range: Range,
    before: &str,
    after: &str,
) -> Option<FormatResult> {
    let before_len = utf16_len(before);
    let after_len = utf16_len(after);
    if range.is_caret() || before_len + after_len == 0 {
        return None;
    }

    // Markers just outside the selection: **[text]**
    if text.ends_with_at(range.start, before) && text.starts_with_at(range.end, after) {
        let stripped = text
            .delete(range.end..range.end + after_len)
            .delete(range.start - before_len..range.start);
        let selection = Range::new(range.start - before_len, range.end - before_len);
        return Some(FormatResult::new(
            stripped.to_string_lossy(),
            selection,
            selection.end,
        ));
    }

    // Markers inside the selection: [**text**]
    if range.len() >= before_len + after_len
        && text.starts_with_at(range.start, before)
        && text.ends_with_at(range.end, after)
    {
        let stripped = text
            .delete(range.end - after_len..range.end)
            .delete(range.start..range.start + before_len);
        let selection = Range::new(range.start, range.end - before_len - after_len);
        return Some(FormatResult::new(
            stripped.to_string_lossy(),
            selection,
            selection.end,
        ));
    }

    None
}
