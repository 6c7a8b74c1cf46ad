//! Line navigation helpers.
//!
//! These functions work with the `TextBuffer` trait. Offsets past the end of
//! the buffer are treated as the end of the buffer.

use crate::text::TextBuffer;

const NEWLINE: u16 = b'\n' as u16;

/// Find start of line containing offset.
pub fn find_line_start<B: TextBuffer + ?Sized>(buf: &B, offset: usize) -> usize {
    let mut pos = offset.min(buf.len_units());
    while pos > 0 {
        if buf.unit_at(pos - 1) == Some(NEWLINE) {
            return pos;
        }
        pos -= 1;
    }
    0
}

/// Find end of line containing offset (position of newline or end of doc).
pub fn find_line_end<B: TextBuffer + ?Sized>(buf: &B, offset: usize) -> usize {
    let len = buf.len_units();
    let mut pos = offset;
    while pos < len {
        if buf.unit_at(pos) == Some(NEWLINE) {
            return pos;
        }
        pos += 1;
    }
    len
}
