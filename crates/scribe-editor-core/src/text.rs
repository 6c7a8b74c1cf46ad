//! Text buffer abstraction for formatting operations.
//!
//! Browser selection APIs report offsets in UTF-16 code units, so every
//! offset the formatting engine accepts or returns is counted the same way.
//! `Utf16Text` stores the document as code units and only converts back to
//! a `String` when a result is handed out.

use std::fmt;
use std::ops::Range;

/// A read-only text buffer addressed by UTF-16 code unit offsets.
pub trait TextBuffer {
    /// Total length in UTF-16 code units.
    fn len_units(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len_units() == 0
    }

    /// Get the code unit at offset. Returns None if out of bounds.
    fn unit_at(&self, offset: usize) -> Option<u16>;

    /// Get a slice of code units. Returns None if range is invalid.
    fn slice(&self, range: Range<usize>) -> Option<&[u16]>;

    /// Convert the buffer to a String.
    ///
    /// Lone surrogates (left behind when an offset splits a surrogate pair)
    /// become U+FFFD, which is itself a single code unit.
    fn to_string_lossy(&self) -> String;
}

/// Owned UTF-16 document text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Text {
    units: Vec<u16>,
}

impl Utf16Text {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from string.
    pub fn from_str(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }

    /// Raw code units.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Check whether `needle` occurs starting exactly at `offset`.
    pub fn starts_with_at(&self, offset: usize, needle: &str) -> bool {
        let needle: Vec<u16> = needle.encode_utf16().collect();
        offset
            .checked_add(needle.len())
            .and_then(|end| self.units.get(offset..end))
            .is_some_and(|found| found == needle.as_slice())
    }

    /// Check whether `needle` ends exactly at `offset`.
    pub fn ends_with_at(&self, offset: usize, needle: &str) -> bool {
        let needle: Vec<u16> = needle.encode_utf16().collect();
        offset
            .checked_sub(needle.len())
            .and_then(|start| self.units.get(start..offset))
            .is_some_and(|found| found == needle.as_slice())
    }

    /// Return a new buffer with `range` replaced by `replacement`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or reversed.
    pub fn splice(&self, range: Range<usize>, replacement: &str) -> Self {
        let mut units = Vec::with_capacity(self.units.len() + replacement.len());
        units.extend_from_slice(&self.units[..range.start]);
        units.extend(replacement.encode_utf16());
        units.extend_from_slice(&self.units[range.end..]);
        Self { units }
    }

    /// Return a new buffer with `text` inserted at `offset`.
    pub fn insert(&self, offset: usize, text: &str) -> Self {
        self.splice(offset..offset, text)
    }

    /// Return a new buffer with `range` removed.
    pub fn delete(&self, range: Range<usize>) -> Self {
        self.splice(range, "")
    }
}

impl TextBuffer for Utf16Text {
    fn len_units(&self) -> usize {
        self.units.len()
    }

    fn unit_at(&self, offset: usize) -> Option<u16> {
        self.units.get(offset).copied()
    }

    fn slice(&self, range: Range<usize>) -> Option<&[u16]> {
        self.units.get(range)
    }

    fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl fmt::Display for Utf16Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for Utf16Text {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Utf16Text {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let text = Utf16Text::from_str("hello world");
        assert_eq!(text.len_units(), 11);
        assert_eq!(text.to_string(), "hello world");

        let text = text.insert(5, " beautiful");
        assert_eq!(text.to_string(), "hello beautiful world");

        // " beautiful" is 10 units at positions 5..15
        let text = text.delete(5..15);
        assert_eq!(text.to_string(), "hello world");
    }

    #[test]
    fn test_unit_offsets() {
        // "hi 🌍" - the emoji is one char but two UTF-16 units
        let text = Utf16Text::from_str("hi 🌍");
        assert_eq!(text.len_units(), 5);
        assert_eq!(utf16_len("🌍"), 2);
        assert_eq!(text.unit_at(0), Some(u16::from(b'h')));
        assert_eq!(text.unit_at(5), None);
    }

    #[test]
    fn test_split_surrogate_is_lossy_but_length_preserving() {
        let text = Utf16Text::from_str("🌍").insert(1, "*");
        let out = text.to_string_lossy();
        assert_eq!(out, "\u{FFFD}*\u{FFFD}");
        assert_eq!(utf16_len(&out), 3);
    }

    #[test]
    fn test_marker_matching() {
        let text = Utf16Text::from_str("**bold**");
        assert!(text.starts_with_at(0, "**"));
        assert!(text.starts_with_at(6, "**"));
        assert!(!text.starts_with_at(7, "**"));
        assert!(!text.starts_with_at(100, "**"));
        assert!(text.ends_with_at(2, "**"));
        assert!(text.ends_with_at(8, "**"));
        assert!(!text.ends_with_at(1, "**"));
    }

    #[test]
    fn test_slice() {
        let text = Utf16Text::from_str("hello world");
        assert_eq!(
            text.slice(6..11).map(String::from_utf16_lossy).as_deref(),
            Some("world")
        );
        assert_eq!(text.slice(0..100), None);
    }

    #[test]
    fn test_replace() {
        let text = Utf16Text::from_str("hello world").splice(6..11, "rust");
        assert_eq!(text.to_string(), "hello rust");
    }
}
