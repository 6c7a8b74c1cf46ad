//! Types exposed to JavaScript via wasm-bindgen.

use scribe_editor_core::{EditorSelection, FormatResult};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Result of a formatting operation, as handed to JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsFormatResult {
    pub formatted_text: String,
    pub cursor_position: usize,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl From<FormatResult> for JsFormatResult {
    fn from(result: FormatResult) -> Self {
        Self {
            formatted_text: result.formatted_text,
            cursor_position: result.cursor_position,
            selection_start: result.selection_start,
            selection_end: result.selection_end,
        }
    }
}

/// Selection state from the textarea.
///
/// `start`/`end` are `-1` when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsSelection {
    pub start: i64,
    pub end: i64,
    pub cursor: usize,
}

impl From<JsSelection> for EditorSelection {
    fn from(sel: JsSelection) -> Self {
        EditorSelection::new(sel.start, sel.end, sel.cursor)
    }
}

impl From<EditorSelection> for JsSelection {
    fn from(sel: EditorSelection) -> Self {
        Self {
            start: sel.start,
            end: sel.end,
            cursor: sel.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_editor_core::Range;

    #[test]
    fn test_format_result_conversion() {
        let result = FormatResult::new("**a**".into(), Range::new(2, 3), 5);
        let js = JsFormatResult::from(result);
        assert_eq!(js.formatted_text, "**a**");
        assert_eq!((js.selection_start, js.selection_end), (2, 3));
        assert_eq!(js.cursor_position, 5);
    }

    #[test]
    fn test_selection_sentinel_round_trip() {
        let js = JsSelection {
            start: -1,
            end: -1,
            cursor: 4,
        };
        let sel = EditorSelection::from(js);
        assert_eq!(sel.to_range(), Range::caret(4));
        assert_eq!(JsSelection::from(sel), js);
    }
}
