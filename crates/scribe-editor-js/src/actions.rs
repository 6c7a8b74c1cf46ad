//! Stateless formatting functions for JavaScript.
//!
//! For callers that keep their own text state (a plain `<textarea>`) and only
//! want the next text + selection back.

use scribe_editor_core::{
    FormatOptions, dispatch, format_heading, formatting_actions, get_formatting_action,
    insert_at_cursor, prefix_line, wrap_selection,
};
use wasm_bindgen::prelude::*;

use crate::types::{JsFormatResult, JsSelection};

/// Run a registered action against `text`.
///
/// Throws for unknown ids.
#[wasm_bindgen(js_name = applyFormat)]
pub fn apply_format(
    id: &str,
    text: &str,
    selection: JsSelection,
    toggle_wrap: Option<bool>,
) -> Result<JsFormatResult, JsError> {
    let options = FormatOptions::default().with_toggle_wrap(toggle_wrap.unwrap_or(false));
    dispatch(id, text, selection.into(), &options)
        .map(JsFormatResult::from)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Wrap a selection in markers. `after` defaults to `before`.
#[wasm_bindgen(js_name = wrapSelection)]
pub fn js_wrap_selection(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: Option<String>,
) -> JsFormatResult {
    let after = after.as_deref().unwrap_or(before);
    wrap_selection(text, selection_start, selection_end, before, after).into()
}

#[wasm_bindgen(js_name = insertAtCursor)]
pub fn js_insert_at_cursor(
    text: &str,
    cursor_position: usize,
    insert_text: &str,
) -> JsFormatResult {
    insert_at_cursor(text, cursor_position, insert_text).into()
}

#[wasm_bindgen(js_name = prefixLine)]
pub fn js_prefix_line(text: &str, cursor_position: usize, prefix: &str) -> JsFormatResult {
    prefix_line(text, cursor_position, prefix).into()
}

/// Toggle a heading. Out-of-range levels are clamped to 1..=6.
#[wasm_bindgen(js_name = formatHeading)]
pub fn js_format_heading(text: &str, cursor_position: usize, level: i32) -> JsFormatResult {
    format_heading(text, cursor_position, i64::from(level)).into()
}

/// The full action registry, in toolbar order.
#[wasm_bindgen(js_name = formattingActions)]
pub fn js_formatting_actions() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(formatting_actions())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Look up one registry entry. Returns `undefined` for unknown ids.
#[wasm_bindgen(js_name = getFormattingAction)]
pub fn js_get_formatting_action(id: &str) -> Result<JsValue, JsError> {
    match get_formatting_action(id) {
        Some(descriptor) => serde_wasm_bindgen::to_value(descriptor)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
        None => Ok(JsValue::UNDEFINED),
    }
}
