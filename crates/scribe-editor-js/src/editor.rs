//! JsEditor - the editor state wrapper for JavaScript.

use scribe_editor_core::{
    EditorDocument, EditorSelection, FormatOptions, Key, KeyCombo, KeybindingConfig, Modifiers,
    PlainEditor,
};
use wasm_bindgen::prelude::*;

use crate::types::JsSelection;

/// The main editor instance exposed to JavaScript.
///
/// Owns the document text and selection. The view layer forwards selection
/// changes and toolbar/keyboard events, then reads back text and selection
/// to restore them in the textarea.
#[wasm_bindgen]
pub struct JsEditor {
    pub(crate) doc: PlainEditor,
    pub(crate) keybindings: KeybindingConfig,
    pub(crate) on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor from markdown content.
    ///
    /// `is_mac` picks Cmd instead of Ctrl as the primary shortcut modifier.
    #[wasm_bindgen(constructor)]
    pub fn new(content: &str, is_mac: Option<bool>) -> Self {
        Self {
            doc: PlainEditor::new(content),
            keybindings: KeybindingConfig::default_for(is_mac.unwrap_or(false)),
            on_change: None,
        }
    }

    // === Content access ===

    /// Get the markdown content.
    #[wasm_bindgen(js_name = getMarkdown)]
    pub fn get_markdown(&self) -> String {
        self.doc.content().to_owned()
    }

    /// Replace the whole document, e.g. after a file import.
    #[wasm_bindgen(js_name = setMarkdown)]
    pub fn set_markdown(&mut self, content: &str) {
        let options = self.doc.options().clone();
        self.doc = PlainEditor::new(content).with_options(options);
        self.notify_change();
    }

    // === Selection ===

    /// Update the selection from the textarea. Pass `-1` for no selection.
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, start: i32, end: i32, cursor: usize) {
        self.doc.set_selection(EditorSelection::new(
            i64::from(start),
            i64::from(end),
            cursor,
        ));
    }

    /// The selection to restore after the last change.
    #[wasm_bindgen(js_name = getSelection)]
    pub fn get_selection(&self) -> JsSelection {
        self.doc.selection().into()
    }

    #[wasm_bindgen(js_name = selectionStart)]
    pub fn selection_start(&self) -> usize {
        self.doc.range().start
    }

    #[wasm_bindgen(js_name = selectionEnd)]
    pub fn selection_end(&self) -> usize {
        self.doc.range().end
    }

    // === Options ===

    /// Opt into toggle-aware wrapping for inline actions.
    #[wasm_bindgen(js_name = setToggleWrap)]
    pub fn set_toggle_wrap(&mut self, toggle_wrap: bool) {
        let options = self.doc.options().clone().with_toggle_wrap(toggle_wrap);
        self.replace_options(options);
    }

    /// Placeholder URLs used by the link and image actions.
    #[wasm_bindgen(js_name = setPlaceholderUrls)]
    pub fn set_placeholder_urls(&mut self, link_url: &str, image_url: &str) {
        let options = FormatOptions {
            link_url: link_url.to_owned(),
            image_url: image_url.to_owned(),
            ..self.doc.options().clone()
        };
        self.replace_options(options);
    }

    // === Actions ===

    /// Apply a formatting action by registry id.
    ///
    /// Returns false (and changes nothing) for unknown ids.
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, id: &str) -> Result<bool, JsError> {
        let applied = self
            .doc
            .run_action(id)
            .map_err(|e| JsError::new(&e.to_string()))?;
        if applied {
            self.notify_change();
        }
        Ok(applied)
    }

    /// Handle a keydown event.
    ///
    /// `code` is `KeyboardEvent.code`. Returns whether a shortcut fired, in
    /// which case the caller should preventDefault.
    #[wasm_bindgen(js_name = handleKeydown)]
    pub fn handle_keydown(
        &mut self,
        code: &str,
        ctrl: bool,
        alt: bool,
        shift: bool,
        meta: bool,
    ) -> Result<bool, JsError> {
        let combo = KeyCombo::with_modifiers(
            Key::from_dom_code(code),
            Modifiers {
                ctrl,
                alt,
                shift,
                meta,
            },
        );
        match self.keybindings.lookup(&combo) {
            Some(id) => self.apply_action(id),
            None => Ok(false),
        }
    }

    // === Change notification ===

    /// Register a callback invoked after every applied change.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.on_change = Some(callback);
    }
}

impl JsEditor {
    fn replace_options(&mut self, options: FormatOptions) {
        let range = self.doc.range();
        let content = std::mem::take(&mut self.doc).into_content();
        self.doc = PlainEditor::new(content).with_options(options);
        self.doc.set_range(range);
    }

    pub(crate) fn notify_change(&self) {
        if let Some(callback) = &self.on_change {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                tracing::warn!(?err, "onChange callback threw");
            }
        }
    }
}
