//! scribe-editor-core: Pure markdown formatting logic without framework dependencies.
//!
//! This crate provides:
//! - `Utf16Text` - document text addressed by UTF-16 code units
//! - Range transform primitives (`wrap_selection`, `insert_at_cursor`, `prefix_line`)
//! - One function per formatting action, plus `apply_formatting`
//! - The static action registry and id-based `dispatch`
//! - `PlainEditor` - a simple text surface that applies results
//! - Keybindings mapping key combos to action ids

pub mod dispatch;
pub mod document;
pub mod error;
pub mod formatting;
pub mod keybindings;
pub mod options;
pub mod primitives;
pub mod registry;
pub mod text;
pub mod text_helpers;
pub mod types;

pub use dispatch::{check_selection, dispatch};
pub use document::{EditorDocument, PlainEditor};
pub use error::FormatError;
pub use formatting::{
    FormatAction, apply_formatting, clamp_heading_level, format_blockquote, format_bold,
    format_bullet_list, format_heading, format_image, format_inline_code, format_italic,
    format_link, format_ordered_list, format_strikethrough, format_task_list, heading_prefix,
    insert_code_block, insert_horizontal_rule, insert_table,
};
pub use keybindings::{Key, KeyCombo, KeybindingConfig, Modifiers};
pub use options::FormatOptions;
pub use primitives::{
    insert_at_cursor, prefix_line, unwrap_selection, wrap_selection, wrap_selection_symmetric,
};
pub use registry::{
    ActionCategory, FORMATTING_ACTIONS, FormattingActionDescriptor, formatting_actions,
    get_formatting_action,
};
pub use smol_str::SmolStr;
pub use text::{TextBuffer, Utf16Text, utf16_len};
pub use types::{EditorSelection, FormatResult, Range};
