//! Static catalog of formatting actions.
//!
//! The toolbar renders buttons from this list and the dispatcher validates
//! ids against it. It carries metadata only. The code that actually formats
//! lives in [`crate::formatting`], and `markdown_pattern` is purely for
//! display.

use serde::Serialize;

/// Toolbar grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionCategory {
    /// Wraps a selection in markers.
    Inline,
    /// Toggles a prefix on the current line.
    Block,
    /// Inserts a fixed template at the cursor.
    Insert,
}

/// Metadata for a single formatting action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingActionDescriptor {
    /// Unique, stable id. Used as the dispatch key and keybinding target.
    pub id: &'static str,
    pub label: &'static str,
    pub markdown_pattern: &'static str,
    pub wraps_selection: bool,
    /// The UI disables the button when nothing is selected.
    pub requires_selection: bool,
    /// What the action inserts when invoked at a caret.
    pub insert_on_empty: &'static str,
    pub category: ActionCategory,
    /// Shortcut shown in tooltips, empty when unbound.
    pub shortcut_hint: &'static str,
}

const fn inline(
    id: &'static str,
    label: &'static str,
    markdown_pattern: &'static str,
    insert_on_empty: &'static str,
    shortcut_hint: &'static str,
) -> FormattingActionDescriptor {
    FormattingActionDescriptor {
        id,
        label,
        markdown_pattern,
        wraps_selection: true,
        requires_selection: false,
        insert_on_empty,
        category: ActionCategory::Inline,
        shortcut_hint,
    }
}

const fn line(
    id: &'static str,
    label: &'static str,
    prefix: &'static str,
    shortcut_hint: &'static str,
) -> FormattingActionDescriptor {
    FormattingActionDescriptor {
        id,
        label,
        markdown_pattern: prefix,
        wraps_selection: false,
        requires_selection: false,
        insert_on_empty: prefix,
        category: ActionCategory::Block,
        shortcut_hint,
    }
}

const fn insert(
    id: &'static str,
    label: &'static str,
    template: &'static str,
    shortcut_hint: &'static str,
) -> FormattingActionDescriptor {
    FormattingActionDescriptor {
        id,
        label,
        markdown_pattern: template,
        wraps_selection: false,
        requires_selection: false,
        insert_on_empty: template,
        category: ActionCategory::Insert,
        shortcut_hint,
    }
}

/// Every formatting action, in toolbar order.
pub static FORMATTING_ACTIONS: &[FormattingActionDescriptor] = &[
    inline("bold", "Bold", "**text**", "**bold text**", "Ctrl+B"),
    inline("italic", "Italic", "*text*", "*italic text*", "Ctrl+I"),
    inline(
        "strikethrough",
        "Strikethrough",
        "~~text~~",
        "~~strikethrough~~",
        "Ctrl+Shift+X",
    ),
    inline("code", "Inline Code", "`code`", "`code`", "Ctrl+E"),
    line("heading-1", "Heading 1", "# ", "Ctrl+1"),
    line("heading-2", "Heading 2", "## ", "Ctrl+2"),
    line("heading-3", "Heading 3", "### ", "Ctrl+3"),
    line("heading-4", "Heading 4", "#### ", "Ctrl+4"),
    line("heading-5", "Heading 5", "##### ", "Ctrl+5"),
    line("heading-6", "Heading 6", "###### ", "Ctrl+6"),
    line("bullet-list", "Bullet List", "- ", "Ctrl+Shift+8"),
    line("ordered-list", "Numbered List", "1. ", "Ctrl+Shift+7"),
    line("task-list", "Task List", "- [ ] ", "Ctrl+Shift+9"),
    line("blockquote", "Quote", "> ", "Ctrl+Shift+."),
    insert("code-block", "Code Block", "```\ncode\n```", "Ctrl+Shift+C"),
    inline(
        "link",
        "Link",
        "[text](url)",
        "[link text](https://example.com)",
        "Ctrl+K",
    ),
    inline(
        "image",
        "Image",
        "![alt](url)",
        "![alt text](https://example.com/image.png)",
        "Ctrl+Shift+I",
    ),
    insert(
        "table",
        "Table",
        "| Header 1 | Header 2 |\n| -------- | -------- |\n| Cell 1   | Cell 2   |",
        "",
    ),
    insert("horizontal-rule", "Horizontal Rule", "\n---\n", ""),
];

/// The whole catalog.
pub fn formatting_actions() -> &'static [FormattingActionDescriptor] {
    FORMATTING_ACTIONS
}

/// Look up an action by exact id.
pub fn get_formatting_action(id: &str) -> Option<&'static FormattingActionDescriptor> {
    FORMATTING_ACTIONS.iter().find(|action| action.id == id)
}
