//! Formatting actions and the markdown they produce.
//!
//! Each action is a thin policy layer over the primitives in
//! [`crate::primitives`]: inline actions wrap the selection (or insert a
//! placeholder at a caret), line actions toggle a prefix on the current line,
//! and insert actions splice a fixed template in at the cursor.

use tracing::debug;

use crate::options::FormatOptions;
use crate::primitives::{clamp_range, insert_at, prefix_line_at, unwrap_range, wrap_range};
use crate::registry::{FormattingActionDescriptor, get_formatting_action};
use crate::text::Utf16Text;
use crate::types::{FormatResult, Range};

pub const BULLET_LIST_PREFIX: &str = "- ";
pub const ORDERED_LIST_PREFIX: &str = "1. ";
pub const TASK_LIST_PREFIX: &str = "- [ ] ";
pub const BLOCKQUOTE_PREFIX: &str = "> ";
pub const CODE_BLOCK_TEMPLATE: &str = "```\ncode\n```";
pub const HORIZONTAL_RULE: &str = "\n---\n";
pub const TABLE_TEMPLATE: &str =
    "| Header 1 | Header 2 |\n| -------- | -------- |\n| Cell 1   | Cell 2   |";

pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Formatting actions available in the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatAction {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Heading(u8), // 1-6
    BulletList,
    OrderedList,
    TaskList,
    Blockquote,
    CodeBlock,
    Link,
    Image,
    Table,
    HorizontalRule,
}

impl FormatAction {
    /// Stable registry id for this action.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Code => "code",
            Self::Heading(level) => match clamp_heading_level(i64::from(*level)) {
                1 => "heading-1",
                2 => "heading-2",
                3 => "heading-3",
                4 => "heading-4",
                5 => "heading-5",
                _ => "heading-6",
            },
            Self::BulletList => "bullet-list",
            Self::OrderedList => "ordered-list",
            Self::TaskList => "task-list",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "code-block",
            Self::Link => "link",
            Self::Image => "image",
            Self::Table => "table",
            Self::HorizontalRule => "horizontal-rule",
        }
    }

    /// Resolve a registry id to its action. Exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        let action = match id {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "strikethrough" => Self::Strikethrough,
            "code" => Self::Code,
            "heading-1" => Self::Heading(1),
            "heading-2" => Self::Heading(2),
            "heading-3" => Self::Heading(3),
            "heading-4" => Self::Heading(4),
            "heading-5" => Self::Heading(5),
            "heading-6" => Self::Heading(6),
            "bullet-list" => Self::BulletList,
            "ordered-list" => Self::OrderedList,
            "task-list" => Self::TaskList,
            "blockquote" => Self::Blockquote,
            "code-block" => Self::CodeBlock,
            "link" => Self::Link,
            "image" => Self::Image,
            "table" => Self::Table,
            "horizontal-rule" => Self::HorizontalRule,
            _ => return None,
        };
        Some(action)
    }

    /// Registry metadata for this action.
    pub fn descriptor(&self) -> Option<&'static FormattingActionDescriptor> {
        get_formatting_action(self.id())
    }

    /// Whether the action only looks at the caret and never wraps.
    pub fn is_line_anchored(&self) -> bool {
        !matches!(
            self,
            Self::Bold | Self::Italic | Self::Strikethrough | Self::Code | Self::Link | Self::Image
        )
    }
}

/// Markers and placeholder for an inline (wrapping) action.
#[derive(Debug, Clone, Copy)]
struct InlineFormat<'a> {
    before: &'a str,
    after: &'a str,
    placeholder: &'a str,
}

const BOLD: InlineFormat<'static> = InlineFormat {
    before: "**",
    after: "**",
    placeholder: "bold text",
};

const ITALIC: InlineFormat<'static> = InlineFormat {
    before: "*",
    after: "*",
    placeholder: "italic text",
};

const STRIKETHROUGH: InlineFormat<'static> = InlineFormat {
    before: "~~",
    after: "~~",
    placeholder: "strikethrough",
};

const INLINE_CODE: InlineFormat<'static> = InlineFormat {
    before: "`",
    after: "`",
    placeholder: "code",
};

/// Clamp a heading level into 1..=6.
pub fn clamp_heading_level(level: i64) -> u8 {
    level.clamp(i64::from(MIN_HEADING_LEVEL), i64::from(MAX_HEADING_LEVEL)) as u8
}

/// Line prefix for a heading of the given level, after clamping.
pub fn heading_prefix(level: i64) -> String {
    let mut prefix = "#".repeat(usize::from(clamp_heading_level(level)));
    prefix.push(' ');
    prefix
}

/// Apply formatting to `text` with the given selection.
///
/// Line-anchored actions use `range.start` as the cursor and ignore the rest
/// of the range.
pub fn apply_formatting(
    action: &FormatAction,
    text: &str,
    range: Range,
    options: &FormatOptions,
) -> FormatResult {
    let text = Utf16Text::from_str(text);
    let range = clamp_range(&text, range);
    let cursor = range.start;

    match action {
        FormatAction::Bold => apply_inline(&text, range, BOLD, options.toggle_wrap),
        FormatAction::Italic => apply_inline(&text, range, ITALIC, options.toggle_wrap),
        FormatAction::Strikethrough => {
            apply_inline(&text, range, STRIKETHROUGH, options.toggle_wrap)
        }
        FormatAction::Code => apply_inline(&text, range, INLINE_CODE, options.toggle_wrap),
        FormatAction::Link => {
            let after = format!("]({})", options.link_url);
            let link = InlineFormat {
                before: "[",
                after: &after,
                placeholder: "link text",
            };
            apply_inline(&text, range, link, options.toggle_wrap)
        }
        FormatAction::Image => {
            let after = format!("]({})", options.image_url);
            let image = InlineFormat {
                before: "![",
                after: &after,
                placeholder: "alt text",
            };
            apply_inline(&text, range, image, options.toggle_wrap)
        }
        FormatAction::Heading(level) => {
            prefix_line_at(&text, cursor, &heading_prefix(i64::from(*level)))
        }
        FormatAction::BulletList => prefix_line_at(&text, cursor, BULLET_LIST_PREFIX),
        FormatAction::OrderedList => prefix_line_at(&text, cursor, ORDERED_LIST_PREFIX),
        FormatAction::TaskList => prefix_line_at(&text, cursor, TASK_LIST_PREFIX),
        FormatAction::Blockquote => prefix_line_at(&text, cursor, BLOCKQUOTE_PREFIX),
        FormatAction::CodeBlock => insert_at(&text, cursor, CODE_BLOCK_TEMPLATE),
        FormatAction::Table => insert_at(&text, cursor, TABLE_TEMPLATE),
        FormatAction::HorizontalRule => insert_at(&text, cursor, HORIZONTAL_RULE),
    }
}

fn apply_inline(
    text: &Utf16Text,
    range: Range,
    format: InlineFormat<'_>,
    toggle: bool,
) -> FormatResult {
    if range.is_caret() {
        let snippet = format!("{}{}{}", format.before, format.placeholder, format.after);
        return insert_at(text, range.start, &snippet);
    }

    if toggle {
        if let Some(result) = unwrap_range(text, range, format.before, format.after) {
            debug!(
                before = format.before,
                after = format.after,
                "selection already wrapped, unwrapping"
            );
            return result;
        }
    }

    wrap_range(text, range, format.before, format.after)
}

fn apply_default(action: FormatAction, text: &str, range: Range) -> FormatResult {
    apply_formatting(&action, text, range, &FormatOptions::default())
}

/// Bold: wrap with `**`, or insert `**bold text**` at a caret.
pub fn format_bold(text: &str, selection_start: usize, selection_end: usize) -> FormatResult {
    apply_default(FormatAction::Bold, text, Range::new(selection_start, selection_end))
}

/// Italic: wrap with `*`, or insert `*italic text*` at a caret.
pub fn format_italic(text: &str, selection_start: usize, selection_end: usize) -> FormatResult {
    apply_default(FormatAction::Italic, text, Range::new(selection_start, selection_end))
}

pub fn format_strikethrough(
    text: &str,
    selection_start: usize,
    selection_end: usize,
) -> FormatResult {
    apply_default(
        FormatAction::Strikethrough,
        text,
        Range::new(selection_start, selection_end),
    )
}

pub fn format_inline_code(
    text: &str,
    selection_start: usize,
    selection_end: usize,
) -> FormatResult {
    apply_default(FormatAction::Code, text, Range::new(selection_start, selection_end))
}

/// Toggle a heading prefix on the current line.
///
/// `level` is clamped to 1..=6, so any integer is accepted.
pub fn format_heading(text: &str, cursor_position: usize, level: i64) -> FormatResult {
    apply_default(
        FormatAction::Heading(clamp_heading_level(level)),
        text,
        Range::caret(cursor_position),
    )
}

pub fn format_bullet_list(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::BulletList, text, Range::caret(cursor_position))
}

pub fn format_ordered_list(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::OrderedList, text, Range::caret(cursor_position))
}

pub fn format_task_list(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::TaskList, text, Range::caret(cursor_position))
}

pub fn format_blockquote(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::Blockquote, text, Range::caret(cursor_position))
}

pub fn insert_code_block(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::CodeBlock, text, Range::caret(cursor_position))
}

/// Link: wrap as `[selection](url)`, or insert a placeholder link.
pub fn format_link(text: &str, selection_start: usize, selection_end: usize) -> FormatResult {
    apply_default(FormatAction::Link, text, Range::new(selection_start, selection_end))
}

/// Image: wrap as `![selection](url)`, or insert a placeholder image.
pub fn format_image(text: &str, selection_start: usize, selection_end: usize) -> FormatResult {
    apply_default(FormatAction::Image, text, Range::new(selection_start, selection_end))
}

pub fn insert_horizontal_rule(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::HorizontalRule, text, Range::caret(cursor_position))
}

pub fn insert_table(text: &str, cursor_position: usize) -> FormatResult {
    apply_default(FormatAction::Table, text, Range::caret(cursor_position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_bold_wraps_selection() {
        let result = format_bold("hello world", 0, 5);
        assert_eq!(result.formatted_text, "**hello** world");
        assert_eq!(result.selection_start, 2);
        assert_eq!(result.selection_end, 7);
    }

    #[test]
    fn test_bold_caret_inserts_placeholder() {
        let result = format_bold("hello", 2, 2);
        assert_eq!(result.formatted_text, "he**bold text**llo");
        assert_eq!(result.selection_start, 2);
        assert_eq!(result.selection_end, 15);
    }

    #[test]
    fn test_bold_twice_double_wraps() {
        let once = format_bold("text", 0, 4);
        let twice = format_bold(&once.formatted_text, once.selection_start, once.selection_end);
        assert_eq!(twice.formatted_text, "****text****");
    }

    #[test]
    fn test_inline_placeholders() {
        assert_eq!(format_italic("", 0, 0).formatted_text, "*italic text*");
        assert_eq!(
            format_strikethrough("", 0, 0).formatted_text,
            "~~strikethrough~~"
        );
        assert_eq!(format_inline_code("", 0, 0).formatted_text, "`code`");
        assert_eq!(
            format_link("", 0, 0).formatted_text,
            "[link text](https://example.com)"
        );
        assert_eq!(
            format_image("", 0, 0).formatted_text,
            "![alt text](https://example.com/image.png)"
        );
    }

    #[test]
    fn test_link_wraps_selection() {
        let result = format_link("see docs", 4, 8);
        assert_snapshot!(result.formatted_text, @"see [docs](https://example.com)");
        assert_eq!(result.selection(), Range::new(5, 9));
    }

    #[test]
    fn test_image_wraps_selection() {
        let result = format_image("a cat", 2, 5);
        assert_snapshot!(result.formatted_text, @"a ![cat](https://example.com/image.png)");
        assert_eq!(result.selection(), Range::new(4, 7));
    }

    #[test]
    fn test_heading() {
        let result = format_heading("Title", 0, 1);
        assert_eq!(result.formatted_text, "# Title");
        assert_eq!(result.cursor_position, 2);

        let result = format_heading("Title", 3, 3);
        assert_eq!(result.formatted_text, "### Title");
        assert_eq!(result.cursor_position, 7);
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(format_heading("x", 0, 0).formatted_text, "# x");
        assert_eq!(format_heading("x", 0, -40).formatted_text, "# x");
        assert_eq!(format_heading("x", 0, 7).formatted_text, "###### x");
        assert_eq!(format_heading("x", 0, i64::MAX).formatted_text, "###### x");
        assert_eq!(heading_prefix(2), "## ");
    }

    #[test]
    fn test_heading_toggles_off() {
        let result = format_heading("## Title", 8, 2);
        assert_eq!(result.formatted_text, "Title");
        assert_eq!(result.cursor_position, 5);
    }

    #[test]
    fn test_different_heading_level_stacks() {
        // Lexical toggle: "# " is not a prefix of "## Title".
        let result = format_heading("## Title", 0, 1);
        assert_eq!(result.formatted_text, "# ## Title");
    }

    #[test]
    fn test_line_actions() {
        let result = format_bullet_list("", 0);
        assert_eq!(result.formatted_text, "- ");
        assert_eq!(result.cursor_position, 2);

        assert_eq!(format_ordered_list("item", 4).formatted_text, "1. item");
        assert_eq!(format_task_list("todo", 0).formatted_text, "- [ ] todo");
        assert_eq!(format_blockquote("quote", 2).formatted_text, "> quote");
    }

    #[test]
    fn test_task_list_toggles_off() {
        let result = format_task_list("- [ ] todo", 7);
        assert_eq!(result.formatted_text, "todo");
        assert_eq!(result.cursor_position, 1);
    }

    #[test]
    fn test_line_actions_ignore_selection_end() {
        let result = apply_formatting(
            &FormatAction::Blockquote,
            "one\ntwo",
            Range::new(1, 6),
            &FormatOptions::default(),
        );
        assert_eq!(result.formatted_text, "> one\ntwo");
        assert_eq!(result.selection(), Range::caret(3));
    }

    #[test]
    fn test_horizontal_rule() {
        let result = insert_horizontal_rule("abc", 3);
        assert_eq!(result.formatted_text, "abc\n---\n");
        assert_eq!(result.selection(), Range::new(3, 8));
    }

    #[test]
    fn test_code_block() {
        let result = insert_code_block("", 0);
        assert_snapshot!(result.formatted_text, @r"
        ```
        code
        ```
        ");
        assert_eq!(result.selection(), Range::new(0, 12));
    }

    #[test]
    fn test_table() {
        let result = insert_table("x\n", 2);
        assert_snapshot!(result.formatted_text, @r"
        x
        | Header 1 | Header 2 |
        | -------- | -------- |
        | Cell 1   | Cell 2   |
        ");
        assert_eq!(result.selection_start, 2);
        assert_eq!(result.selection_end, 2 + TABLE_TEMPLATE.len());
    }

    #[test]
    fn test_toggle_wrap_unwraps() {
        let options = FormatOptions::default().with_toggle_wrap(true);
        let wrapped = apply_formatting(&FormatAction::Bold, "hi", Range::new(0, 2), &options);
        assert_eq!(wrapped.formatted_text, "**hi**");

        let unwrapped = apply_formatting(
            &FormatAction::Bold,
            &wrapped.formatted_text,
            wrapped.selection(),
            &options,
        );
        assert_eq!(unwrapped.formatted_text, "hi");
        assert_eq!(unwrapped.selection(), Range::new(0, 2));
    }

    #[test]
    fn test_toggle_wrap_unwraps_placeholder() {
        let options = FormatOptions::default().with_toggle_wrap(true);
        let inserted = apply_formatting(&FormatAction::Code, "", Range::caret(0), &options);
        let unwrapped = apply_formatting(
            &FormatAction::Code,
            &inserted.formatted_text,
            inserted.selection(),
            &options,
        );
        assert_eq!(unwrapped.formatted_text, "code");
    }

    #[test]
    fn test_toggle_wrap_link_uses_configured_url() {
        let options = FormatOptions {
            toggle_wrap: true,
            link_url: "url".into(),
            ..FormatOptions::default()
        };
        let result = apply_formatting(&FormatAction::Link, "[a](url)", Range::new(1, 2), &options);
        assert_eq!(result.formatted_text, "a");
    }

    #[test]
    fn test_action_ids_round_trip() {
        for descriptor in crate::registry::formatting_actions() {
            let action = FormatAction::from_id(descriptor.id).unwrap();
            assert_eq!(action.id(), descriptor.id);
            assert_eq!(action.descriptor(), Some(descriptor));
        }
        assert_eq!(FormatAction::from_id("Bold"), None);
        assert_eq!(FormatAction::from_id("heading-7"), None);
        assert_eq!(FormatAction::Heading(0).id(), "heading-1");
        assert_eq!(FormatAction::Heading(42).id(), "heading-6");
    }
}
