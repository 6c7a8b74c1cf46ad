//! Property tests for the range transform primitives and actions.

use proptest::prelude::*;
use scribe_editor_core::{
    FORMATTING_ACTIONS, FormatAction, FormatOptions, Range, apply_formatting, format_heading,
    insert_at_cursor, prefix_line, utf16_len, wrap_selection,
};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Text (BMP only, so no surrogate can be split) plus an ordered range in it.
fn text_and_range() -> impl Strategy<Value = (String, usize, usize)> {
    "[a-zé#>*` \n-]{0,40}".prop_flat_map(|text| {
        let len = utf16_len(&text);
        (Just(text), 0..=len, 0..=len).prop_map(|(text, a, b)| (text, a.min(b), a.max(b)))
    })
}

fn marker() -> impl Strategy<Value = String> {
    "[*~`\\[\\]()!a-z]{0,4}"
}

fn line_prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("- "),
        Just("1. "),
        Just("- [ ] "),
        Just("> "),
        Just("# "),
        Just("### "),
    ]
}

proptest! {
    #[test]
    fn wrap_length_accounting((text, start, end) in text_and_range(), before in marker(), after in marker()) {
        let result = wrap_selection(&text, start, end, &before, &after);
        prop_assert_eq!(
            utf16_len(&result.formatted_text),
            utf16_len(&text) + utf16_len(&before) + utf16_len(&after)
        );
    }

    #[test]
    fn wrap_preserves_content_and_selection((text, start, end) in text_and_range(), before in marker(), after in marker()) {
        let result = wrap_selection(&text, start, end, &before, &after);
        let input = units(&text);
        let output = units(&result.formatted_text);
        let b = utf16_len(&before);
        let a = utf16_len(&after);

        prop_assert_eq!(&output[..start], &input[..start]);
        prop_assert_eq!(&output[start + b..end + b], &input[start..end]);
        prop_assert_eq!(&output[end + b + a..], &input[end..]);

        prop_assert_eq!(result.selection(), Range::new(start + b, end + b));
        prop_assert_eq!(result.cursor_position, end + b + a);
    }

    #[test]
    fn prefix_line_add_then_remove_is_identity((text, cursor, _) in text_and_range(), prefix in line_prefix()) {
        let first = prefix_line(&text, cursor, prefix);
        if utf16_len(&first.formatted_text) > utf16_len(&text) {
            let second = prefix_line(&first.formatted_text, first.cursor_position, prefix);
            prop_assert_eq!(&second.formatted_text, &text);
            prop_assert_eq!(second.cursor_position, cursor);
        }
    }

    #[test]
    fn prefix_line_result_is_caret((text, cursor, _) in text_and_range(), prefix in line_prefix()) {
        let result = prefix_line(&text, cursor, prefix);
        prop_assert!(result.selection().is_caret());
        prop_assert_eq!(result.selection_start, result.cursor_position);
        prop_assert!(result.cursor_position <= utf16_len(&result.formatted_text));
    }

    #[test]
    fn insert_selects_exactly_inserted_text((text, cursor, _) in text_and_range(), insert in "[a-z\n*]{0,12}") {
        let result = insert_at_cursor(&text, cursor, &insert);
        prop_assert_eq!(result.selection_end - result.selection_start, utf16_len(&insert));
        prop_assert_eq!(result.selection_start, cursor);
        prop_assert_eq!(result.cursor_position, result.selection_end);
    }

    #[test]
    fn heading_prefix_is_clamped(text in "[a-z ]{0,20}", level in any::<i64>()) {
        let n = level.clamp(1, 6) as usize;
        let result = format_heading(&text, 0, level);
        let expected = format!("{}{}", "#".repeat(n), " ");
        prop_assert!(result.formatted_text.starts_with(&expected));
        prop_assert_eq!(&result.formatted_text[expected.len()..], text.as_str());
    }

    #[test]
    fn every_action_keeps_selection_in_bounds(
        (text, start, end) in text_and_range(),
        index in 0..FORMATTING_ACTIONS.len(),
        toggle_wrap in any::<bool>(),
    ) {
        let action = FormatAction::from_id(FORMATTING_ACTIONS[index].id).unwrap();
        let options = FormatOptions::default().with_toggle_wrap(toggle_wrap);
        let result = apply_formatting(&action, &text, Range::new(start, end), &options);
        let len = utf16_len(&result.formatted_text);
        prop_assert!(result.selection_start <= result.selection_end);
        prop_assert!(result.selection_end <= len);
        prop_assert!(result.cursor_position <= len);
    }

    #[test]
    fn out_of_range_offsets_are_clamped(text in "[a-z]{0,10}", start in 0usize..40, end in 0usize..40) {
        let result = wrap_selection(&text, start, end, "*", "*");
        prop_assert_eq!(utf16_len(&result.formatted_text), utf16_len(&text) + 2);
        prop_assert!(result.selection_end <= utf16_len(&result.formatted_text));
    }
}
