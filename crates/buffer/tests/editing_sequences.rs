// Chunk: docs/chunks/text_buffer - Gap-buffer backed document storage

//! Integration tests for realistic editing sequences.
//!
//! These exercise the cursor bookkeeping and revision counter through the
//! kind of typing a notepad tab sees.

use notepad_buffer::{Position, TextBuffer};

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();

    for ch in "hello".chars() {
        buf.insert_char(ch);
    }
    assert_eq!(buf.content(), "hello");
    assert_eq!(buf.cursor_position(), Position::new(0, 5));

    for _ in 0..5 {
        assert!(buf.delete_backward());
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor_position(), Position::new(0, 0));
    assert_eq!(buf.revision(), 10);
}

#[test]
fn test_type_lines_then_edit_in_the_middle() {
    let mut buf = TextBuffer::new();
    buf.insert_str("first line\nsecond line\nthird line");
    assert_eq!(buf.line_count(), 3);

    buf.set_cursor(Position::new(1, 0));
    buf.insert_str("the ");
    assert_eq!(buf.line_content(1), "the second line");
    assert_eq!(buf.cursor_position(), Position::new(1, 4));

    buf.set_cursor(Position::new(2, 0));
    buf.delete_backward();
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.line_content(1), "the second linethird line");
}

#[test]
fn test_replace_then_continue_typing_at_end() {
    let mut buf = TextBuffer::from_str("draft");
    buf.replace_content("hello");
    buf.insert_str(" world");
    assert_eq!(buf.content(), "hello world");
}

#[test]
fn test_multibyte_content_round_trips() {
    let text = "Привет, мир\n日本語\n👨‍👩‍👧 family";
    let mut buf = TextBuffer::from_str(text);
    assert_eq!(buf.content(), text);
    assert_eq!(buf.line_content(1), "日本語");

    buf.set_cursor(Position::new(2, 5));
    assert!(buf.delete_backward());
    assert_eq!(buf.line_content(2), " family");
}
