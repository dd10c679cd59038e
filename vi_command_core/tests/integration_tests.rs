//! Integration tests for the command editor
//!
//! These tests run complete command strings through the public `Editor`
//! facade and check the final text and cursor.

use test_log::test;
use vi_command_core::{Count, Editor, EditorConfig, ParseError, ParseErrorKind};

fn run(text: &str, commands: &str) -> (String, usize) {
    let editor = Editor::new(text, commands).unwrap();
    (editor.text(), editor.cursor())
}

#[test]
fn test_move_right_five() {
    assert_eq!(run("hello world", "5l"), ("hello world".to_string(), 5));
}

#[test]
fn test_single_replace() {
    assert_eq!(run("abc", "rX"), ("Xbc".to_string(), 0));
}

#[test]
fn test_counted_replace() {
    assert_eq!(run("abcdef", "3rX"), ("XXXdef".to_string(), 3));
}

#[test]
fn test_find_next() {
    assert_eq!(run("abczef", "fz"), ("abczef".to_string(), 3));
    assert_eq!(run("abczef", "fq"), ("abczef".to_string(), 0));
}

#[test]
fn test_unsupported_command_fails() {
    let err = Editor::new("hello", "5k").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnsupportedCommand);
    assert_eq!(err.command(), 'k');
}

#[test]
fn test_missing_argument_fails() {
    let err = Editor::new("hello", "3lr").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingArgument {
            command: 'r',
            offset: 2
        }
    );
}

#[test]
fn test_delete_and_undo_workflow() {
    // delete "world", put it back, then delete "hello "
    let editor = Editor::new("hello world", "6l5xu6h6x").unwrap();
    assert_eq!(editor.text(), "world");
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn test_undo_multiple_steps() {
    let editor = Editor::new("abcdef", "xxx2u").unwrap();
    assert_eq!(editor.text(), "bcdef");
}

#[test]
fn test_undo_everything_returns_to_start() {
    let editor = Editor::new("abcdef", "3lrZfd2x999u").unwrap();
    assert_eq!(editor.text(), "abcdef");
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn test_undo_after_undo_walks_further_back() {
    // every undo pops one snapshot, and moves recorded one too
    let editor = Editor::new("abc", "lxlxuu").unwrap();
    assert_eq!(editor.text(), "ac");
    assert_eq!(editor.cursor(), 1);

    let editor = Editor::new("abc", "lxlxuuu").unwrap();
    assert_eq!(editor.text(), "abc");
    assert_eq!(editor.cursor(), 1);
}

#[test]
fn test_overflowing_count_deletes_to_end() {
    let editor = Editor::new("hello world", "5l99999999999999999999x").unwrap();
    assert_eq!(editor.text(), "hello");
    assert_eq!(editor.cursor(), 5);
}

#[test]
fn test_unbounded_replace_fills_buffer() {
    let editor = Editor::new("abcd", "l4294967296r.").unwrap();
    assert_eq!(editor.text(), "a...");
    assert_eq!(editor.cursor(), 3);
}

#[test]
fn test_empty_text() {
    let editor = Editor::new("", "5lx3hrAfzu").unwrap();
    assert_eq!(editor.text(), "");
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn test_unicode_text() {
    let editor = Editor::new("naïve café", "2lr-fér!").unwrap();
    assert_eq!(editor.text(), "na-ve caf!");
    assert_eq!(editor.cursor(), 9);
}

#[test]
fn test_printout() {
    let editor = Editor::new("hello world", "fwx").unwrap();
    assert_eq!(editor.to_string(), "hello orld\nCursor: 6");
}

#[test]
fn test_history_limit_caps_undo() {
    let config = EditorConfig::default().with_history_limit(Some(1));
    let editor = Editor::with_config("abcdef", "xxxx9u", &config).unwrap();
    assert_eq!(editor.text(), "def");
}

#[test]
fn test_commands_exposed_in_order() {
    let editor = Editor::new("abc", "2x3u").unwrap();
    assert_eq!(
        editor.commands().iter().map(|c| c.count()).collect::<Vec<_>>(),
        vec![Some(Count::Times(2)), Some(Count::Times(3))]
    );
}
