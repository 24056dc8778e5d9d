// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

//! End-to-end line-editor scenarios against a scripted terminal device.

use paneline_tui::{LineEditor, ModifierKeysMask, SpecialKey, Suggestions,
                   TerminalDeviceMock, clipboard_test_fixtures::TestClipboard,
                   key_press, size};
use pretty_assertions::assert_eq;

fn fruit_suggestions() -> Suggestions {
    Suggestions::new([
        "apple",
        "banana",
        "cherry",
        "date",
        "elderberry",
        "fig",
        "grape",
        "honeydew",
        "kiwi",
        "lemon",
        "mango",
        "nectarine",
        "orange",
        "pear",
    ])
}

fn editor_with_keys(
    key_presses: impl IntoIterator<Item = paneline_tui::KeyPress>,
) -> LineEditor<TerminalDeviceMock, TestClipboard> {
    let device = TerminalDeviceMock::with_key_presses(size((80, 24)), key_presses);
    LineEditor::new(device, TestClipboard::default())
}

#[test]
fn test_typing_a_plain_word_returns_it() {
    let mut editor = editor_with_keys([
        key_press!(@char 'a'),
        key_press!(@char 'p'),
        key_press!(@char 'p'),
        key_press!(@char 'l'),
        key_press!(@char 'e'),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(fruit_suggestions(), "> ").unwrap();
    assert_eq!(line, "apple");

    let rows = editor.device.get_copy_of_grid_as_strings();
    assert!(rows[0].starts_with("> apple"));
}

#[test]
fn test_tab_completes_to_first_prefix_match() {
    let mut editor = editor_with_keys([
        key_press!(@char 'm'),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(fruit_suggestions(), "> ").unwrap();
    assert_eq!(line, "mango");
}

#[test]
fn test_second_tab_advances_to_next_suggestion() {
    let mut editor = editor_with_keys([
        key_press!(@char 'm'),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(fruit_suggestions(), "> ").unwrap();
    assert_eq!(line, "nectarine");
}

#[test]
fn test_shift_tab_retreats_to_previous_suggestion() {
    // 'p' + Tab selects "pear"; Shift+Tab steps back to "orange".
    let mut editor = editor_with_keys([
        key_press!(@char 'p'),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special ModifierKeysMask::new().with_shift(), SpecialKey::BackTab),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(fruit_suggestions(), "> ").unwrap();
    assert_eq!(line, "orange");
}

#[test]
fn test_tab_with_no_suggestions_is_a_no_op() {
    let mut editor = editor_with_keys([
        key_press!(@char 'm'),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(Suggestions::default(), "> ").unwrap();
    assert_eq!(line, "m");
}

#[test]
fn test_backspace_and_literal_editing() {
    let mut editor = editor_with_keys([
        key_press!(@char 'a'),
        key_press!(@char 'b'),
        key_press!(@char 'x'),
        key_press!(@special SpecialKey::Backspace),
        key_press!(@char 'c'),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(Suggestions::default(), "> ").unwrap();
    assert_eq!(line, "abc");
}

#[test]
fn test_editing_in_the_middle_via_arrows_and_delete() {
    let mut editor = editor_with_keys([
        key_press!(@char 'a'),
        key_press!(@char 'b'),
        key_press!(@char 'c'),
        key_press!(@special SpecialKey::Home),
        key_press!(@special SpecialKey::Delete),
        key_press!(@special SpecialKey::End),
        key_press!(@char 'd'),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(Suggestions::default(), "> ").unwrap();
    assert_eq!(line, "bcd");
}

#[test]
fn test_replacement_with_shorter_suggestion_blanks_leftover_cells() {
    // Tab selects "nectarine"; Shift+Tab retreats to "mango", which is four
    // chars shorter, so the leftover cells on screen must be blanked out.
    let mut editor = editor_with_keys([
        key_press!(@char 'n'),
        key_press!(@special SpecialKey::Tab),
        key_press!(@special ModifierKeysMask::new().with_shift(), SpecialKey::BackTab),
        key_press!(@special SpecialKey::Enter),
    ]);

    let line = editor.read_line(fruit_suggestions(), "> ").unwrap();
    assert_eq!(line, "mango");

    let rows = editor.device.get_copy_of_grid_as_strings();
    assert!(rows[0].starts_with("> mango     "));
}
