// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{ClipboardService, CommonResult, CursorVisibility, KeyBindingMap,
            OutputKind, PrefixSuggestionMatcher, ReadLineStatus, SuggestionMatcher,
            Suggestions, TerminalDevice, ch, ok};

/// Single-line editor with suggestion autocomplete.
///
/// Holds the accumulating buffer and a LOGICAL cursor (a char index into the
/// buffer). The PHYSICAL cursor lives in the [`TerminalDevice`] and is kept in
/// sync by the editing operations, wrapping across terminal rows when the
/// input is longer than the window is wide.
///
/// [`Self::read_line`] drives the interactive loop; every key press is
/// resolved through the [`KeyBindingMap`] and dispatched to the matching
/// [`crate::KeyBinding`].
pub struct LineEditor<D: TerminalDevice, C: ClipboardService> {
    pub device: D,
    pub clipboard: C,
    pub matcher: Box<dyn SuggestionMatcher>,
    pub key_binding_map: KeyBindingMap,
    buffer: String,
    /// Char index into `buffer`, in `0..=char_count`.
    cursor_index: usize,
    suggestions: Suggestions,
}

mod constructor {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        pub fn new(device: D, clipboard: C) -> Self {
            LineEditor {
                device,
                clipboard,
                matcher: Box::new(PrefixSuggestionMatcher::default()),
                key_binding_map: KeyBindingMap::default(),
                buffer: String::new(),
                cursor_index: 0,
                suggestions: Suggestions::default(),
            }
        }
    }
}

mod state_api {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        pub fn user_input(&self) -> &str { &self.buffer }

        pub fn cursor_index(&self) -> usize { self.cursor_index }

        pub fn cursor_is_at_home(&self) -> bool { self.cursor_index == 0 }

        pub fn cursor_is_at_end(&self) -> bool {
            self.cursor_index == self.buffer.chars().count()
        }

        pub fn suggestions(&self) -> &Suggestions { &self.suggestions }

        pub fn set_suggestions(&mut self, suggestions: Suggestions) {
            self.suggestions = suggestions;
        }

        /// Byte offset of the logical cursor into the buffer.
        pub(super) fn byte_index_at_cursor(&self) -> usize {
            self.buffer
                .char_indices()
                .nth(self.cursor_index)
                .map(|(byte_index, _)| byte_index)
                .unwrap_or(self.buffer.len())
        }
    }
}

mod editing_ops {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        /// Insert `text` at the cursor, echo it, re-echo the tail that was
        /// pushed right, and leave the physical cursor just past the
        /// insertion. Empty `text` is a no-op.
        pub fn insert_user_input(&mut self, text: &str) -> CommonResult<()> {
            if text.is_empty() {
                return ok!();
            }

            let byte_index = self.byte_index_at_cursor();
            let tail = self.buffer[byte_index..].to_string();
            self.buffer.insert_str(byte_index, text);
            self.cursor_index += text.chars().count();

            self.device.write_text(text, OutputKind::UserInput)?;
            if !tail.is_empty() {
                self.device.write_text(&tail, OutputKind::UserInput)?;
                self.move_physical_cursor_left(tail.chars().count())?;
            }
            ok!()
        }

        /// Remove the character UNDER the cursor (Delete). Re-echoes the
        /// shifted tail plus one blank to erase the now-stale last cell, then
        /// restores the physical cursor. No-op at the end of the buffer.
        pub fn remove_current_character_from_user_input(
            &mut self,
        ) -> CommonResult<()> {
            if self.cursor_is_at_end() {
                return ok!();
            }

            let byte_index = self.byte_index_at_cursor();
            self.buffer.remove(byte_index);
            let tail = self.buffer[byte_index..].to_string();

            self.device.write_text(&tail, OutputKind::UserInput)?;
            self.device.write_char(' ', OutputKind::Default)?;
            self.move_physical_cursor_left(tail.chars().count() + 1)?;
            ok!()
        }

        /// Remove the character BEFORE the cursor (Backspace). No-op at the
        /// start of the buffer.
        pub fn remove_previous_character_from_user_input(
            &mut self,
        ) -> CommonResult<()> {
            if self.cursor_is_at_home() {
                return ok!();
            }
            self.move_cursor_left(1)?;
            self.remove_current_character_from_user_input()
        }

        /// Replace the whole buffer with `text`. When the replacement is
        /// shorter than what was on screen, the leftover cells are
        /// overwritten with blanks and the physical cursor is pulled back to
        /// sit just past the replacement.
        pub fn replace_user_input_with(&mut self, text: &str) -> CommonResult<()> {
            let previous_char_count = self.buffer.chars().count();

            self.move_cursor_to_home()?;
            self.buffer.clear();
            self.buffer.push_str(text);
            self.cursor_index = self.buffer.chars().count();

            self.device.write_text(text, OutputKind::UserInput)?;
            let pad_count = previous_char_count.saturating_sub(self.cursor_index);
            if pad_count > 0 {
                self.device
                    .write_text(&" ".repeat(pad_count), OutputKind::UserInput)?;
                self.move_physical_cursor_left(pad_count)?;
            }
            ok!()
        }
    }
}

mod cursor_ops {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        /// Move the logical and physical cursor left by up to `cell_count`
        /// cells, clamped at the start of the buffer.
        pub fn move_cursor_left(&mut self, cell_count: usize) -> CommonResult<()> {
            let step_count = cell_count.min(self.cursor_index);
            self.cursor_index -= step_count;
            self.move_physical_cursor_left(step_count)
        }

        /// Move the logical and physical cursor right by up to `cell_count`
        /// cells, clamped at the end of the buffer.
        pub fn move_cursor_right(&mut self, cell_count: usize) -> CommonResult<()> {
            let remaining = self.buffer.chars().count() - self.cursor_index;
            let step_count = cell_count.min(remaining);
            self.cursor_index += step_count;
            self.move_physical_cursor_right(step_count)
        }

        pub fn move_cursor_to_home(&mut self) -> CommonResult<()> {
            while self.cursor_index > 0 {
                self.move_cursor_left(1)?;
            }
            ok!()
        }

        pub fn move_cursor_to_end(&mut self) -> CommonResult<()> {
            while self.cursor_index < self.buffer.chars().count() {
                self.move_cursor_right(1)?;
            }
            ok!()
        }

        /// Move the terminal cursor left one cell at a time, wrapping to the
        /// end of the row above at column 0. The window width is re-read on
        /// every step so a mid-sequence resize cannot desync the wrap.
        pub(super) fn move_physical_cursor_left(
            &mut self,
            cell_count: usize,
        ) -> CommonResult<()> {
            for _ in 0..cell_count {
                let window_width = self.device.window_size()?.col_width;
                if window_width.is_zero() {
                    return ok!();
                }
                let mut cursor = self.device.cursor_position()?;
                if cursor.col_index.is_zero() {
                    cursor.col_index = window_width - ch(1);
                    cursor.row_index = cursor.row_index - ch(1);
                } else {
                    cursor.col_index = cursor.col_index - ch(1);
                }
                self.device.set_cursor_position(cursor)?;
            }
            ok!()
        }

        /// Mirror image of [`Self::move_physical_cursor_left`]: wraps to
        /// column 0 of the row below at the last column.
        pub(super) fn move_physical_cursor_right(
            &mut self,
            cell_count: usize,
        ) -> CommonResult<()> {
            for _ in 0..cell_count {
                let window_width = self.device.window_size()?.col_width;
                if window_width.is_zero() {
                    return ok!();
                }
                let mut cursor = self.device.cursor_position()?;
                if cursor.col_index == window_width - ch(1) {
                    cursor.col_index = ch(0);
                    cursor.row_index = cursor.row_index + ch(1);
                } else {
                    cursor.col_index = cursor.col_index + ch(1);
                }
                self.device.set_cursor_position(cursor)?;
            }
            ok!()
        }
    }
}

mod suggestion_ops {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        /// Ask the matcher for the best suggestion for the current input and
        /// select it. When nothing matches the selection is left unchanged.
        pub fn select_first_matching_suggestion(&mut self) {
            if let Some(index) =
                self.matcher.find_match(&self.buffer, self.suggestions.items())
            {
                self.suggestions.select(index);
            }
        }

        pub fn select_next_suggestion(&mut self) { self.suggestions.select_next(); }

        pub fn select_previous_suggestion(&mut self) {
            self.suggestions.select_previous();
        }

        pub fn select_no_suggestion(&mut self) { self.suggestions.select_none(); }

        pub fn get_current_suggestion(&self) -> Option<&str> {
            self.suggestions.current()
        }
    }
}

mod read_line_api {
    use super::*;

    impl<D: TerminalDevice, C: ClipboardService> LineEditor<D, C> {
        /// Run the interactive loop: echo the prompt, then read and dispatch
        /// key presses until Enter. The cursor is hidden while a key press is
        /// being handled so partial redraws never flicker it around the
        /// screen. Returns the accumulated buffer and resets the editor.
        pub fn read_line(
            &mut self,
            suggestions: Suggestions,
            prompt: &str,
        ) -> CommonResult<String> {
            self.buffer.clear();
            self.cursor_index = 0;
            self.suggestions = suggestions;

            if !prompt.is_empty() {
                self.device.write_text(prompt, OutputKind::Prompt)?;
            }

            loop {
                self.device.set_cursor_visibility(CursorVisibility::Hidden)?;
                let key_press = self.device.read_key_press()?;
                let binding = self.key_binding_map.binding_for(&key_press.key);
                let status = binding.handle(key_press, self)?;
                self.device.set_cursor_visibility(CursorVisibility::Visible)?;

                if status == ReadLineStatus::Done {
                    self.cursor_index = 0;
                    return ok!(std::mem::take(&mut self.buffer));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ModifierKeysMask, Pos, SpecialKey, TerminalDeviceMock, key_press,
                clipboard_test_fixtures::TestClipboard, pos, size};

    fn make_editor(
        device: TerminalDeviceMock,
    ) -> LineEditor<TerminalDeviceMock, TestClipboard> {
        LineEditor::new(device, TestClipboard::default())
    }

    #[test]
    fn test_insert_in_middle_redraws_tail_and_restores_cursor() {
        let mut editor = make_editor(TerminalDeviceMock::default());

        editor.insert_user_input("ac").unwrap();
        editor.move_cursor_left(1).unwrap();
        editor.insert_user_input("b").unwrap();

        assert_eq!(editor.user_input(), "abc");
        assert_eq!(editor.cursor_index(), 2);
        let rows = editor.device.get_copy_of_grid_as_strings();
        assert!(rows[0].starts_with("abc"));
        assert_eq!(editor.device.cursor, pos((2, 0)));
    }

    #[test]
    fn test_remove_current_character_blanks_stale_cell() {
        let mut editor = make_editor(TerminalDeviceMock::default());

        editor.insert_user_input("abc").unwrap();
        editor.move_cursor_to_home().unwrap();
        editor.remove_current_character_from_user_input().unwrap();

        assert_eq!(editor.user_input(), "bc");
        assert_eq!(editor.cursor_index(), 0);
        let rows = editor.device.get_copy_of_grid_as_strings();
        assert!(rows[0].starts_with("bc "));
        assert_eq!(editor.device.cursor, pos((0, 0)));
    }

    #[test]
    fn test_replace_with_shorter_text_pads_with_blanks() {
        let mut editor = make_editor(TerminalDeviceMock::default());

        editor.insert_user_input("123").unwrap();
        editor.replace_user_input_with("12").unwrap();

        assert_eq!(editor.user_input(), "12");
        assert_eq!(editor.cursor_index(), 2);
        let rows = editor.device.get_copy_of_grid_as_strings();
        assert!(rows[0].starts_with("12 "));
        assert_eq!(editor.device.cursor, pos((2, 0)));
    }

    #[test]
    fn test_cursor_wraps_across_rows_on_narrow_window() {
        let mut device = TerminalDeviceMock::default();
        device.window_size = size((4, 10));
        let mut editor = make_editor(device);

        editor.insert_user_input("abcdef").unwrap();
        assert_eq!(editor.device.cursor, pos((2, 1)));

        editor.move_cursor_to_home().unwrap();
        assert_eq!(editor.device.cursor, Pos::default());

        editor.move_cursor_to_end().unwrap();
        assert_eq!(editor.device.cursor, pos((2, 1)));
    }

    #[test]
    fn test_insert_then_forward_deletes_restore_the_buffer() {
        let mut editor = make_editor(TerminalDeviceMock::default());
        editor.insert_user_input("abcd").unwrap();
        editor.move_cursor_left(2).unwrap();
        editor.insert_user_input("xy").unwrap();
        assert_eq!(editor.user_input(), "abxycd");

        editor.move_cursor_left(2).unwrap();
        editor.remove_current_character_from_user_input().unwrap();
        editor.remove_current_character_from_user_input().unwrap();
        assert_eq!(editor.user_input(), "abcd");
        assert_eq!(editor.cursor_index(), 2);
    }

    #[test]
    fn test_movement_clamps_at_buffer_edges() {
        let mut editor = make_editor(TerminalDeviceMock::default());

        editor.insert_user_input("hi").unwrap();
        editor.move_cursor_right(5).unwrap();
        assert_eq!(editor.cursor_index(), 2);

        editor.move_cursor_left(99).unwrap();
        assert_eq!(editor.cursor_index(), 0);
        assert_eq!(editor.device.cursor, pos((0, 0)));
    }

    #[test]
    fn test_paste_via_ctrl_v_inserts_clipboard_content() {
        let device = TerminalDeviceMock::with_key_presses(
            size((80, 24)),
            [key_press!(@char ModifierKeysMask::new().with_ctrl(), 'v'),
             key_press!(@special SpecialKey::Enter)],
        );
        let clipboard = TestClipboard::containing("pasted");
        let mut editor = LineEditor::new(device, clipboard);

        let line = editor.read_line(Suggestions::default(), "> ").unwrap();
        assert_eq!(line, "pasted");
    }
}
