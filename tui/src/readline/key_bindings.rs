// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use crate::{ClipboardService, CommonError, CommonErrorType, CommonResult, Key,
            KeyPress, LineEditor, SpecialKey, TerminalDevice, ok};

/// Outcome of dispatching one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadLineStatus {
    Continue,
    /// An Enter key press was handled; the read loop returns the buffer.
    Done,
}

/// The key-press handler set: stateless strategies dispatched by key code. One
/// variant per behavior from the editing contract; all state lives in the
/// [`LineEditor`] handed to [`Self::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Insert the key's printable character at the cursor; no-op otherwise.
    Literal,
    MoveLeft,
    MoveRight,
    MoveToHome,
    MoveToEnd,
    Backspace,
    Delete,
    /// Ctrl+V inserts clipboard content; without Ctrl it degrades to
    /// [`Self::Literal`].
    Paste,
    /// Tab: select the best match for the current input, or advance.
    NextSuggestion,
    /// Shift+Tab: select the best match, or retreat.
    PreviousSuggestion,
    AcceptLine,
}

impl KeyBinding {
    pub fn handle<D: TerminalDevice, C: ClipboardService>(
        self,
        key_press: KeyPress,
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        use handler_impl::{handle_accept_line, handle_backspace, handle_delete,
                           handle_literal, handle_paste, handle_suggestion_cycle};

        tracing::debug!(message = "dispatching key press", binding = ?self, key = ?key_press.key);

        match self {
            KeyBinding::Literal => handle_literal(key_press, editor),
            KeyBinding::MoveLeft => {
                editor.move_cursor_left(1)?;
                ok!(ReadLineStatus::Continue)
            }
            KeyBinding::MoveRight => {
                editor.move_cursor_right(1)?;
                ok!(ReadLineStatus::Continue)
            }
            KeyBinding::MoveToHome => {
                editor.move_cursor_to_home()?;
                ok!(ReadLineStatus::Continue)
            }
            KeyBinding::MoveToEnd => {
                editor.move_cursor_to_end()?;
                ok!(ReadLineStatus::Continue)
            }
            KeyBinding::Backspace => handle_backspace(editor),
            KeyBinding::Delete => handle_delete(editor),
            KeyBinding::Paste => handle_paste(key_press, editor),
            KeyBinding::NextSuggestion => {
                handle_suggestion_cycle(editor, SuggestionDirection::Forward)
            }
            KeyBinding::PreviousSuggestion => {
                handle_suggestion_cycle(editor, SuggestionDirection::Backward)
            }
            KeyBinding::AcceptLine => handle_accept_line(editor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuggestionDirection {
    Forward,
    Backward,
}

mod handler_impl {
    use super::{ClipboardService, CommonError, CommonErrorType, CommonResult,
                KeyPress, LineEditor, ReadLineStatus, SuggestionDirection,
                TerminalDevice, ok};
    use crate::OutputKind;

    pub fn handle_literal<D: TerminalDevice, C: ClipboardService>(
        key_press: KeyPress,
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        if let Some(character) = key_press.character()
            && !character.is_control()
        {
            editor.insert_user_input(&character.to_string())?;
            editor.select_no_suggestion();
        }
        ok!(ReadLineStatus::Continue)
    }

    pub fn handle_backspace<D: TerminalDevice, C: ClipboardService>(
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        if !editor.cursor_is_at_home() {
            editor.remove_previous_character_from_user_input()?;
            editor.select_no_suggestion();
        }
        ok!(ReadLineStatus::Continue)
    }

    pub fn handle_delete<D: TerminalDevice, C: ClipboardService>(
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        if !editor.cursor_is_at_end() {
            editor.remove_current_character_from_user_input()?;
            editor.select_no_suggestion();
        }
        ok!(ReadLineStatus::Continue)
    }

    pub fn handle_paste<D: TerminalDevice, C: ClipboardService>(
        key_press: KeyPress,
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        if !key_press.mask.ctrl_key_state.is_pressed() {
            return handle_literal(key_press, editor);
        }

        let content = match editor.clipboard.try_to_get_content_from_clipboard() {
            Ok(content) => content,
            Err(err) => {
                return CommonError::new_error_result(
                    CommonErrorType::ClipboardError,
                    format!("failed to read clipboard: {err}"),
                );
            }
        };

        editor.insert_user_input(&content)?;
        editor.select_no_suggestion();
        ok!(ReadLineStatus::Continue)
    }

    /// Tab / Shift+Tab. With nothing selected, select the best match for the
    /// current input; with a selection, advance or retreat circularly over
    /// the full sequence. Any selection CHANGE replaces the whole buffer with
    /// the selected suggestion; with no suggestions at all this is a no-op.
    pub fn handle_suggestion_cycle<D: TerminalDevice, C: ClipboardService>(
        editor: &mut LineEditor<D, C>,
        direction: SuggestionDirection,
    ) -> CommonResult<ReadLineStatus> {
        if editor.suggestions().is_empty() {
            return ok!(ReadLineStatus::Continue);
        }

        let selection_before = editor.suggestions().selected_index();
        if selection_before.is_none() {
            editor.select_first_matching_suggestion();
        } else {
            match direction {
                SuggestionDirection::Forward => editor.select_next_suggestion(),
                SuggestionDirection::Backward => editor.select_previous_suggestion(),
            }
        }

        if editor.suggestions().selected_index() != selection_before
            && let Some(selected) = editor.get_current_suggestion().map(str::to_string)
        {
            editor.replace_user_input_with(&selected)?;
        }

        ok!(ReadLineStatus::Continue)
    }

    pub fn handle_accept_line<D: TerminalDevice, C: ClipboardService>(
        editor: &mut LineEditor<D, C>,
    ) -> CommonResult<ReadLineStatus> {
        editor.device.write_char('\n', OutputKind::Default)?;
        ok!(ReadLineStatus::Done)
    }
}

/// Mapping from key code to [`KeyBinding`], plus the default binding used for
/// every key absent from the table (the [`KeyBinding::Literal`] strategy, which
/// only acts on keys bearing printable characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindingMap {
    pub bindings: HashMap<Key, KeyBinding>,
    pub default_binding: KeyBinding,
}

impl Default for KeyBindingMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Key::SpecialKey(SpecialKey::Left), KeyBinding::MoveLeft);
        bindings.insert(Key::SpecialKey(SpecialKey::Right), KeyBinding::MoveRight);
        bindings.insert(Key::SpecialKey(SpecialKey::Home), KeyBinding::MoveToHome);
        bindings.insert(Key::SpecialKey(SpecialKey::End), KeyBinding::MoveToEnd);
        bindings.insert(Key::SpecialKey(SpecialKey::Backspace), KeyBinding::Backspace);
        bindings.insert(Key::SpecialKey(SpecialKey::Delete), KeyBinding::Delete);
        bindings.insert(Key::SpecialKey(SpecialKey::Tab), KeyBinding::NextSuggestion);
        bindings.insert(
            Key::SpecialKey(SpecialKey::BackTab),
            KeyBinding::PreviousSuggestion,
        );
        bindings.insert(Key::SpecialKey(SpecialKey::Enter), KeyBinding::AcceptLine);
        // Ctrl+V; the binding itself degrades to Literal without the modifier.
        bindings.insert(Key::Character('v'), KeyBinding::Paste);

        KeyBindingMap {
            bindings,
            default_binding: KeyBinding::Literal,
        }
    }
}

impl KeyBindingMap {
    #[must_use]
    pub fn binding_for(&self, key: &Key) -> KeyBinding {
        self.bindings
            .get(key)
            .copied()
            .unwrap_or(self.default_binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_keys_resolve_to_their_binding() {
        let map = KeyBindingMap::default();
        assert_eq!(
            map.binding_for(&Key::SpecialKey(SpecialKey::Tab)),
            KeyBinding::NextSuggestion
        );
        assert_eq!(map.binding_for(&Key::Character('v')), KeyBinding::Paste);
    }

    #[test]
    fn test_unmapped_keys_fall_back_to_default() {
        let map = KeyBindingMap::default();
        assert_eq!(map.binding_for(&Key::Character('a')), KeyBinding::Literal);
        assert_eq!(
            map.binding_for(&Key::SpecialKey(SpecialKey::Esc)),
            KeyBinding::Literal
        );
    }
}
