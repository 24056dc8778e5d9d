// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// This is equivalent to [`crossterm::event::KeyEvent`] except that it is cleaned
/// up semantically and impossible states are removed. Apps written against this
/// crate use [`KeyPress`] and not `KeyEvent`, which keeps the door open for a
/// different terminal backend.
///
/// Only `KeyEventKind::Press` events convert into a [`KeyPress`]; repeat and
/// release events (kitty keyboard protocol) are dropped at the conversion seam.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub struct KeyPress {
    pub key: Key,
    pub mask: ModifierKeysMask,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum Key {
    /// [char] that can be printed to the console in a single cell.
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum SpecialKey {
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Esc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl KeyState {
    #[must_use]
    pub fn is_pressed(&self) -> bool { matches!(self, KeyState::Pressed) }
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }
}

impl From<KeyModifiers> for ModifierKeysMask {
    fn from(modifiers: KeyModifiers) -> Self {
        let to_state = |pressed: bool| {
            if pressed {
                KeyState::Pressed
            } else {
                KeyState::NotPressed
            }
        };
        ModifierKeysMask {
            shift_key_state: to_state(modifiers.intersects(KeyModifiers::SHIFT)),
            ctrl_key_state: to_state(modifiers.intersects(KeyModifiers::CONTROL)),
            alt_key_state: to_state(modifiers.intersects(KeyModifiers::ALT)),
        }
    }
}

impl KeyPress {
    #[must_use]
    pub fn plain(key: Key) -> Self {
        KeyPress {
            key,
            mask: ModifierKeysMask::default(),
        }
    }

    #[must_use]
    pub fn with_mask(key: Key, mask: ModifierKeysMask) -> Self { KeyPress { key, mask } }

    /// The printable character this key press carries, if any.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        match self.key {
            Key::Character(character) => Some(character),
            Key::SpecialKey(_) => None,
        }
    }
}

/// Convert a raw crossterm event into the semantic key model. Returns [`None`]
/// for key codes this crate has no use for (function keys, media keys, ...) and
/// for non-`Press` event kinds.
#[must_use]
pub fn try_convert_key_event(key_event: KeyEvent) -> Option<KeyPress> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match key_event.code {
        KeyCode::Char(character) => Key::Character(character),
        KeyCode::Enter => Key::SpecialKey(SpecialKey::Enter),
        KeyCode::Backspace => Key::SpecialKey(SpecialKey::Backspace),
        KeyCode::Delete => Key::SpecialKey(SpecialKey::Delete),
        KeyCode::Left => Key::SpecialKey(SpecialKey::Left),
        KeyCode::Right => Key::SpecialKey(SpecialKey::Right),
        KeyCode::Home => Key::SpecialKey(SpecialKey::Home),
        KeyCode::End => Key::SpecialKey(SpecialKey::End),
        KeyCode::Tab => Key::SpecialKey(SpecialKey::Tab),
        KeyCode::BackTab => Key::SpecialKey(SpecialKey::BackTab),
        KeyCode::Esc => Key::SpecialKey(SpecialKey::Esc),
        _ => return None,
    };

    Some(KeyPress {
        key,
        mask: key_event.modifiers.into(),
    })
}

/// Terse constructors for [`KeyPress`] values, mostly useful in tests.
///
/// ```
/// use paneline_tui::{key_press, KeyPress, Key, SpecialKey, ModifierKeysMask};
///
/// let a = key_press!(@char 'a');
/// let enter = key_press!(@special SpecialKey::Enter);
/// let ctrl_v = key_press!(@char ModifierKeysMask::new().with_ctrl(), 'v');
/// ```
#[macro_export]
macro_rules! key_press {
    (@char $arg_char:expr) => {
        $crate::KeyPress::plain($crate::Key::Character($arg_char))
    };

    (@char $arg_mask:expr, $arg_char:expr) => {
        $crate::KeyPress::with_mask($crate::Key::Character($arg_char), $arg_mask)
    };

    (@special $arg_special:expr) => {
        $crate::KeyPress::plain($crate::Key::SpecialKey($arg_special))
    };

    (@special $arg_mask:expr, $arg_special:expr) => {
        $crate::KeyPress::with_mask($crate::Key::SpecialKey($arg_special), $arg_mask)
    };
}
