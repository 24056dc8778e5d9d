// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, KeyPress, OutputKind, Pos, Size};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorVisibility {
    Visible,
    Hidden,
}

/// The raw terminal collaborator this crate draws on. All calls are synchronous;
/// [`Self::read_key_press`] blocks the calling thread until a key arrives.
///
/// The window size may change between any two calls, which is why the line
/// editor re-reads it on every cursor-wrap calculation instead of caching it.
///
/// The production implementation is [`crate::CrosstermDevice`]; tests use
/// [`crate::TerminalDeviceMock`].
pub trait TerminalDevice {
    /// Block until the next semantic key press arrives.
    fn read_key_press(&mut self) -> CommonResult<KeyPress>;

    fn write_text(&mut self, text: &str, kind: OutputKind) -> CommonResult<()>;

    fn write_char(&mut self, character: char, kind: OutputKind) -> CommonResult<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str, kind: OutputKind) -> CommonResult<()>;

    fn clear_screen(&mut self) -> CommonResult<()>;

    fn cursor_position(&mut self) -> CommonResult<Pos>;

    fn set_cursor_position(&mut self, arg_pos: Pos) -> CommonResult<()>;

    fn set_cursor_visibility(
        &mut self,
        visibility: CursorVisibility,
    ) -> CommonResult<()>;

    /// The current window size. Never cached by callers.
    fn window_size(&mut self) -> CommonResult<Size>;
}
