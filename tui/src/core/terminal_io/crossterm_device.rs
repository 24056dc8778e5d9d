// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::io::{Stdout, Write, stdout};

use crossterm::{cursor,
                event::{Event, read},
                queue,
                style::{Color, Print, ResetColor, SetForegroundColor},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use super::{CursorVisibility, TerminalDevice};
use crate::{CommonResult, KeyPress, OutputKind, Pos, Size, ok, pos, size,
            try_convert_key_event};

/// Production [`TerminalDevice`] on top of crossterm, writing to stdout. Keys
/// are read with the blocking [`crossterm::event::read`]; mouse and resize
/// events are skipped (a resize is picked up naturally because window size is
/// re-read on every call that needs it).
///
/// Raw mode is the caller's concern; this device only reads and writes.
#[allow(missing_debug_implementations)]
pub struct CrosstermDevice {
    output: Stdout,
}

impl Default for CrosstermDevice {
    fn default() -> Self { Self::new() }
}

impl CrosstermDevice {
    #[must_use]
    pub fn new() -> Self { CrosstermDevice { output: stdout() } }

    /// Colour policy for this device. Kept here, invisible to the rest of the
    /// crate, per the output-kind contract.
    fn foreground_color_for(kind: OutputKind) -> Color {
        match kind {
            OutputKind::Default => Color::Reset,
            OutputKind::Prompt => Color::Green,
            OutputKind::UserInput => Color::Cyan,
            OutputKind::Error => Color::Red,
            OutputKind::MenuHeader => Color::Magenta,
            OutputKind::MenuBody => Color::White,
        }
    }

    fn write_fragment(&mut self, fragment: &str, kind: OutputKind) -> CommonResult<()> {
        queue!(
            self.output,
            SetForegroundColor(Self::foreground_color_for(kind)),
            Print(fragment),
            ResetColor
        )
        .into_diagnostic()?;
        self.output.flush().into_diagnostic()?;
        ok!()
    }
}

impl TerminalDevice for CrosstermDevice {
    fn read_key_press(&mut self) -> CommonResult<KeyPress> {
        loop {
            let event = read().into_diagnostic()?;
            if let Event::Key(key_event) = event
                && let Some(key_press) = try_convert_key_event(key_event)
            {
                return ok!(key_press);
            }
        }
    }

    fn write_text(&mut self, text: &str, kind: OutputKind) -> CommonResult<()> {
        self.write_fragment(text, kind)
    }

    fn write_char(&mut self, character: char, kind: OutputKind) -> CommonResult<()> {
        let mut buffer = [0u8; 4];
        self.write_fragment(character.encode_utf8(&mut buffer), kind)
    }

    fn write_line(&mut self, text: &str, kind: OutputKind) -> CommonResult<()> {
        self.write_fragment(text, kind)?;
        // Raw mode needs an explicit carriage return.
        self.write_fragment("\r\n", OutputKind::Default)
    }

    fn clear_screen(&mut self) -> CommonResult<()> {
        queue!(
            self.output,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .into_diagnostic()?;
        self.output.flush().into_diagnostic()?;
        ok!()
    }

    fn cursor_position(&mut self) -> CommonResult<Pos> {
        let (col, row) = cursor::position().into_diagnostic()?;
        ok!(pos((col, row)))
    }

    fn set_cursor_position(&mut self, arg_pos: Pos) -> CommonResult<()> {
        queue!(
            self.output,
            cursor::MoveTo(*arg_pos.col_index, *arg_pos.row_index)
        )
        .into_diagnostic()?;
        self.output.flush().into_diagnostic()?;
        ok!()
    }

    fn set_cursor_visibility(
        &mut self,
        visibility: CursorVisibility,
    ) -> CommonResult<()> {
        match visibility {
            CursorVisibility::Visible => {
                queue!(self.output, cursor::Show).into_diagnostic()?;
            }
            CursorVisibility::Hidden => {
                queue!(self.output, cursor::Hide).into_diagnostic()?;
            }
        }
        self.output.flush().into_diagnostic()?;
        ok!()
    }

    fn window_size(&mut self) -> CommonResult<Size> {
        let (columns, rows) = crossterm::terminal::size().into_diagnostic()?;
        ok!(size((columns, rows)))
    }
}
