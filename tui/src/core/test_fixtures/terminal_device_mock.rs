// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::{CommonError, CommonErrorType, CommonResult, CursorVisibility, KeyPress,
            OutputKind, Pos, Size, TerminalDevice, ok, pos, size};

/// An in-memory [`TerminalDevice`] for tests: key presses come from a scripted
/// queue, writes land in a virtual cell grid at the virtual cursor (with
/// terminal-style line wrap at the window width), and every write is also
/// recorded verbatim so tests can assert on the exact echo sequence.
///
/// The window size is a plain public field so tests can "resize the terminal"
/// between calls.
#[derive(Debug)]
pub struct TerminalDeviceMock {
    pub key_presses: VecDeque<KeyPress>,
    pub window_size: Size,
    pub cursor: Pos,
    pub cursor_visibility: CursorVisibility,
    /// Every `write_*` call in order: the text and its output kind.
    pub write_log: Vec<(String, OutputKind)>,
    /// Number of cells actually placed into the grid.
    pub cell_write_count: usize,
    /// Rows grow on demand; each row is exactly `window_size.col_width` wide.
    grid: Vec<Vec<char>>,
}

impl Default for TerminalDeviceMock {
    fn default() -> Self { Self::new(size((80, 24))) }
}

impl TerminalDeviceMock {
    #[must_use]
    pub fn new(window_size: Size) -> Self {
        TerminalDeviceMock {
            key_presses: VecDeque::new(),
            window_size,
            cursor: pos((0, 0)),
            cursor_visibility: CursorVisibility::Visible,
            write_log: Vec::new(),
            cell_write_count: 0,
            grid: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key_presses(
        window_size: Size,
        key_presses: impl IntoIterator<Item = KeyPress>,
    ) -> Self {
        let mut this = Self::new(window_size);
        this.key_presses = key_presses.into_iter().collect();
        this
    }

    /// Everything written through the device, concatenated in call order.
    #[must_use]
    pub fn get_copy_of_write_log_as_string(&self) -> String {
        self.write_log
            .iter()
            .map(|(text, _)| text.as_str())
            .collect()
    }

    /// The virtual screen as one string per row (rows grown so far only).
    #[must_use]
    pub fn get_copy_of_grid_as_strings(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().collect()).collect()
    }

    /// The character at one cell, or blank if that row was never written.
    #[must_use]
    pub fn char_at(&self, arg_pos: Pos) -> char {
        self.grid
            .get(arg_pos.row_index.as_usize())
            .and_then(|row| row.get(arg_pos.col_index.as_usize()))
            .copied()
            .unwrap_or(' ')
    }

    fn ensure_row(&mut self, row_index: usize) {
        let width = self.window_size.col_width.as_usize();
        while self.grid.len() <= row_index {
            self.grid.push(vec![' '; width]);
        }
    }

    fn place_chars(&mut self, text: &str) {
        let width = self.window_size.col_width.as_usize();
        for character in text.chars() {
            if character == '\n' {
                self.cursor.col_index = crate::ch(0);
                self.cursor.add_row(1);
                continue;
            }
            if character == '\r' {
                self.cursor.col_index = crate::ch(0);
                continue;
            }
            let row_index = self.cursor.row_index.as_usize();
            let col_index = self.cursor.col_index.as_usize();
            self.ensure_row(row_index);
            if col_index < width {
                self.grid[row_index][col_index] = character;
                self.cell_write_count += 1;
            }
            self.cursor.add_col(1);
            // Terminal-style wrap at the right edge.
            if width > 0 && self.cursor.col_index.as_usize() >= width {
                self.cursor.col_index = crate::ch(0);
                self.cursor.add_row(1);
            }
        }
    }
}

impl TerminalDevice for TerminalDeviceMock {
    fn read_key_press(&mut self) -> CommonResult<KeyPress> {
        match self.key_presses.pop_front() {
            Some(key_press) => ok!(key_press),
            None => CommonError::new_error_result(
                CommonErrorType::IOError,
                "scripted key press queue is exhausted",
            ),
        }
    }

    fn write_text(&mut self, text: &str, kind: OutputKind) -> CommonResult<()> {
        self.write_log.push((text.to_string(), kind));
        self.place_chars(text);
        ok!()
    }

    fn write_char(&mut self, character: char, kind: OutputKind) -> CommonResult<()> {
        self.write_log.push((character.to_string(), kind));
        self.place_chars(character.to_string().as_str());
        ok!()
    }

    fn write_line(&mut self, text: &str, kind: OutputKind) -> CommonResult<()> {
        let mut line = text.to_string();
        line.push('\n');
        self.write_log.push((line.clone(), kind));
        self.place_chars(line.as_str());
        ok!()
    }

    fn clear_screen(&mut self) -> CommonResult<()> {
        self.grid.clear();
        self.cursor.reset();
        ok!()
    }

    fn cursor_position(&mut self) -> CommonResult<Pos> { ok!(self.cursor) }

    fn set_cursor_position(&mut self, arg_pos: Pos) -> CommonResult<()> {
        self.cursor = arg_pos;
        ok!()
    }

    fn set_cursor_visibility(
        &mut self,
        visibility: CursorVisibility,
    ) -> CommonResult<()> {
        self.cursor_visibility = visibility;
        ok!()
    }

    fn window_size(&mut self) -> CommonResult<Size> { ok!(self.window_size) }
}
