// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, OutputKind, Pos, Size, TerminalDevice, ch, ok, pos};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Draws the box-drawing border around one painter's inner rectangle, at most
/// once per edge per paint cycle. The border sits OUTSIDE the inner rectangle
/// (one cell per side); geometry comes in by parameter on every call, so this
/// type holds no reference back to its painter.
///
/// The three `paint_*_if_required` methods write nothing when borders are
/// disabled or when their edge was already painted since the last
/// [`Self::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderPainter {
    painted_top: bool,
    painted_sides: bool,
    painted_bottom: bool,
}

impl BorderPainter {
    /// Allow all three edges to be painted again.
    pub fn reset(&mut self) {
        self.painted_top = false;
        self.painted_sides = false;
        self.painted_bottom = false;
    }

    pub fn paint_top_border_if_required(
        &mut self,
        device: &mut impl TerminalDevice,
        origin: Pos,
        inner_size: Size,
        has_border: bool,
    ) -> CommonResult<()> {
        if !has_border || self.painted_top {
            return ok!();
        }
        self.painted_top = true;

        let mut line = String::new();
        line.push(TOP_LEFT);
        line.extend(std::iter::repeat_n(
            HORIZONTAL,
            inner_size.col_width.as_usize(),
        ));
        line.push(TOP_RIGHT);

        device.set_cursor_position(pos((
            origin.col_index - ch(1),
            origin.row_index - ch(1),
        )))?;
        device.write_text(&line, OutputKind::Default)?;
        ok!()
    }

    pub fn paint_side_borders_if_required(
        &mut self,
        device: &mut impl TerminalDevice,
        origin: Pos,
        inner_size: Size,
        has_border: bool,
    ) -> CommonResult<()> {
        if !has_border || self.painted_sides {
            return ok!();
        }
        self.painted_sides = true;

        for row_offset in 0..inner_size.row_height.as_usize() {
            let row_index = origin.row_index + ch(row_offset as u16);
            device.set_cursor_position(pos((origin.col_index - ch(1), row_index)))?;
            device.write_char(VERTICAL, OutputKind::Default)?;
            device.set_cursor_position(pos((
                origin.col_index + inner_size.col_width,
                row_index,
            )))?;
            device.write_char(VERTICAL, OutputKind::Default)?;
        }
        ok!()
    }

    pub fn paint_bottom_border_if_required(
        &mut self,
        device: &mut impl TerminalDevice,
        origin: Pos,
        inner_size: Size,
        has_border: bool,
    ) -> CommonResult<()> {
        if !has_border || self.painted_bottom {
            return ok!();
        }
        self.painted_bottom = true;

        let mut line = String::new();
        line.push(BOTTOM_LEFT);
        line.extend(std::iter::repeat_n(
            HORIZONTAL,
            inner_size.col_width.as_usize(),
        ));
        line.push(BOTTOM_RIGHT);

        device.set_cursor_position(pos((
            origin.col_index - ch(1),
            origin.row_index + inner_size.row_height,
        )))?;
        device.write_text(&line, OutputKind::Default)?;
        ok!()
    }
}
