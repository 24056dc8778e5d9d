// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{BorderPainter, ChUnit, CommonResult, OutputKind, PixelChar, Pos,
            Rect, ScreenBuffer, Size, TerminalDevice, ch, pos, rect, size};

/// Owner of one rectangular screen region: content accumulates in an
/// off-screen [`ScreenBuffer`] sized to `inner_size`, and [`Self::paint`]
/// flushes it to the device row by row, delegating border drawing to the
/// [`BorderPainter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painter {
    pub origin: Pos,
    pub inner_size: Size,
    pub has_border: bool,
    buffer: ScreenBuffer,
    border_painter: BorderPainter,
}

mod constructor {
    use super::*;

    impl Painter {
        #[must_use]
        pub fn new(
            arg_origin: impl Into<Pos>,
            arg_inner_size: impl Into<Size>,
            has_border: bool,
        ) -> Self {
            let origin = arg_origin.into();
            let inner_size = arg_inner_size.into();
            Painter {
                origin,
                inner_size,
                has_border,
                buffer: ScreenBuffer::new(inner_size),
                border_painter: BorderPainter::default(),
            }
        }
    }
}

mod buffer_ops {
    use super::*;

    impl Painter {
        /// Write one cell into the off-screen buffer. Range error outside
        /// `inner_size`.
        pub fn write_to_screen_buffer(
            &mut self,
            arg_pos: impl Into<Pos>,
            ch: char,
            kind: OutputKind,
        ) -> CommonResult<()> {
            self.buffer.set_cell(arg_pos, ch, kind)
        }

        /// Write one full row into the off-screen buffer. The text must be
        /// exactly `inner_size.col_width` chars wide.
        pub fn write_line_to_screen_buffer(
            &mut self,
            arg_row_index: impl Into<ChUnit>,
            text: &str,
            kind: OutputKind,
        ) -> CommonResult<()> {
            self.buffer.set_line(arg_row_index, text, kind)
        }

        pub fn buffer(&self) -> &ScreenBuffer { &self.buffer }
    }
}

mod paint_api {
    use super::*;

    impl Painter {
        /// The rectangle this painter occupies for overlap/fit checks: the
        /// inner rectangle, grown by one cell per side when bordered.
        ///
        /// The growth saturates at the window edge, so a bordered painter at
        /// column or row 0 reports a rectangle smaller than what it actually
        /// draws. [`crate::PainterOrchestrator::paint`] checks for that case
        /// separately and treats it as not fitting.
        #[must_use]
        pub fn effective_rect(&self) -> Rect {
            if self.has_border {
                rect((
                    self.origin - pos((1, 1)),
                    self.inner_size + size((2, 2)),
                ))
            } else {
                rect((self.origin, self.inner_size))
            }
        }

        /// Flush: draw the top and side borders (at most once per cycle),
        /// then each buffer row at `origin + (0, row)` as contiguous runs of
        /// equal output kind, then the bottom border.
        pub fn paint(&mut self, device: &mut impl TerminalDevice) -> CommonResult<()> {
            self.border_painter.paint_top_border_if_required(
                device,
                self.origin,
                self.inner_size,
                self.has_border,
            )?;
            self.border_painter.paint_side_borders_if_required(
                device,
                self.origin,
                self.inner_size,
                self.has_border,
            )?;

            for row_offset in 0..self.inner_size.row_height.as_usize() {
                let Some(row) = self.buffer.row(row_offset) else { break };
                device.set_cursor_position(pos((
                    self.origin.col_index,
                    self.origin.row_index + ch(row_offset as u16),
                )))?;
                for (run_text, run_kind) in runs_of_equal_kind(row) {
                    device.write_text(&run_text, run_kind)?;
                }
            }

            self.border_painter.paint_bottom_border_if_required(
                device,
                self.origin,
                self.inner_size,
                self.has_border,
            )
        }

        /// Clear the buffer and allow the border to be painted again.
        pub fn reset(&mut self) {
            self.buffer.clear();
            self.border_painter.reset();
        }
    }

    /// Group a row into maximal runs sharing one output kind, so each run is
    /// flushed with a single write.
    fn runs_of_equal_kind(row: &[PixelChar]) -> Vec<(String, OutputKind)> {
        let mut acc: Vec<(String, OutputKind)> = Vec::new();
        for cell in row {
            match acc.last_mut() {
                Some((run_text, run_kind)) if *run_kind == cell.kind => {
                    run_text.push(cell.ch);
                }
                _ => acc.push((cell.ch.to_string(), cell.kind)),
            }
        }
        acc
    }
}
