// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{ChUnit, CommonError, CommonErrorType, CommonResult, OutputKind,
            PixelChar, Pos, Size, ok};

/// Off-screen grid for one painter, sized to the painter's inner size and
/// cleared to blank/default cells. Writes outside the grid are range errors,
/// never silent clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    size: Size,
    rows: Vec<Vec<PixelChar>>,
}

mod constructor {
    use super::{PixelChar, ScreenBuffer, Size};

    impl ScreenBuffer {
        #[must_use]
        pub fn new(arg_size: impl Into<Size>) -> Self {
            let size = arg_size.into();
            let rows = vec![
                vec![PixelChar::default(); size.col_width.as_usize()];
                size.row_height.as_usize()
            ];
            ScreenBuffer { size, rows }
        }
    }
}

mod ops {
    use super::*;

    impl ScreenBuffer {
        pub fn size(&self) -> Size { self.size }

        /// Reset every cell to blank/default.
        pub fn clear(&mut self) {
            for row in &mut self.rows {
                row.fill(PixelChar::default());
            }
        }

        /// Write one cell. [`CommonErrorType::IndexOutOfBounds`] when the
        /// position falls outside the grid.
        pub fn set_cell(
            &mut self,
            arg_pos: impl Into<Pos>,
            ch: char,
            kind: OutputKind,
        ) -> CommonResult<()> {
            let pos = arg_pos.into();
            if pos.col_index >= self.size.col_width
                || pos.row_index >= self.size.row_height
            {
                return CommonError::new_error_result(
                    CommonErrorType::IndexOutOfBounds,
                    format!(
                        "cell {pos:?} is outside the screen buffer of size {:?}",
                        self.size
                    ),
                );
            }
            self.rows[pos.row_index.as_usize()][pos.col_index.as_usize()] =
                PixelChar::new(ch, kind);
            ok!()
        }

        /// Write one full row. The text's char count must equal the buffer
        /// width exactly; [`CommonErrorType::ValueOutOfRange`] otherwise.
        pub fn set_line(
            &mut self,
            arg_row_index: impl Into<ChUnit>,
            text: &str,
            kind: OutputKind,
        ) -> CommonResult<()> {
            let row_index = arg_row_index.into();
            if row_index >= self.size.row_height {
                return CommonError::new_error_result(
                    CommonErrorType::IndexOutOfBounds,
                    format!(
                        "row {row_index:?} is outside the screen buffer of size {:?}",
                        self.size
                    ),
                );
            }
            if text.chars().count() != self.size.col_width.as_usize() {
                return CommonError::new_error_result(
                    CommonErrorType::ValueOutOfRange,
                    format!(
                        "line {:?} has {} chars, screen buffer width is {:?}",
                        text,
                        text.chars().count(),
                        self.size.col_width
                    ),
                );
            }
            let row = &mut self.rows[row_index.as_usize()];
            for (col_index, ch) in text.chars().enumerate() {
                row[col_index] = PixelChar::new(ch, kind);
            }
            ok!()
        }

        pub fn row(&self, arg_row_index: impl Into<ChUnit>) -> Option<&[PixelChar]> {
            self.rows
                .get(arg_row_index.into().as_usize())
                .map(Vec::as_slice)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{pos, size};

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = ScreenBuffer::new(size((3, 2)));
        assert_eq!(buffer.size(), size((3, 2)));
        for row_index in 0..2 {
            for cell in buffer.row(row_index).unwrap() {
                assert!(cell.is_blank());
            }
        }
    }

    #[test]
    fn test_set_cell_in_bounds_and_out_of_bounds() {
        let mut buffer = ScreenBuffer::new(size((3, 2)));
        buffer.set_cell(pos((2, 1)), 'x', OutputKind::MenuBody).unwrap();
        assert_eq!(
            buffer.row(1).unwrap()[2],
            PixelChar::new('x', OutputKind::MenuBody)
        );

        assert!(buffer.set_cell(pos((3, 0)), 'x', OutputKind::Default).is_err());
        assert!(buffer.set_cell(pos((0, 2)), 'x', OutputKind::Default).is_err());
    }

    #[test]
    fn test_set_line_requires_exact_width() {
        let mut buffer = ScreenBuffer::new(size((3, 2)));
        buffer.set_line(0, "abc", OutputKind::MenuHeader).unwrap();
        assert_eq!(buffer.row(0).unwrap()[1].ch, 'b');

        assert!(buffer.set_line(0, "ab", OutputKind::Default).is_err());
        assert!(buffer.set_line(0, "abcd", OutputKind::Default).is_err());
        assert!(buffer.set_line(2, "abc", OutputKind::Default).is_err());
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut buffer = ScreenBuffer::new(size((2, 2)));
        buffer.set_line(0, "xy", OutputKind::Error).unwrap();
        buffer.clear();
        assert!(buffer.row(0).unwrap().iter().all(PixelChar::is_blank));
    }
}
