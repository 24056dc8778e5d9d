// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{ChUnit, CommonError, CommonErrorType, CommonResult, Pos, ch, ok};

/// A rectangular grid of characters with a fixed `width` and a height that
/// grows on demand. Every stored row is exactly `width` characters; the last
/// chunk of inserted text is space-padded out to the width.
///
/// Coordinates are unsigned [`ChUnit`]s, so negative insertion positions are
/// unrepresentable; the only range error [`Self::insert_block`] can produce is
/// a horizontal overflow.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBlock {
    width: ChUnit,
    rows: Vec<Vec<char>>,
}

impl TextBlock {
    #[must_use]
    pub fn new(arg_width: impl Into<ChUnit>) -> Self {
        TextBlock {
            width: arg_width.into(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> ChUnit { self.width }

    #[must_use]
    pub fn height(&self) -> ChUnit { ch(self.rows.len()) }

    /// Greedily chunk `text` into `width`-sized lines and append them, padding
    /// the final line with spaces. A zero-width block stores nothing.
    pub fn insert_text(&mut self, text: &str) {
        let width = self.width.as_usize();
        if width == 0 {
            return;
        }
        let characters: Vec<char> = text.chars().collect();
        for chunk in characters.chunks(width) {
            let mut row: Vec<char> = chunk.to_vec();
            row.resize(width, ' ');
            self.rows.push(row);
        }
    }

    /// Overwrite the sub-region starting at `at` with `other`, growing this
    /// block's height as needed. Fails if `other` would exceed this block's
    /// width at that position.
    pub fn insert_block(&mut self, other: &TextBlock, at: Pos) -> CommonResult<()> {
        let end_col = at.col_index + other.width;
        if end_col > self.width {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                format!(
                    "block of width {w:?} does not fit at col {c:?} in block of width {sw:?}",
                    w = other.width,
                    c = at.col_index,
                    sw = self.width
                ),
            );
        }

        let needed_height = at.row_index.as_usize() + other.rows.len();
        while self.rows.len() < needed_height {
            self.rows.push(vec![' '; self.width.as_usize()]);
        }

        let col_offset = at.col_index.as_usize();
        for (row_offset, other_row) in other.rows.iter().enumerate() {
            let target_row = &mut self.rows[at.row_index.as_usize() + row_offset];
            target_row[col_offset..col_offset + other_row.len()]
                .copy_from_slice(other_row);
        }

        ok!()
    }

    /// Snapshot of the grid, one string per row.
    #[must_use]
    pub fn as_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl Debug for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "TextBlock [w: {w:?}, h: {h:?}]",
            w = self.width,
            h = self.height()
        )?;
        for line in self.as_lines() {
            writeln!(f, "|{line}|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn test_insert_text_chunks_and_pads() {
        let mut block = TextBlock::new(4);
        block.insert_text("abcdef");
        assert_eq!(block.height(), ch(2));
        assert_eq!(block.as_lines(), vec!["abcd", "ef  "]);
    }

    #[test]
    fn test_insert_text_exact_width_has_no_padding_row() {
        let mut block = TextBlock::new(3);
        block.insert_text("abcdef");
        assert_eq!(block.as_lines(), vec!["abc", "def"]);
    }

    #[test]
    fn test_zero_width_block_stores_nothing() {
        let mut block = TextBlock::new(0);
        block.insert_text("abc");
        assert_eq!(block.height(), ch(0));
    }

    #[test]
    fn test_insert_block_overwrites_sub_region() {
        let mut target = TextBlock::new(6);
        target.insert_text("......");
        target.insert_text("......");

        let mut patch = TextBlock::new(2);
        patch.insert_text("xy");

        target.insert_block(&patch, pos((2, 1))).unwrap();
        assert_eq!(target.as_lines(), vec!["......", "..xy.."]);
    }

    #[test]
    fn test_insert_block_grows_height() {
        let mut target = TextBlock::new(4);
        let mut patch = TextBlock::new(2);
        patch.insert_text("abcd");

        target.insert_block(&patch, pos((1, 1))).unwrap();
        assert_eq!(target.height(), ch(3));
        assert_eq!(target.as_lines(), vec!["    ", " ab ", " cd "]);
    }

    #[test]
    fn test_insert_block_fails_on_width_overflow() {
        let mut target = TextBlock::new(4);
        let mut patch = TextBlock::new(3);
        patch.insert_text("abc");

        let result = target.insert_block(&patch, pos((2, 0)));
        assert!(result.is_err());
        // Target must be untouched after the failed insert.
        assert_eq!(target.height(), ch(0));
    }
}
