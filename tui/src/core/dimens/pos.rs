// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          ops::{Add, AddAssign, Sub, SubAssign}};

use crate::{ChUnit, Size, ch};

/// `Pos` holds the `col` and `row` indices of one character cell on the terminal,
/// both zero-based. It is an immutable value type.
///
/// ```text
///     0   4    9    1    2    2
///                   4    0    5
///    ┌────┴────┴────┴────┴────┴── col
///  0 ┤     ╭─────────────╮
///  1 ┤     │ origin pos: │
///  2 ┤     │ [5, 0]      │
///  3 ┤     ╰─────────────╯
///    │
///   row
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Pos {
    /// Column index, 0-based.
    pub col_index: ChUnit,
    /// Row index, 0-based.
    pub row_index: ChUnit,
}

pub fn pos(arg_pos: impl Into<Pos>) -> Pos { arg_pos.into() }

mod constructor {
    use super::{ChUnit, Pos};

    impl Pos {
        pub fn new(arg_pos: impl Into<Pos>) -> Self { arg_pos.into() }
    }

    impl<C: Into<ChUnit>, R: Into<ChUnit>> From<(C, R)> for Pos {
        /// Tuple order is `(col, row)`.
        fn from((col, row): (C, R)) -> Self {
            Pos {
                col_index: col.into(),
                row_index: row.into(),
            }
        }
    }
}

mod ops {
    use super::{Add, AddAssign, Pos, Size, Sub, SubAssign};

    impl Add<Pos> for Pos {
        type Output = Pos;

        fn add(self, rhs: Pos) -> Self::Output {
            let mut self_copy = self;
            self_copy.col_index += rhs.col_index;
            self_copy.row_index += rhs.row_index;
            self_copy
        }
    }

    impl Sub<Pos> for Pos {
        type Output = Pos;

        fn sub(self, rhs: Pos) -> Self::Output {
            let mut self_copy = self;
            self_copy.col_index -= rhs.col_index;
            self_copy.row_index -= rhs.row_index;
            self_copy
        }
    }

    impl AddAssign<Pos> for Pos {
        fn add_assign(&mut self, rhs: Pos) { *self = *self + rhs; }
    }

    impl SubAssign<Pos> for Pos {
        fn sub_assign(&mut self, rhs: Pos) { *self = *self - rhs; }
    }

    impl Add<Size> for Pos {
        type Output = Pos;

        fn add(self, rhs: Size) -> Self::Output {
            let mut self_copy = self;
            self_copy.col_index += rhs.col_width;
            self_copy.row_index += rhs.row_height;
            self_copy
        }
    }

    impl Sub<Size> for Pos {
        type Output = Pos;

        fn sub(self, rhs: Size) -> Self::Output {
            let mut self_copy = self;
            self_copy.col_index -= rhs.col_width;
            self_copy.row_index -= rhs.row_height;
            self_copy
        }
    }
}

mod api {
    use super::{Pos, ch};

    impl Pos {
        /// Reset col and row index to `0`.
        pub fn reset(&mut self) {
            self.col_index = ch(0);
            self.row_index = ch(0);
        }

        pub fn add_col(&mut self, arg_col: impl Into<super::ChUnit>) {
            self.col_index += arg_col.into();
        }

        pub fn add_row(&mut self, arg_row: impl Into<super::ChUnit>) {
            self.row_index += arg_row.into();
        }
    }
}

mod debug {
    use super::{Debug, Formatter, Pos, Result};

    impl Debug for Pos {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(
                f,
                "Pos [c: {c:?}, r: {r:?}]",
                c = self.col_index,
                r = self.row_index
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size;

    #[test]
    fn test_pos_new() {
        let pos_1 = pos((2, 1));
        assert_eq!(pos_1.col_index, ch(2));
        assert_eq!(pos_1.row_index, ch(1));

        let pos_2 = Pos::new((ch(2), ch(1)));
        assert_eq!(pos_1, pos_2);
    }

    #[test]
    fn test_pos_add_sub() {
        let pos_1 = pos((2, 1)) + pos((3, 4));
        assert_eq!(pos_1, pos((5, 5)));

        let pos_2 = pos_1 - pos((1, 2));
        assert_eq!(pos_2, pos((4, 3)));

        // Subtraction saturates at 0.
        let pos_3 = pos((1, 1)) - pos((5, 5));
        assert_eq!(pos_3, pos((0, 0)));
    }

    #[test]
    fn test_pos_add_size() {
        let pos_1 = pos((1, 2)) + size((3, 4));
        assert_eq!(pos_1, pos((4, 6)));
    }

    #[test]
    fn test_debug_fmt() {
        let pos_1 = pos((2, 1));
        assert_eq!(format!("{pos_1:?}"), "Pos [c: 2, r: 1]");
    }
}
