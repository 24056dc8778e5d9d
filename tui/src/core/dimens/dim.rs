// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

//! [`Size`] holds the `width` and `height` of a rectangular cell region. Both
//! extents are non-negative [`ChUnit`] amounts.

use std::{fmt::Debug, ops::Add};

use crate::ChUnit;

#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Size {
    pub col_width: ChUnit,
    pub row_height: ChUnit,
}

pub fn size(arg_size: impl Into<Size>) -> Size { arg_size.into() }

/// Outcome of checking one [`Size`] against a minimum required [`Size`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Ord, Eq, Hash)]
pub enum SufficientSize {
    IsLargeEnough,
    IsTooSmall,
}

mod constructor {
    use super::{ChUnit, Size};

    impl Size {
        pub fn new(arg_size: impl Into<Size>) -> Self { arg_size.into() }
    }

    impl<W: Into<ChUnit>, H: Into<ChUnit>> From<(W, H)> for Size {
        /// Tuple order is `(width, height)`.
        fn from((width, height): (W, H)) -> Self {
            Size {
                col_width: width.into(),
                row_height: height.into(),
            }
        }
    }
}

mod ops {
    use super::{Add, Size};

    impl Add<Size> for Size {
        type Output = Size;

        fn add(self, rhs: Size) -> Self::Output {
            let mut self_copy = self;
            self_copy.col_width += rhs.col_width;
            self_copy.row_height += rhs.row_height;
            self_copy
        }
    }
}

mod api {
    use super::{Size, SufficientSize};

    impl Size {
        /// An empty size has no cells at all: either extent is zero.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.col_width.is_zero() || self.row_height.is_zero()
        }

        pub fn fits_min_size(&self, arg_min_size: impl Into<Size>) -> SufficientSize {
            let min_size: Size = arg_min_size.into();
            if self.col_width < min_size.col_width
                || self.row_height < min_size.row_height
            {
                SufficientSize::IsTooSmall
            } else {
                SufficientSize::IsLargeEnough
            }
        }
    }
}

mod debug {
    use super::{Debug, Size};

    impl Debug for Size {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "[w: {w:?}, h: {h:?}]",
                w = self.col_width,
                h = self.row_height
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ch;

    #[test]
    fn test_size_new() {
        let size_1 = size((5, 10));
        assert_eq!(size_1.col_width, ch(5));
        assert_eq!(size_1.row_height, ch(10));
        assert_eq!(size_1, Size::new((ch(5), ch(10))));
    }

    #[test]
    fn test_size_add() {
        let size_1 = size((5, 10)) + size((3, 4));
        assert_eq!(size_1, size((8, 14)));
    }

    #[test]
    fn test_is_empty() {
        assert!(size((0, 10)).is_empty());
        assert!(size((10, 0)).is_empty());
        assert!(!size((1, 1)).is_empty());
    }

    #[test]
    fn test_fits_min_size() {
        let size_1 = size((5, 10));
        assert_eq!(
            size_1.fits_min_size(size((3, 4))),
            SufficientSize::IsLargeEnough
        );
        assert_eq!(
            size_1.fits_min_size(size((100, 100))),
            SufficientSize::IsTooSmall
        );
    }

    #[test]
    fn test_debug_fmt() {
        let size_1 = size((5, 10));
        assert_eq!(format!("{size_1:?}"), "[w: 5, h: 10]");
    }
}
