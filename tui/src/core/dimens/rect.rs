// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::{Pos, Size, pos, size};

/// `Rect` is an origin [`Pos`] plus a [`Size`]. The right and bottom edges are
/// derived, inclusive indices: `right_index = col + width - 1` and
/// `bottom_index = row + height - 1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Pos,
    pub size: Size,
}

pub fn rect(arg_rect: impl Into<Rect>) -> Rect { arg_rect.into() }

mod constructor {
    use super::{Pos, Rect, Size};

    impl Rect {
        pub fn new(arg_rect: impl Into<Rect>) -> Self { arg_rect.into() }
    }

    impl From<(Pos, Size)> for Rect {
        fn from((origin, size): (Pos, Size)) -> Self { Rect { origin, size } }
    }
}

mod api {
    use super::{Pos, Rect, SmallVec, pos};
    use crate::ChUnit;

    impl Rect {
        /// Inclusive index of the rightmost column covered by this rect.
        /// Meaningless for empty rects; guarded by [`Self::contains`].
        #[must_use]
        pub fn right_index(&self) -> ChUnit {
            self.origin.col_index + self.size.col_width - 1
        }

        /// Inclusive index of the bottommost row covered by this rect.
        #[must_use]
        pub fn bottom_index(&self) -> ChUnit {
            self.origin.row_index + self.size.row_height - 1
        }

        /// Containment is inclusive on all four sides. Empty rects (zero width
        /// or zero height) contain nothing.
        #[must_use]
        pub fn contains(&self, arg_pos: Pos) -> bool {
            if self.size.is_empty() {
                return false;
            }
            arg_pos.col_index >= self.origin.col_index
                && arg_pos.col_index <= self.right_index()
                && arg_pos.row_index >= self.origin.row_index
                && arg_pos.row_index <= self.bottom_index()
        }

        /// The four corner cells of this rect, clockwise from the origin.
        #[must_use]
        pub fn corners(&self) -> SmallVec<[Pos; 4]> {
            let mut acc: SmallVec<[Pos; 4]> = SmallVec::new();
            acc.push(self.origin);
            acc.push(pos((self.right_index(), self.origin.row_index)));
            acc.push(pos((self.right_index(), self.bottom_index())));
            acc.push(pos((self.origin.col_index, self.bottom_index())));
            acc
        }

        /// Tests whether either rect contains any of the other's four corners.
        ///
        /// # Known limitation
        ///
        /// Only the four corners are tested. Two rects that cross through each
        /// other's interiors without either containing a corner of the other (a
        /// "plus-sign" configuration) are misreported as non-overlapping. This
        /// behavior is intentional and pinned by a test; callers that need
        /// exact intersection must not rely on this method.
        #[must_use]
        pub fn overlaps_with(&self, other: &Rect) -> bool {
            other.corners().iter().any(|it| self.contains(*it))
                || self.corners().iter().any(|it| other.contains(*it))
        }

        /// The bounding box covering both rects. Empty rects are treated as
        /// invisible: union with an empty rect returns the other rect.
        #[must_use]
        pub fn union(&self, other: &Rect) -> Rect {
            if self.size.is_empty() {
                return *other;
            }
            if other.size.is_empty() {
                return *self;
            }
            let col_min = self.origin.col_index.min(other.origin.col_index);
            let row_min = self.origin.row_index.min(other.origin.row_index);
            let col_max = self.right_index().max(other.right_index());
            let row_max = self.bottom_index().max(other.bottom_index());
            Rect {
                origin: pos((col_min, row_min)),
                size: super::size((col_max - col_min + 1, row_max - row_min + 1)),
            }
        }
    }
}

mod debug {
    use super::{Debug, Rect};

    impl Debug for Rect {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "Rect [origin: {o:?}, size: {s:?}]",
                o = self.origin,
                s = self.size
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_on_all_sides() {
        let rect_1 = rect((pos((1, 1)), size((3, 2))));
        // Corners.
        assert!(rect_1.contains(pos((1, 1))));
        assert!(rect_1.contains(pos((3, 1))));
        assert!(rect_1.contains(pos((3, 2))));
        assert!(rect_1.contains(pos((1, 2))));
        // Just outside.
        assert!(!rect_1.contains(pos((0, 1))));
        assert!(!rect_1.contains(pos((4, 1))));
        assert!(!rect_1.contains(pos((1, 3))));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect_1 = rect((pos((0, 0)), size((0, 5))));
        assert!(!rect_1.contains(pos((0, 0))));
    }

    #[test]
    fn test_overlaps_with_is_symmetric() {
        let pairs = [
            (
                rect((pos((1, 1)), size((2, 2)))),
                rect((pos((2, 2)), size((2, 2)))),
            ),
            (
                rect((pos((0, 0)), size((4, 4)))),
                rect((pos((1, 1)), size((1, 1)))),
            ),
            (
                rect((pos((0, 0)), size((2, 2)))),
                rect((pos((10, 10)), size((2, 2)))),
            ),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps_with(&b), b.overlaps_with(&a));
        }
    }

    #[test]
    fn test_overlapping_and_disjoint_rects() {
        let rect_1 = rect((pos((1, 1)), size((2, 2))));
        let rect_2 = rect((pos((2, 2)), size((2, 2))));
        assert!(rect_1.overlaps_with(&rect_2));

        let rect_3 = rect((pos((5, 5)), size((2, 2))));
        assert!(!rect_1.overlaps_with(&rect_3));

        // A rect fully inside another has all corners contained.
        let outer = rect((pos((0, 0)), size((10, 10))));
        let inner = rect((pos((3, 3)), size((2, 2))));
        assert!(outer.overlaps_with(&inner));
    }

    /// The corner-only test misses "plus-sign" crossings. This pins the known
    /// limitation documented on [`Rect::overlaps_with`].
    #[test]
    fn test_crossing_rects_are_misreported_as_non_overlapping() {
        // Wide, short rect crossing a tall, narrow rect: neither contains a
        // corner of the other even though their interiors intersect.
        let horizontal = rect((pos((0, 2)), size((7, 1))));
        let vertical = rect((pos((3, 0)), size((1, 7))));
        assert!(!horizontal.overlaps_with(&vertical));
        assert!(!vertical.overlaps_with(&horizontal));
    }

    #[test]
    fn test_union_is_bounding_box() {
        let rect_1 = rect((pos((1, 1)), size((2, 2))));
        let rect_2 = rect((pos((4, 3)), size((2, 2))));
        let bounding_box = rect_1.union(&rect_2);
        assert_eq!(bounding_box, rect((pos((1, 1)), size((5, 4)))));

        let empty = rect((pos((9, 9)), size((0, 0))));
        assert_eq!(rect_1.union(&empty), rect_1);
    }
}
