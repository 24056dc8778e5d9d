// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, ops::Deref};

/// The backing field that is used to represent a [`ChUnit`] in memory.
pub type ChUnitPrimitiveType = u16;

/// Represents a character unit or "ch" unit. This is the unit of measurement for
/// everything cell-based in this crate: cursor columns, window widths, painter
/// sizes. The terminal displaying the final output ultimately determines the
/// actual pixel width and height of one ch.
///
/// Arithmetic is unsigned: subtraction saturates at zero rather than wrapping.
/// Use the [`ch()`] function to create amounts of ch units.
#[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ChUnit {
    pub value: ChUnitPrimitiveType,
}

/// Creates a new [`ChUnit`] amount.
pub fn ch(arg_value: impl Into<ChUnit>) -> ChUnit { arg_value.into() }

impl ChUnit {
    #[must_use]
    pub fn new(value: ChUnitPrimitiveType) -> Self { Self { value } }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.value == 0 }

    #[must_use]
    pub fn as_usize(&self) -> usize { self.value as usize }
}

impl Deref for ChUnit {
    type Target = ChUnitPrimitiveType;

    fn deref(&self) -> &Self::Target { &self.value }
}

impl Debug for ChUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

mod math_ops {
    use super::ChUnit;

    impl std::ops::Add for ChUnit {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self::new(self.value.saturating_add(rhs.value))
        }
    }

    impl std::ops::Add<u16> for ChUnit {
        type Output = Self;

        fn add(self, rhs: u16) -> Self::Output {
            Self::new(self.value.saturating_add(rhs))
        }
    }

    impl std::ops::AddAssign for ChUnit {
        fn add_assign(&mut self, rhs: Self) {
            self.value = self.value.saturating_add(rhs.value);
        }
    }

    impl std::ops::AddAssign<u16> for ChUnit {
        fn add_assign(&mut self, rhs: u16) {
            self.value = self.value.saturating_add(rhs);
        }
    }

    impl std::ops::Sub for ChUnit {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            Self::new(self.value.saturating_sub(rhs.value))
        }
    }

    impl std::ops::Sub<u16> for ChUnit {
        type Output = Self;

        fn sub(self, rhs: u16) -> Self::Output {
            Self::new(self.value.saturating_sub(rhs))
        }
    }

    impl std::ops::SubAssign for ChUnit {
        fn sub_assign(&mut self, rhs: Self) {
            self.value = self.value.saturating_sub(rhs.value);
        }
    }

    impl std::ops::SubAssign<u16> for ChUnit {
        fn sub_assign(&mut self, rhs: u16) {
            self.value = self.value.saturating_sub(rhs);
        }
    }

    impl std::ops::Mul for ChUnit {
        type Output = Self;

        fn mul(self, rhs: Self) -> Self::Output {
            Self::new(self.value.saturating_mul(rhs.value))
        }
    }
}

mod convert_to_number {
    use super::ChUnit;

    impl From<ChUnit> for usize {
        fn from(arg: ChUnit) -> Self { arg.value as usize }
    }

    impl From<ChUnit> for u16 {
        fn from(arg: ChUnit) -> Self { arg.value }
    }
}

mod convert_from_number {
    use super::{ChUnit, ChUnitPrimitiveType};

    impl From<ChUnitPrimitiveType> for ChUnit {
        fn from(value: ChUnitPrimitiveType) -> Self { Self { value } }
    }

    impl From<u8> for ChUnit {
        fn from(value: u8) -> Self {
            Self {
                value: ChUnitPrimitiveType::from(value),
            }
        }
    }

    impl From<usize> for ChUnit {
        fn from(value: usize) -> Self {
            Self {
                value: value.try_into().unwrap_or(ChUnitPrimitiveType::MAX),
            }
        }
    }

    impl From<i32> for ChUnit {
        /// Negative values clamp to zero, overflowing ones to the maximum,
        /// matching the `usize` conversion.
        fn from(value: i32) -> Self {
            Self {
                value: value
                    .clamp(0, i32::from(ChUnitPrimitiveType::MAX))
                    as ChUnitPrimitiveType,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ch_unit_add() {
        assert_eq!(ch(1) + ch(2), ch(3));
        assert_eq!(ch(1) + 2, ch(3));
    }

    #[test]
    fn test_ch_unit_sub_saturates_at_zero() {
        assert_eq!(ch(5) - ch(3), ch(2));
        assert_eq!(ch(3) - ch(5), ch(0));

        let mut it = ch(1);
        it -= 10;
        assert_eq!(it, ch(0));
    }

    #[test]
    fn test_ch_unit_conversions() {
        let it = ch(42_usize);
        assert_eq!(*it, 42);
        assert_eq!(it.as_usize(), 42);
        assert_eq!(u16::from(it), 42);
        assert_eq!(ch(-1), ch(0));
        assert_eq!(*ch(i32::MAX), ChUnitPrimitiveType::MAX);
        assert_eq!(ch(100_000_usize), ch(i32::MAX));
    }
}
