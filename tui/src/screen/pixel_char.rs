// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::OutputKind;

/// One cell of a [`crate::ScreenBuffer`]: a character plus the output kind
/// that selects its colour at flush time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelChar {
    pub ch: char,
    pub kind: OutputKind,
}

impl Default for PixelChar {
    fn default() -> Self {
        PixelChar {
            ch: ' ',
            kind: OutputKind::Default,
        }
    }
}

impl PixelChar {
    #[must_use]
    pub fn new(ch: char, kind: OutputKind) -> Self { PixelChar { ch, kind } }

    #[must_use]
    pub fn is_blank(&self) -> bool { *self == Self::default() }
}
