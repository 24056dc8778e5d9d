// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

//! # paneline-tui
//!
//! A small terminal-UI engine with two coupled capabilities:
//!
//! 1. An interactive single-line editor with suggestion autocomplete
//!    ([`LineEditor`]), driven by a remappable key-code dispatch table
//!    ([`KeyBindingMap`]). The editor keeps its logical cursor and the
//!    terminal's physical cursor in sync even when the input wraps across
//!    rows, and it re-reads the window width on every wrap calculation so a
//!    resize mid-edit cannot desync it.
//! 2. A screen-region compositor: each [`Painter`] owns an off-screen
//!    [`ScreenBuffer`] for one rectangular region (optionally bordered), and
//!    the [`PainterOrchestrator`] validates the whole set before every
//!    repaint (pairwise non-overlap of effective rectangles, union bounding
//!    box fits the window).
//!
//! All terminal access goes through the [`TerminalDevice`] trait:
//! [`CrosstermDevice`] in production, [`TerminalDeviceMock`] in tests.
//!
//! ```
//! use paneline_tui::*;
//!
//! let device = TerminalDeviceMock::with_key_presses(
//!     size((80, 24)),
//!     [key_press!(@char 'h'),
//!      key_press!(@char 'i'),
//!      key_press!(@special SpecialKey::Enter)],
//! );
//! let clipboard = clipboard_test_fixtures::TestClipboard::default();
//! let mut editor = LineEditor::new(device, clipboard);
//!
//! let line = editor
//!     .read_line(Suggestions::new(["history", "hibernate"]), "> ")
//!     .unwrap();
//! assert_eq!(line, "hi");
//! ```

// Attach.
pub mod core;
pub mod readline;
pub mod screen;

// Re-export.
pub use core::*;
pub use readline::*;
pub use screen::*;
