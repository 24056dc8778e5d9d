// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

//! Single-line interactive input: a [`LineEditor`] that echoes through a
//! [`crate::TerminalDevice`], a circular [`Suggestions`] list with
//! prefix-based autocomplete, and a remappable [`KeyBindingMap`].

// Attach.
pub mod clipboard_service;
pub mod key_bindings;
pub mod line_editor;
pub mod suggestion_matcher;
pub mod suggestions;

// Re-export.
pub use clipboard_service::*;
pub use key_bindings::*;
pub use line_editor::*;
pub use suggestion_matcher::*;
pub use suggestions::*;
