// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_device;
pub mod key_press;
pub mod output_kind;
pub mod terminal_device;

// Re-export.
pub use crossterm_device::*;
pub use key_press::*;
pub use output_kind::*;
pub use terminal_device::*;
