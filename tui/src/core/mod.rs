// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common;
pub mod decl_macros;
pub mod dimens;
pub mod log;
pub mod terminal_io;
pub mod test_fixtures;
pub mod text_layout;
pub mod units;

// Re-export.
pub use common::*;
pub use dimens::*;
pub use log::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use text_layout::*;
pub use units::*;
