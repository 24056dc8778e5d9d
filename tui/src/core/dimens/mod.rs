// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod dim;
pub mod pos;
pub mod rect;

// Re-export.
pub use dim::*;
pub use pos::*;
pub use rect::*;
