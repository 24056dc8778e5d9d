// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod text_block;
pub mod text_justifier;

// Re-export.
pub use text_block::*;
pub use text_justifier::*;
