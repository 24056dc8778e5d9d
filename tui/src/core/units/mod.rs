// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod ch_unit;

// Re-export.
pub use ch_unit::*;
