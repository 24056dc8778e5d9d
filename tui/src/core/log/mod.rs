// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod tracing_init;

// Re-export.
pub use tracing_init::*;
