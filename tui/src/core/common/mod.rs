// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common_result_and_error;

// Re-export.
pub use common_result_and_error::*;
