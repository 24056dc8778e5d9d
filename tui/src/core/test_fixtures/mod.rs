// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod terminal_device_mock;

// Re-export.
pub use terminal_device_mock::*;
