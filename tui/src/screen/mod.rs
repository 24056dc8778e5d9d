// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

//! Screen-region compositing: each [`Painter`] accumulates content for one
//! rectangular region in an off-screen [`ScreenBuffer`], and the
//! [`PainterOrchestrator`] validates the whole set (pairwise non-overlap,
//! bounding box fits the window) before every repaint.

// Attach.
pub mod border_painter;
pub mod painter;
pub mod painter_orchestrator;
pub mod pixel_char;
pub mod screen_buffer;

// Re-export.
pub use border_painter::*;
pub use painter::*;
pub use painter_orchestrator::*;
pub use pixel_char::*;
pub use screen_buffer::*;
