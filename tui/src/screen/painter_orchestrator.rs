// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use crate::{CommonError, CommonErrorType, CommonResult, OutputKind, Painter,
            Rect, TerminalDevice, ok};

/// Validates a set of [`Painter`]s and triggers their repaint. The list is
/// ordered; order determines paint order only. Validity is order-independent:
/// effective rectangles must be pairwise disjoint and their union bounding
/// box must fit the current window.
#[derive(Debug, Default)]
pub struct PainterOrchestrator {
    pub painters: Vec<Painter>,
}

impl PainterOrchestrator {
    #[must_use]
    pub fn new(painters: impl IntoIterator<Item = Painter>) -> Self {
        PainterOrchestrator {
            painters: painters.into_iter().collect(),
        }
    }

    pub fn add_painter(&mut self, painter: Painter) { self.painters.push(painter); }

    /// Validate, then repaint every painter in list order.
    ///
    /// Overlapping effective rectangles are a configuration error
    /// ([`CommonErrorType::InvalidLayout`], naming both painters) and fail
    /// the whole call. A window too small for the union bounding box is
    /// transient: the resize message is written instead, the repaint is
    /// skipped, and the call still returns `Ok` so the next frame retries.
    pub fn paint(&mut self, device: &mut impl TerminalDevice) -> CommonResult<()> {
        let effective_rects: Vec<Rect> = self
            .painters
            .iter()
            .map(Painter::effective_rect)
            .collect();

        for first_index in 0..effective_rects.len() {
            for second_index in first_index + 1..effective_rects.len() {
                if effective_rects[first_index]
                    .overlaps_with(&effective_rects[second_index])
                {
                    return CommonError::new_error_result(
                        CommonErrorType::InvalidLayout,
                        format!(
                            "painters overlap: {} and {}",
                            describe_painter(first_index, &self.painters[first_index]),
                            describe_painter(second_index, &self.painters[second_index]),
                        ),
                    );
                }
            }
        }

        if let Some(bounding_box) = effective_rects
            .iter()
            .copied()
            .reduce(|acc, it| acc.union(&it))
        {
            let window_size = device.window_size()?;
            // A bordered painter at column or row 0 needs border cells above
            // or left of the window. Unsigned geometry saturates that away,
            // so the underflow has to be caught here, before the bounding-box
            // comparison.
            let border_underflows = self.painters.iter().any(|painter| {
                painter.has_border
                    && (painter.origin.col_index.is_zero()
                        || painter.origin.row_index.is_zero())
            });
            let fits_width = bounding_box.origin.col_index + bounding_box.size.col_width
                <= window_size.col_width;
            let fits_height = bounding_box.origin.row_index
                + bounding_box.size.row_height
                <= window_size.row_height;
            if border_underflows || !(fits_width && fits_height) {
                tracing::debug!(
                    message = "window too small for painter set, skipping repaint",
                    ?bounding_box,
                    ?window_size
                );
                device.write_line(
                    &format!(
                        "please resize the console window, current size is {}x{}",
                        *window_size.col_width, *window_size.row_height
                    ),
                    OutputKind::Error,
                )?;
                return ok!();
            }
        }

        for painter in &mut self.painters {
            painter.paint(device)?;
        }
        ok!()
    }
}

fn describe_painter(index: usize, painter: &Painter) -> String {
    format!(
        "painter #{index} at {:?} size {:?} border={}",
        painter.origin, painter.inner_size, painter.has_border
    )
}
