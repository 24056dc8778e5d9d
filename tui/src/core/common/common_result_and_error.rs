// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// It is basically `miette::Result<T, miette::Report>` and works hand in hand
/// with [`CommonError`] and any other error type.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct for this crate. The [`CommonErrorType`] carries the
/// category; the message carries the caller-facing detail.
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// The error categories that can occur in this crate.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    /// A cell coordinate fell outside a buffer's bounds. Always a caller bug.
    IndexOutOfBounds,
    /// A supplied value (e.g. a line whose length must equal a painter's
    /// width) fell outside its documented domain. Always a caller bug.
    ValueOutOfRange,
    /// Two painters' effective rectangles overlap. A configuration error; the
    /// caller must fix the layout before retrying.
    InvalidLayout,
    IOError,
    ClipboardError,
}

impl Error for CommonError {}

/// Same as the derived [`Debug`] implementation.
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Build an `Err(miette::Report)` wrapping a [`CommonError`] with both an
    /// error type and a message.
    pub fn new_error_result<T>(
        error_type: CommonErrorType,
        msg: impl Into<String>,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type,
            error_message: Some(msg.into()),
        }))
    }

    /// Build an `Err(miette::Report)` wrapping a [`CommonError`] with only an
    /// error type.
    pub fn new_error_result_with_only_type<T>(
        error_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type,
            error_message: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error_result_carries_type_and_message() {
        let result: CommonResult<()> = CommonError::new_error_result(
            CommonErrorType::IndexOutOfBounds,
            "cell (10, 10) outside buffer",
        );
        let report = result.unwrap_err();
        let common_error = report.downcast_ref::<CommonError>().unwrap();
        assert_eq!(common_error.error_type, CommonErrorType::IndexOutOfBounds);
        assert!(
            common_error
                .error_message
                .as_deref()
                .unwrap()
                .contains("outside buffer")
        );
    }
}
