// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use std::error::Error;

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// The system clipboard collaborator of the line editor. The editor only ever
/// needs the two operations below; swapping in
/// [`clipboard_test_fixtures::TestClipboard`] keeps tests away from the real
/// clipboard.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        let mut context = ClipboardContext::new()?;
        context.set_contents(content.clone())?;

        tracing::debug!(
            message = "📋 text was copied to clipboard",
            copied = %content,
        );

        Ok(())
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut context = ClipboardContext::new()?;
        let content = context.get_contents()?;
        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// In-memory stand-in for the system clipboard. Paste serves whatever
    /// `content` currently holds; copy overwrites it, so tests can assert on
    /// the last value copied out of the editor.
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl TestClipboard {
        /// A fixture pre-loaded with paste material.
        #[must_use]
        pub fn containing(content: impl Into<String>) -> Self {
            TestClipboard {
                content: content.into(),
            }
        }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }

        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }
    }
}
