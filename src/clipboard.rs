//! Clipboard abstraction for dependency injection.
//!
//! Copy is fire-and-forget: failures are logged and reduced to a `bool`.

use eframe::egui;

use crate::error::ClipboardError;

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Implemented by the egui-backed clipboard and by the test clipboard.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()>;
}

/// Copy `content`, swallowing any failure. Returns whether the copy succeeded.
pub fn copy_to_clipboard(service: &mut impl ClipboardService, content: &str) -> bool {
    match service.try_to_put_content_into_clipboard(content.to_string()) {
        Ok(()) => {
            tracing::debug!(len = content.len(), "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::warn!(%err, "clipboard copy failed");
            false
        }
    }
}

/// Routes copies through egui's platform output, which the native and web
/// backends flush at the end of the frame.
#[derive(Debug)]
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardService for EguiClipboard<'_> {
    /// Always `Ok`: egui queues the text in the frame output and has no way to
    /// report whether the platform accepted it.
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()> {
        self.ctx.copy_text(content);
        Ok(())
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};
    use crate::error::ClipboardError;

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
        /// When set, every write fails.
        pub unavailable: bool,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()> {
            if self.unavailable {
                return Err(ClipboardError("test clipboard disabled".into()));
            }
            self.content = content;
            Ok(())
        }
    }
}
