//! Main application state.

use std::path::PathBuf;

use super::types::{Decoder, NumberLab, PixelInspector, TextLab, Tool};
use crate::clipboard::{copy_to_clipboard, ClipboardService};
use crate::config::Config;

/// Outcome of the last copy button press, for the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyStatus {
    pub label: String,
    pub ok: bool,
}

/// Main application state. Every tool's state is owned here and handed to
/// the panels explicitly.
pub struct LabApp {
    /// Currently selected tool.
    pub active_tool: Tool,
    pub number: NumberLab,
    pub text: TextLab,
    pub decoder: Decoder,
    pub pixel: PixelInspector,
    /// Whether the help popup is shown.
    pub show_help: bool,
    /// Whether a file is being dragged over.
    pub is_drop_target: bool,
    /// Image to load on the first frame (from command-line argument).
    pub initial_image: Option<PathBuf>,
    pub last_copy: Option<CopyStatus>,
}

impl Default for LabApp {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl LabApp {
    /// Build the initial state from launch configuration.
    pub fn from_config(config: Config) -> Self {
        let mut text = TextLab::default();
        text.set_input("Hi 😀");
        let mut decoder = Decoder::default();
        decoder.set_input("48 65 6C 6C 6F");

        Self {
            active_tool: config.tool,
            number: NumberLab::new(config.width),
            text,
            decoder,
            pixel: PixelInspector::default(),
            show_help: false,
            is_drop_target: false,
            initial_image: config.initial_image,
            last_copy: None,
        }
    }

    /// Create a new application instance for eframe.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::from_config(config)
    }

    /// Copy `content` and remember the outcome under `label`.
    pub fn copy(&mut self, clipboard: &mut impl ClipboardService, label: &str, content: &str) -> bool {
        let ok = copy_to_clipboard(clipboard, content);
        self.last_copy = Some(CopyStatus {
            label: label.to_string(),
            ok,
        });
        ok
    }

    /// Load an image from disk into the inspector and switch to it.
    pub fn open_image(&mut self, path: PathBuf) {
        if self.pixel.load_path(&path).is_ok() {
            self.active_tool = Tool::Pixel;
        }
    }

    /// Load a dropped in-memory image and switch to the inspector.
    pub fn open_image_bytes(&mut self, name: &str, bytes: &[u8]) {
        if self.pixel.load_bytes(name, bytes).is_ok() {
            self.active_tool = Tool::Pixel;
        }
    }

    /// Send the text tool's input to the decoder as hex bytes.
    pub fn send_text_to_decoder(&mut self) {
        self.decoder.load_text(self.text.input());
        self.active_tool = Tool::Decoder;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::clipboard_test_fixtures::TestClipboard;
    use crate::repr::BitWidth;

    #[test]
    fn test_from_config() {
        let app = LabApp::from_config(Config {
            width: BitWidth::W32,
            tool: Tool::Text,
            ..Config::default()
        });
        assert_eq!(app.active_tool, Tool::Text);
        assert_eq!(app.number.width(), BitWidth::W32);
        assert_eq!(app.decoder.decoded(), Some("Hello"));
    }

    #[test]
    fn test_copy_records_status() {
        let mut app = LabApp::default();
        let mut clipboard = TestClipboard::default();
        assert!(app.copy(&mut clipboard, "HEX", "C8"));
        assert_eq!(
            app.last_copy,
            Some(CopyStatus {
                label: "HEX".into(),
                ok: true
            })
        );

        clipboard.unavailable = true;
        assert!(!app.copy(&mut clipboard, "BIN", "1100 1000"));
        assert_eq!(app.last_copy.as_ref().map(|s| s.ok), Some(false));
        assert_eq!(clipboard.content, "C8");
    }

    #[test]
    fn test_send_text_to_decoder() {
        let mut app = LabApp::default();
        app.text.set_input("Hi");
        app.send_text_to_decoder();
        assert_eq!(app.active_tool, Tool::Decoder);
        assert_eq!(app.decoder.input(), "48 69");
        assert_eq!(app.decoder.decoded(), Some("Hi"));
    }

    #[test]
    fn test_bad_image_keeps_tool() {
        let mut app = LabApp::default();
        app.open_image_bytes("broken.png", &[0x89, 0x50]);
        assert_eq!(app.active_tool, Tool::Number);
        assert!(app.pixel.error.is_some());
    }
}
