//! Application state for the lab.
//!
//! - `LabApp` - Main application state
//! - `Tool` - Available tools (tabs)
//! - `NumberLab` - Width, value and field buffers for the number tool
//! - `TextLab` - Text input and its UTF-8 breakdown
//! - `Decoder` - Hex-paste UTF-8 decoder
//! - `PixelInspector` - Loaded image and sampled pixels

mod state;
mod types;

pub use state::{CopyStatus, LabApp};
pub use types::{
    DecodeOutcome, Decoder, FieldHint, LoadedImage, NumberLab, PixelInspector, TextLab, Tool,
    INVALID_INPUT_MESSAGE,
};
