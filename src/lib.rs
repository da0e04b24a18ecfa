//! Digital Representation Lab - interactive number, text and pixel encoding visualizer.
//!
//! The library holds the pure representation engine and the explicit
//! application state the UI drives:
//! - Base conversion, two's complement and endianness (`repr`)
//! - UTF-8 encoding/decoding and code point classification (`text`)
//! - Random target challenges (`challenge`)
//! - Image decoding and pixel sampling (`pixel`)
//!
//! The egui panels live in `ui` and are rendered by the `reprlab` binary.

pub mod app;
pub mod challenge;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod pixel;
pub mod repr;
pub mod text;
pub mod ui;
pub mod util;
