//! Utility functions shared across the application.
//!
//! This module provides common utilities for:
//! - Color conversion and the interface palette
//! - Text formatting of digits and byte buffers

pub mod color;
pub mod format;

pub use color::*;
pub use format::{group_digits, hex_bytes, hex_dump};
