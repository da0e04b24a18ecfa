//! Per-tool state for the lab.
//!
//! Each struct owns the state of one tool and exposes the transitions the UI
//! performs on it. Nothing here touches egui except the cached texture handle.

use std::path::Path;

use clap::ValueEnum;
use eframe::egui::TextureHandle;
use rand::Rng;

use crate::challenge::Challenge;
use crate::error::{HexDecodeError, ImageError, ParseError};
use crate::pixel::{PixelSample, RasterImage};
use crate::repr::{self, Base, BitWidth};
use crate::text::{self, CharBreakdown};
use crate::util::format::hex_bytes;

// =============================================================================
// Tool
// =============================================================================

/// Available tools, one per top-level tab. `--tool` takes the lower-case
/// variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Tool {
    #[default]
    Number,
    Text,
    Decoder,
    Pixel,
}

impl Tool {
    /// Get display name for the tool.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "Number Lab",
            Self::Text => "Text Lab",
            Self::Decoder => "UTF-8 Decoder",
            Self::Pixel => "Pixel Inspector",
        }
    }

    /// Get all available tools.
    pub fn all() -> &'static [Self] {
        &[Self::Number, Self::Text, Self::Decoder, Self::Pixel]
    }
}

// =============================================================================
// Number Lab
// =============================================================================

/// A rejected field edit, shown as a hint next to the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldHint {
    pub base: Base,
    pub error: ParseError,
}

/// Number tool state. `value` is the single source of truth; the field
/// buffers are views of it, except the one being typed into.
#[derive(Debug)]
pub struct NumberLab {
    width: BitWidth,
    value: u32,
    decimal: String,
    hex: String,
    binary: String,
    pub hint: Option<FieldHint>,
    challenge: Option<Challenge>,
}

impl Default for NumberLab {
    fn default() -> Self {
        Self::new(BitWidth::default())
    }
}

impl NumberLab {
    pub fn new(width: BitWidth) -> Self {
        let mut lab = Self {
            width,
            value: 0,
            decimal: String::new(),
            hex: String::new(),
            binary: String::new(),
            hint: None,
            challenge: None,
        };
        lab.refresh_fields(None);
        lab
    }

    pub fn width(&self) -> BitWidth {
        self.width
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// Current text of a field.
    pub fn field(&self, base: Base) -> &str {
        match base {
            Base::Decimal => &self.decimal,
            Base::Hex => &self.hex,
            Base::Binary => &self.binary,
        }
    }

    fn field_mut(&mut self, base: Base) -> &mut String {
        match base {
            Base::Decimal => &mut self.decimal,
            Base::Hex => &mut self.hex,
            Base::Binary => &mut self.binary,
        }
    }

    /// Re-render every field except `keep`.
    fn refresh_fields(&mut self, keep: Option<Base>) {
        for &base in Base::all() {
            if Some(base) != keep {
                *self.field_mut(base) = repr::format(self.value, self.width, base);
            }
        }
    }

    /// Set the value directly (bit grid, buttons). Wraps into the width.
    pub fn set_value(&mut self, value: u32) {
        self.value = value & self.width.max_unsigned();
        self.hint = None;
        self.refresh_fields(None);
    }

    /// Switch width: re-wrap the value and drop any challenge.
    pub fn set_width(&mut self, width: BitWidth) {
        if width == self.width {
            return;
        }
        tracing::debug!(from = %self.width, to = %width, "bit width changed");
        self.value = repr::wrap_int(i64::from(self.value), width);
        self.width = width;
        self.challenge = None;
        self.hint = None;
        self.refresh_fields(None);
    }

    /// Apply text typed into a field.
    ///
    /// Valid input updates the value and the other fields; the edited field
    /// keeps the text as typed. Invalid input keeps the previous value and
    /// records a hint. Returns whether the value was accepted.
    pub fn edit_field(&mut self, base: Base, text: &str) -> bool {
        *self.field_mut(base) = text.to_string();
        match repr::parse_wrapped(text, base, self.width) {
            Ok(value) => {
                self.value = value;
                self.hint = None;
                self.refresh_fields(Some(base));
                true
            }
            Err(error) => {
                self.hint = Some(FieldHint { base, error });
                false
            }
        }
    }

    /// Normalize all fields to the canonical rendering (on focus loss).
    pub fn commit_fields(&mut self) {
        self.hint = None;
        self.refresh_fields(None);
    }

    pub fn toggle_bit(&mut self, index: u32) {
        self.set_value(repr::toggle_bit(self.value, index, self.width));
    }

    pub fn formatted(&self, base: Base) -> String {
        repr::format(self.value, self.width, base)
    }

    pub fn signed(&self) -> i64 {
        repr::to_signed(self.value, self.width)
    }

    pub fn big_endian(&self) -> Vec<u8> {
        repr::to_big_endian_bytes(self.value, self.width)
    }

    pub fn little_endian(&self) -> Vec<u8> {
        repr::to_little_endian_bytes(self.value, self.width)
    }

    /// Start a new challenge at the current width.
    pub fn new_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Challenge {
        let challenge = Challenge::new(self.width, rng);
        tracing::debug!(value = challenge.target, width = %challenge.width, "new challenge");
        self.challenge = Some(challenge);
        challenge
    }

    pub fn clear_challenge(&mut self) {
        self.challenge = None;
    }

    pub fn challenge_solved(&self) -> bool {
        self.challenge
            .is_some_and(|c| c.is_solved(self.value, self.width))
    }
}

// =============================================================================
// Text Lab
// =============================================================================

/// Text tool state: the input and its cached breakdown.
#[derive(Debug, Default)]
pub struct TextLab {
    input: String,
    breakdown: Vec<CharBreakdown>,
    bytes: Vec<u8>,
}

impl TextLab {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        if input == self.input {
            return;
        }
        self.input = input.to_string();
        self.breakdown = text::char_breakdown(input);
        self.bytes = text::encode_utf8(input);
    }

    pub fn breakdown(&self) -> &[CharBreakdown] {
        &self.breakdown
    }

    pub fn utf8_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn code_points(&self) -> Vec<u32> {
        self.breakdown.iter().map(|c| c.code_point).collect()
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Message shown for any decoder failure.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid UTF-8 or hex format";

/// Result of decoding the current hex input.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DecodeOutcome {
    #[default]
    Empty,
    Text(String),
    Invalid(HexDecodeError),
}

/// Hex-paste decoder state.
#[derive(Debug, Default)]
pub struct Decoder {
    input: String,
    outcome: DecodeOutcome,
}

impl Decoder {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &DecodeOutcome {
        &self.outcome
    }

    /// Decoded text, or `None` when empty or invalid.
    pub fn decoded(&self) -> Option<&str> {
        match &self.outcome {
            DecodeOutcome::Text(text) => Some(text),
            DecodeOutcome::Empty | DecodeOutcome::Invalid(_) => None,
        }
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.outcome = if input.trim().is_empty() {
            DecodeOutcome::Empty
        } else {
            match text::decode_hex_text(input) {
                Ok(text) => DecodeOutcome::Text(text),
                Err(err) => DecodeOutcome::Invalid(err),
            }
        };
    }

    /// Fill the input with the UTF-8 bytes of `text`.
    pub fn load_text(&mut self, text: &str) {
        self.set_input(&hex_bytes(&text::encode_utf8(text)));
    }
}

// =============================================================================
// Pixel Inspector
// =============================================================================

/// Loaded image with its display texture.
pub struct LoadedImage {
    /// File name shown in the header.
    pub title: String,
    pub raster: RasterImage,
    /// Cached texture, created lazily by the UI.
    pub texture: Option<TextureHandle>,
}

/// Pixel inspector state.
#[derive(Default)]
pub struct PixelInspector {
    pub image: Option<LoadedImage>,
    /// Pixel under the pointer.
    pub hovered: Option<PixelSample>,
    /// Pixel fixed by a click.
    pub pinned: Option<PixelSample>,
    /// Last load failure.
    pub error: Option<String>,
}

impl PixelInspector {
    /// Decode an in-memory image (drag-and-drop on web backends).
    pub fn load_bytes(&mut self, title: &str, bytes: &[u8]) -> Result<(), String> {
        self.install(title, RasterImage::decode(bytes))
    }

    /// Decode an image file from disk.
    pub fn load_path(&mut self, path: &Path) -> Result<(), String> {
        let title = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown")
            .to_string();
        self.install(&title, RasterImage::open(path))
    }

    fn install(&mut self, title: &str, result: Result<RasterImage, ImageError>) -> Result<(), String> {
        self.hovered = None;
        self.pinned = None;
        match result {
            Ok(raster) => {
                tracing::info!(
                    title,
                    width = raster.width(),
                    height = raster.height(),
                    "image loaded"
                );
                self.image = Some(LoadedImage {
                    title: title.to_string(),
                    raster,
                    texture: None,
                });
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(title, %err, "image load failed");
                let message = format!("{title}: {err}");
                self.image = None;
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    /// Update the hovered pixel from normalized image coordinates.
    pub fn hover_uv(&mut self, u: f32, v: f32) {
        self.hovered = self
            .image
            .as_ref()
            .and_then(|img| img.raster.pixel_at_uv(u, v));
    }

    /// Pin the hovered pixel.
    pub fn pin_hovered(&mut self) {
        if self.hovered.is_some() {
            self.pinned = self.hovered;
        }
    }

    /// Pixel to show in the readout: the hovered one, else the pinned one.
    pub fn readout(&self) -> Option<PixelSample> {
        self.hovered.or(self.pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_number_lab_fields_track_value() {
        let mut lab = NumberLab::new(BitWidth::W8);
        lab.set_value(200);
        assert_eq!(lab.field(Base::Decimal), "200");
        assert_eq!(lab.field(Base::Hex), "C8");
        assert_eq!(lab.field(Base::Binary), "1100 1000");
        assert_eq!(lab.signed(), -56);
        assert_eq!(lab.big_endian(), vec![200]);
    }

    #[test]
    fn test_edit_field_keeps_typed_text() {
        let mut lab = NumberLab::new(BitWidth::W16);
        assert!(lab.edit_field(Base::Hex, "fde8"));
        assert_eq!(lab.value(), 65000);
        assert_eq!(lab.field(Base::Hex), "fde8");
        assert_eq!(lab.field(Base::Decimal), "65000");
        assert_eq!(lab.little_endian(), vec![232, 253]);

        lab.commit_fields();
        assert_eq!(lab.field(Base::Hex), "FDE8");
    }

    #[test]
    fn test_invalid_edit_keeps_value() {
        let mut lab = NumberLab::new(BitWidth::W8);
        lab.set_value(42);
        assert!(!lab.edit_field(Base::Decimal, "4x"));
        assert_eq!(lab.value(), 42);
        assert_eq!(lab.field(Base::Hex), "2A");
        assert_eq!(
            lab.hint,
            Some(FieldHint {
                base: Base::Decimal,
                error: ParseError::InvalidDigit {
                    base: Base::Decimal,
                    digit: 'x'
                }
            })
        );
    }

    #[test]
    fn test_negative_and_overflowing_input_wraps() {
        let mut lab = NumberLab::new(BitWidth::W8);
        assert!(lab.edit_field(Base::Decimal, "-1"));
        assert_eq!(lab.value(), 255);
        assert!(lab.edit_field(Base::Decimal, "300"));
        assert_eq!(lab.value(), 44);
    }

    #[test]
    fn test_width_change_rewraps_and_clears_challenge() {
        let mut lab = NumberLab::new(BitWidth::W16);
        lab.set_value(0x1234);
        lab.new_challenge(&mut StdRng::seed_from_u64(1));
        assert!(lab.challenge().is_some());

        lab.set_width(BitWidth::W8);
        assert_eq!(lab.value(), 0x34);
        assert!(lab.challenge().is_none());
        assert_eq!(lab.big_endian().len(), 1);

        lab.set_width(BitWidth::W32);
        assert_eq!(lab.value(), 0x34);
        assert_eq!(lab.field(Base::Hex), "00000034");
    }

    #[test]
    fn test_challenge_solved() {
        let mut lab = NumberLab::new(BitWidth::W8);
        let challenge = lab.new_challenge(&mut StdRng::seed_from_u64(9));
        lab.set_value(challenge.target);
        assert!(lab.challenge_solved());
        lab.toggle_bit(0);
        assert!(!lab.challenge_solved());
    }

    #[test]
    fn test_toggle_bit() {
        let mut lab = NumberLab::new(BitWidth::W8);
        lab.toggle_bit(7);
        lab.toggle_bit(3);
        assert_eq!(lab.value(), 0b1000_1000);
        lab.toggle_bit(8);
        assert_eq!(lab.value(), 0b1000_1000);
    }

    #[test]
    fn test_text_lab() {
        let mut lab = TextLab::default();
        lab.set_input("Hi");
        assert_eq!(lab.code_points(), vec![72, 105]);
        assert_eq!(lab.utf8_bytes(), &[0x48, 0x69]);
        lab.set_input("");
        assert!(lab.breakdown().is_empty());
    }

    #[test]
    fn test_decoder() {
        let mut decoder = Decoder::default();
        decoder.set_input("48 65 6C 6C 6F");
        assert_eq!(decoder.decoded(), Some("Hello"));

        decoder.set_input("FF FE");
        assert_eq!(decoder.decoded(), None);
        assert_eq!(
            decoder.outcome(),
            &DecodeOutcome::Invalid(HexDecodeError::Utf8(DecodeError::InvalidByte {
                offset: 0,
                len: 1
            }))
        );

        decoder.set_input("  ");
        assert_eq!(decoder.outcome(), &DecodeOutcome::Empty);
    }

    #[test]
    fn test_decoder_load_text() {
        let mut decoder = Decoder::default();
        decoder.load_text("é!");
        assert_eq!(decoder.input(), "C3 A9 21");
        assert_eq!(decoder.decoded(), Some("é!"));
    }

    #[test]
    fn test_pixel_inspector_load_failure() {
        let mut inspector = PixelInspector::default();
        assert!(inspector.load_bytes("junk.png", b"junk").is_err());
        assert!(inspector.image.is_none());
        assert!(inspector.error.as_deref().is_some_and(|e| e.starts_with("junk.png")));
        inspector.hover_uv(0.5, 0.5);
        assert_eq!(inspector.readout(), None);
    }

    #[test]
    fn test_tool_value_names() {
        assert_eq!(Tool::from_str("PIXEL", true), Ok(Tool::Pixel));
        assert!(Tool::from_str("nope", true).is_err());
        let names: Vec<_> = Tool::value_variants()
            .iter()
            .filter_map(|t| t.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, ["number", "text", "decoder", "pixel"]);
    }
}
