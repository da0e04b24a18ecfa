//! Color utility functions.
//!
//! HSV/RGB conversion for the pixel inspector, plus the interface palette and
//! the color mappings shared by the tool panels.

use eframe::egui::Color32;

use crate::text::ByteRole;

// =============================================================================
// Palette
// =============================================================================

pub const VOID_BLACK: Color32 = Color32::from_rgb(8, 10, 12);
pub const PANEL_DARK: Color32 = Color32::from_rgb(16, 20, 24);
pub const INTERFACE_GRAY: Color32 = Color32::from_rgb(40, 48, 56);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(110, 125, 135);
pub const DATA_WHITE: Color32 = Color32::from_rgb(220, 228, 232);
pub const TACTICAL_CYAN: Color32 = Color32::from_rgb(0, 220, 255);
pub const DIM_CYAN: Color32 = Color32::from_rgb(0, 110, 130);
pub const OPERATIONAL_GREEN: Color32 = Color32::from_rgb(60, 230, 120);
pub const CAUTION_AMBER: Color32 = Color32::from_rgb(255, 180, 40);
pub const ALERT_RED: Color32 = Color32::from_rgb(255, 70, 70);

// =============================================================================
// HSV
// =============================================================================

/// Hue/saturation/value triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in degrees (0-360)
    pub h: f32,
    /// Saturation (0.0-1.0)
    pub s: f32,
    /// Value/brightness (0.0-1.0)
    pub v: f32,
}

/// Convert HSV to RGB as floating point values (0.0-1.0).
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
#[inline]
pub fn hsv_to_rgb_f32(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert HSV to RGB as a rounded u8 tuple.
#[inline]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let (r, g, b) = hsv_to_rgb_f32(h, s, v);
    (to_channel(r), to_channel(g), to_channel(b))
}

#[inline]
fn to_channel(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert 8-bit RGB to HSV.
///
/// Grays report hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv { h, s, v: max }
}

/// `#RRGGBB`, upper-case.
pub fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

// =============================================================================
// Mappings
// =============================================================================

/// Get color for a UTF-8 byte based on its role.
/// Used for byte table highlighting.
pub fn byte_role_color(role: ByteRole) -> Color32 {
    match role {
        ByteRole::Ascii => DATA_WHITE,
        ByteRole::Lead(_) => TACTICAL_CYAN,
        ByteRole::Continuation => CAUTION_AMBER,
        ByteRole::Invalid => ALERT_RED,
    }
}

/// Hue-cycled color per character index, so bytes of one character share a tint.
pub fn char_group_color(index: usize) -> Color32 {
    let hue = (index as f32 * 47.0) % 360.0;
    let (r, g, b) = hsv_to_rgb(hue, 0.55, 0.95);
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn test_rgb_to_hsv() {
        let red = rgb_to_hsv(255, 0, 0);
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let blue = rgb_to_hsv(0, 0, 255);
        assert!((blue.h - 240.0).abs() < 1e-3);

        let magenta = rgb_to_hsv(255, 0, 255);
        assert!((magenta.h - 300.0).abs() < 1e-3);

        let gray = rgb_to_hsv(128, 128, 128);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);

        let black = rgb_to_hsv(0, 0, 0);
        assert_eq!((black.s, black.v), (0.0, 0.0));
    }

    #[test]
    fn test_hsv_round_trip() {
        for (r, g, b) in [(12, 200, 77), (250, 128, 3), (90, 90, 200), (1, 2, 3)] {
            let hsv = rgb_to_hsv(r, g, b);
            assert_eq!(hsv_to_rgb(hsv.h, hsv.s, hsv.v), (r, g, b));
        }
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(255, 128, 0), "#FF8000");
        assert_eq!(hex_color(0, 0, 0), "#000000");
    }

    #[test]
    fn test_char_group_colors_differ() {
        assert_ne!(char_group_color(0), char_group_color(1));
    }
}
