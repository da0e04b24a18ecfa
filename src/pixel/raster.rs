//! Decoded RGBA raster and pixel sampling.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::ImageError;
use crate::util::color::{hex_color, rgb_to_hsv, Hsv};

/// A single sampled pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSample {
    pub x: u32,
    pub y: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelSample {
    pub fn hsv(&self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// `#RRGGBB` (alpha omitted).
    pub fn hex(&self) -> String {
        hex_color(self.r, self.g, self.b)
    }
}

/// Offscreen RGBA8 surface an uploaded image is rendered into.
#[derive(Clone, Debug)]
pub struct RasterImage {
    width: u32,
    height: u32,
    /// Row-major RGBA, 4 bytes per pixel.
    rgba: Vec<u8>,
}

impl RasterImage {
    /// Build from raw RGBA rows. Returns `None` if the buffer size does not
    /// match the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (rgba.len() == expected).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    /// Decode an encoded image (PNG, JPEG, GIF, BMP, WebP).
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        let rgba = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Memory-map and decode an image file.
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        let io_err = |source| ImageError::Io {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            return Err(ImageError::Empty);
        }
        // SAFETY: the mapping is read-only and dropped before returning; a
        // concurrent truncation by another process is outside our control.
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        Self::decode(&mmap[..])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Read the pixel at `(x, y)`; `None` outside the image.
    pub fn sample(&self, x: u32, y: u32) -> Option<PixelSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(idx..idx + 4)?;
        Some(PixelSample {
            x,
            y,
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Sample at normalized display coordinates (`0.0..1.0` on each axis).
    pub fn pixel_at_uv(&self, u: f32, v: f32) -> Option<PixelSample> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let x = ((u * self.width as f32) as u32).min(self.width.saturating_sub(1));
        let y = ((v * self.height as f32) as u32).min(self.height.saturating_sub(1));
        self.sample(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn checker() -> RasterImage {
        // 2x2: red, green / blue, translucent white
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 128,
        ];
        RasterImage::from_rgba(2, 2, rgba).expect("valid buffer")
    }

    #[test]
    fn test_sample() {
        let img = checker();
        assert_eq!(
            img.sample(1, 0),
            Some(PixelSample {
                x: 1,
                y: 0,
                r: 0,
                g: 255,
                b: 0,
                a: 255
            })
        );
        assert_eq!(img.sample(1, 1).map(|p| p.a), Some(128));
        assert_eq!(img.sample(2, 0), None);
        assert_eq!(img.sample(0, 2), None);
    }

    #[test]
    fn test_pixel_at_uv() {
        let img = checker();
        assert_eq!(img.pixel_at_uv(0.1, 0.9).map(|p| (p.x, p.y)), Some((0, 1)));
        assert_eq!(img.pixel_at_uv(0.99, 0.0).map(|p| (p.x, p.y)), Some((1, 0)));
        assert_eq!(img.pixel_at_uv(1.0, 0.5), None);
        assert_eq!(img.pixel_at_uv(-0.1, 0.5), None);
    }

    #[test]
    fn test_from_rgba_rejects_mismatch() {
        assert!(RasterImage::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn test_decode_png() {
        let source = image::RgbaImage::from_raw(2, 2, checker().rgba().to_vec()).expect("raw");
        let mut png = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode png");

        let img = RasterImage::decode(&png).expect("decode png");
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.sample(0, 1).map(|p| p.hex()), Some("#0000FF".to_string()));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(RasterImage::decode(&[]), Err(ImageError::Empty)));
        assert!(matches!(
            RasterImage::decode(b"not an image"),
            Err(ImageError::Decode(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = RasterImage::open(Path::new("/nonexistent/reprlab.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io { .. }));
    }
}
