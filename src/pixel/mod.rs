//! Pixel color inspector: image decoding and per-pixel sampling.

mod raster;

pub use raster::{PixelSample, RasterImage};
