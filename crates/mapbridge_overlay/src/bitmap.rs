//! Decoded bitmap with an attached display scale factor.

use crate::error::Result;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// A decoded, in-memory bitmap.
///
/// The scale factor records how many physical pixels make up one logical
/// pixel on the target display. A 64x64-pixel bitmap at scale 2.0 renders at
/// 32x32 logical points. Bitmaps decoded straight from file bytes carry scale
/// 1.0; [`Bitmap::decode_at_scale`] attaches the device scale instead.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: DynamicImage,
    scale: f32,
}

impl Bitmap {
    /// Decode image bytes at the default scale of 1.0.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_at_scale(bytes, 1.0)
    }

    /// Decode image bytes and attach the given display scale factor.
    pub fn decode_at_scale(bytes: &[u8], scale: f32) -> Result<Self> {
        let pixels = image::load_from_memory(bytes)?;
        Ok(Self { pixels, scale })
    }

    /// Re-encode this bitmap as lossless PNG.
    ///
    /// Produces a clean byte stream with no source-format metadata or
    /// orientation tags. Resolution uses this as the intermediate step of the
    /// density normalization pipeline: decode, re-encode to PNG, then
    /// [`decode_at_scale`](Self::decode_at_scale) with the device scale so
    /// the renderer treats the pixels as native-density.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Width in physical pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in physical pixels.
    pub fn pixel_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width in logical points (pixels divided by scale).
    pub fn logical_width(&self) -> f32 {
        self.pixels.width() as f32 / self.scale
    }

    /// Height in logical points (pixels divided by scale).
    pub fn logical_height(&self) -> f32 {
        self.pixels.height() as f32 / self.scale
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }
}
