use std::sync::Arc;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{BlendlabError, BlendlabResult};

/// An immutable grid of straight-alpha RGBA8 pixels, row-major.
///
/// Pixel storage is shared behind an [`Arc`], so clones are cheap and a buffer handed to the
/// engine can never be mutated while a composite reads it. The invariant
/// `data.len() == width * height * 4` is checked once at construction.
///
/// Zero-sized buffers are representable; the engine rejects them with
/// [`BlendlabError::Dimension`] when they are normalized or composited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Arc<Vec<u8>>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> BlendlabResult<Self> {
        let canvas = Canvas::new(width, height);
        let expected_len = canvas
            .byte_len()
            .ok_or_else(|| BlendlabError::validation("pixel buffer size overflow"))?;
        if data.len() != expected_len {
            return Err(BlendlabError::validation(format!(
                "pixel buffer {canvas} expects {expected_len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            canvas,
            data: Arc::new(data),
        })
    }

    /// Build a buffer from a slice of whole pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgba8]) -> BlendlabResult<Self> {
        Self::new(width, height, pixels.concat())
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgba8,
    ) -> BlendlabResult<Self> {
        let canvas = Canvas::new(width, height);
        let len = canvas
            .byte_len()
            .ok_or_else(|| BlendlabError::validation("pixel buffer size overflow"))?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    /// A buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: Rgba8) -> BlendlabResult<Self> {
        let canvas = Canvas::new(width, height);
        if canvas.byte_len().is_none() {
            return Err(BlendlabError::validation("pixel buffer size overflow"));
        }
        Self::new(width, height, rgba.repeat(canvas.pixel_count()))
    }

    /// A fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> BlendlabResult<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Width and height together.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if !self.canvas.contains(x, y) {
            return None;
        }
        let idx = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Rgba8> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// One row of raw bytes.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let stride = (self.canvas.width as usize) * 4;
        let start = (y as usize) * stride;
        &self.data[start..start + stride]
    }

    /// Take the raw bytes, copying only if the storage is still shared.
    pub fn into_raw(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/buffer.rs"]
mod tests;
