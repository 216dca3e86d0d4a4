use crate::foundation::core::Canvas;
use crate::foundation::error::{BlendlabError, BlendlabResult};
use crate::pixels::buffer::PixelBuffer;

/// Two buffers padded onto one shared canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    /// Shared canvas size.
    pub canvas: Canvas,
    /// Bottom layer, padded to `canvas`.
    pub base: PixelBuffer,
    /// Top layer, padded to `canvas`.
    pub overlay: PixelBuffer,
}

impl AlignedPair {
    /// Split into `(width, height, base, overlay)`.
    pub fn into_parts(self) -> (u32, u32, PixelBuffer, PixelBuffer) {
        (
            self.canvas.width,
            self.canvas.height,
            self.base,
            self.overlay,
        )
    }

    /// The same pair with layer order reversed.
    pub fn swapped(self) -> Self {
        Self {
            canvas: self.canvas,
            base: self.overlay,
            overlay: self.base,
        }
    }
}

/// Place both buffers at the origin of a canvas sized to the per-axis maximum.
///
/// No rescaling happens: pixels outside an input's own extent are transparent.
#[tracing::instrument(skip_all, fields(base_size = %base.canvas(), overlay_size = %overlay.canvas()))]
pub fn normalize(base: &PixelBuffer, overlay: &PixelBuffer) -> BlendlabResult<AlignedPair> {
    ensure_non_empty("base", base)?;
    ensure_non_empty("overlay", overlay)?;

    let canvas = base.canvas().union(overlay.canvas());
    tracing::debug!(%canvas, "normalized canvas");

    Ok(AlignedPair {
        canvas,
        base: pad_to(base, canvas)?,
        overlay: pad_to(overlay, canvas)?,
    })
}

/// Copy `src` into the top-left corner of a transparent `canvas`.
///
/// Rows and columns of `src` beyond `canvas` are cropped.
pub fn pad_to(src: &PixelBuffer, canvas: Canvas) -> BlendlabResult<PixelBuffer> {
    if src.canvas() == canvas {
        return Ok(src.clone());
    }
    let len = canvas
        .byte_len()
        .ok_or_else(|| BlendlabError::validation("normalized canvas size overflow"))?;
    let mut data = vec![0u8; len];

    let dst_stride = (canvas.width as usize) * 4;
    let copy_w = (src.width().min(canvas.width) as usize) * 4;
    for y in 0..src.height().min(canvas.height) {
        let row = &src.row(y)[..copy_w];
        let start = (y as usize) * dst_stride;
        data[start..start + copy_w].copy_from_slice(row);
    }

    PixelBuffer::new(canvas.width, canvas.height, data)
}

pub(crate) fn ensure_non_empty(role: &str, buf: &PixelBuffer) -> BlendlabResult<()> {
    if buf.canvas().is_empty() {
        return Err(BlendlabError::dimension(format!(
            "{role} image is {}, both axes must be non-zero",
            buf.canvas()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/normalize.rs"]
mod tests;
