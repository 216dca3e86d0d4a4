use image::imageops::FilterType;

use crate::foundation::core::Canvas;
use crate::foundation::error::{BlendlabError, BlendlabResult};
use crate::pixels::buffer::PixelBuffer;

/// Largest size with the aspect ratio of `src` that fits in `bounds`.
///
/// Scales up as well as down; each axis is at least one pixel.
pub fn fit_size(src: Canvas, bounds: Canvas) -> BlendlabResult<Canvas> {
    if src.is_empty() || bounds.is_empty() {
        return Err(BlendlabError::dimension(format!(
            "cannot fit {src} into {bounds}"
        )));
    }
    let scale = (bounds.width as f64 / src.width as f64)
        .min(bounds.height as f64 / src.height as f64);
    let w = ((src.width as f64 * scale).round() as u32).clamp(1, bounds.width);
    let h = ((src.height as f64 * scale).round() as u32).clamp(1, bounds.height);
    Ok(Canvas::new(w, h))
}

/// Aspect-preserving resample of `src` to fit inside `bounds`.
pub fn thumbnail(src: &PixelBuffer, bounds: Canvas) -> BlendlabResult<PixelBuffer> {
    let size = fit_size(src.canvas(), bounds)?;
    if size == src.canvas() {
        return Ok(src.clone());
    }
    let img = image::RgbaImage::from_raw(src.width(), src.height(), src.data().to_vec())
        .ok_or_else(|| BlendlabError::validation("thumbnail source does not match its canvas"))?;
    let scaled = image::imageops::resize(&img, size.width, size.height, FilterType::Triangle);
    PixelBuffer::new(size.width, size.height, scaled.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/preview.rs"]
mod tests;
