//! Built-in sample layers, so the gallery has something to show before the user loads images.

use crate::foundation::core::Rgba8;
use crate::foundation::error::BlendlabResult;
use crate::pixels::buffer::PixelBuffer;

/// Side length of each demo layer.
pub const DEMO_SIZE: u32 = 200;

/// Opaque horizontal ramp from black on the left to white on the right.
pub fn gradient(width: u32, height: u32) -> BlendlabResult<PixelBuffer> {
    let span = width.saturating_sub(1).max(1) as f32;
    PixelBuffer::from_fn(width, height, |x, _| {
        let v = ((x as f32 / span) * 255.0).round() as u8;
        [v, v, v, 255]
    })
}

/// A capital "A" in `rgba`, centered on a transparent canvas, with anti-aliased edges.
pub fn letter_a(width: u32, height: u32, rgba: Rgba8) -> BlendlabResult<PixelBuffer> {
    let (w, h) = (width as f32, height as f32);
    let apex = (0.5 * w, 0.2 * h);
    let left_foot = (0.25 * w, 0.8 * h);
    let right_foot = (0.75 * w, 0.8 * h);
    let bar_t = 0.65;
    let bar = (lerp(apex, left_foot, bar_t), lerp(apex, right_foot, bar_t));
    let half_stroke = 0.05 * w.min(h);

    let strokes = [(apex, left_foot), (apex, right_foot), bar];
    PixelBuffer::from_fn(width, height, |x, y| {
        let p = (x as f32 + 0.5, y as f32 + 0.5);
        let dist = strokes
            .iter()
            .map(|&(a, b)| segment_distance(p, a, b))
            .fold(f32::INFINITY, f32::min);
        let coverage = (half_stroke + 0.5 - dist).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return [0, 0, 0, 0];
        }
        let a = (f32::from(rgba[3]) * coverage).round() as u8;
        [rgba[0], rgba[1], rgba[2], a]
    })
}

/// The default `(base, overlay)` pair: a grey ramp under a red "A".
pub fn pair() -> BlendlabResult<(PixelBuffer, PixelBuffer)> {
    Ok((
        gradient(DEMO_SIZE, DEMO_SIZE)?,
        letter_a(DEMO_SIZE, DEMO_SIZE, [255, 0, 0, 255])?,
    ))
}

type Pt = (f32, f32);

fn lerp(a: Pt, b: Pt, t: f32) -> Pt {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

fn segment_distance(p: Pt, a: Pt, b: Pt) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (p.0 - (a.0 + abx * t), p.1 - (a.1 + aby * t));
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/demo.rs"]
mod tests;
