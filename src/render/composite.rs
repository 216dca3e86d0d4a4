use rayon::prelude::*;

use crate::blend::mode::BlendMode;
use crate::blend::registry::{BlendFn, formula};
use crate::canvas::normalize::ensure_non_empty;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{BlendlabError, BlendlabResult};
use crate::foundation::math::{u8_from_unit, unit_from_u8};
use crate::pixels::buffer::PixelBuffer;

/// Blend one overlay pixel onto one base pixel.
///
/// Color follows the W3C separable/non-separable compositing model: where both layers are
/// present the blend formula decides, where only one is present that layer shows through.
/// Alpha is source-over: `a = a_o + a_b * (1 - a_o)`.
///
/// Identities such as `darken(A, A) == A` or `multiply(A, white) == A` only hold for opaque
/// layers. With translucent layers the color survives but alpha accumulates, so
/// `darken([100, 150, 200, 128], same)` yields alpha 192.
///
/// The arithmetic is arranged so that swapping `base` and `overlay` under a symmetric formula
/// produces bit-identical output.
#[inline]
pub fn blend_pixel(base: Rgba8, overlay: Rgba8, f: BlendFn) -> Rgba8 {
    let ab = unit_from_u8(base[3]);
    let ao = unit_from_u8(overlay[3]);
    let out_a = (ao + ab) - ao * ab;
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let cb = [
        unit_from_u8(base[0]),
        unit_from_u8(base[1]),
        unit_from_u8(base[2]),
    ];
    let co = [
        unit_from_u8(overlay[0]),
        unit_from_u8(overlay[1]),
        unit_from_u8(overlay[2]),
    ];
    let mixed = f.apply(cb, co);

    let both = ao * ab;
    let only_o = ao * (1.0 - ab);
    let only_b = ab * (1.0 - ao);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let premul = both * mixed[i] + (only_o * co[i] + only_b * cb[i]);
        out[i] = u8_from_unit(premul / out_a);
    }
    out[3] = u8_from_unit(out_a);
    out
}

/// Composite `overlay` onto `base` under `mode`, producing a new buffer.
///
/// Both buffers must already share a canvas; run [`normalize`](crate::normalize) first when
/// they do not. Inputs are only read.
#[tracing::instrument(skip(base, overlay), fields(canvas = %base.canvas()))]
pub fn composite(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    mode: BlendMode,
) -> BlendlabResult<PixelBuffer> {
    check_aligned(base, overlay)?;
    let f = formula(mode);

    let mut data = vec![0u8; base.data().len()];
    for ((d, b), o) in data
        .chunks_exact_mut(4)
        .zip(base.data().chunks_exact(4))
        .zip(overlay.data().chunks_exact(4))
    {
        let out = blend_pixel([b[0], b[1], b[2], b[3]], [o[0], o[1], o[2], o[3]], f);
        d.copy_from_slice(&out);
    }

    PixelBuffer::new(base.width(), base.height(), data)
}

/// Same as [`composite`], with rows sharded across the current rayon pool.
///
/// Output is bit-identical to the sequential path.
#[tracing::instrument(skip(base, overlay), fields(canvas = %base.canvas()))]
pub fn composite_par(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    mode: BlendMode,
) -> BlendlabResult<PixelBuffer> {
    check_aligned(base, overlay)?;
    let f = formula(mode);
    let stride = (base.width() as usize) * 4;

    let mut data = vec![0u8; base.data().len()];
    data.par_chunks_mut(stride)
        .zip(base.data().par_chunks(stride))
        .zip(overlay.data().par_chunks(stride))
        .for_each(|((d_row, b_row), o_row)| {
            for ((d, b), o) in d_row
                .chunks_exact_mut(4)
                .zip(b_row.chunks_exact(4))
                .zip(o_row.chunks_exact(4))
            {
                let out = blend_pixel([b[0], b[1], b[2], b[3]], [o[0], o[1], o[2], o[3]], f);
                d.copy_from_slice(&out);
            }
        });

    PixelBuffer::new(base.width(), base.height(), data)
}

fn check_aligned(base: &PixelBuffer, overlay: &PixelBuffer) -> BlendlabResult<()> {
    ensure_non_empty("base", base)?;
    ensure_non_empty("overlay", overlay)?;
    if base.canvas() != overlay.canvas() {
        return Err(BlendlabError::dimension_mismatch(
            base.canvas(),
            overlay.canvas(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
