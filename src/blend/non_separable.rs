//! Whole-pixel blend formulas.
//!
//! Hue, saturation, color and luminosity follow the W3C compositing definitions built on
//! `lum`, `sat`, `set_lum`, `set_sat` and `clip_color`. Luma uses the weights in
//! [`luma`](crate::luma).

use crate::foundation::math::luma;

/// Straight-alpha RGB triple in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Whichever whole pixel has the lower luma; ties keep the base.
pub fn darker_color(b: Rgb, o: Rgb) -> Rgb {
    if luma(o) < luma(b) { o } else { b }
}

/// Whichever whole pixel has the higher luma; ties keep the base.
pub fn lighter_color(b: Rgb, o: Rgb) -> Rgb {
    if luma(o) > luma(b) { o } else { b }
}

/// Overlay hue, base saturation and luma.
pub fn hue(b: Rgb, o: Rgb) -> Rgb {
    set_lum(set_sat(o, sat(b)), luma(b))
}

/// Overlay saturation, base hue and luma.
pub fn saturation(b: Rgb, o: Rgb) -> Rgb {
    set_lum(set_sat(b, sat(o)), luma(b))
}

/// Overlay hue and saturation, base luma.
pub fn color(b: Rgb, o: Rgb) -> Rgb {
    set_lum(o, luma(b))
}

/// Overlay luma, base hue and saturation.
pub fn luminosity(b: Rgb, o: Rgb) -> Rgb {
    set_lum(b, luma(o))
}

fn sat(c: Rgb) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

fn set_lum(c: Rgb, l: f32) -> Rgb {
    let d = l - luma(c);
    clip_color([c[0] + d, c[1] + d, c[2] + d])
}

/// Pull out-of-gamut channels back into `[0, 1]` while keeping luma fixed.
fn clip_color(c: Rgb) -> Rgb {
    let l = luma(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    let mut out = c;
    if n < 0.0 && l > n {
        for v in &mut out {
            *v = l + (*v - l) * l / (l - n);
        }
    }
    if x > 1.0 && x > l {
        for v in &mut out {
            *v = l + (*v - l) * (1.0 - l) / (x - l);
        }
    }
    out.map(|v| v.clamp(0.0, 1.0))
}

/// Rescale `c` so that `max - min == s`, keeping the channel ordering.
fn set_sat(c: Rgb, s: f32) -> Rgb {
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&a, &b| c[a].total_cmp(&c[b]));
    let [min, mid, max] = idx;

    let mut out = [0.0f32; 3];
    if c[max] > c[min] {
        out[mid] = (c[mid] - c[min]) * s / (c[max] - c[min]);
        out[max] = s;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/blend/non_separable.rs"]
mod tests;
