//! Per-channel blend formulas.
//!
//! Every function takes the base channel `b` and the overlay channel `o`, both in `[0, 1]`, and
//! returns a value in `[0, 1]`. Symmetric formulas are written so that swapping the arguments
//! yields bit-identical results.

use crate::foundation::math::{EPSILON, clamp_unit};

/// `min(b, o)`.
pub fn darken(b: f32, o: f32) -> f32 {
    b.min(o)
}

/// `b * o`.
pub fn multiply(b: f32, o: f32) -> f32 {
    b * o
}

/// `1 - min(1, (1 - b) / o)`; a black overlay burns everything but pure white to black.
pub fn color_burn(b: f32, o: f32) -> f32 {
    1.0 - ((1.0 - b) / o.max(EPSILON)).min(1.0)
}

/// `max(0, b + o - 1)`.
pub fn linear_burn(b: f32, o: f32) -> f32 {
    (b + o - 1.0).max(0.0)
}

/// `max(b, o)`.
pub fn lighten(b: f32, o: f32) -> f32 {
    b.max(o)
}

/// `1 - (1 - b)(1 - o)`.
pub fn screen(b: f32, o: f32) -> f32 {
    1.0 - (1.0 - b) * (1.0 - o)
}

/// `min(1, b / (1 - o))`; a white overlay dodges everything but pure black to white.
pub fn color_dodge(b: f32, o: f32) -> f32 {
    (b / (1.0 - o).max(EPSILON)).min(1.0)
}

/// `min(1, b + o)`.
pub fn linear_dodge(b: f32, o: f32) -> f32 {
    (b + o).min(1.0)
}

/// Multiply below mid-grey base, screen above.
pub fn overlay(b: f32, o: f32) -> f32 {
    if b <= 0.5 {
        2.0 * b * o
    } else {
        1.0 - 2.0 * (1.0 - b) * (1.0 - o)
    }
}

/// W3C compositing soft light.
pub fn soft_light(b: f32, o: f32) -> f32 {
    if o <= 0.5 {
        b - (1.0 - 2.0 * o) * b * (1.0 - b)
    } else {
        let d = if b <= 0.25 {
            ((16.0 * b - 12.0) * b + 4.0) * b
        } else {
            b.sqrt()
        };
        b + (2.0 * o - 1.0) * (d - b)
    }
}

/// [`overlay`] with the layers swapped.
pub fn hard_light(b: f32, o: f32) -> f32 {
    overlay(o, b)
}

/// Burn with a doubled overlay below mid-grey, dodge above.
pub fn vivid_light(b: f32, o: f32) -> f32 {
    if o <= 0.5 {
        color_burn(b, 2.0 * o)
    } else {
        color_dodge(b, 2.0 * (o - 0.5))
    }
}

/// `b + 2o - 1`, clamped to `[0, 1]`.
pub fn linear_light(b: f32, o: f32) -> f32 {
    clamp_unit(b + 2.0 * o - 1.0)
}

/// Darken against `2o` below mid-grey, lighten against `2o - 1` above.
pub fn pin_light(b: f32, o: f32) -> f32 {
    if o <= 0.5 {
        b.min(2.0 * o)
    } else {
        b.max(2.0 * o - 1.0)
    }
}

/// One where [`vivid_light`] reaches mid-grey, zero elsewhere.
pub fn hard_mix(b: f32, o: f32) -> f32 {
    if vivid_light(b, o) >= 0.5 { 1.0 } else { 0.0 }
}

/// `|b - o|`.
pub fn difference(b: f32, o: f32) -> f32 {
    (b - o).abs()
}

/// `b + o - 2bo`.
pub fn exclusion(b: f32, o: f32) -> f32 {
    b + o - 2.0 * (b * o)
}

/// `max(0, b - o)`.
pub fn subtract(b: f32, o: f32) -> f32 {
    (b - o).max(0.0)
}

/// `min(1, b / o)`; a black overlay drives every non-black base to white.
pub fn divide(b: f32, o: f32) -> f32 {
    (b / o.max(EPSILON)).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/separable.rs"]
mod tests;
