/// Floor used in place of zero divisors by the burn, dodge and divide formulas.
pub const EPSILON: f32 = 1e-6;

// Luma weights shared by every non-separable mode.
pub(crate) const LUMA_R: f32 = 0.3;
pub(crate) const LUMA_G: f32 = 0.59;
pub(crate) const LUMA_B: f32 = 0.11;

pub(crate) fn unit_from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

pub(crate) fn u8_from_unit(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Weighted brightness of an RGB triple in `[0, 1]`.
pub fn luma(rgb: [f32; 3]) -> f32 {
    LUMA_R * rgb[0] + LUMA_G * rgb[1] + LUMA_B * rgb[2]
}
