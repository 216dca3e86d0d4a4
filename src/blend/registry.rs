//! The fixed catalog mapping every [`BlendMode`] to its formula.
//!
//! The mapping is an exhaustive `match`, so the compiler guarantees each mode has exactly one
//! implementation. There is no mutable state; lookups are safe from any thread.

use crate::blend::mode::BlendMode;
use crate::blend::non_separable::{self as ns, Rgb};
use crate::blend::separable as sep;
use crate::foundation::error::BlendlabResult;

/// Per-channel formula: `(base, overlay) -> out`, all in `[0, 1]`.
pub type ChannelFn = fn(f32, f32) -> f32;

/// Whole-pixel formula over RGB triples in `[0, 1]`.
pub type PixelFn = fn(Rgb, Rgb) -> Rgb;

/// A registered blend formula.
#[derive(Clone, Copy)]
pub enum BlendFn {
    /// Applied independently to R, G and B.
    Separable(ChannelFn),
    /// Reads all three channels of both inputs.
    NonSeparable(PixelFn),
}

impl BlendFn {
    /// Blend two straight-alpha RGB triples.
    #[inline]
    pub fn apply(self, base: Rgb, overlay: Rgb) -> Rgb {
        match self {
            Self::Separable(f) => [
                f(base[0], overlay[0]),
                f(base[1], overlay[1]),
                f(base[2], overlay[2]),
            ],
            Self::NonSeparable(f) => f(base, overlay),
        }
    }
}

impl std::fmt::Debug for BlendFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Separable(_) => f.write_str("BlendFn::Separable"),
            Self::NonSeparable(_) => f.write_str("BlendFn::NonSeparable"),
        }
    }
}

/// Formula registered for `mode`.
pub fn formula(mode: BlendMode) -> BlendFn {
    use BlendFn::{NonSeparable, Separable};
    match mode {
        BlendMode::Darken => Separable(sep::darken),
        BlendMode::Multiply => Separable(sep::multiply),
        BlendMode::ColorBurn => Separable(sep::color_burn),
        BlendMode::LinearBurn => Separable(sep::linear_burn),
        BlendMode::DarkerColor => NonSeparable(ns::darker_color),
        BlendMode::Lighten => Separable(sep::lighten),
        BlendMode::Screen => Separable(sep::screen),
        BlendMode::ColorDodge => Separable(sep::color_dodge),
        BlendMode::LinearDodge => Separable(sep::linear_dodge),
        BlendMode::LighterColor => NonSeparable(ns::lighter_color),
        BlendMode::Overlay => Separable(sep::overlay),
        BlendMode::SoftLight => Separable(sep::soft_light),
        BlendMode::HardLight => Separable(sep::hard_light),
        BlendMode::VividLight => Separable(sep::vivid_light),
        BlendMode::LinearLight => Separable(sep::linear_light),
        BlendMode::PinLight => Separable(sep::pin_light),
        BlendMode::HardMix => Separable(sep::hard_mix),
        BlendMode::Difference => Separable(sep::difference),
        BlendMode::Exclusion => Separable(sep::exclusion),
        BlendMode::Subtract => Separable(sep::subtract),
        BlendMode::Divide => Separable(sep::divide),
        BlendMode::Hue => NonSeparable(ns::hue),
        BlendMode::Saturation => NonSeparable(ns::saturation),
        BlendMode::Color => NonSeparable(ns::color),
        BlendMode::Luminosity => NonSeparable(ns::luminosity),
    }
}

/// Resolve a mode identifier to its mode and formula.
pub fn lookup(id: &str) -> BlendlabResult<(BlendMode, BlendFn)> {
    let mode = BlendMode::parse(id)?;
    Ok((mode, formula(mode)))
}

/// Every registered `(mode, formula)` pair in gallery order.
pub fn entries() -> impl ExactSizeIterator<Item = (BlendMode, BlendFn)> {
    BlendMode::ALL.into_iter().map(|m| (m, formula(m)))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/registry.rs"]
mod tests;
