//! blendlab composites two raster layers under every standard blend mode.
//!
//! Given a base and an overlay image, the engine produces one output per mode in a fixed
//! 25-entry catalog (Darken, Multiply, Screen, Overlay, Hue, Color, ...), so the results can be
//! compared side by side.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes -> [`PixelBuffer`] (straight-alpha RGBA8), see [`decode_image`]
//! 2. **Normalize**: place both layers on a shared canvas sized to the per-axis maximum,
//!    padding with transparency ([`normalize`])
//! 3. **Composite**: apply one [`BlendMode`] formula per pixel with source-over alpha
//!    ([`composite`])
//! 4. **Gallery**: repeat step 3 for every mode ([`render_all`]), optionally in parallel
//!
//! # Design constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: every engine call reads its inputs and allocates a fresh output; results are
//!   bit-identical across runs, thread counts and layer-swap round trips.
//! - **Fail fast**: errors are reported before any output buffer is allocated.
//! - **Blend space**: formulas operate on channels normalized to `[0, 1]`; luma is
//!   `0.3 R + 0.59 G + 0.11 B`.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod blend;
mod canvas;
mod foundation;
mod pixels;
mod render;
mod session;

/// Built-in sample layers.
pub mod demo {
    pub use crate::assets::demo::{DEMO_SIZE, gradient, letter_a, pair};
}

/// Per-channel and whole-pixel blend formulas.
pub mod formulas {
    pub use crate::blend::non_separable::{
        Rgb, color, darker_color, hue, lighter_color, luminosity, saturation,
    };
    pub use crate::blend::separable::{
        color_burn, color_dodge, darken, difference, divide, exclusion, hard_light, hard_mix,
        lighten, linear_burn, linear_dodge, linear_light, multiply, overlay, pin_light, screen,
        soft_light, subtract, vivid_light,
    };
}

pub use assets::export::{GalleryManifest, MANIFEST_FILE, ManifestEntry, read_manifest, write_gallery};
pub use assets::io::{decode_image, load_image, save_png};
pub use assets::preview::{fit_size, thumbnail};
pub use blend::mode::{BlendMode, ModeGroup};
pub use blend::registry::{BlendFn, ChannelFn, PixelFn, entries, formula, lookup};
pub use canvas::normalize::{AlignedPair, normalize, pad_to};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{BlendlabError, BlendlabResult};
pub use foundation::math::{EPSILON, luma};
pub use pixels::buffer::PixelBuffer;
pub use render::composite::{blend_pixel, composite, composite_par};
pub use render::gallery::{Gallery, RenderOpts, render_all, render_all_with, render_one};
pub use session::workspace::{Focus, Session};
