use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::blend::mode::BlendMode;
use crate::canvas::normalize::normalize;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BlendlabError, BlendlabResult};
use crate::pixels::buffer::PixelBuffer;
use crate::render::composite::{composite, composite_par};

/// Threading options for the batch renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderOpts {
    /// Composite modes concurrently on a dedicated rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads. `None` uses rayon defaults; `Some(0)` is rejected even
    /// when `parallel` is off.
    pub threads: Option<usize>,
}

impl RenderOpts {
    /// Reject option combinations no render path accepts, whether or not `parallel` is set.
    pub fn validate(&self) -> BlendlabResult<()> {
        if self.threads == Some(0) {
            return Err(BlendlabError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// One output buffer per blend mode, all on the same canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    canvas: Canvas,
    outputs: BTreeMap<BlendMode, PixelBuffer>,
}

impl Gallery {
    /// Shared canvas of every output.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Output for `mode`.
    pub fn get(&self, mode: BlendMode) -> Option<&PixelBuffer> {
        self.outputs.get(&mode)
    }

    /// Outputs in gallery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BlendMode, &PixelBuffer)> {
        self.outputs.iter().map(|(m, b)| (*m, b))
    }

    /// Number of outputs; always 25 for a rendered gallery.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// True when no outputs are present.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Take the underlying mode map.
    pub fn into_map(self) -> BTreeMap<BlendMode, PixelBuffer> {
        self.outputs
    }
}

/// Render every blend mode for `overlay` on top of `base`, sequentially.
pub fn render_all(base: &PixelBuffer, overlay: &PixelBuffer) -> BlendlabResult<Gallery> {
    render_all_with(base, overlay, &RenderOpts::default())
}

/// Render every blend mode for `overlay` on top of `base`.
///
/// Inputs are normalized once; each mode is then composited from scratch. Either every mode
/// succeeds or an error is returned, never a partial gallery.
#[tracing::instrument(skip(base, overlay), fields(base_size = %base.canvas(), overlay_size = %overlay.canvas()))]
pub fn render_all_with(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    opts: &RenderOpts,
) -> BlendlabResult<Gallery> {
    opts.validate()?;
    let pair = normalize(base, overlay)?;

    let rendered: Vec<(BlendMode, PixelBuffer)> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            BlendMode::ALL
                .par_iter()
                .map(|&mode| -> BlendlabResult<(BlendMode, PixelBuffer)> {
                    tracing::trace!(%mode, "composite");
                    Ok((mode, composite(&pair.base, &pair.overlay, mode)?))
                })
                .collect::<BlendlabResult<Vec<_>>>()
        })?
    } else {
        BlendMode::ALL
            .iter()
            .map(|&mode| -> BlendlabResult<(BlendMode, PixelBuffer)> {
                tracing::trace!(%mode, "composite");
                Ok((mode, composite(&pair.base, &pair.overlay, mode)?))
            })
            .collect::<BlendlabResult<Vec<_>>>()?
    };

    tracing::debug!(canvas = %pair.canvas, modes = rendered.len(), "gallery rendered");
    Ok(Gallery {
        canvas: pair.canvas,
        outputs: rendered.into_iter().collect(),
    })
}

/// Normalize and composite a single mode, as used by the enlarged inspect view.
pub fn render_one(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    mode: BlendMode,
    opts: &RenderOpts,
) -> BlendlabResult<PixelBuffer> {
    opts.validate()?;
    let pair = normalize(base, overlay)?;
    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| composite_par(&pair.base, &pair.overlay, mode))
    } else {
        composite(&pair.base, &pair.overlay, mode)
    }
}

fn build_thread_pool(threads: Option<usize>) -> BlendlabResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BlendlabError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/gallery.rs"]
mod tests;
