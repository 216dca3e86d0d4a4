use crate::blend::mode::BlendMode;
use crate::foundation::error::{BlendlabError, BlendlabResult};
use crate::pixels::buffer::PixelBuffer;
use crate::render::gallery::{Gallery, RenderOpts, render_all_with};

/// The enlarged single-mode view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focus {
    /// Mode being inspected.
    pub mode: BlendMode,
    /// Composite for `mode` under the current layer order.
    pub buffer: PixelBuffer,
}

/// Explicit state for an interactive blend-mode browser.
///
/// Holds the loaded layer pair, the gallery rendered from it, and the optionally focused mode.
/// Every mutation re-renders before committing, so a failed update leaves the previous state
/// untouched.
#[derive(Clone, Debug)]
pub struct Session {
    base: PixelBuffer,
    overlay: PixelBuffer,
    opts: RenderOpts,
    gallery: Gallery,
    focus: Option<Focus>,
}

impl Session {
    /// Load a pair and render its gallery.
    pub fn new(base: PixelBuffer, overlay: PixelBuffer, opts: RenderOpts) -> BlendlabResult<Self> {
        let gallery = render_all_with(&base, &overlay, &opts)?;
        Ok(Self {
            base,
            overlay,
            opts,
            gallery,
            focus: None,
        })
    }

    /// Bottom layer.
    pub fn base(&self) -> &PixelBuffer {
        &self.base
    }

    /// Top layer.
    pub fn overlay(&self) -> &PixelBuffer {
        &self.overlay
    }

    /// Rendering options used for every refresh.
    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    /// Gallery for the current pair.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Replace the bottom layer.
    pub fn set_base(&mut self, base: PixelBuffer) -> BlendlabResult<()> {
        let gallery = render_all_with(&base, &self.overlay, &self.opts)?;
        self.base = base;
        self.commit(gallery)
    }

    /// Replace the top layer.
    pub fn set_overlay(&mut self, overlay: PixelBuffer) -> BlendlabResult<()> {
        let gallery = render_all_with(&self.base, &overlay, &self.opts)?;
        self.overlay = overlay;
        self.commit(gallery)
    }

    /// Swap layer order and re-render, including the focused view.
    #[tracing::instrument(skip(self))]
    pub fn swap(&mut self) -> BlendlabResult<()> {
        let gallery = render_all_with(&self.overlay, &self.base, &self.opts)?;
        std::mem::swap(&mut self.base, &mut self.overlay);
        self.commit(gallery)
    }

    /// Open the enlarged view for `mode`.
    pub fn focus(&mut self, mode: BlendMode) -> BlendlabResult<&Focus> {
        let buffer = self.output(mode)?.clone();
        let focus: &Focus = self.focus.insert(Focus { mode, buffer });
        Ok(focus)
    }

    /// The enlarged view, if open.
    pub fn focused(&self) -> Option<&Focus> {
        self.focus.as_ref()
    }

    /// Close the enlarged view.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    fn commit(&mut self, gallery: Gallery) -> BlendlabResult<()> {
        self.gallery = gallery;
        if let Some(mode) = self.focus.as_ref().map(|f| f.mode) {
            let buffer = self.output(mode)?.clone();
            self.focus = Some(Focus { mode, buffer });
        }
        Ok(())
    }

    fn output(&self, mode: BlendMode) -> BlendlabResult<&PixelBuffer> {
        self.gallery.get(mode).ok_or_else(|| {
            BlendlabError::validation(format!("gallery has no output for mode '{mode}'"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/workspace.rs"]
mod tests;
