use crate::foundation::core::Canvas;

/// Convenience result type used across blendlab.
pub type BlendlabResult<T> = Result<T, BlendlabError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is raised before an output buffer is allocated, so callers can retry with
/// corrected inputs.
#[derive(thiserror::Error, Debug)]
pub enum BlendlabError {
    /// An input buffer has zero width or zero height.
    #[error("dimension error: {0}")]
    Dimension(String),

    /// Two buffers reached the compositor without sharing a canvas.
    #[error("dimension mismatch: base is {base}, overlay is {overlay}")]
    DimensionMismatch {
        /// Size of the base (bottom) layer.
        base: Canvas,
        /// Size of the overlay (top) layer.
        overlay: Canvas,
    },

    /// A mode identifier outside the 25-entry catalog.
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),

    /// Malformed buffers or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendlabError {
    /// Build a [`BlendlabError::Dimension`] value.
    pub fn dimension(msg: impl Into<String>) -> Self {
        Self::Dimension(msg.into())
    }

    /// Build a [`BlendlabError::DimensionMismatch`] value.
    pub fn dimension_mismatch(base: Canvas, overlay: Canvas) -> Self {
        Self::DimensionMismatch { base, overlay }
    }

    /// Build a [`BlendlabError::UnknownMode`] value.
    pub fn unknown_mode(id: impl Into<String>) -> Self {
        Self::UnknownMode(id.into())
    }

    /// Build a [`BlendlabError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
