//! Errors surfaced by [`FontPainter`](crate::FontPainter).

use fontpaint_config::ConfigError;
use fontpaint_fonts::FontError;
use fontpaint_render::{LayoutError, RenderError};
use thiserror::Error;

/// Errors that abort a paint or font load.
#[derive(Debug, Error)]
pub enum PaintError {
    /// `paint` was called before a render backend was attached.
    #[error("No render backend attached; call set_backend before painting")]
    NoBackend,

    /// `paint` was called before any font finished loading.
    #[error("No font loaded yet; await load_font before painting")]
    FontNotReady,

    /// The painter was used after `dispose`.
    #[error("Font painter has been disposed")]
    Disposed,

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid painter configuration: {0}")]
    Config(#[from] ConfigError),
}
