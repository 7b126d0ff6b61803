//! Typed error types for fontpaint-render.
//!
//! Layout errors are configuration problems detected before any glyph is
//! placed; render errors come from a backend while it consumes a layout.

use thiserror::Error;

/// Errors that abort a layout pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Wrapping was requested against a bound whose width is not fixed.
    #[error("Wrapping against intrinsic bounds is not supported; use a fixed width bound")]
    UnsupportedBounds,

    /// The font size is zero, negative or not a number.
    #[error("Invalid font size {0}: must be a positive number")]
    InvalidFontSize(f64),

    /// The line height multiplier is zero, negative or not a number.
    #[error("Invalid line height {0}: must be a positive number")]
    InvalidLineHeight(f64),
}

/// Errors a render backend can report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend was used after `dispose`.
    #[error("Render backend has been disposed")]
    Disposed,

    /// Writing the output document failed.
    #[error("Failed to write render output: {0}")]
    Format(#[from] std::fmt::Error),

    /// The layout refers to a character index outside the copy.
    #[error("Layout references character index {index} but copy has {len} characters")]
    IndexOutOfRange {
        /// Index referenced by the layout.
        index: usize,
        /// Number of characters in the copy.
        len: usize,
    },
}
