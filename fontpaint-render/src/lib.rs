//! Layout engine and render backends for fontpaint.
//!
//! This crate provides:
//! - [`CopyProps`]: a string resolved against a font (glyphs, kerning)
//! - [`LayoutEngine`]: greedy line breaking, kerning-aware positioning,
//!   exact-fit trimming and alignment
//! - [`RenderBackend`]: the capability a render target implements, with a
//!   recording backend for canvas-like targets and an SVG document backend
//!
//! # Architecture
//!
//! Layout depends only on font metrics and glyph bounds. Backends consume the
//! finished [`Layout`] and never feed back into it, except for the per-glyph
//! padding they request before the pass starts.

pub mod backend;
pub mod copy;
pub mod error;
pub mod layout;

// Re-export main types for convenience
pub use backend::{
    Frame, GlyphResource, LayerStyle, LayerStyleFn, RecordedGlyph, RecordingBackend,
    RenderBackend, RenderLayer, SvgBackend, layer_padding,
};
pub use copy::CopyProps;
pub use error::{LayoutError, RenderError};
pub use layout::{GlyphPositioning, Layout, LayoutEngine, LineBreak, LinePositioning};
