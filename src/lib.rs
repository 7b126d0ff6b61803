//! fontpaint: text layout against SVG font outlines.
//!
//! The workspace is split by concern:
//!
//! - `fontpaint-path`: SVG path instruction parsing and draw commands
//! - `fontpaint-fonts`: font documents, glyphs, kerning and async loading
//! - `fontpaint-render`: line breaking, positioning and render backends
//! - `fontpaint-config`: render options and the YAML painter configuration
//!
//! This crate adds the [`FontPainter`] facade that wires them together.
//!
//! ```no_run
//! use fontpaint::{FileFontSource, FontPainter, PainterConfig, SvgBackend};
//!
//! # async fn example() -> Result<(), fontpaint::PaintError> {
//! let mut painter = FontPainter::new(FileFontSource::new("fonts"), PainterConfig::default())?;
//! painter.load_font("serif.svg").await?;
//! painter.set_backend(Box::new(SvgBackend::new()));
//! let layout = painter.paint("Hello")?;
//! # let _ = layout;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod debug;
pub mod error;
pub mod painter;

pub use error::PaintError;
pub use painter::FontPainter;

// Re-export the workspace crates' main types for convenience
pub use fontpaint_config::{
    ConfigError, KerningStrategy, Padding, PainterConfig, RenderBounds, RenderOptions, TextAlign,
    WrapMode,
};
pub use fontpaint_fonts::{
    FileFontSource, FontError, FontLoader, FontMetrics, FontMetricsProvider, FontParser,
    FontSource, Glyph, MemoryFontSource, SvgFontParser,
};
pub use fontpaint_path::{DrawCommand, PathError, PathInstruction};
pub use fontpaint_render::{
    CopyProps, Layout, LayoutEngine, LayoutError, RecordingBackend, RenderBackend, RenderError,
    RenderLayer, SvgBackend,
};
