//! Font loading, glyph outlines, metrics and kerning for fontpaint.
//!
//! This crate provides:
//! - An SVG font document reader
//! - Glyphs with lazily derived bounds, draw commands and path data
//! - Kerning by unicode range table or by direct character pairs
//! - Asynchronous, deduplicated font loading from pluggable sources
//!
//! # Architecture
//!
//! A [`FontLoader`] fetches raw data through a [`FontSource`] and turns it
//! into a [`FontMetricsProvider`] with the [`FontParser`] registered for the
//! identifier's suffix. Providers cache every glyph they build, so each glyph
//! is parsed once per loaded font.

pub mod error;
pub mod glyph;
pub mod kerning;
pub mod loader;
pub mod metrics;
pub mod provider;
pub mod svg_font;

// Re-export main types for convenience
pub use error::FontError;
pub use glyph::Glyph;
pub use kerning::{KerningEntry, KerningTable, unicode_ranges};
pub use loader::{FileFontSource, FontLoader, FontParser, FontSource, MemoryFontSource, SvgFontParser};
pub use metrics::FontMetrics;
pub use provider::{FontMetricsProvider, GlyphCache, PairKerningFont, RangeKerningFont};
pub use svg_font::SvgFontDocument;
