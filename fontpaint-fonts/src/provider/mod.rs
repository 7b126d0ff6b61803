//! Font metrics providers.
//!
//! A provider answers the questions layout asks of a font: global metrics,
//! the glyph for a character and the kerning between two characters. Two SVG
//! font strategies are available:
//!
//! - [`RangeKerningFont`]: kerning from a sorted range table, supports unicode
//!   ranges and glyph names
//! - [`PairKerningFont`]: kerning attached to each glyph for single-character
//!   pairs only

mod cache;
mod direct_pair;
mod range_table;

use std::sync::Arc;

pub use cache::GlyphCache;
pub use direct_pair::PairKerningFont;
pub use range_table::RangeKerningFont;

use fontpaint_path::parse;

use crate::glyph::Glyph;
use crate::metrics::FontMetrics;
use crate::svg_font::{GlyphElement, SvgFontDocument};

/// Source of font metrics, glyphs and kerning for layout.
pub trait FontMetricsProvider: Send + Sync + std::fmt::Debug {
    fn metrics(&self) -> FontMetrics;

    /// The glyph for `character`, falling back to the font's missing glyph.
    /// `None` when neither exists.
    fn glyph(&self, character: char) -> Option<Arc<Glyph>>;

    /// Kerning between code points `a` and `b` in font units (0 if none).
    fn kerning(&self, a: u32, b: u32) -> f64;

    /// Characters requested so far that resolved to no glyph.
    fn missing_glyphs(&self) -> Vec<char>;
}

/// Build a glyph for `character` from the document, applying the missing
/// glyph policy. Kerning is left empty.
pub(crate) fn build_glyph(document: &SvgFontDocument, character: char) -> Option<Glyph> {
    if let Some(element) = document.glyph_element(character) {
        match glyph_from_element(element) {
            Ok(glyph) => return Some(glyph),
            Err(e) => log::warn!(
                "Outline of glyph '{}' failed to parse ({}), using missing glyph",
                character,
                e
            ),
        }
    }

    let Some(missing) = &document.missing_glyph else {
        log::warn!("Glyph not found for '{}' (U+{:04X})", character, character as u32);
        return None;
    };

    match glyph_from_element(missing) {
        Ok(glyph) => Some(glyph),
        Err(e) => {
            log::warn!("Missing glyph outline failed to parse: {}", e);
            None
        }
    }
}

fn glyph_from_element(element: &GlyphElement) -> Result<Glyph, fontpaint_path::PathError> {
    let instructions = parse(&element.path_data, true)?;
    Ok(Glyph::new(instructions, element.advance))
}
