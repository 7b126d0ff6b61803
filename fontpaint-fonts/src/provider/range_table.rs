use std::sync::Arc;

use super::{FontMetricsProvider, GlyphCache, build_glyph};
use crate::glyph::Glyph;
use crate::kerning::KerningTable;
use crate::metrics::FontMetrics;
use crate::svg_font::SvgFontDocument;

/// SVG font whose kerning is resolved through a [`KerningTable`].
///
/// All `<hkern>` declarations are expanded once at construction; `u1`/`u2`
/// may use unicode ranges, wildcards and glyph names.
#[derive(Debug)]
pub struct RangeKerningFont {
    document: SvgFontDocument,
    kerning: KerningTable,
    cache: GlyphCache,
}

impl RangeKerningFont {
    pub fn new(document: SvgFontDocument) -> Self {
        let kerning = KerningTable::from_declarations(&document.kerning, &document.glyph_names);
        Self {
            document,
            kerning,
            cache: GlyphCache::new(),
        }
    }

    pub fn kerning_table(&self) -> &KerningTable {
        &self.kerning
    }
}

impl FontMetricsProvider for RangeKerningFont {
    fn metrics(&self) -> FontMetrics {
        self.document.metrics
    }

    fn glyph(&self, character: char) -> Option<Arc<Glyph>> {
        self.cache
            .get_or_insert_with(character, || build_glyph(&self.document, character))
    }

    fn kerning(&self, a: u32, b: u32) -> f64 {
        self.kerning.lookup(a, b)
    }

    fn missing_glyphs(&self) -> Vec<char> {
        self.cache.missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = r#"<svg><font horiz-adv-x="500">
        <glyph unicode="A" glyph-name="A" d="M0 0L600 0"/>
        <glyph unicode="V" glyph-name="V" d="M0 0L600 0"/>
        <hkern g1="A" u2="V" k="80"/>
        <hkern u1="U+0041-005A" u2="U+006?" k="-10"/>
    </font></svg>"#;

    #[test]
    fn test_range_kerning() {
        let font = RangeKerningFont::new(SvgFontDocument::parse(FONT).unwrap());
        assert_eq!(font.kerning('A' as u32, 'V' as u32), 80.0);
        assert_eq!(font.kerning('B' as u32, 'a' as u32), -10.0);
        assert_eq!(font.kerning('V' as u32, 'A' as u32), 0.0);
    }

    #[test]
    fn test_glyphs_are_cached_and_missing_recorded() {
        let font = RangeKerningFont::new(SvgFontDocument::parse(FONT).unwrap());
        let first = font.glyph('A').unwrap();
        let second = font.glyph('A').unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(font.glyph('?').is_none());
        assert_eq!(font.missing_glyphs(), vec!['?']);
        assert_eq!(font.metrics().default_advance, 500.0);
    }
}
