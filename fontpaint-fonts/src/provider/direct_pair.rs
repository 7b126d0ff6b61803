use std::collections::HashMap;
use std::sync::Arc;

use super::{FontMetricsProvider, GlyphCache, build_glyph};
use crate::glyph::Glyph;
use crate::metrics::FontMetrics;
use crate::svg_font::SvgFontDocument;

/// SVG font with kerning attached to each glyph.
///
/// When a glyph is built, every `<hkern>` whose `u1` list contains that exact
/// character contributes its single-character `u2` entries to the glyph's
/// kerning map. Ranges and glyph names are not supported.
#[derive(Debug)]
pub struct PairKerningFont {
    document: SvgFontDocument,
    cache: GlyphCache,
}

impl PairKerningFont {
    pub fn new(document: SvgFontDocument) -> Self {
        Self {
            document,
            cache: GlyphCache::new(),
        }
    }

    fn glyph_kerning(&self, character: char) -> HashMap<u32, f64> {
        let mut buffer = [0u8; 4];
        let key: &str = character.encode_utf8(&mut buffer);
        let mut kerning = HashMap::new();

        for declaration in &self.document.kerning {
            if declaration.k == 0.0 || !declaration.u1.iter().any(|u1| u1 == key) {
                continue;
            }
            for u2 in &declaration.u2 {
                let mut chars = u2.chars();
                if let (Some(next), None) = (chars.next(), chars.next()) {
                    kerning.insert(next as u32, declaration.k);
                }
            }
        }
        kerning
    }
}

impl FontMetricsProvider for PairKerningFont {
    fn metrics(&self) -> FontMetrics {
        self.document.metrics
    }

    fn glyph(&self, character: char) -> Option<Arc<Glyph>> {
        self.cache.get_or_insert_with(character, || {
            build_glyph(&self.document, character)
                .map(|glyph| glyph.with_kerning(self.glyph_kerning(character)))
        })
    }

    fn kerning(&self, a: u32, b: u32) -> f64 {
        char::from_u32(a)
            .and_then(|character| self.glyph(character))
            .and_then(|glyph| glyph.kerning_to(b))
            .unwrap_or(0.0)
    }

    fn missing_glyphs(&self) -> Vec<char> {
        self.cache.missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = r#"<svg><font horiz-adv-x="500">
        <glyph unicode="A" d="M0 0L600 0"/>
        <glyph unicode="V" d="M0 0L600 0"/>
        <glyph unicode="W" d="M0 0L600 0"/>
        <hkern u1="A" u2="V,W" k="80"/>
        <hkern u1="V" u2="U+0041" k="40"/>
        <hkern u1="W" u2="A" k="0"/>
    </font></svg>"#;

    #[test]
    fn test_pair_kerning() {
        let font = PairKerningFont::new(SvgFontDocument::parse(FONT).unwrap());
        assert_eq!(font.kerning('A' as u32, 'V' as u32), 80.0);
        assert_eq!(font.kerning('A' as u32, 'W' as u32), 80.0);
        // ranges are not understood by this strategy
        assert_eq!(font.kerning('V' as u32, 'A' as u32), 0.0);
        assert_eq!(font.kerning('W' as u32, 'A' as u32), 0.0);
    }

    #[test]
    fn test_kerning_lives_on_the_glyph() {
        let font = PairKerningFont::new(SvgFontDocument::parse(FONT).unwrap());
        let glyph = font.glyph('A').unwrap();
        assert_eq!(glyph.kerning_to('V' as u32), Some(80.0));
        assert!(font.kerning('x' as u32, 'A' as u32) == 0.0);
        assert_eq!(font.missing_glyphs(), vec!['x']);
    }
}
