//! Copy text resolved against a font.

use std::sync::Arc;

use fontpaint_fonts::{FontMetricsProvider, Glyph};

/// A string prepared for layout: its characters, their code points, their
/// glyphs and the kerning between each character and the next.
#[derive(Debug, Clone, Default)]
pub struct CopyProps {
    pub characters: Vec<char>,
    pub char_codes: Vec<u32>,
    /// Glyph per character; `None` when the font has neither the glyph nor a missing glyph
    pub glyphs: Vec<Option<Arc<Glyph>>>,
    /// `kernings[i]` is the kerning between character `i` and `i + 1`; the last entry is 0
    pub kernings: Vec<f64>,
    /// Distinct characters without a glyph, in order of first appearance
    pub missing: Vec<char>,
}

impl CopyProps {
    /// Resolve every character of `copy` through `font`.
    pub fn resolve(copy: &str, font: &dyn FontMetricsProvider) -> Self {
        let characters: Vec<char> = copy.chars().collect();
        let char_codes: Vec<u32> = characters.iter().map(|&c| c as u32).collect();

        let glyphs: Vec<Option<Arc<Glyph>>> = characters.iter().map(|&c| font.glyph(c)).collect();

        let kernings: Vec<f64> = char_codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                char_codes
                    .get(i + 1)
                    .map_or(0.0, |&next| font.kerning(code, next))
            })
            .collect();

        let mut missing = Vec::new();
        for (character, glyph) in characters.iter().zip(&glyphs) {
            if glyph.is_none() && !missing.contains(character) {
                missing.push(*character);
            }
        }
        if !missing.is_empty() {
            log::warn!("No glyph for characters {:?}; using default advance", missing);
        }

        Self {
            characters,
            char_codes,
            glyphs,
            kernings,
            missing,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn glyph(&self, index: usize) -> Option<&Arc<Glyph>> {
        self.glyphs.get(index).and_then(Option::as_ref)
    }
}
