//! Per-font glyph cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::glyph::Glyph;

/// Character → built glyph, including negative results.
///
/// A `None` entry records a character the font could not provide (no glyph
/// and no missing-glyph fallback); those entries make up
/// [`GlyphCache::missing`].
#[derive(Debug, Default)]
pub struct GlyphCache {
    glyphs: RwLock<HashMap<char, Option<Arc<Glyph>>>>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached glyph for `character`, building it with `build` on
    /// first request. `build` runs at most once per character even when
    /// called concurrently.
    pub fn get_or_insert_with<F>(&self, character: char, build: F) -> Option<Arc<Glyph>>
    where
        F: FnOnce() -> Option<Glyph>,
    {
        if let Some(entry) = self.glyphs.read().get(&character) {
            return entry.clone();
        }

        let mut glyphs = self.glyphs.write();
        glyphs
            .entry(character)
            .or_insert_with(|| build().map(Arc::new))
            .clone()
    }

    /// Characters that resolved to no glyph, sorted.
    pub fn missing(&self) -> Vec<char> {
        let mut missing: Vec<char> = self
            .glyphs
            .read()
            .iter()
            .filter(|(_, glyph)| glyph.is_none())
            .map(|(&character, _)| character)
            .collect();
        missing.sort_unstable();
        missing
    }

    pub fn len(&self) -> usize {
        self.glyphs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.read().is_empty()
    }
}
