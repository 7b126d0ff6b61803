//! A single parsed glyph and its lazily derived data.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use fontpaint_path::{
    BoundingRect, DrawCommand, PathInstruction, bounding_rect, serialize, to_draw_commands,
};

/// A glyph outline plus its metrics.
///
/// The bounding rectangle, draw commands and serialized path data are
/// computed on first access and cached for the lifetime of the glyph.
/// Glyphs are never mutated after construction; a font reload creates new
/// ones.
#[derive(Debug, Default)]
pub struct Glyph {
    instructions: Vec<PathInstruction>,
    /// Advance override from the glyph element; `None` means the font default applies
    advance: Option<f64>,
    /// Kerning per succeeding character code (direct-pair fonts only)
    kerning: HashMap<u32, f64>,
    bounds: OnceLock<Option<BoundingRect>>,
    commands: OnceLock<Arc<[DrawCommand]>>,
    path_data: OnceLock<String>,
}

impl Glyph {
    /// Create a glyph from already-parsed (and Y-inverted) instructions.
    pub fn new(instructions: Vec<PathInstruction>, advance: Option<f64>) -> Self {
        Self {
            instructions,
            advance,
            ..Self::default()
        }
    }

    /// Attach a kerning map keyed by the code of the succeeding character.
    pub fn with_kerning(mut self, kerning: HashMap<u32, f64>) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn instructions(&self) -> &[PathInstruction] {
        &self.instructions
    }

    /// The glyph's own advance width, if it overrides the font default.
    pub fn advance(&self) -> Option<f64> {
        self.advance
    }

    /// Kerning between this glyph and a following character, if declared.
    pub fn kerning_to(&self, next: u32) -> Option<f64> {
        self.kerning.get(&next).copied()
    }

    /// True when the glyph has no outline (e.g. a space).
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Endpoint bounding rectangle, or `None` for glyphs without geometry.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        *self.bounds.get_or_init(|| bounding_rect(&self.instructions))
    }

    /// Absolute draw commands for this outline.
    pub fn draw_commands(&self) -> Arc<[DrawCommand]> {
        Arc::clone(
            self.commands
                .get_or_init(|| to_draw_commands(&self.instructions).into()),
        )
    }

    /// Outline as path data suitable for an SVG `d` attribute.
    pub fn path_data(&self) -> &str {
        self.path_data.get_or_init(|| serialize(&self.instructions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontpaint_path::parse;

    #[test]
    fn test_derived_data_is_memoized() {
        let glyph = Glyph::new(parse("M0 0L100 0L100 700Z", true).unwrap(), Some(600.0));
        let first = glyph.draw_commands();
        let second = glyph.draw_commands();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(glyph.bounding_rect().unwrap().min_y, -700.0);
        assert_eq!(glyph.path_data(), "M0 0L100 0L100 -700Z");
    }

    #[test]
    fn test_empty_glyph() {
        let glyph = Glyph::new(Vec::new(), None);
        assert!(glyph.is_empty());
        assert!(glyph.bounding_rect().is_none());
        assert!(glyph.draw_commands().is_empty());
        assert_eq!(glyph.advance(), None);
    }

    #[test]
    fn test_kerning_map() {
        let glyph = Glyph::new(Vec::new(), None).with_kerning(HashMap::from([(86, 40.0)]));
        assert_eq!(glyph.kerning_to(86), Some(40.0));
        assert_eq!(glyph.kerning_to(87), None);
    }
}
