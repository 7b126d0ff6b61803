//! Line layout.
//!
//! A layout pass runs in four steps over a resolved [`CopyProps`]:
//!
//! 1. Advance resolution: each glyph's own advance or the font default, plus
//!    letter spacing converted to font units
//! 2. Line breaking ([`line_break`]), only with a fixed bound and whitespace
//!    wrapping
//! 3. Positioning ([`positioning`]): baselines, glyph x offsets, line widths
//! 4. Optional exact-fit trimming ([`exact_fit`]) followed by alignment
//!
//! All coordinates are in font units; divide by [`Layout::units_per_px`] to
//! get pixels.

pub mod exact_fit;
pub mod line_break;
pub mod positioning;

use fontpaint_config::{Padding, RenderBounds, RenderOptions, TextAlign, WrapMode};
use fontpaint_fonts::FontMetrics;

use crate::copy::CopyProps;
use crate::error::LayoutError;

/// A point where a new line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    /// Index of the first character after the break
    pub character_index: usize,
    /// Whether the character at `character_index` is dropped (a breaking space)
    pub remove_character: bool,
    /// Character inserted at the end of the broken line, if any
    pub inserted_character: Option<char>,
}

/// Placement of one glyph relative to its line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPositioning {
    pub character_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Geometry of one line. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePositioning {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub glyphs: Vec<GlyphPositioning>,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub lines: Vec<LinePositioning>,
    pub breaks: Vec<LineBreak>,
    /// Font units per pixel at the requested font size
    pub units_per_px: f64,
    /// Line height in font units, excluding padding
    pub line_height: f64,
    pub padding: Padding,
    /// Characters the font could not provide a glyph for
    pub missing: Vec<char>,
}

impl Layout {
    /// Width of the widest line extent, in font units.
    pub fn width(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.x + line.width)
            .fold(0.0, f64::max)
    }

    /// Total height of all line boxes, in font units.
    pub fn height(&self) -> f64 {
        self.lines.iter().map(|line| line.height).sum()
    }

    /// Number of placed glyphs.
    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(|line| line.glyphs.len()).sum()
    }
}

/// Computes layouts for one font and one set of render options.
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    metrics: FontMetrics,
    options: &'a RenderOptions,
    padding: Padding,
    units_per_px: f64,
    line_height: f64,
}

impl<'a> LayoutEngine<'a> {
    /// Validate `options` against the font and prepare a layout pass.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidFontSize`] for a non-positive font size
    /// - [`LayoutError::InvalidLineHeight`] for a non-positive line height
    /// - [`LayoutError::UnsupportedBounds`] when wrapping against intrinsic bounds
    pub fn new(metrics: FontMetrics, options: &'a RenderOptions) -> Result<Self, LayoutError> {
        if !(options.font_size.is_finite() && options.font_size > 0.0) {
            return Err(LayoutError::InvalidFontSize(options.font_size));
        }
        if !(options.line_height.is_finite() && options.line_height > 0.0) {
            return Err(LayoutError::InvalidLineHeight(options.line_height));
        }
        if options.wrap_mode == WrapMode::BreakWhitespace
            && options.bounds == Some(RenderBounds::Intrinsic)
        {
            return Err(LayoutError::UnsupportedBounds);
        }

        Ok(Self {
            metrics,
            options,
            padding: Padding::default(),
            units_per_px: metrics.units_per_em / options.font_size,
            line_height: metrics.units_per_em * options.line_height,
        })
    }

    /// Use per-glyph padding supplied by the render backend.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn units_per_px(&self) -> f64 {
        self.units_per_px
    }

    /// Fixed bound width in font units, if any.
    fn bound_width(&self) -> Option<f64> {
        self.options
            .bounds
            .and_then(|bounds| bounds.fixed_width())
            .map(|width| width * self.units_per_px)
    }

    /// Advance of every character in font units, letter spacing included.
    pub fn advances(&self, copy: &CopyProps) -> Vec<f64> {
        let spacing = self.options.letter_spacing * self.units_per_px;
        copy.glyphs
            .iter()
            .map(|glyph| {
                glyph
                    .as_ref()
                    .and_then(|glyph| glyph.advance())
                    .unwrap_or(self.metrics.default_advance)
                    + spacing
            })
            .collect()
    }

    /// Lay out `copy`.
    pub fn layout(&self, copy: &CopyProps) -> Layout {
        let advances = self.advances(copy);

        let breaks = match self.bound_width() {
            Some(width) if self.options.wraps() => line_break::line_breaks(
                &copy.characters,
                &advances,
                &copy.kernings,
                width,
                &self.padding,
            ),
            _ => Vec::new(),
        };

        let mut lines = positioning::position_lines(
            copy.len(),
            &advances,
            &copy.kernings,
            &breaks,
            self.metrics.ascent,
            self.line_height,
            &self.padding,
        );

        if self.options.exact_fit {
            exact_fit::trim_to_ink(
                &mut lines,
                copy,
                self.metrics.ascent,
                self.line_height,
                &self.padding,
            );
        }

        if let Some(width) = self.bound_width() {
            align_lines(&mut lines, self.options.align, width);
        }

        log::debug!(
            "Laid out {} characters on {} lines ({} breaks)",
            copy.len(),
            lines.len(),
            breaks.len()
        );

        Layout {
            lines,
            breaks,
            units_per_px: self.units_per_px,
            line_height: self.line_height,
            padding: self.padding,
            missing: copy.missing.clone(),
        }
    }
}

/// Shift each line horizontally within a bound `width` font units wide.
pub fn align_lines(lines: &mut [LinePositioning], align: TextAlign, width: f64) {
    for line in lines {
        match align {
            TextAlign::Left => {}
            TextAlign::Center => line.x += (width - line.width) / 2.0,
            TextAlign::Right => line.x += width - line.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: f64, width: f64) -> LinePositioning {
        LinePositioning {
            x,
            y: 0.0,
            width,
            height: 1000.0,
            glyphs: Vec::new(),
        }
    }

    #[test]
    fn test_align_lines() {
        let mut lines = vec![line(0.0, 400.0), line(-20.0, 1000.0)];
        align_lines(&mut lines, TextAlign::Center, 1000.0);
        assert_eq!(lines[0].x, 300.0);
        assert_eq!(lines[1].x, -20.0);

        let mut lines = vec![line(0.0, 400.0)];
        align_lines(&mut lines, TextAlign::Right, 1000.0);
        assert_eq!(lines[0].x, 600.0);

        let mut lines = vec![line(5.0, 400.0)];
        align_lines(&mut lines, TextAlign::Left, 1000.0);
        assert_eq!(lines[0].x, 5.0);
    }

    #[test]
    fn test_engine_rejects_invalid_options() {
        let metrics = FontMetrics::default();
        let options = RenderOptions {
            font_size: 0.0,
            ..RenderOptions::default()
        };
        assert_eq!(
            LayoutEngine::new(metrics, &options).unwrap_err(),
            LayoutError::InvalidFontSize(0.0)
        );

        let options = RenderOptions {
            bounds: Some(RenderBounds::Intrinsic),
            ..RenderOptions::default()
        };
        assert_eq!(
            LayoutEngine::new(metrics, &options).unwrap_err(),
            LayoutError::UnsupportedBounds
        );

        let options = RenderOptions {
            bounds: Some(RenderBounds::Intrinsic),
            wrap_mode: WrapMode::None,
            ..RenderOptions::default()
        };
        assert!(LayoutEngine::new(metrics, &options).is_ok());
    }

    #[test]
    fn test_units_per_px() {
        let options = RenderOptions {
            font_size: 50.0,
            ..RenderOptions::default()
        };
        let engine = LayoutEngine::new(FontMetrics::default(), &options).unwrap();
        assert_eq!(engine.units_per_px(), 20.0);
    }
}
