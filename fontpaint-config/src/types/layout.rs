//! Layout configuration types: alignment, wrapping, bounds, padding and the
//! per-pass render options.

use serde::{Deserialize, Serialize};

// ============================================================================
// Alignment / Wrapping
// ============================================================================

/// Horizontal alignment of lines within a fixed bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Lines start at the left edge (default)
    #[default]
    Left,
    /// Lines are centered within the bound
    Center,
    /// Lines end at the right edge of the bound
    Right,
}

/// Line wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Never wrap; everything is laid out on a single line
    None,
    /// Break at spaces and after hyphens when a line overflows the bound (default)
    #[default]
    BreakWhitespace,
}

// ============================================================================
// Bounds
// ============================================================================

/// Width constraint for a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBounds {
    /// A fixed width in pixels
    Fixed { width: f64 },
    /// Width derived from the rendering target; wrapping against it is not supported
    Intrinsic,
}

impl RenderBounds {
    pub fn fixed(width: f64) -> Self {
        RenderBounds::Fixed { width }
    }

    /// The width in pixels, if this is a fixed bound.
    pub fn fixed_width(&self) -> Option<f64> {
        match self {
            RenderBounds::Fixed { width } => Some(*width),
            RenderBounds::Intrinsic => None,
        }
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Per-glyph padding in font units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Per-side maximum of two paddings.
    pub fn max(self, other: Padding) -> Self {
        Self {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

// ============================================================================
// Render options
// ============================================================================

/// Options for a single layout pass. Immutable for the duration of the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Width constraint; `None` lays out without a bound
    #[serde(default)]
    pub bounds: Option<RenderBounds>,

    #[serde(default)]
    pub wrap_mode: WrapMode,

    #[serde(default)]
    pub align: TextAlign,

    /// Extra space between glyphs in pixels
    #[serde(default = "crate::defaults::letter_spacing")]
    pub letter_spacing: f64,

    /// Font size in pixels
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f64,

    /// Line height as a multiplier of the em size
    #[serde(default = "crate::defaults::line_height")]
    pub line_height: f64,

    /// Trim line boxes to the glyphs' ink bounds
    #[serde(default = "crate::defaults::bool_false")]
    pub exact_fit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bounds: None,
            wrap_mode: WrapMode::default(),
            align: TextAlign::default(),
            letter_spacing: crate::defaults::letter_spacing(),
            font_size: crate::defaults::font_size(),
            line_height: crate::defaults::line_height(),
            exact_fit: crate::defaults::bool_false(),
        }
    }
}

impl RenderOptions {
    /// True when line breaking applies: a fixed bound with whitespace wrapping.
    pub fn wraps(&self) -> bool {
        self.wrap_mode == WrapMode::BreakWhitespace
            && matches!(self.bounds, Some(RenderBounds::Fixed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_fixed_width() {
        assert_eq!(RenderBounds::fixed(100.0).fixed_width(), Some(100.0));
        assert_eq!(RenderBounds::Intrinsic.fixed_width(), None);
    }

    #[test]
    fn test_padding_max() {
        let padding = Padding::new(1.0, 5.0, 0.0, 2.0).max(Padding::new(3.0, 1.0, 0.0, 4.0));
        assert_eq!(padding, Padding::new(3.0, 5.0, 0.0, 4.0));
        assert_eq!(padding.horizontal(), 9.0);
        assert_eq!(padding.vertical(), 3.0);
    }

    #[test]
    fn test_wraps() {
        let mut options = RenderOptions::default();
        assert!(!options.wraps());
        options.bounds = Some(RenderBounds::fixed(300.0));
        assert!(options.wraps());
        options.wrap_mode = WrapMode::None;
        assert!(!options.wraps());
        options.wrap_mode = WrapMode::BreakWhitespace;
        options.bounds = Some(RenderBounds::Intrinsic);
        assert!(!options.wraps());
    }
}
