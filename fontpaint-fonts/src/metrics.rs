//! Global font metrics.

/// Font-wide metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Number of units that go into an em in this font's coordinate system
    pub units_per_em: f64,
    /// The maximum unaccented height of the font
    pub ascent: f64,
    /// The maximum unaccented depth of the font
    pub descent: f64,
    /// Default number of units the cursor advances after a glyph
    pub default_advance: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            units_per_em: 1000.0,
            ascent: 0.0,
            descent: 0.0,
            default_advance: 1000.0,
        }
    }
}
