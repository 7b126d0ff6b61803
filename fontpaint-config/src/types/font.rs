//! Font loading configuration types.

use serde::{Deserialize, Serialize};

/// How kerning pairs are resolved for SVG fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KerningStrategy {
    /// Sorted unicode range table; supports ranges, wildcards and glyph names (default)
    #[default]
    RangeTable,
    /// Per-glyph map of single-character pairs
    DirectPair,
}
