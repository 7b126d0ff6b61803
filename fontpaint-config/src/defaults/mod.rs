//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `PainterConfig`
//! fields.

mod font;
mod layout;

// ── Font loading ───────────────────────────────────────────────────────────
pub use font::{default_font, kerning_strategy, parser_extensions};

// ── Layout & text rendering ────────────────────────────────────────────────
pub use layout::{font_size, letter_spacing, line_height};

pub fn bool_false() -> bool {
    false
}
