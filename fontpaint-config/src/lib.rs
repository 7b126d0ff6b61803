//! Configuration system for fontpaint.
//!
//! This crate provides configuration loading, saving, and default values
//! for the font painter, plus the option types shared by the font, layout
//! and render crates:
//!
//! - Render options (bounds, wrapping, alignment, spacing, exact fit)
//! - Per-glyph padding
//! - Kerning strategy selection

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::PainterConfig;
pub use error::ConfigError;

// Re-export config types
pub use types::{KerningStrategy, Padding, RenderBounds, RenderOptions, TextAlign, WrapMode};
