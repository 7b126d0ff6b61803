//! Configuration types shared across fontpaint crates.

mod font;
mod layout;

pub use font::KerningStrategy;
pub use layout::{Padding, RenderBounds, RenderOptions, TextAlign, WrapMode};
