//! Outline path instructions for fontpaint.
//!
//! Glyph outlines in SVG fonts are stored as compact path data strings
//! (`M124 570v22q0,392,152,665.5`). This crate provides:
//!
//! - Parsing path data into typed [`PathInstruction`]s (with optional Y inversion)
//! - Serializing instructions back into path data
//! - Endpoint-based bounding rectangles
//! - Conversion into absolute, backend-agnostic [`DrawCommand`]s
//!
//! Elliptical arcs (`A`) are not supported and are rejected by the parser.

pub mod bounds;
pub mod draw;
pub mod error;
pub mod instruction;
pub mod parse;

pub use bounds::{BoundingRect, bounding_rect};
pub use draw::{DrawCommand, to_draw_commands};
pub use error::PathError;
pub use instruction::{Command, CommandKind, PathInstruction, invert_y, serialize};
pub use parse::parse;
