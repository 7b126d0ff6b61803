//! Typed error types for fontpaint-fonts.

use thiserror::Error;

/// Errors that can occur while acquiring or parsing a font.
///
/// Per-glyph outline problems are not reported here: a glyph whose outline
/// fails to parse falls back to the font's missing glyph and is logged.
#[derive(Debug, Error)]
pub enum FontError {
    /// No parser was given and none is registered for the identifier's suffix.
    #[error("No default parser defined for font '{0}'. Please provide a parser")]
    NoParser(String),

    /// The raw font data could not be read from its source.
    #[error("Font read failed for '{path}': {source}")]
    Io {
        /// Identifier or path of the font that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source has no font for the given identifier.
    #[error("Font source has no entry for '{0}'")]
    NotFound(String),

    /// The SVG font markup is not well-formed XML.
    #[error("SVG font markup error: {0}")]
    Xml(#[from] xml::reader::Error),

    /// The markup is XML but does not describe an SVG font.
    #[error("Not an SVG font: {0}")]
    InvalidFont(String),
}
