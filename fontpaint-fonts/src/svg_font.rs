//! Reader for SVG font markup.
//!
//! Extracts the parts of an SVG font document the providers need:
//! `<font>`, `<font-face>`, `<missing-glyph>`, `<glyph>` and `<hkern>`.
//! Outline data is kept as raw strings here and only parsed when a glyph is
//! first requested.

use std::collections::HashMap;

use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

use crate::error::FontError;
use crate::metrics::FontMetrics;

/// Raw data of a `<glyph>` or `<missing-glyph>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphElement {
    /// Outline path data (`d` attribute), empty for glyphs without outline
    pub path_data: String,
    /// `horiz-adv-x` override
    pub advance: Option<f64>,
}

/// A single `<hkern>` declaration, with its lists split on commas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KerningDeclaration {
    pub u1: Vec<String>,
    pub g1: Vec<String>,
    pub u2: Vec<String>,
    pub g2: Vec<String>,
    pub k: f64,
}

/// The parsed content of an SVG font document.
#[derive(Debug, Clone, Default)]
pub struct SvgFontDocument {
    pub metrics: FontMetrics,
    /// Glyph elements keyed by their `unicode` attribute (first declaration wins)
    pub glyphs: HashMap<String, GlyphElement>,
    /// `glyph-name` → `unicode` of the named glyph
    pub glyph_names: HashMap<String, String>,
    pub missing_glyph: Option<GlyphElement>,
    pub kerning: Vec<KerningDeclaration>,
}

impl SvgFontDocument {
    /// Parse SVG font markup.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Xml`] for malformed markup and
    /// [`FontError::InvalidFont`] if the document has no `<font>` element.
    pub fn parse(raw: &str) -> Result<Self, FontError> {
        let mut document = SvgFontDocument::default();
        let mut saw_font = false;
        let mut saw_font_face = false;

        for event in EventReader::new(raw.as_bytes()) {
            let XmlEvent::StartElement {
                name, attributes, ..
            } = event?
            else {
                continue;
            };

            match name.local_name.as_str() {
                "font" if !saw_font => {
                    saw_font = true;
                    document.metrics.default_advance =
                        int_attribute(&attributes, "horiz-adv-x").unwrap_or(1000.0);
                }
                "font-face" if !saw_font_face => {
                    saw_font_face = true;
                    document.metrics.units_per_em =
                        int_attribute(&attributes, "units-per-em").unwrap_or(1000.0);
                    document.metrics.ascent = int_attribute(&attributes, "ascent").unwrap_or(0.0);
                    document.metrics.descent =
                        int_attribute(&attributes, "descent").unwrap_or(0.0);
                }
                "missing-glyph" if document.missing_glyph.is_none() => {
                    document.missing_glyph = Some(glyph_element(&attributes));
                }
                "glyph" => {
                    let Some(unicode) = attribute(&attributes, "unicode") else {
                        continue;
                    };
                    if let Some(glyph_name) = attribute(&attributes, "glyph-name") {
                        for glyph_name in glyph_name.split(',') {
                            document
                                .glyph_names
                                .entry(glyph_name.trim().to_string())
                                .or_insert_with(|| unicode.to_string());
                        }
                    }
                    document
                        .glyphs
                        .entry(unicode.to_string())
                        .or_insert_with(|| glyph_element(&attributes));
                }
                "hkern" => {
                    let list = |key| {
                        attribute(&attributes, key)
                            .map(split_list)
                            .unwrap_or_default()
                    };
                    document.kerning.push(KerningDeclaration {
                        u1: list("u1"),
                        g1: list("g1"),
                        u2: list("u2"),
                        g2: list("g2"),
                        k: int_attribute(&attributes, "k").unwrap_or(0.0),
                    });
                }
                _ => {}
            }
        }

        if !saw_font {
            return Err(FontError::InvalidFont(
                "document has no <font> element".to_string(),
            ));
        }

        log::debug!(
            "Parsed SVG font: {} glyphs, {} kerning declarations, missing glyph: {}",
            document.glyphs.len(),
            document.kerning.len(),
            document.missing_glyph.is_some()
        );
        Ok(document)
    }

    /// The glyph element for a character, if the font declares one.
    pub fn glyph_element(&self, character: char) -> Option<&GlyphElement> {
        let mut buffer = [0u8; 4];
        self.glyphs.get(&*character.encode_utf8(&mut buffer))
    }
}

fn attribute<'a>(attributes: &'a [OwnedAttribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name.local_name == key)
        .map(|attr| attr.value.as_str())
        .filter(|value| !value.is_empty())
}

/// Parse the leading integer of an attribute value (`"-200.5"` → `-200`).
fn int_attribute(attributes: &[OwnedAttribute], key: &str) -> Option<f64> {
    let value = attribute(attributes, key)?.trim();
    let digits_end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..digits_end].parse::<i64>().ok().map(|v| v as f64)
}

fn glyph_element(attributes: &[OwnedAttribute]) -> GlyphElement {
    GlyphElement {
        path_data: attribute(attributes, "d").unwrap_or_default().to_string(),
        advance: int_attribute(attributes, "horiz-adv-x"),
    }
}

/// Split a comma-separated attribute list. A lone `,` is kept as the comma character.
fn split_list(value: &str) -> Vec<String> {
    if value == "," {
        return vec![",".to_string()];
    }
    value
        .split(',')
        .map(|item| {
            let trimmed = item.trim();
            // a single space is a valid character reference, keep it as-is
            if trimmed.is_empty() { item } else { trimmed }
        })
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
