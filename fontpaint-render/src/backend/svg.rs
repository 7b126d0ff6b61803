use std::fmt::Write;
use std::sync::Arc;

use fontpaint_config::{Padding, RenderOptions};
use parking_lot::Mutex;

use super::{LayerStyle, RenderBackend, RenderLayer, layer_padding};
use crate::copy::CopyProps;
use crate::error::RenderError;
use crate::layout::Layout;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Backend that writes the layout as a standalone SVG document.
///
/// Each distinct glyph outline is emitted once under `<defs>`; every layer
/// is a `<g>` of `<use>` references positioned in font units, with the
/// `viewBox` in font units and `width`/`height` in pixels.
#[derive(Debug, Default)]
pub struct SvgBackend {
    layers: Vec<RenderLayer>,
    output: Arc<Mutex<String>>,
    disposed: bool,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layers(mut self, layers: Vec<RenderLayer>) -> Self {
        self.layers = layers;
        self
    }

    /// Shared handle to the latest rendered document.
    pub fn output(&self) -> Arc<Mutex<String>> {
        Arc::clone(&self.output)
    }

    fn write_document(&self, layout: &Layout, copy: &CopyProps) -> Result<String, RenderError> {
        let width = layout.width();
        let height = layout.height();
        let units_per_px = layout.units_per_px;

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NAMESPACE,
            width / units_per_px,
            height / units_per_px,
            width,
            height
        )?;

        let mut defined: Vec<char> = Vec::new();
        svg.push_str("  <defs>\n");
        for (character, glyph) in copy.characters.iter().zip(&copy.glyphs) {
            let Some(glyph) = glyph else { continue };
            if glyph.is_empty() || defined.contains(character) {
                continue;
            }
            defined.push(*character);
            writeln!(
                svg,
                r#"    <path id="{}" d="{}"/>"#,
                glyph_id(*character),
                glyph.path_data()
            )?;
        }
        svg.push_str("  </defs>\n");

        let styles: Vec<LayerStyle> = if self.layers.is_empty() {
            vec![LayerStyle::default()]
        } else {
            self.layers
                .iter()
                .map(|layer| layer.resolve_style(units_per_px))
                .collect()
        };

        for style in &styles {
            writeln!(svg, "  <g{}>", style_attributes(style)?)?;
            for line in &layout.lines {
                for placement in &line.glyphs {
                    let index = placement.character_index;
                    let Some(character) = copy.characters.get(index) else {
                        return Err(RenderError::IndexOutOfRange {
                            index,
                            len: copy.len(),
                        });
                    };
                    if !defined.contains(character) {
                        continue;
                    }
                    writeln!(
                        svg,
                        r##"    <use href="#{}" x="{}" y="{}"/>"##,
                        glyph_id(*character),
                        line.x + placement.x,
                        line.y + placement.y
                    )?;
                }
            }
            svg.push_str("  </g>\n");
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

fn glyph_id(character: char) -> String {
    format!("glyph-{:x}", character as u32)
}

fn style_attributes(style: &LayerStyle) -> Result<String, RenderError> {
    let mut attributes = format!(
        r#" fill="{}""#,
        escape_attribute(style.fill.as_deref().unwrap_or("none"))
    );
    if let Some(stroke) = &style.stroke {
        write!(
            attributes,
            r#" stroke="{}" stroke-width="{}""#,
            escape_attribute(stroke),
            style.stroke_width
        )?;
    }
    if style.opacity < 1.0 {
        write!(attributes, r#" opacity="{}""#, style.opacity)?;
    }
    Ok(attributes)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

impl RenderBackend for SvgBackend {
    fn glyph_padding(&self, units_per_px: f64) -> Padding {
        layer_padding(&self.layers, units_per_px)
    }

    fn render(
        &mut self,
        layout: &Layout,
        copy: &CopyProps,
        _options: &RenderOptions,
    ) -> Result<(), RenderError> {
        if self.disposed {
            return Err(RenderError::Disposed);
        }
        let document = self.write_document(layout, copy)?;
        log::debug!("Rendered SVG document ({} bytes)", document.len());
        *self.output.lock() = document;
        Ok(())
    }

    fn dispose(&mut self) {
        self.output.lock().clear();
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_attributes() {
        let style = LayerStyle {
            fill: None,
            stroke: Some("#f00 \"x\"".to_string()),
            stroke_width: 12.5,
            opacity: 0.5,
        };
        assert_eq!(
            style_attributes(&style).unwrap(),
            r##" fill="none" stroke="#f00 &quot;x&quot;" stroke-width="12.5" opacity="0.5""##
        );
        assert_eq!(style_attributes(&LayerStyle::default()).unwrap(), r#" fill="black""#);
    }

    #[test]
    fn test_glyph_id() {
        assert_eq!(glyph_id('A'), "glyph-41");
        assert_eq!(glyph_id('±'), "glyph-b1");
    }
}
