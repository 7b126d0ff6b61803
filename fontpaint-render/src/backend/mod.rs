//! Render backend capability.
//!
//! The layout engine knows nothing about output surfaces; a backend receives
//! the finished [`Layout`] together with the resolved copy and draws it.
//! Backends built from [`RenderLayer`]s draw every glyph once per layer, and
//! report the largest layer offset as per-glyph padding so the layout leaves
//! room for it.

mod recording;
mod svg;

pub use recording::{Frame, GlyphResource, RecordedGlyph, RecordingBackend};
pub use svg::SvgBackend;

use fontpaint_config::{Padding, RenderOptions};

use crate::copy::CopyProps;
use crate::error::RenderError;
use crate::layout::Layout;

/// A render target for finished layouts.
pub trait RenderBackend: Send {
    /// Per-glyph padding in font units this backend needs around each glyph.
    fn glyph_padding(&self, _units_per_px: f64) -> Padding {
        Padding::default()
    }

    /// Draw `layout`. Called once per paint.
    fn render(
        &mut self,
        layout: &Layout,
        copy: &CopyProps,
        options: &RenderOptions,
    ) -> Result<(), RenderError>;

    /// Release resources. The backend must not be used afterwards.
    fn dispose(&mut self) {}
}

/// Style applied to one layer's glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Stroke width in font units
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill: Some("black".to_string()),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }
}

/// Per-pass style callback; receives the style to modify and the current units per pixel.
pub type LayerStyleFn = Box<dyn Fn(&mut LayerStyle, f64) + Send + Sync>;

/// One drawing pass over all glyphs.
pub struct RenderLayer {
    /// Extra room the layer needs around each glyph: top, right, bottom, left
    pub offset: Padding,
    /// Whether `offset` is in pixels (true) or font units (false)
    pub offset_is_px: bool,
    style: Option<LayerStyleFn>,
}

impl RenderLayer {
    pub fn new() -> Self {
        Self {
            offset: Padding::default(),
            offset_is_px: false,
            style: None,
        }
    }

    pub fn with_offset(mut self, offset: Padding, offset_is_px: bool) -> Self {
        self.offset = offset;
        self.offset_is_px = offset_is_px;
        self
    }

    pub fn with_style<F>(mut self, style: F) -> Self
    where
        F: Fn(&mut LayerStyle, f64) + Send + Sync + 'static,
    {
        self.style = Some(Box::new(style));
        self
    }

    /// Offset converted to font units.
    pub fn offset_units(&self, units_per_px: f64) -> Padding {
        if self.offset_is_px {
            Padding::new(
                self.offset.top * units_per_px,
                self.offset.right * units_per_px,
                self.offset.bottom * units_per_px,
                self.offset.left * units_per_px,
            )
        } else {
            self.offset
        }
    }

    /// The style for this pass.
    pub fn resolve_style(&self, units_per_px: f64) -> LayerStyle {
        let mut style = LayerStyle::default();
        if let Some(apply) = &self.style {
            apply(&mut style, units_per_px);
        }
        style
    }
}

impl Default for RenderLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderLayer")
            .field("offset", &self.offset)
            .field("offset_is_px", &self.offset_is_px)
            .field("style", &self.style.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Per-side maximum of all layer offsets, in font units.
pub fn layer_padding(layers: &[RenderLayer], units_per_px: f64) -> Padding {
    layers
        .iter()
        .map(|layer| layer.offset_units(units_per_px))
        .fold(Padding::default(), Padding::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_padding_is_per_side_max() {
        let layers = vec![
            RenderLayer::new().with_offset(Padding::new(10.0, 0.0, 5.0, 0.0), false),
            RenderLayer::new().with_offset(Padding::uniform(2.0), true),
        ];
        let padding = layer_padding(&layers, 4.0);
        assert_eq!(padding, Padding::new(10.0, 8.0, 8.0, 8.0));
        assert_eq!(layer_padding(&[], 4.0), Padding::default());
    }

    #[test]
    fn test_resolve_style() {
        let layer = RenderLayer::new().with_style(|style, units_per_px| {
            style.stroke = Some("red".to_string());
            style.stroke_width = 2.0 * units_per_px;
        });
        let style = layer.resolve_style(10.0);
        assert_eq!(style.stroke.as_deref(), Some("red"));
        assert_eq!(style.stroke_width, 20.0);
        assert_eq!(style.fill.as_deref(), Some("black"));
        assert_eq!(RenderLayer::default().resolve_style(1.0), LayerStyle::default());
    }

    struct NullBackend;

    impl RenderBackend for NullBackend {
        fn render(
            &mut self,
            _layout: &Layout,
            _copy: &CopyProps,
            _options: &RenderOptions,
        ) -> Result<(), RenderError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_glyph_padding_is_zero() {
        assert_eq!(NullBackend.glyph_padding(10.0), Padding::default());
    }
}
