use std::collections::HashMap;
use std::sync::Arc;

use fontpaint_config::{Padding, RenderOptions};
use fontpaint_path::DrawCommand;
use parking_lot::Mutex;

use super::{LayerStyle, RenderBackend, RenderLayer, layer_padding};
use crate::copy::CopyProps;
use crate::error::RenderError;
use crate::layout::Layout;

/// Drawing resource kept per character across renders.
#[derive(Debug, Clone)]
pub struct GlyphResource {
    pub commands: Arc<[DrawCommand]>,
}

/// One glyph drawn in one layer, positioned in font units.
#[derive(Debug, Clone)]
pub struct RecordedGlyph {
    pub character: char,
    pub character_index: usize,
    pub layer: usize,
    pub x: f64,
    pub y: f64,
    pub commands: Arc<[DrawCommand]>,
}

impl RecordedGlyph {
    /// Draw commands moved to the glyph's position.
    pub fn absolute_commands(&self) -> Vec<DrawCommand> {
        self.commands
            .iter()
            .map(|command| command.translated(self.x, self.y))
            .collect()
    }
}

/// Everything drawn by one `render` call.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Size in pixels
    pub width: f64,
    pub height: f64,
    pub units_per_px: f64,
    pub layer_styles: Vec<LayerStyle>,
    pub glyphs: Vec<RecordedGlyph>,
}

/// Backend that records draw commands instead of rasterizing them.
///
/// Stands in for canvas-like targets: every glyph becomes absolute draw
/// commands per layer. Draw commands are cached per character; characters
/// absent from the latest copy are dropped from the cache.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    layers: Vec<RenderLayer>,
    resources: HashMap<char, GlyphResource>,
    frames: Arc<Mutex<Vec<Frame>>>,
    disposed: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw with the given layers instead of a single default layer.
    pub fn with_layers(mut self, layers: Vec<RenderLayer>) -> Self {
        self.layers = layers;
        self
    }

    /// Shared handle to the recorded frames; stays valid after the backend
    /// is moved into a painter.
    pub fn frames(&self) -> Arc<Mutex<Vec<Frame>>> {
        Arc::clone(&self.frames)
    }

    pub fn has_resource(&self, character: char) -> bool {
        self.resources.contains_key(&character)
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    fn update_resources(&mut self, copy: &CopyProps) {
        let before = self.resources.len();
        self.resources
            .retain(|character, _| copy.characters.contains(character));
        let pruned = before - self.resources.len();
        if pruned > 0 {
            log::debug!("Pruned {} stale glyph resources", pruned);
        }

        for (character, glyph) in copy.characters.iter().zip(&copy.glyphs) {
            if let Some(glyph) = glyph {
                self.resources
                    .entry(*character)
                    .or_insert_with(|| GlyphResource {
                        commands: glyph.draw_commands(),
                    });
            }
        }
    }
}

impl RenderBackend for RecordingBackend {
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

        self.update_resources(copy);

        let layer_styles: Vec<LayerStyle> = if self.layers.is_empty() {
            vec![LayerStyle::default()]
        } else {
            self.layers
                .iter()
                .map(|layer| layer.resolve_style(layout.units_per_px))
                .collect()
        };

        let mut glyphs = Vec::with_capacity(layout.glyph_count() * layer_styles.len());
        for layer in 0..layer_styles.len() {
            for line in &layout.lines {
                for placement in &line.glyphs {
                    let index = placement.character_index;
                    let Some(&character) = copy.characters.get(index) else {
                        return Err(RenderError::IndexOutOfRange {
                            index,
                            len: copy.len(),
                        });
                    };
                    let Some(resource) = self.resources.get(&character) else {
                        continue;
                    };
                    glyphs.push(RecordedGlyph {
                        character,
                        character_index: index,
                        layer,
                        x: line.x + placement.x,
                        y: line.y + placement.y,
                        commands: Arc::clone(&resource.commands),
                    });
                }
            }
        }

        self.frames.lock().push(Frame {
            width: layout.width() / layout.units_per_px,
            height: layout.height() / layout.units_per_px,
            units_per_px: layout.units_per_px,
            layer_styles,
            glyphs,
        });
        Ok(())
    }

    fn dispose(&mut self) {
        self.resources.clear();
        self.disposed = true;
    }
}
