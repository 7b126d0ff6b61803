//! The font painter facade.
//!
//! A [`FontPainter`] ties the pieces together: it loads a font through a
//! shared [`FontLoader`], keeps the settings from a [`PainterConfig`], and on
//! every [`paint`](FontPainter::paint) resolves the copy, lays it out and
//! hands the result to the attached [`RenderBackend`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use fontpaint_config::{PainterConfig, RenderBounds, TextAlign, WrapMode};
use fontpaint_fonts::{FontLoader, FontMetricsProvider, FontParser, FontSource, SvgFontParser};
use fontpaint_render::{CopyProps, Layout, LayoutEngine, RenderBackend};
use parking_lot::Mutex;

use crate::error::PaintError;

/// State shared with in-flight font loads.
#[derive(Default)]
struct PainterState {
    font: Option<Arc<dyn FontMetricsProvider>>,
    font_id: Option<String>,
    /// Bumped by every `load_font`; a load only applies if it is still the latest
    generation: u64,
    disposed: bool,
}

/// Lays out and renders text with an SVG font.
pub struct FontPainter<S> {
    loader: Arc<FontLoader<S>>,
    state: Arc<Mutex<PainterState>>,
    config: PainterConfig,
    backend: Option<Box<dyn RenderBackend>>,
}

impl<S: FontSource + 'static> FontPainter<S> {
    /// Create a painter reading fonts from `source`.
    ///
    /// Every suffix in `config.parser_extensions` is handled by an
    /// [`SvgFontParser`] using `config.kerning_strategy`.
    pub fn new(source: S, config: PainterConfig) -> Result<Self, PaintError> {
        let parser: Arc<dyn FontParser> = Arc::new(SvgFontParser::new(config.kerning_strategy));
        let parsers: HashMap<String, Arc<dyn FontParser>> = config
            .parser_extensions
            .iter()
            .map(|ext| (ext.clone(), Arc::clone(&parser)))
            .collect();
        Self::with_loader(Arc::new(FontLoader::new(source, parsers)), config)
    }

    /// Create a painter sharing an existing loader, so fonts already loaded
    /// by other painters are reused.
    pub fn with_loader(loader: Arc<FontLoader<S>>, config: PainterConfig) -> Result<Self, PaintError> {
        config.validate()?;
        Ok(Self {
            loader,
            state: Arc::new(Mutex::new(PainterState::default())),
            config,
            backend: None,
        })
    }

    pub fn loader(&self) -> &Arc<FontLoader<S>> {
        &self.loader
    }

    /// Attach the render target, disposing any previous one.
    pub fn set_backend(&mut self, backend: Box<dyn RenderBackend>) {
        if let Some(mut previous) = self.backend.replace(backend) {
            previous.dispose();
        }
    }

    /// Load the font `id` and make it the painter's font.
    ///
    /// The returned future does not borrow the painter. If another
    /// `load_font` is started before this one finishes, only the later font
    /// is applied; the earlier future still resolves with its font.
    pub fn load_font(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Arc<dyn FontMetricsProvider>, PaintError>> + Send + 'static + use<S>
    {
        let id = id.to_string();
        let loader = Arc::clone(&self.loader);
        let state = Arc::clone(&self.state);
        let generation = {
            let mut state = state.lock();
            if state.disposed {
                None
            } else {
                state.generation += 1;
                Some(state.generation)
            }
        };

        async move {
            let Some(generation) = generation else {
                return Err(PaintError::Disposed);
            };

            let font = loader.load(&id, None).await?;

            let mut guard = state.lock();
            if guard.disposed {
                return Err(PaintError::Disposed);
            }
            if guard.generation == generation {
                log::info!("Font '{}' ready", id);
                guard.font = Some(Arc::clone(&font));
                guard.font_id = Some(id);
            } else {
                log::debug!("Font '{}' loaded after a newer request; not applied", id);
            }
            Ok(font)
        }
    }

    /// Load the font named in the configuration, if any.
    pub async fn load_configured_font(&self) -> Result<Option<Arc<dyn FontMetricsProvider>>, PaintError> {
        match self.config.font.clone() {
            Some(id) => self.load_font(&id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Lay out `copy` with the current settings and render it.
    ///
    /// # Errors
    ///
    /// - [`PaintError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`PaintError::NoBackend`] without a backend
    /// - [`PaintError::FontNotReady`] before a font has loaded
    /// - [`PaintError::Layout`] for options layout cannot honor
    /// - [`PaintError::Render`] when the backend fails
    pub fn paint(&mut self, copy: &str) -> Result<Layout, PaintError> {
        let font = {
            let state = self.state.lock();
            if state.disposed {
                return Err(PaintError::Disposed);
            }
            state.font.clone()
        };
        let Some(backend) = self.backend.as_mut() else {
            return Err(PaintError::NoBackend);
        };
        let Some(font) = font else {
            return Err(PaintError::FontNotReady);
        };

        let options = self.config.render_options();
        let engine = LayoutEngine::new(font.metrics(), &options)?;
        let padding = backend.glyph_padding(engine.units_per_px());
        let copy = CopyProps::resolve(copy, font.as_ref());
        let layout = engine.with_padding(padding).layout(&copy);

        backend.render(&layout, &copy, &options)?;
        Ok(layout)
    }

    /// Release the backend and the font. In-flight loads are not cancelled,
    /// but their results are no longer applied.
    pub fn dispose(&mut self) {
        {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.font = None;
            state.font_id = None;
        }
        if let Some(mut backend) = self.backend.take() {
            backend.dispose();
        }
        log::debug!("Font painter disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    /// The font used by the next paint.
    pub fn font(&self) -> Option<Arc<dyn FontMetricsProvider>> {
        self.state.lock().font.clone()
    }

    pub fn font_id(&self) -> Option<String> {
        self.state.lock().font_id.clone()
    }

    pub fn is_font_ready(&self) -> bool {
        self.state.lock().font.is_some()
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Mutable settings; read at the start of every paint.
    pub fn config_mut(&mut self) -> &mut PainterConfig {
        &mut self.config
    }

    pub fn font_size(&self) -> f64 {
        self.config.font_size
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.config.font_size = font_size;
    }

    pub fn line_height(&self) -> f64 {
        self.config.line_height
    }

    pub fn set_line_height(&mut self, line_height: f64) {
        self.config.line_height = line_height;
    }

    pub fn letter_spacing(&self) -> f64 {
        self.config.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: f64) {
        self.config.letter_spacing = letter_spacing;
    }

    pub fn align(&self) -> TextAlign {
        self.config.align
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.config.align = align;
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.config.wrap_mode
    }

    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.config.wrap_mode = wrap_mode;
    }

    pub fn bounds(&self) -> Option<RenderBounds> {
        self.config.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<RenderBounds>) {
        self.config.bounds = bounds;
    }

    pub fn exact_fit(&self) -> bool {
        self.config.exact_fit
    }

    pub fn set_exact_fit(&mut self, exact_fit: bool) {
        self.config.exact_fit = exact_fit;
    }
}

impl<S> fmt::Debug for FontPainter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FontPainter")
            .field("font_id", &state.font_id)
            .field("generation", &state.generation)
            .field("disposed", &state.disposed)
            .field("config", &self.config)
            .field("has_backend", &self.backend.is_some())
            .finish()
    }
}

impl<S> Drop for FontPainter<S> {
    fn drop(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.dispose();
        }
    }
}
