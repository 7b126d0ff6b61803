//! Asynchronous font acquisition.
//!
//! [`FontLoader`] fetches raw font data from a [`FontSource`], hands it to a
//! [`FontParser`] chosen by identifier suffix and caches the resulting
//! provider per identifier. Concurrent loads of the same identifier share one
//! fetch and parse.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fontpaint_config::KerningStrategy;
use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::error::FontError;
use crate::provider::{FontMetricsProvider, PairKerningFont, RangeKerningFont};
use crate::svg_font::SvgFontDocument;

/// Where raw font data comes from.
pub trait FontSource: Send + Sync {
    /// Fetch the raw text of the font identified by `id`.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<String, FontError>> + Send;
}

/// Reads fonts from files below a root directory.
#[derive(Debug, Clone)]
pub struct FileFontSource {
    root: PathBuf,
}

impl FileFontSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FontSource for FileFontSource {
    async fn fetch(&self, id: &str) -> Result<String, FontError> {
        let path = self.root.join(id);
        log::debug!("Reading font file {:?}", path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => FontError::NotFound(id.to_string()),
                _ => FontError::Io {
                    path: path.display().to_string(),
                    source,
                },
            })
    }
}

/// In-memory font source, mainly for embedding fonts and for tests.
///
/// Counts fetches so callers can verify load deduplication.
#[derive(Debug, Default)]
pub struct MemoryFontSource {
    fonts: HashMap<String, String>,
    fetches: AtomicUsize,
}

impl MemoryFontSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.fonts.insert(id.into(), raw.into());
        self
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl FontSource for MemoryFontSource {
    async fn fetch(&self, id: &str) -> Result<String, FontError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // let concurrent loaders observe the in-flight fetch
        tokio::task::yield_now().await;
        self.fonts
            .get(id)
            .cloned()
            .ok_or_else(|| FontError::NotFound(id.to_string()))
    }
}

/// Turns raw font data into a metrics provider.
pub trait FontParser: Send + Sync {
    fn parse(&self, raw: &str) -> Result<Arc<dyn FontMetricsProvider>, FontError>;
}

/// Parser for SVG fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgFontParser {
    pub strategy: KerningStrategy,
}

impl SvgFontParser {
    pub fn new(strategy: KerningStrategy) -> Self {
        Self { strategy }
    }
}

impl FontParser for SvgFontParser {
    fn parse(&self, raw: &str) -> Result<Arc<dyn FontMetricsProvider>, FontError> {
        let document = SvgFontDocument::parse(raw)?;
        Ok(match self.strategy {
            KerningStrategy::RangeTable => Arc::new(RangeKerningFont::new(document)),
            KerningStrategy::DirectPair => Arc::new(PairKerningFont::new(document)),
        })
    }
}

type ProviderCell = Arc<OnceCell<Arc<dyn FontMetricsProvider>>>;

/// Loads and caches fonts by identifier.
pub struct FontLoader<S> {
    source: S,
    /// Identifier suffix (e.g. `.svg`) → parser
    parsers: HashMap<String, Arc<dyn FontParser>>,
    files: Mutex<HashMap<String, ProviderCell>>,
}

impl<S: FontSource> FontLoader<S> {
    pub fn new(source: S, parsers: HashMap<String, Arc<dyn FontParser>>) -> Self {
        Self {
            source,
            parsers,
            files: Mutex::new(HashMap::new()),
        }
    }

    /// A loader that parses `.svg` identifiers with an [`SvgFontParser`].
    pub fn with_svg_parser(source: S, strategy: KerningStrategy) -> Self {
        let parser: Arc<dyn FontParser> = Arc::new(SvgFontParser::new(strategy));
        Self::new(source, HashMap::from([(".svg".to_string(), parser)]))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The registered parser with the longest suffix that `id` ends with.
    fn parser_for(&self, id: &str) -> Result<Arc<dyn FontParser>, FontError> {
        self.parsers
            .iter()
            .filter(|(suffix, _)| id.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len())
            .map(|(_, parser)| Arc::clone(parser))
            .ok_or_else(|| FontError::NoParser(id.to_string()))
    }

    /// Load the font identified by `id`.
    ///
    /// Without an explicit `parser` the one registered for the identifier's
    /// suffix is used. The first successful load of an identifier is cached
    /// and returned to every later caller; concurrent callers wait for the
    /// same fetch. A failed load is not cached.
    pub async fn load(
        &self,
        id: &str,
        parser: Option<Arc<dyn FontParser>>,
    ) -> Result<Arc<dyn FontMetricsProvider>, FontError> {
        let parser = match parser {
            Some(parser) => parser,
            None => self.parser_for(id)?,
        };

        let cell = {
            let mut files = self.files.lock();
            Arc::clone(files.entry(id.to_string()).or_default())
        };

        let provider = cell
            .get_or_try_init(|| async {
                log::info!("Loading font '{}'", id);
                let raw = self.source.fetch(id).await?;
                let provider = parser.parse(&raw)?;
                log::info!("Loaded font '{}'", id);
                Ok::<_, FontError>(provider)
            })
            .await
            .inspect_err(|e| log::error!("Failed to load font '{}': {}", id, e))?;

        Ok(Arc::clone(provider))
    }

    /// True if `id` has been loaded successfully.
    pub fn is_loaded(&self, id: &str) -> bool {
        self.files
            .lock()
            .get(id)
            .is_some_and(|cell| cell.initialized())
    }
}

impl<S> std::fmt::Debug for FontLoader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLoader")
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .field("files", &self.files.lock().keys().cloned().collect::<Vec<_>>())
            .finish()
    }
}
