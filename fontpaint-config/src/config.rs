//! `PainterConfig`: persistent settings for a font painter.
//!
//! Covers:
//! - Serde defaults for every field so partial YAML files load
//! - `load` / `save` (YAML file I/O with atomic write)
//! - Validation of numeric settings
//! - Conversion into per-pass [`RenderOptions`]

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{KerningStrategy, RenderBounds, RenderOptions, TextAlign, WrapMode};

/// Settings for painting text with an SVG font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainterConfig {
    /// Identifier of the font to load, relative to the font source
    #[serde(default = "crate::defaults::default_font")]
    pub font: Option<String>,

    /// Kerning lookup strategy for SVG fonts
    #[serde(default = "crate::defaults::kerning_strategy")]
    pub kerning_strategy: KerningStrategy,

    /// Identifier suffixes handled by the SVG font parser
    #[serde(default = "crate::defaults::parser_extensions")]
    pub parser_extensions: Vec<String>,

    /// Font size in pixels
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f64,

    /// Line height multiplier of the em size
    #[serde(default = "crate::defaults::line_height")]
    pub line_height: f64,

    /// Extra space between glyphs in pixels
    #[serde(default = "crate::defaults::letter_spacing")]
    pub letter_spacing: f64,

    #[serde(default)]
    pub align: TextAlign,

    #[serde(default)]
    pub wrap_mode: WrapMode,

    /// Width constraint; omitted means unbounded
    #[serde(default)]
    pub bounds: Option<RenderBounds>,

    /// Trim line boxes to the glyphs' ink bounds
    #[serde(default = "crate::defaults::bool_false")]
    pub exact_fit: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            font: crate::defaults::default_font(),
            kerning_strategy: crate::defaults::kerning_strategy(),
            parser_extensions: crate::defaults::parser_extensions(),
            font_size: crate::defaults::font_size(),
            line_height: crate::defaults::line_height(),
            letter_spacing: crate::defaults::letter_spacing(),
            align: TextAlign::default(),
            wrap_mode: WrapMode::default(),
            bounds: None,
            exact_fit: crate::defaults::bool_false(),
        }
    }
}

impl PainterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bounds(mut self, bounds: RenderBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Render options for a layout pass with the current settings.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            bounds: self.bounds,
            wrap_mode: self.wrap_mode,
            align: self.align,
            letter_spacing: self.letter_spacing,
            font_size: self.font_size,
            line_height: self.line_height,
            exact_fit: self.exact_fit,
        }
    }

    /// Check numeric settings for values layout cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "font_size must be a positive number, got {}",
                self.font_size
            )));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "line_height must be a positive number, got {}",
                self.line_height
            )));
        }
        if !self.letter_spacing.is_finite() {
            return Err(ConfigError::Validation(format!(
                "letter_spacing must be finite, got {}",
                self.letter_spacing
            )));
        }
        if let Some(RenderBounds::Fixed { width }) = self.bounds
            && !(width.is_finite() && width >= 0.0)
        {
            return Err(ConfigError::Validation(format!(
                "bounds width must be a non-negative number, got {width}"
            )));
        }
        if let Some(ext) = self.parser_extensions.iter().find(|ext| ext.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "parser_extensions contains an empty suffix: {ext:?}"
            )));
        }
        Ok(())
    }

    /// Load configuration from `path`, creating the file with defaults if it
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if path.exists() {
            log::info!("Loading existing config from {:?}", path);
            let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
            let config: PainterConfig =
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}
