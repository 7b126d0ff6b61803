//! Command-line interface for fontpaint.
//!
//! This module handles CLI argument parsing and the `init-config` subcommand.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fontpaint_config::{PainterConfig, RenderBounds, TextAlign, WrapMode};
use log::LevelFilter;

/// fontpaint - Lay out text with an SVG font and render it as SVG
#[derive(Parser)]
#[command(name = "fontpaint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to render
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// YAML configuration file (created with defaults if missing)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory font identifiers are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub font_dir: PathBuf,

    /// Font identifier, e.g. `fonts/serif.svg` (overrides the configuration)
    #[arg(short, long, value_name = "ID")]
    pub font: Option<String>,

    /// Font size in pixels
    #[arg(long, value_name = "PX")]
    pub font_size: Option<f64>,

    /// Wrap lines at this width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f64>,

    /// Line alignment within the width: left, center or right
    #[arg(long, value_name = "ALIGN", value_parser = parse_align)]
    pub align: Option<TextAlign>,

    /// Trim line boxes to the glyph outlines
    #[arg(long)]
    pub exact_fit: bool,

    /// Keep everything on one line even with a width
    #[arg(long)]
    pub no_wrap: bool,

    /// Write the SVG document here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with default settings
    InitConfig {
        /// Where to write the file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// A render requested on the command line
#[derive(Clone, Debug, Default)]
pub struct RenderRequest {
    pub text: String,
    pub config: Option<PathBuf>,
    pub font_dir: PathBuf,
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub width: Option<f64>,
    pub align: Option<TextAlign>,
    pub exact_fit: bool,
    pub no_wrap: bool,
    pub output: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

impl RenderRequest {
    /// Apply the command-line overrides on top of `config`.
    pub fn apply_to(&self, config: &mut PainterConfig) {
        if let Some(font) = &self.font {
            config.font = Some(font.clone());
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        if let Some(width) = self.width {
            config.bounds = Some(RenderBounds::fixed(width));
        }
        if let Some(align) = self.align {
            config.align = align;
        }
        if self.exact_fit {
            config.exact_fit = true;
        }
        if self.no_wrap {
            config.wrap_mode = WrapMode::None;
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Render the requested text
    Render(Box<RenderRequest>),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::InitConfig { path, force }) => match init_config(&path, force) {
            Ok(()) => CliResult::Exit(0),
            Err(e) => {
                eprintln!("fontpaint: error: {e:#}");
                CliResult::Exit(1)
            }
        },
        None => {
            let Some(text) = cli.text else {
                eprintln!("fontpaint: error: no text given (see --help)");
                return CliResult::Exit(2);
            };
            CliResult::Render(Box::new(RenderRequest {
                text,
                config: cli.config,
                font_dir: cli.font_dir,
                font: cli.font,
                font_size: cli.font_size,
                width: cli.width,
                align: cli.align,
                exact_fit: cli.exact_fit,
                no_wrap: cli.no_wrap,
                output: cli.output,
                log_level: cli.log_level,
            }))
        }
    }
}

/// Write a default configuration file
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists; use --force to overwrite", path.display());
    }
    PainterConfig::default().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn parse_align(value: &str) -> Result<TextAlign, String> {
    match value.to_ascii_lowercase().as_str() {
        "left" => Ok(TextAlign::Left),
        "center" | "centre" => Ok(TextAlign::Center),
        "right" => Ok(TextAlign::Right),
        other => Err(format!("unknown alignment '{other}' (expected left, center or right)")),
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    crate::debug::parse_level(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_align() {
        assert_eq!(parse_align("Center"), Ok(TextAlign::Center));
        assert_eq!(parse_align("right"), Ok(TextAlign::Right));
        assert!(parse_align("justify").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "fontpaint",
            "--font",
            "serif.svg",
            "--width",
            "320",
            "--align",
            "right",
            "--exact-fit",
            "Hello",
        ])
        .unwrap();
        assert_eq!(cli.text.as_deref(), Some("Hello"));
        assert_eq!(cli.font.as_deref(), Some("serif.svg"));
        assert_eq!(cli.width, Some(320.0));
        assert_eq!(cli.align, Some(TextAlign::Right));
        assert!(cli.exact_fit);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_request_overrides_config() {
        let request = RenderRequest {
            font: Some("serif.svg".to_string()),
            font_size: Some(48.0),
            width: Some(300.0),
            no_wrap: true,
            ..RenderRequest::default()
        };
        let mut config = PainterConfig::default();
        request.apply_to(&mut config);

        assert_eq!(config.font.as_deref(), Some("serif.svg"));
        assert_eq!(config.font_size, 48.0);
        assert_eq!(config.bounds, Some(RenderBounds::fixed(300.0)));
        assert_eq!(config.wrap_mode, WrapMode::None);
        assert!(!config.exact_fit);
    }
}
