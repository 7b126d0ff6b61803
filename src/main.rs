use anyhow::{Context, Result};
use fontpaint::cli::{self, RenderRequest};
use fontpaint::{FileFontSource, FontPainter, PainterConfig, SvgBackend};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let request = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Render(request) => request,
    };
    fontpaint::debug::init_log_bridge(request.log_level);

    let runtime = Runtime::new()?;
    let document = runtime.block_on(render(&request))?;

    match &request.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

async fn render(request: &RenderRequest) -> Result<String> {
    let mut config = match &request.config {
        Some(path) => PainterConfig::load(path)?,
        None => PainterConfig::default(),
    };
    request.apply_to(&mut config);

    let Some(font) = config.font.clone() else {
        anyhow::bail!("No font given; pass --font or set `font` in the configuration");
    };

    let source = FileFontSource::new(request.font_dir.clone());
    let mut painter = FontPainter::new(source, config)?;
    painter
        .load_font(&font)
        .await
        .with_context(|| format!("Failed to load font '{font}'"))?;

    let backend = SvgBackend::new();
    let output = backend.output();
    painter.set_backend(Box::new(backend));

    let layout = painter.paint(&request.text)?;
    if !layout.missing.is_empty() {
        log::warn!("Font '{}' has no glyph for {:?}", font, layout.missing);
    }

    let document = output.lock().clone();
    painter.dispose();
    Ok(document)
}
