//! Logging setup and plot style resolution.

use std::path::Path;

use anyhow::{Context, Result};
use tikz_renderer::PlotStyle;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Map a log level name to a tracing level. Unknown names mean `info`.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber. Output goes to stderr so a document
/// written to stdout stays clean.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Style from `path`, or the default style.
pub fn load_style(path: Option<&Path>) -> Result<PlotStyle> {
    match path {
        Some(path) => {
            let style = PlotStyle::from_file(path)
                .with_context(|| format!("Failed to load style {}", path.display()))?;
            info!(path = %path.display(), palette = ?style.palette, "Using plot style");
            Ok(style)
        }
        None => Ok(PlotStyle::default()),
    }
}
