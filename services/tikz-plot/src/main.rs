//! tikz-plot: render contour, line and bar plots as TikZ documents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use tikz_plot::{
    init_tracing, load_json, load_style, render_bar, render_contour, render_plot, BarInput,
    LevelOptions, MeshInput, SeriesInput,
};

#[derive(Parser, Debug)]
#[command(name = "tikz-plot")]
#[command(about = "Render contour, line and bar plots as standalone TikZ documents")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Contour a scalar field on a triangle or quad mesh
    Contour {
        /// Mesh JSON (x, y, values, triangles or quads)
        #[arg(short, long)]
        input: PathBuf,

        /// Output .tex file
        #[arg(short, long)]
        output: PathBuf,

        /// Plot style JSON
        #[arg(short, long, env = "TIKZ_PLOT_STYLE")]
        style: Option<PathBuf>,

        /// Comma-separated contour levels
        #[arg(long, value_delimiter = ',', conflicts_with = "interval")]
        levels: Option<Vec<f64>>,

        /// Contour every multiple of this spacing
        #[arg(long)]
        interval: Option<f64>,
    },

    /// Draw one or more curves
    Plot {
        /// Series JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output .tex file
        #[arg(short, long)]
        output: PathBuf,

        /// Plot style JSON
        #[arg(short, long, env = "TIKZ_PLOT_STYLE")]
        style: Option<PathBuf>,
    },

    /// Draw a grouped bar chart
    Bar {
        /// Bar groups JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output .tex file
        #[arg(short, long)]
        output: PathBuf,

        /// Plot style JSON
        #[arg(short, long, env = "TIKZ_PLOT_STYLE")]
        style: Option<PathBuf>,
    },
}

fn write_output(path: &Path, tex: &str) -> Result<()> {
    std::fs::write(path, tex).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = tex.len(), "Wrote document");
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Contour {
            input,
            output,
            style,
            levels,
            interval,
        } => {
            let style = load_style(style.as_deref())?;
            let mesh: MeshInput = load_json(&input)?;
            let tex = render_contour(&mesh, &style, &LevelOptions { levels, interval })?;
            write_output(&output, &tex)
        }
        Commands::Plot { input, output, style } => {
            let style = load_style(style.as_deref())?;
            let series: SeriesInput = load_json(&input)?;
            write_output(&output, &render_plot(&series, &style)?)
        }
        Commands::Bar { input, output, style } => {
            let style = load_style(style.as_deref())?;
            let bars: BarInput = load_json(&input)?;
            write_output(&output, &render_bar(&bars, &style)?)
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json)?;

    if let Err(e) = run(cli.command) {
        error!(error = %format!("{:#}", e), "tikz-plot failed");
        return Err(e);
    }
    Ok(())
}
