//! Command-line front end for the contour tracer and TikZ renderer.
//!
//! Each subcommand reads one JSON document, applies an optional JSON plot
//! style and writes a standalone LaTeX file.

pub mod config;
pub mod input;
pub mod render;

pub use config::{init_tracing, load_style, parse_level};
pub use input::{load_json, BarInput, LegendInput, MeshInput, Series, SeriesInput};
pub use render::{render_bar, render_contour, render_plot, resolve_levels, LevelOptions};
