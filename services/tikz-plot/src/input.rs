//! JSON input documents for each subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_contour::{Viewport, VertexId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tikz_renderer::Symbol;
use tracing::debug;

/// A scalar field on a triangle or quad mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshInput {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// One value per vertex.
    pub values: Vec<f64>,
    #[serde(default)]
    pub triangles: Option<Vec<[VertexId; 3]>>,
    #[serde(default)]
    pub quads: Option<Vec<[VertexId; 4]>>,
    #[serde(default)]
    pub levels: Vec<f64>,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

/// One curve of a line plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// TikZ color name. Palette color when absent.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub symbol: Option<Symbol>,
    /// Legend text. Series without one get no legend entry.
    #[serde(default)]
    pub label: Option<String>,
}

/// Legend placement in data coordinates. Entries stack downward from
/// `(x, y)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendInput {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_legend_length")]
    pub length: f64,
    #[serde(default = "default_legend_spacing")]
    pub spacing: f64,
    #[serde(default = "default_legend_font")]
    pub font: String,
}

fn default_legend_length() -> f64 {
    0.1
}

fn default_legend_spacing() -> f64 {
    0.08
}

fn default_legend_font() -> String {
    "normalsize".to_string()
}

/// Curves for the `plot` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesInput {
    pub series: Vec<Series>,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub legend: Option<LegendInput>,
}

/// Grouped bars for the `bar` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarInput {
    pub groups: Vec<Vec<f64>>,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub bar_width: Option<f64>,
    #[serde(default)]
    pub x_sep: Option<f64>,
    #[serde(default)]
    pub bar_offset: f64,
}

/// Read and parse a JSON input file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded input");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_input_defaults() {
        let input: MeshInput = serde_json::from_str(
            r#"{"x": [0, 1, 0], "y": [0, 0, 1], "values": [0, 1, 2], "triangles": [[0, 1, 2]]}"#,
        )
        .unwrap();
        assert!(input.levels.is_empty());
        assert!(input.quads.is_none());
        assert!(input.viewport.is_none());
    }

    #[test]
    fn test_legend_defaults() {
        let input: SeriesInput = serde_json::from_str(
            r#"{"series": [{"x": [0, 1], "y": [0, 1], "label": "a", "symbol": "circle"}],
                "legend": {"x": 0.1, "y": 0.9}}"#,
        )
        .unwrap();
        let legend = input.legend.unwrap();
        assert_eq!(legend.length, 0.1);
        assert_eq!(legend.font, "normalsize");
        assert_eq!(input.series[0].symbol, Some(Symbol::Circle));
    }

    #[test]
    fn test_inverted_viewport_rejected() {
        let result: std::result::Result<BarInput, _> = serde_json::from_str(
            r#"{"groups": [[1]], "viewport": {"xmin": 1, "xmax": 0, "ymin": 0, "ymax": 1}}"#,
        );
        assert!(result.is_err());
    }
}
