//! Contour plots of scalar fields on triangle and quad meshes.

use mesh_contour::{ContourTracer, MeshTopology, TieBreak, TriMesh, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::plot::{line_plot, LineOptions};

/// Contour plot options.
///
/// `line.color` is replaced per level by the matching entry of `colors`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourPlotOptions {
    pub line: LineOptions,
    /// One TikZ color name per level.
    pub colors: Option<Vec<String>>,
    pub tie_break: TieBreak,
}

/// One color per level. A missing list or one whose length differs from
/// the level count draws every level black.
pub fn level_colors(num_levels: usize, colors: Option<&[String]>) -> Vec<String> {
    match colors {
        Some(colors) if colors.len() == num_levels => colors.to_vec(),
        Some(colors) => {
            warn!(
                num_levels,
                num_colors = colors.len(),
                "Contour colors do not match levels, drawing all levels black"
            );
            vec!["black".to_string(); num_levels]
        }
        None => vec!["black".to_string(); num_levels],
    }
}

/// TikZ commands for every contour of `values` at `levels` on a triangle
/// mesh. Each polyline goes through [`line_plot`], so it is clipped to
/// `opts.line.viewport` when one is set.
pub fn tri_contour_plot(
    mesh: &TriMesh,
    values: &[f64],
    levels: &[f64],
    opts: &ContourPlotOptions,
) -> Result<String> {
    let topology = MeshTopology::from_mesh(mesh)?;
    let tracer = ContourTracer::new(mesh, &topology, values)?.with_tie_break(opts.tie_break);
    let colors = level_colors(levels.len(), opts.colors.as_deref());

    let mut s = String::new();
    let mut num_lines = 0;
    for (&level, color) in levels.iter().zip(colors) {
        let line_opts = LineOptions {
            color,
            ..opts.line.clone()
        };
        for line in tracer.trace(level)? {
            s.push_str(&line_plot(&line, &line_opts)?);
            num_lines += 1;
        }
    }

    debug!(
        num_triangles = mesh.num_triangles(),
        num_levels = levels.len(),
        num_lines,
        "Rendered contour plot"
    );

    Ok(s)
}

/// Same as [`tri_contour_plot`] for a quad mesh; each quad `(a, b, c, d)` is
/// split into `(a, b, c)` and `(a, c, d)`.
pub fn quad_contour_plot(
    x: Vec<f64>,
    y: Vec<f64>,
    quads: &[[VertexId; 4]],
    values: &[f64],
    levels: &[f64],
    opts: &ContourPlotOptions,
) -> Result<String> {
    let mesh = TriMesh::from_quads(x, y, quads)?;
    tri_contour_plot(&mesh, values, levels, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_colors() {
        let named = vec!["red".to_string(), "blue".to_string()];
        assert_eq!(level_colors(2, Some(&named)), named);
        assert_eq!(level_colors(3, Some(&named)), vec!["black"; 3]);
        assert_eq!(level_colors(2, None), vec!["black"; 2]);
    }
}
