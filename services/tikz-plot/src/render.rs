//! Turn parsed inputs and a style into standalone TikZ documents.

use anyhow::{bail, Context, Result};
use mesh_contour::{field_range, generate_contour_levels, Bounds, Point2D, TriMesh, Viewport};
use tikz_renderer::{
    axes, bar_chart, define_colors, legend_entry, line_plot, tri_contour_plot, zip_points,
    AxesOptions, BarOptions, ContourPlotOptions, LineOptions, PlotStyle,
};
use tracing::{info, warn};

use crate::input::{BarInput, MeshInput, SeriesInput};

/// Level overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct LevelOptions {
    /// Explicit levels. Wins over everything else.
    pub levels: Option<Vec<f64>>,
    /// Every multiple of this spacing within the field range.
    pub interval: Option<f64>,
}

/// Pick contour levels: explicit levels, then an interval over the field
/// range, then the levels stored in the input.
pub fn resolve_levels(opts: &LevelOptions, input_levels: &[f64], values: &[f64]) -> Result<Vec<f64>> {
    if let Some(levels) = &opts.levels {
        if levels.is_empty() {
            bail!("--levels is empty");
        }
        return Ok(levels.clone());
    }

    if let Some(interval) = opts.interval {
        let (lo, hi) = field_range(values).context("field has no finite values")?;
        let levels = generate_contour_levels(lo, hi, interval)?;
        if levels.is_empty() {
            bail!("no multiple of {} lies in the field range [{}, {}]", interval, lo, hi);
        }
        return Ok(levels);
    }

    if !input_levels.is_empty() {
        return Ok(input_levels.to_vec());
    }

    bail!("no contour levels: pass --levels or --interval, or list levels in the input")
}

/// First viewport given, else the bounds of `data`.
fn resolve_viewport(
    input: Option<Viewport>,
    style: Option<Viewport>,
    data: Option<Bounds>,
) -> Result<Viewport> {
    if let Some(viewport) = input.or(style) {
        return Ok(viewport);
    }
    let bounds = data.context("no finite data to derive a viewport from")?;
    Ok(Viewport::try_from(bounds)?)
}

/// Both ends and the midpoint.
fn default_ticks(min: f64, max: f64) -> Vec<f64> {
    vec![min, 0.5 * (min + max), max]
}

/// Style axes with default ticks filled in where the style has none.
fn axes_options(style: &PlotStyle, viewport: &Viewport) -> AxesOptions {
    let mut opts = style.axes_options();
    if opts.xticks.is_empty() && opts.xtick_labels.is_none() {
        opts.xticks = default_ticks(viewport.xmin(), viewport.xmax());
    }
    if opts.yticks.is_empty() && opts.ytick_labels.is_none() {
        opts.yticks = default_ticks(viewport.ymin(), viewport.ymax());
    }
    opts
}

fn build_mesh(input: &MeshInput) -> Result<TriMesh> {
    let (x, y) = (input.x.clone(), input.y.clone());
    let mesh = match (&input.triangles, &input.quads) {
        (Some(_), Some(_)) => bail!("mesh input has both triangles and quads"),
        (Some(triangles), None) => TriMesh::new(x, y, triangles.clone())?,
        (None, Some(quads)) => TriMesh::from_quads(x, y, quads)?,
        (None, None) => bail!("mesh input needs triangles or quads"),
    };
    Ok(mesh)
}

/// Contour document for a mesh field.
pub fn render_contour(input: &MeshInput, style: &PlotStyle, level_opts: &LevelOptions) -> Result<String> {
    let mesh = build_mesh(input).context("Invalid mesh")?;
    let levels = resolve_levels(level_opts, &input.levels, &input.values)?;
    let viewport = resolve_viewport(input.viewport, style.viewport, mesh.bounds())?;

    let (defs, names) = define_colors("contour", &style.colors(levels.len()));
    let opts = ContourPlotOptions {
        line: LineOptions {
            viewport: Some(viewport),
            ..style.line_options("black")
        },
        colors: Some(names),
        ..Default::default()
    };

    let mut fig = style.figure();
    fig.push(&defs);
    fig.push(&tri_contour_plot(&mesh, &input.values, &levels, &opts).context("Contouring failed")?);
    fig.push(&axes(&viewport, &axes_options(style, &viewport))?);

    info!(
        num_vertices = mesh.num_vertices(),
        num_triangles = mesh.num_triangles(),
        num_levels = levels.len(),
        "Rendered contour document"
    );
    Ok(fig.finish())
}

/// Line plot document for a set of curves.
pub fn render_plot(input: &SeriesInput, style: &PlotStyle) -> Result<String> {
    if input.series.is_empty() {
        bail!("plot input has no series");
    }

    let curves: Vec<Vec<Point2D>> = input
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if s.x.len() != s.y.len() {
                warn!(series = i, x = s.x.len(), y = s.y.len(), "Series lengths differ, truncating");
            }
            zip_points(&s.x, &s.y)
        })
        .collect();

    let finite = curves
        .iter()
        .flatten()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite());
    let viewport = resolve_viewport(input.viewport, style.viewport, Bounds::from_points(finite))?;

    let (defs, names) = define_colors("series", &style.colors(input.series.len()));
    let line_opts: Vec<LineOptions> = input
        .series
        .iter()
        .zip(&names)
        .map(|(s, name)| LineOptions {
            symbol: s.symbol,
            viewport: Some(viewport),
            ..style.line_options(s.color.as_deref().unwrap_or(name.as_str()))
        })
        .collect();

    let mut fig = style.figure();
    fig.push(&defs);
    for (points, opts) in curves.iter().zip(&line_opts) {
        fig.push(&line_plot(points, opts)?);
    }

    if let Some(legend) = &input.legend {
        let labeled = input
            .series
            .iter()
            .zip(&line_opts)
            .filter_map(|(s, opts)| s.label.as_deref().map(|label| (label, opts)));
        for (row, (label, opts)) in labeled.enumerate() {
            let y = legend.y - row as f64 * legend.spacing;
            fig.push(&legend_entry(legend.x, y, legend.length, label, &legend.font, opts)?);
        }
    }

    fig.push(&axes(&viewport, &axes_options(style, &viewport))?);

    info!(num_series = curves.len(), "Rendered plot document");
    Ok(fig.finish())
}

/// Viewport holding every group with half a unit of margin and the zero
/// line.
fn bar_viewport(groups: &[Vec<f64>]) -> Result<Viewport> {
    let (lo, hi) = field_range(&groups.concat()).context("bar input has no finite values")?;
    Ok(Viewport::new(0.5, groups.len() as f64 + 0.5, lo.min(0.0), hi.max(0.0))?)
}

/// Grouped bar chart document.
pub fn render_bar(input: &BarInput, style: &PlotStyle) -> Result<String> {
    if input.groups.is_empty() {
        bail!("bar input has no groups");
    }

    let viewport = match input.viewport.or(style.viewport) {
        Some(viewport) => viewport,
        None => bar_viewport(&input.groups)?,
    };

    let widest = input.groups.iter().map(Vec::len).max().unwrap_or(0);
    let (defs, names) = define_colors("bar", &style.colors(widest));
    let defaults = BarOptions::default();
    let opts = BarOptions {
        colors: names,
        x_sep: input.x_sep.unwrap_or(defaults.x_sep),
        bar_width: input.bar_width,
        bar_offset: input.bar_offset,
        line: style.line.clone(),
        transform: style.transform,
    };

    let mut fig = style.figure();
    fig.push(&defs);
    fig.push(&bar_chart(&input.groups, &viewport, &opts));
    fig.push(&axes(&viewport, &axes_options(style, &viewport))?);

    info!(num_groups = input.groups.len(), bars_per_group = widest, "Rendered bar document");
    Ok(fig.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_priority() {
        let values = [0.0, 1.0, 2.0];
        let input = [0.5];

        let explicit = LevelOptions {
            levels: Some(vec![1.5]),
            interval: Some(0.5),
        };
        assert_eq!(resolve_levels(&explicit, &input, &values).unwrap(), vec![1.5]);

        let interval = LevelOptions {
            levels: None,
            interval: Some(0.5),
        };
        assert_eq!(
            resolve_levels(&interval, &input, &values).unwrap(),
            vec![0.0, 0.5, 1.0, 1.5, 2.0]
        );

        assert_eq!(resolve_levels(&LevelOptions::default(), &input, &values).unwrap(), vec![0.5]);
        assert!(resolve_levels(&LevelOptions::default(), &[], &values).is_err());
    }

    #[test]
    fn test_interval_outside_range() {
        let opts = LevelOptions {
            levels: None,
            interval: Some(10.0),
        };
        assert!(resolve_levels(&opts, &[], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_tiny_interval_is_an_error() {
        let opts = LevelOptions {
            levels: None,
            interval: Some(1e-300),
        };
        let err = resolve_levels(&opts, &[], &[0.0, 1.0]).unwrap_err();
        assert!(err.to_string().contains("more than 10000 levels"));
    }

    #[test]
    fn test_default_ticks() {
        assert_eq!(default_ticks(-1.0, 3.0), vec![-1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_bar_viewport_includes_zero() {
        let vp = bar_viewport(&[vec![1.0, 2.0], vec![3.0]]).unwrap();
        assert_eq!((vp.xmin(), vp.xmax(), vp.ymin(), vp.ymax()), (0.5, 2.5, 0.0, 3.0));
    }

    #[test]
    fn test_mesh_needs_one_connectivity() {
        let input = MeshInput {
            x: vec![0.0, 1.0, 0.0],
            y: vec![0.0, 0.0, 1.0],
            values: vec![0.0, 1.0, 2.0],
            triangles: None,
            quads: None,
            levels: vec![],
            viewport: None,
        };
        assert!(build_mesh(&input).is_err());
    }
}
