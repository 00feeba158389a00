//! Axis lines, ticks and labels.

use mesh_contour::Viewport;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::format::{format_g, point};
use crate::transform::Transform;

/// How the axis lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisStyle {
    /// Range frame: each axis spans only first to last tick, with end caps
    /// and ticks pointing outward.
    #[default]
    #[serde(rename = "r-style")]
    RStyle,
    /// Full-length axes along the viewport's lower and left edges, ticks
    /// pointing inward.
    #[serde(rename = "classic")]
    Classic,
}

/// Axis configuration. Ticks are in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions {
    pub style: AxisStyle,
    pub xticks: Vec<f64>,
    pub yticks: Vec<f64>,
    /// Explicit tick labels; numeric ticks are printed with `%g` otherwise.
    pub xtick_labels: Option<Vec<String>>,
    pub ytick_labels: Option<Vec<String>>,
    pub tick_font: String,
    pub tick_line: String,
    pub label_font: String,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// Label distance from the axis as a fraction of the viewport height
    /// (x label) or width (y label).
    pub xlabel_offset: f64,
    pub ylabel_offset: f64,
    pub axis_line: String,
    pub axis_color: String,
    /// Tick length as a fraction of the smaller drawn viewport side.
    pub tick_frac: f64,
    pub transform: Transform,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            style: AxisStyle::RStyle,
            xticks: vec![],
            yticks: vec![],
            xtick_labels: None,
            ytick_labels: None,
            tick_font: "normalsize".to_string(),
            tick_line: "semithick".to_string(),
            label_font: "Large".to_string(),
            xlabel: Some("x".to_string()),
            ylabel: Some("y".to_string()),
            xlabel_offset: 0.1,
            ylabel_offset: 0.15,
            axis_line: "thick".to_string(),
            axis_color: "gray".to_string(),
            tick_frac: 0.05,
            transform: Transform::identity(),
        }
    }
}

fn tick_labels(ticks: &[f64], labels: Option<&[String]>, axis: &str) -> Result<Vec<String>> {
    match labels {
        None => Ok(ticks.iter().map(|&v| format_g(v)).collect()),
        Some(labels) if labels.len() == ticks.len() => Ok(labels.to_vec()),
        Some(labels) => Err(RenderError::invalid_input(format!(
            "{} axis has {} ticks but {} tick labels",
            axis,
            ticks.len(),
            labels.len()
        ))),
    }
}

/// TikZ commands for both axes of `viewport`.
///
/// # Errors
///
/// Returns [`RenderError::InvalidInput`] when explicit tick labels do not
/// match the tick count.
pub fn axes(viewport: &Viewport, opts: &AxesOptions) -> Result<String> {
    let t = &opts.transform;
    let (xmin, xmax, ymin, ymax) = (viewport.xmin(), viewport.xmax(), viewport.ymin(), viewport.ymax());

    let xlabels = tick_labels(&opts.xticks, opts.xtick_labels.as_deref(), "x")?;
    let ylabels = tick_labels(&opts.yticks, opts.ytick_labels.as_deref(), "y")?;

    let tick = (opts.tick_frac * (ymax - ymin) * t.yscale).min(opts.tick_frac * (xmax - xmin) * t.xscale);
    let (x0, y0) = (t.x(xmin), t.y(ymin));
    let axis = format!("\\draw[{}, color={}]", opts.axis_line, opts.axis_color);

    let mut s = String::new();
    match opts.style {
        AxisStyle::RStyle => {
            if let [first, .., last] = opts.xticks[..] {
                let (a, b) = (t.x(first), t.x(last));
                s.push_str(&format!(
                    "{} {} -- {} -- {} -- {};\n",
                    axis,
                    point(a, y0 - tick),
                    point(a, y0),
                    point(b, y0),
                    point(b, y0 - tick)
                ));
            }
            if let [first, .., last] = opts.yticks[..] {
                let (a, b) = (t.y(first), t.y(last));
                s.push_str(&format!(
                    "{} {} -- {} -- {} -- {};\n",
                    axis,
                    point(x0 - tick, a),
                    point(x0, a),
                    point(x0, b),
                    point(x0 - tick, b)
                ));
            }
        }
        AxisStyle::Classic => {
            s.push_str(&format!("{} {} -- {};\n", axis, point(x0, y0), point(t.x(xmax), y0)));
            s.push_str(&format!("{} {} -- {};\n", axis, point(x0, y0), point(x0, t.y(ymax))));
        }
    }

    if let Some(label) = &opts.xlabel {
        let at = point(
            t.x(0.5 * (xmin + xmax)),
            t.y(ymin - opts.xlabel_offset * (ymax - ymin)),
        );
        s.push_str(&format!("\\draw[font=\\{}] {} node[below] {{{}}};\n", opts.label_font, at, label));
    }
    if let Some(label) = &opts.ylabel {
        let at = point(
            t.x(xmin - opts.ylabel_offset * (xmax - xmin)),
            t.y(0.5 * (ymin + ymax)),
        );
        s.push_str(&format!("\\draw[font=\\{}] {} node[rotate=90] {{{}}};\n", opts.label_font, at, label));
    }

    let tick_style = format!(
        "\\draw[font=\\{}, {}, color={}, text=black]",
        opts.tick_font, opts.tick_line, opts.axis_color
    );
    // Outward ticks for the range frame, inward for classic axes
    let (outer, inner) = match opts.style {
        AxisStyle::RStyle => (-tick, 0.0),
        AxisStyle::Classic => (0.0, tick),
    };

    for (&v, label) in opts.xticks.iter().zip(&xlabels) {
        let x = t.x(v);
        s.push_str(&format!(
            "{} {} -- {} node[below] {{{}}};\n",
            tick_style,
            point(x, y0 + inner),
            point(x, y0 + outer),
            label
        ));
    }
    for (&v, label) in opts.yticks.iter().zip(&ylabels) {
        let y = t.y(v);
        s.push_str(&format!(
            "{} {} -- {} node[left] {{{}}};\n",
            tick_style,
            point(x0 + inner, y),
            point(x0 + outer, y),
            label
        ));
    }

    Ok(s)
}
