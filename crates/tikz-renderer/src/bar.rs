//! Grouped bar charts.

use mesh_contour::Viewport;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::point;
use crate::transform::Transform;

/// Bar chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    /// One color per bar within a group. Missing entries are drawn black.
    pub colors: Vec<String>,
    /// Gap left between groups, as a fraction of the unit group spacing.
    /// Ignored when `bar_width` is set.
    pub x_sep: f64,
    pub bar_width: Option<f64>,
    /// Shift of every group from its integer position.
    pub bar_offset: f64,
    pub line: String,
    pub transform: Transform,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            colors: vec![],
            x_sep: 0.25,
            bar_width: None,
            bar_offset: 0.0,
            line: "thick".to_string(),
            transform: Transform::identity(),
        }
    }
}

/// TikZ commands for `groups` of bars.
///
/// Group `i` starts at `x = i + 1`. Bars rise from the viewport's `ymin`
/// and are clamped to the viewport; bars that do not rise above `ymin`
/// are skipped.
pub fn bar_chart(groups: &[Vec<f64>], viewport: &Viewport, opts: &BarOptions) -> String {
    let t = &opts.transform;
    let clamp_x = |x: f64| x.clamp(viewport.xmin(), viewport.xmax());
    let clamp_y = |y: f64| y.clamp(viewport.ymin(), viewport.ymax());

    let widest = groups.iter().map(Vec::len).max().unwrap_or(0);
    if opts.colors.len() < widest {
        warn!(
            colors = opts.colors.len(),
            bars_per_group = widest,
            "Fewer bar colors than bars per group, using black for the rest"
        );
    }

    let mut s = String::new();
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            continue;
        }
        let width = opts.bar_width.unwrap_or((1.0 - opts.x_sep) / group.len() as f64);
        let origin = (i + 1) as f64 + opts.bar_offset;

        for (j, &value) in group.iter().enumerate() {
            let x1 = clamp_x(origin + (j as f64 + 0.05) * width);
            let x2 = clamp_x(origin + (j as f64 + 0.95) * width);
            let y1 = viewport.ymin();
            let y2 = clamp_y(value);
            if y2.is_nan() || y2 <= y1 {
                continue;
            }

            let color = opts.colors.get(j).map(String::as_str).unwrap_or("black");
            s.push_str(&format!(
                "\\draw[{}, color={}, fill={}, fill opacity=0.3] {} rectangle {};\n",
                opts.line,
                color,
                color,
                point(t.x(x1), t.y(y1)),
                point(t.x(x2), t.y(y2))
            ));
        }
    }

    s
}
