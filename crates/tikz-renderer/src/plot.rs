//! Clipped line plots with optional point markers.

use mesh_contour::{Bounds, Point2D, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_g, point};
use crate::transform::Transform;

/// Marker drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Circle,
    Square,
    /// Upward-pointing triangle.
    Triangle,
    /// Downward-pointing triangle.
    Delta,
    Diamond,
}

/// Drawing options for [`line_plot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// TikZ line width keyword (`thick`, `ultra thick`, ...). `None` draws
    /// markers only.
    pub line: Option<String>,
    pub color: String,
    /// Marker fill.
    pub fill_color: String,
    pub symbol: Option<Symbol>,
    /// Line width keyword for marker outlines.
    pub symbol_line: String,
    /// Marker size in drawing units.
    pub symbol_size: f64,
    /// Clip box in data coordinates. Defaults to the bounds of the data.
    pub viewport: Option<Viewport>,
    pub transform: Transform,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            line: Some("thick".to_string()),
            color: "black".to_string(),
            fill_color: "white".to_string(),
            symbol: None,
            symbol_line: "thin".to_string(),
            symbol_size: 0.15,
            viewport: None,
            transform: Transform::identity(),
        }
    }
}

/// Pair up parallel coordinate arrays, truncating to the shorter one.
pub fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
    xs.iter().zip(ys).map(|(&x, &y)| Point2D::new(x, y)).collect()
}

/// TikZ commands for the polyline through `points`, clipped to the viewport.
///
/// Without a marker, each visible run becomes one `\draw` command. With a
/// marker, each visible link is drawn on its own and markers are added for
/// the points inside the viewport.
pub fn line_plot(points: &[Point2D], opts: &LineOptions) -> Result<String> {
    let viewport = match opts.viewport {
        Some(v) => v,
        None => {
            let finite = points.iter().copied().filter(|p| p.x.is_finite() && p.y.is_finite());
            match Bounds::from_points(finite) {
                Some(b) => Viewport::try_from(b)?,
                None => return Ok(String::new()),
            }
        }
    };
    let t = &opts.transform;

    let mut s = String::new();
    if let Some(line) = &opts.line {
        let prefix = format!("\\draw[{}, color={}] ", line, opts.color);
        match opts.symbol {
            None => {
                for run in viewport.clip_polyline(points) {
                    let coords: Vec<String> = run
                        .iter()
                        .map(|&p| {
                            let q = t.apply(p);
                            point(q.x, q.y)
                        })
                        .collect();
                    s.push_str(&prefix);
                    s.push_str(&coords.join(" -- "));
                    s.push_str(";\n");
                }
            }
            Some(_) => {
                for link in points.windows(2) {
                    if let Some((a, b)) = viewport.clip_points(link[0], link[1]).filter(|(a, b)| a != b) {
                        let (a, b) = (t.apply(a), t.apply(b));
                        s.push_str(&format!("{}{} -- {};\n", prefix, point(a.x, a.y), point(b.x, b.y)));
                    }
                }
            }
        }
    }

    if let Some(symbol) = opts.symbol {
        let style = format!(
            "\\draw[{}, color={}, fill={}]",
            opts.symbol_line, opts.color, opts.fill_color
        );
        for &p in points.iter().filter(|&&p| viewport.contains(p)) {
            s.push_str(&marker(symbol, &style, t.apply(p), opts.symbol_size));
        }
    }

    Ok(s)
}

/// One marker centered on `c` (drawing coordinates).
fn marker(symbol: Symbol, style: &str, c: Point2D, size: f64) -> String {
    let h = 0.5 * size;
    let (x, y) = (c.x, c.y);
    match symbol {
        Symbol::Circle => format!("{} {} circle ({});\n", style, point(x, y), format_g(h)),
        Symbol::Square => format!(
            "{} {} rectangle {};\n",
            style,
            point(x - h, y - h),
            point(x + h, y + h)
        ),
        Symbol::Triangle => format!(
            "{} {} -- {} -- {} -- cycle;\n",
            style,
            point(x - 0.45 * size, y - h),
            point(x + 0.45 * size, y - h),
            point(x, y + h)
        ),
        Symbol::Delta => format!(
            "{} {} -- {} -- {} -- cycle;\n",
            style,
            point(x - 0.45 * size, y + h),
            point(x + 0.45 * size, y + h),
            point(x, y - h)
        ),
        Symbol::Diamond => format!(
            "{} {} -- {} -- {} -- {} -- cycle;\n",
            style,
            point(x - h, y),
            point(x, y - h),
            point(x + h, y),
            point(x, y + h)
        ),
    }
}
