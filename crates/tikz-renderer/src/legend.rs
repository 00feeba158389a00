//! Legend entries: a short line sample with a label to its right.

use mesh_contour::Point2D;

use crate::error::Result;
use crate::format::point;
use crate::plot::{line_plot, LineOptions};

/// One legend entry centered at `(x, y)` in data coordinates.
///
/// The sample line is `length` long and uses the line, color and marker of
/// `opts`; it is never clipped by `opts.viewport`.
pub fn legend_entry(x: f64, y: f64, length: f64, label: &str, font: &str, opts: &LineOptions) -> Result<String> {
    let sample = [
        Point2D::new(x - 0.5 * length, y),
        Point2D::new(x + 0.5 * length, y),
    ];
    let unclipped = LineOptions {
        viewport: None,
        ..opts.clone()
    };

    let mut s = line_plot(&sample, &unclipped)?;
    let t = &opts.transform;
    s.push_str(&format!(
        "\\draw[font=\\{}] {} node[right] {{{}}};\n",
        font,
        point(t.x(x + 0.75 * length), t.y(y)),
        label
    ));
    Ok(s)
}
