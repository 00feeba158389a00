//! Basic 2D data-space types shared by the tracer, the clipper and renderers.

use serde::{Deserialize, Serialize};

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at parameter `t` along `self -> other`, computed as
    /// `(1 - t) * self + t * other`.
    pub fn lerp(self, other: Point2D, t: f64) -> Point2D {
        Point2D::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in data space (unvalidated).
///
/// Use [`Viewport`](crate::clip::Viewport) when the box is used for clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Bounds {
            xmin: first.x,
            xmax: first.x,
            ymin: first.y,
            ymax: first.y,
        };
        Some(iter.fold(init, |b, p| Bounds {
            xmin: b.xmin.min(p.x),
            xmax: b.xmax.max(p.x),
            ymin: b.ymin.min(p.y),
            ymax: b.ymax.max(p.y),
        }))
    }
}
