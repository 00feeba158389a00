//! Mapping from data coordinates to drawing coordinates.

use mesh_contour::Point2D;
use serde::{Deserialize, Serialize};

/// Per-axis affine map `draw = scale * (data - base)`.
///
/// Scaling also controls apparent line weight: smaller scales give thicker
/// lines relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub xscale: f64,
    pub xbase: f64,
    pub yscale: f64,
    pub ybase: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            xscale: 1.0,
            xbase: 0.0,
            yscale: 1.0,
            ybase: 0.0,
        }
    }

    /// Independent x and y scales with zero base.
    pub fn scaled(xscale: f64, yscale: f64) -> Self {
        Self {
            xscale,
            yscale,
            ..Self::identity()
        }
    }

    pub fn x(&self, x: f64) -> f64 {
        self.xscale * (x - self.xbase)
    }

    pub fn y(&self, y: f64) -> f64 {
        self.yscale * (y - self.ybase)
    }

    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(self.x(p.x), self.y(p.y))
    }
}
