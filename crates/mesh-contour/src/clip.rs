//! Parametric (Liang–Barsky) clipping of segments against a rectangle.
//!
//! A segment `p1 -> p2` is parameterised as `p(u) = (1 - u) * p1 + u * p2`
//! for `u` in `[0, 1]`. Clipping narrows that range to the part of the
//! segment inside the closed viewport.

use serde::{Deserialize, Serialize};

use crate::contour::Polyline;
use crate::error::{ContourError, Result};
use crate::geometry::{Bounds, Point2D};

/// Closed axis-aligned clipping rectangle with `xmin <= xmax` and
/// `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Bounds", into = "Bounds")]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

/// Parameter range of the visible part of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipInterval {
    pub umin: f64,
    pub umax: f64,
}

/// Outcome of clipping one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// Part of the segment lies inside the viewport. `umin == umax` is a
    /// single touching point.
    Visible(ClipInterval),
    /// The segment misses the viewport entirely.
    Outside,
}

impl ClipResult {
    pub fn is_visible(&self) -> bool {
        matches!(self, ClipResult::Visible(_))
    }

    pub fn interval(&self) -> Option<ClipInterval> {
        match *self {
            ClipResult::Visible(iv) => Some(iv),
            ClipResult::Outside => None,
        }
    }
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::DegenerateQuery`] if `xmin > xmax`,
    /// `ymin > ymax` or any bound is NaN.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if [xmin, xmax, ymin, ymax].iter().any(|v| v.is_nan()) {
            return Err(ContourError::degenerate_query(format!(
                "viewport bounds must not be NaN: x [{}, {}], y [{}, {}]",
                xmin, xmax, ymin, ymax
            )));
        }
        if xmin > xmax || ymin > ymax {
            return Err(ContourError::degenerate_query(format!(
                "inverted viewport: x [{}, {}], y [{}, {}]",
                xmin, xmax, ymin, ymax
            )));
        }
        Ok(Self { xmin, xmax, ymin, ymax })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Parameter interval of the part of `p1 -> p2` inside the viewport.
    pub fn clip(&self, p1: Point2D, p2: Point2D) -> ClipResult {
        if ![p1.x, p1.y, p2.x, p2.y].iter().all(|v| v.is_finite()) {
            return ClipResult::Outside;
        }

        let mut umin = 0.0_f64;
        let mut umax = 1.0_f64;

        let axes = [
            (p1.x, p2.x - p1.x, self.xmin, self.xmax),
            (p1.y, p2.y - p1.y, self.ymin, self.ymax),
        ];
        for (start, delta, lo, hi) in axes {
            if delta > 0.0 {
                umin = umin.max((lo - start) / delta);
                umax = umax.min((hi - start) / delta);
            } else if delta < 0.0 {
                umin = umin.max((hi - start) / delta);
                umax = umax.min((lo - start) / delta);
            } else if start < lo || start > hi {
                // Parallel to this axis and outside its slab
                return ClipResult::Outside;
            }
        }

        if umin > umax {
            ClipResult::Outside
        } else {
            ClipResult::Visible(ClipInterval { umin, umax })
        }
    }

    /// Clipped endpoints of `p1 -> p2`, or `None` when nothing is visible.
    ///
    /// Endpoints are snapped onto the closed viewport, so re-clipping the
    /// result yields the full `[0, 1]` interval.
    pub fn clip_points(&self, p1: Point2D, p2: Point2D) -> Option<(Point2D, Point2D)> {
        self.clip(p1, p2)
            .interval()
            .map(|iv| (self.point_at(p1, p2, iv.umin), self.point_at(p1, p2, iv.umax)))
    }

    /// Split a polyline into the runs visible inside the viewport.
    ///
    /// Each link is clipped on its own; a run ends whenever a link leaves the
    /// viewport and a new one starts where a link re-enters it. Every run has
    /// at least two points and no two consecutive points are equal.
    pub fn clip_polyline(&self, points: &[Point2D]) -> Vec<Polyline> {
        let mut runs = Vec::new();
        let mut current: Vec<Point2D> = Vec::new();

        for link in points.windows(2) {
            let (p1, p2) = (link[0], link[1]);
            match self.clip(p1, p2) {
                ClipResult::Visible(iv) => {
                    if iv.umin > 0.0 && !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                    let (a, b) = (self.point_at(p1, p2, iv.umin), self.point_at(p1, p2, iv.umax));
                    // Zero-length visible parts (corner touches, repeated
                    // points) add nothing to a run
                    if a != b {
                        if current.is_empty() {
                            current.push(a);
                        }
                        if current.last() != Some(&b) {
                            current.push(b);
                        }
                    }
                    if iv.umax < 1.0 && !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
                ClipResult::Outside => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs
    }

    fn point_at(&self, p1: Point2D, p2: Point2D, u: f64) -> Point2D {
        let p = p1.lerp(p2, u);
        Point2D::new(p.x.clamp(self.xmin, self.xmax), p.y.clamp(self.ymin, self.ymax))
    }
}

impl TryFrom<Bounds> for Viewport {
    type Error = ContourError;

    fn try_from(b: Bounds) -> Result<Self> {
        Viewport::new(b.xmin, b.xmax, b.ymin, b.ymax)
    }
}

impl From<Viewport> for Bounds {
    fn from(v: Viewport) -> Self {
        Bounds {
            xmin: v.xmin,
            xmax: v.xmax,
            ymin: v.ymin,
            ymax: v.ymax,
        }
    }
}

/// Clip `p1 -> p2` against a rectangle given by its bounds.
///
/// # Errors
///
/// Returns [`ContourError::DegenerateQuery`] for inverted or NaN bounds.
pub fn clip_segment(p1: Point2D, p2: Point2D, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<ClipResult> {
    Ok(Viewport::new(xmin, xmax, ymin, ymax)?.clip(p1, p2))
}
