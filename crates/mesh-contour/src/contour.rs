//! Iso-contour tracing on triangle meshes (marching triangles).
//!
//! For a level `L`, every mesh edge whose end values straddle `L` carries one
//! crossing point. Triangles with exactly two crossing edges are chained into
//! polylines by stepping across shared edges, using the adjacency from
//! [`MeshTopology`].

use std::collections::VecDeque;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContourError, Result};
use crate::geometry::Point2D;
use crate::mesh::{TriMesh, TriangleId};
use crate::topology::{EdgeId, MeshTopology};

/// An open polyline in data space.
pub type Polyline = Vec<Point2D>;

/// A traced polyline tagged with the level it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub level: f64,
    pub points: Polyline,
}

/// How a vertex value exactly equal to the level is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// An edge crosses only if one end is strictly below and the other
    /// strictly above the level. Contours running exactly through a vertex
    /// can break at that vertex.
    #[default]
    Strict,
    /// Values `>= level` count as above. Every triangle then has zero or two
    /// crossing edges; a crossing may sit exactly on a vertex.
    EqualAsAbove,
}

impl TieBreak {
    /// Whether the edge with end values `a` and `b` crosses `level`.
    ///
    /// Edges with a NaN or infinite end never cross.
    pub fn crosses(self, a: f64, b: f64, level: f64) -> bool {
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        match self {
            TieBreak::Strict => (a < level && b > level) || (a > level && b < level),
            TieBreak::EqualAsAbove => (a >= level) != (b >= level),
        }
    }
}

/// Point where the linear interpolant between `(p0, v0)` and `(p1, v1)`
/// equals `level`.
///
/// Uses `t = (level - v0) / (v1 - v0)` and `(1 - t) * p0 + t * p1`.
///
/// # Errors
///
/// Returns [`ContourError::NumericDegeneracy`] when `v0 == v1`.
pub fn interpolate_crossing(p0: Point2D, p1: Point2D, v0: f64, v1: f64, level: f64) -> Result<Point2D> {
    if v0 == v1 {
        return Err(ContourError::numeric_degeneracy(format!(
            "cannot interpolate level {} between equal values {}",
            level, v0
        )));
    }
    let t = (level - v0) / (v1 - v0);
    Ok(p0.lerp(p1, t))
}

/// Traces contour levels of one scalar field over one mesh.
///
/// The tracer only borrows its inputs; all per-level bookkeeping lives inside
/// each [`trace`](Self::trace) call, so one tracer can serve many levels
/// concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ContourTracer<'a> {
    mesh: &'a TriMesh,
    topology: &'a MeshTopology,
    values: &'a [f64],
    tie_break: TieBreak,
}

impl<'a> ContourTracer<'a> {
    /// Create a tracer for `values` sampled at the vertices of `mesh`.
    ///
    /// # Errors
    ///
    /// - [`ContourError::DegenerateQuery`] if `values` does not have one entry
    ///   per vertex.
    /// - [`ContourError::InvalidMesh`] if `topology` was not built from a mesh
    ///   of this shape.
    pub fn new(mesh: &'a TriMesh, topology: &'a MeshTopology, values: &'a [f64]) -> Result<Self> {
        if values.len() != mesh.num_vertices() {
            return Err(ContourError::degenerate_query(format!(
                "field has {} values but mesh has {} vertices",
                values.len(),
                mesh.num_vertices()
            )));
        }
        if topology.num_triangles() != mesh.num_triangles()
            || topology.num_vertices() != mesh.num_vertices()
        {
            return Err(ContourError::invalid_mesh(format!(
                "topology ({} vertices, {} triangles) does not match mesh ({} vertices, {} triangles)",
                topology.num_vertices(),
                topology.num_triangles(),
                mesh.num_vertices(),
                mesh.num_triangles()
            )));
        }
        Ok(Self {
            mesh,
            topology,
            values,
            tie_break: TieBreak::default(),
        })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Trace all polylines of a single level.
    ///
    /// Seeds are visited in triangle order, so output is deterministic for a
    /// given mesh ordering. A level outside the field range yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::DegenerateQuery`] for a non-finite level.
    pub fn trace(&self, level: f64) -> Result<Vec<Polyline>> {
        if !level.is_finite() {
            return Err(ContourError::degenerate_query(format!(
                "contour level must be finite, got {}",
                level
            )));
        }

        let crossings = self.edge_crossings(level)?;
        let mut consumed = vec![false; self.mesh.num_triangles()];
        let mut lines = Vec::new();

        for seed in 0..self.mesh.num_triangles() {
            if consumed[seed] {
                continue;
            }
            let Some([first, second]) = self.crossing_edges(seed, &crossings) else {
                continue;
            };
            let (Some(p_first), Some(p_second)) = (crossings[first], crossings[second]) else {
                continue;
            };
            consumed[seed] = true;

            let mut points = VecDeque::from([p_first, p_second]);
            self.walk(seed, second, &crossings, &mut consumed, |p| points.push_back(p));
            self.walk(seed, first, &crossings, &mut consumed, |p| points.push_front(p));

            lines.push(Vec::from(points));
        }

        Ok(lines)
    }

    /// Trace every level in `levels`, in parallel.
    ///
    /// Results are ordered by the position of the level in `levels`, then by
    /// seed triangle.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::DegenerateQuery`] for an empty level list or a
    /// non-finite level.
    pub fn trace_levels(&self, levels: &[f64]) -> Result<Vec<Contour>> {
        if levels.is_empty() {
            return Err(ContourError::degenerate_query("no contour levels requested"));
        }

        let per_level = levels
            .par_iter()
            .map(|&level| {
                self.trace(level).map(|lines| {
                    lines
                        .into_iter()
                        .map(|points| Contour { level, points })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let contours: Vec<Contour> = per_level.into_iter().flatten().collect();

        debug!(
            num_levels = levels.len(),
            num_contours = contours.len(),
            total_points = contours.iter().map(|c| c.points.len()).sum::<usize>(),
            "Traced contour levels"
        );

        Ok(contours)
    }

    /// Crossing point per edge id, `None` where the edge does not cross.
    fn edge_crossings(&self, level: f64) -> Result<Vec<Option<Point2D>>> {
        self.topology
            .edges()
            .iter()
            .map(|record| {
                let (a, b) = (record.edge.v0, record.edge.v1);
                let (va, vb) = (self.values[a], self.values[b]);
                if !self.tie_break.crosses(va, vb, level) {
                    return Ok(None);
                }
                debug_assert!(va != vb, "crossing edge with equal end values");
                interpolate_crossing(self.mesh.point(a), self.mesh.point(b), va, vb, level).map(Some)
            })
            .collect()
    }

    /// The two crossing edges of `t` in local slot order, or `None` if the
    /// triangle does not have exactly two.
    fn crossing_edges(&self, t: TriangleId, crossings: &[Option<Point2D>]) -> Option<[EdgeId; 2]> {
        let mut found = [0; 2];
        let mut count = 0;
        for e in self.topology.triangle_edges(t) {
            if crossings[e].is_some() {
                if count == 2 {
                    return None;
                }
                found[count] = e;
                count += 1;
            }
        }
        (count == 2).then_some(found)
    }

    /// Step away from `start` through `exit`, emitting the far crossing point
    /// of each triangle entered, until the boundary, a consumed triangle or a
    /// triangle without a pair of crossings is reached.
    fn walk<F>(
        &self,
        start: TriangleId,
        exit: EdgeId,
        crossings: &[Option<Point2D>],
        consumed: &mut [bool],
        mut emit: F,
    ) where
        F: FnMut(Point2D),
    {
        let mut current = start;
        let mut exit = exit;

        while let Some(next) = self.topology.edge_owners(exit).other(current) {
            if consumed[next] {
                break;
            }
            let Some([a, b]) = self.crossing_edges(next, crossings) else {
                break;
            };
            let out = if a == exit { b } else { a };
            let Some(point) = crossings[out] else {
                break;
            };
            emit(point);
            consumed[next] = true;
            current = next;
            exit = out;
        }
    }
}

/// Build topology for `mesh` and trace every level of `values`.
pub fn trace_contours(mesh: &TriMesh, values: &[f64], levels: &[f64]) -> Result<Vec<Contour>> {
    let topology = MeshTopology::from_mesh(mesh)?;
    ContourTracer::new(mesh, &topology, values)?.trace_levels(levels)
}

/// Most levels [`generate_contour_levels`] will produce.
pub const MAX_GENERATED_LEVELS: usize = 10_000;

/// Generate contour levels at every multiple of `interval` within
/// `[min_value, max_value]`.
///
/// An invalid interval or an empty range yields no levels.
///
/// # Errors
///
/// Returns [`ContourError::DegenerateQuery`] when the range holds more than
/// [`MAX_GENERATED_LEVELS`] multiples of `interval`.
pub fn generate_contour_levels(min_value: f64, max_value: f64, interval: f64) -> Result<Vec<f64>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Ok(vec![]);
    }
    if !min_value.is_finite() || !max_value.is_finite() || max_value <= min_value {
        return Ok(vec![]);
    }

    // Tolerance keeps multiples that land on the bounds after rounding
    let first = (min_value / interval - 1e-9).ceil();
    let last = (max_value / interval + 1e-9).floor();
    let count = last - first + 1.0;

    if !count.is_finite() || count > MAX_GENERATED_LEVELS as f64 {
        return Err(ContourError::degenerate_query(format!(
            "interval {} over [{}, {}] gives more than {} levels",
            interval, min_value, max_value, MAX_GENERATED_LEVELS
        )));
    }
    if count < 1.0 {
        return Ok(vec![]);
    }

    Ok((0..count as usize).map(|k| (first + k as f64) * interval).collect())
}

/// Minimum and maximum of the finite values in a field.
pub fn field_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
