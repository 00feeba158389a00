//! Validated planar triangle mesh input.
//!
//! A [`TriMesh`] owns parallel `x`/`y` coordinate arrays and triangle
//! connectivity. Construction checks array lengths, index ranges and repeated
//! vertices so the topology builder and tracer can index without bounds
//! surprises.

use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};
use crate::geometry::{Bounds, Point2D};

/// Triangle index in the mesh connectivity.
pub type TriangleId = usize;

/// Vertex index into the coordinate/value arrays.
pub type VertexId = usize;

/// A planar triangle mesh with vertex coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    x: Vec<f64>,
    y: Vec<f64>,
    triangles: Vec<[VertexId; 3]>,
}

impl TriMesh {
    /// Build a mesh from parallel coordinate arrays and triangle connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::InvalidMesh`] when `x` and `y` differ in length,
    /// a triangle references a vertex outside `[0, n)`, or a triangle repeats
    /// a vertex.
    pub fn new(x: Vec<f64>, y: Vec<f64>, triangles: Vec<[VertexId; 3]>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ContourError::invalid_mesh(format!(
                "coordinate arrays differ in length: x has {}, y has {}",
                x.len(),
                y.len()
            )));
        }
        validate_triangles(x.len(), &triangles)?;
        Ok(Self { x, y, triangles })
    }

    /// Build a mesh from a flat connectivity list, three indices per triangle.
    pub fn from_flat(x: Vec<f64>, y: Vec<f64>, connectivity: &[VertexId]) -> Result<Self> {
        if connectivity.len() % 3 != 0 {
            return Err(ContourError::invalid_mesh(format!(
                "flat triangle list has {} indices, expected a multiple of 3",
                connectivity.len()
            )));
        }
        let triangles = connectivity
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(x, y, triangles)
    }

    /// Build a mesh from quadrilaterals, splitting each quad `(a, b, c, d)`
    /// into the triangles `(a, b, c)` and `(a, c, d)`.
    pub fn from_quads(x: Vec<f64>, y: Vec<f64>, quads: &[[VertexId; 4]]) -> Result<Self> {
        let triangles = quads
            .iter()
            .flat_map(|q| [[q[0], q[1], q[2]], [q[0], q[2], q[3]]])
            .collect();
        Self::new(x, y, triangles)
    }

    /// Build a quad mesh from a flat connectivity list, four indices per quad.
    pub fn from_flat_quads(x: Vec<f64>, y: Vec<f64>, connectivity: &[VertexId]) -> Result<Self> {
        if connectivity.len() % 4 != 0 {
            return Err(ContourError::invalid_mesh(format!(
                "flat quad list has {} indices, expected a multiple of 4",
                connectivity.len()
            )));
        }
        let quads: Vec<[VertexId; 4]> = connectivity
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_quads(x, y, &quads)
    }

    pub fn num_vertices(&self) -> usize {
        self.x.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn triangles(&self) -> &[[VertexId; 3]] {
        &self.triangles
    }

    pub fn triangle(&self, t: TriangleId) -> [VertexId; 3] {
        self.triangles[t]
    }

    pub fn point(&self, v: VertexId) -> Point2D {
        Point2D::new(self.x[v], self.y[v])
    }

    /// Bounding box of all vertices, `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points((0..self.num_vertices()).map(|v| self.point(v)))
    }
}

/// Check every triangle against the vertex count.
pub(crate) fn validate_triangles(num_vertices: usize, triangles: &[[VertexId; 3]]) -> Result<()> {
    for (t, tri) in triangles.iter().enumerate() {
        if let Some(&v) = tri.iter().find(|&&v| v >= num_vertices) {
            return Err(ContourError::invalid_mesh(format!(
                "triangle {} references vertex {} outside [0, {})",
                t, v, num_vertices
            )));
        }
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[2] == tri[0] {
            return Err(ContourError::invalid_mesh(format!(
                "triangle {} repeats a vertex: {:?}",
                t, tri
            )));
        }
    }
    Ok(())
}

/// Structured grid of `nx` by `ny` vertices over `[x0, x1] x [y0, y1]`,
/// two triangles per cell.
///
/// Vertex `i + nx * j` sits at column `i`, row `j`. Each cell is split along
/// the diagonal from its lower-left to its upper-right corner.
pub fn structured_grid(nx: usize, ny: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Result<TriMesh> {
    if nx < 2 || ny < 2 {
        return Err(ContourError::invalid_mesh(format!(
            "structured grid needs at least 2x2 vertices, got {}x{}",
            nx, ny
        )));
    }

    let mut x = Vec::with_capacity(nx * ny);
    let mut y = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        let fy = j as f64 / (ny - 1) as f64;
        for i in 0..nx {
            let fx = i as f64 / (nx - 1) as f64;
            x.push(x_range.0 + fx * (x_range.1 - x_range.0));
            y.push(y_range.0 + fy * (y_range.1 - y_range.0));
        }
    }

    let mut triangles = Vec::with_capacity(2 * (nx - 1) * (ny - 1));
    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            let v = i + nx * j;
            triangles.push([v, v + 1, v + 1 + nx]);
            triangles.push([v, v + 1 + nx, v + nx]);
        }
    }

    TriMesh::new(x, y, triangles)
}
