//! Common mesh fixtures for contouring tests.
//!
//! Every fixture is small enough to check by hand. Vertex numbering is given
//! in each doc comment.

/// Raw mesh arrays: parallel coordinates plus triangle connectivity.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFixture {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub triangles: Vec<[usize; 3]>,
}

impl MeshFixture {
    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.x.len()
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Evaluates `f(x, y)` at every vertex.
    pub fn field<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.x.iter().zip(&self.y).map(|(&x, &y)| f(x, y)).collect()
    }
}

/// One triangle: 0 = (0, 0), 1 = (1, 0), 2 = (0, 1).
pub fn single_triangle() -> MeshFixture {
    MeshFixture {
        x: vec![0.0, 1.0, 0.0],
        y: vec![0.0, 0.0, 1.0],
        triangles: vec![[0, 1, 2]],
    }
}

/// Unit square split along the (0,0)-(1,1) diagonal.
///
/// Vertices: 0 = (0, 0), 1 = (1, 0), 2 = (1, 1), 3 = (0, 1).
/// Triangles: `[0, 1, 2]` and `[0, 2, 3]`.
pub fn split_unit_square() -> MeshFixture {
    MeshFixture {
        x: vec![0.0, 1.0, 1.0, 0.0],
        y: vec![0.0, 0.0, 1.0, 1.0],
        triangles: vec![[0, 1, 2], [0, 2, 3]],
    }
}

/// 2x2 vertex grid in row-major order, split into two triangles.
///
/// Vertices: 0 = (0, 0), 1 = (1, 0), 2 = (0, 1), 3 = (1, 1).
/// Triangles: `[0, 1, 3]` and `[0, 3, 2]`.
pub fn grid_2x2() -> MeshFixture {
    MeshFixture {
        x: vec![0.0, 1.0, 0.0, 1.0],
        y: vec![0.0, 0.0, 1.0, 1.0],
        triangles: vec![[0, 1, 3], [0, 3, 2]],
    }
}

/// Two separate triangles that share no vertices.
///
/// Vertices 0..3 form a triangle at the origin, 3..6 the same triangle
/// shifted by (5, 0).
pub fn two_islands() -> MeshFixture {
    MeshFixture {
        x: vec![0.0, 1.0, 0.0, 5.0, 6.0, 5.0],
        y: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        triangles: vec![[0, 1, 2], [3, 4, 5]],
    }
}

/// Common clip rectangles as `(xmin, xmax, ymin, ymax)`.
pub mod viewport {
    /// The unit square.
    pub const UNIT: (f64, f64, f64, f64) = (0.0, 1.0, 0.0, 1.0);

    /// Symmetric box around the origin.
    pub const CENTERED: (f64, f64, f64, f64) = (-1.0, 1.0, -1.0, 1.0);

    /// Viewport used by the Rosenbrock example plot.
    pub const ROSENBROCK: (f64, f64, f64, f64) = (-1.30, 1.30, -1.30, 1.30);

    /// Zero-width box (a vertical line).
    pub const VERTICAL_LINE: (f64, f64, f64, f64) = (0.5, 0.5, 0.0, 1.0);

    /// Inverted box (xmin > xmax).
    pub const INVERTED: (f64, f64, f64, f64) = (1.0, 0.0, 0.0, 1.0);
}
