//! Mesh and field generators for larger, predictable test inputs.

use crate::fixtures::MeshFixture;

/// Creates a structured grid of `nx` by `ny` vertices.
///
/// Vertex `i + nx * j` is at column `i`, row `j`; each cell is split into
/// `[v, v + 1, v + 1 + nx]` and `[v, v + 1 + nx, v + nx]`.
///
/// # Example
///
/// ```
/// use test_utils::create_grid_mesh;
///
/// let mesh = create_grid_mesh(3, 3, (0.0, 1.0), (0.0, 1.0));
/// assert_eq!(mesh.num_vertices(), 9);
/// assert_eq!(mesh.num_triangles(), 8);
/// ```
pub fn create_grid_mesh(
    nx: usize,
    ny: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> MeshFixture {
    let mut x = Vec::with_capacity(nx * ny);
    let mut y = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let fx = i as f64 / (nx.max(2) - 1) as f64;
            let fy = j as f64 / (ny.max(2) - 1) as f64;
            x.push(x_range.0 + fx * (x_range.1 - x_range.0));
            y.push(y_range.0 + fy * (y_range.1 - y_range.0));
        }
    }

    let mut triangles = Vec::new();
    for j in 0..ny.saturating_sub(1) {
        for i in 0..nx.saturating_sub(1) {
            let v = i + nx * j;
            triangles.push([v, v + 1, v + 1 + nx]);
            triangles.push([v, v + 1 + nx, v + nx]);
        }
    }

    MeshFixture { x, y, triangles }
}

/// Creates an annulus of `n_theta` angular by `n_r` radial vertices between
/// `r_inner` and `r_outer`, centered at the origin.
///
/// The angular direction wraps around, so a level between the inner and
/// outer radius of a radial field traces one closed loop.
pub fn create_ring_mesh(n_theta: usize, n_r: usize, r_inner: f64, r_outer: f64) -> MeshFixture {
    let mut x = Vec::with_capacity(n_theta * n_r);
    let mut y = Vec::with_capacity(n_theta * n_r);
    for j in 0..n_r {
        let r = r_inner + (r_outer - r_inner) * j as f64 / (n_r.max(2) - 1) as f64;
        for i in 0..n_theta {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n_theta as f64;
            x.push(r * theta.cos());
            y.push(r * theta.sin());
        }
    }

    let mut triangles = Vec::new();
    for j in 0..n_r.saturating_sub(1) {
        for i in 0..n_theta {
            let a = i + n_theta * j;
            let b = (i + 1) % n_theta + n_theta * j;
            let c = b + n_theta;
            let d = a + n_theta;
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
    }

    MeshFixture { x, y, triangles }
}

/// Linear field `a * x + b * y`.
pub fn linear_field(mesh: &MeshFixture, a: f64, b: f64) -> Vec<f64> {
    mesh.field(|x, y| a * x + b * y)
}

/// Distance from `(cx, cy)`.
pub fn radial_field(mesh: &MeshFixture, cx: f64, cy: f64) -> Vec<f64> {
    mesh.field(|x, y| ((x - cx).powi(2) + (y - cy).powi(2)).sqrt())
}

/// Rosenbrock function `(1 - x)^2 + 100 (y - x^2)^2`.
pub fn rosenbrock_field(mesh: &MeshFixture) -> Vec<f64> {
    mesh.field(|x, y| (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2))
}

/// Deterministic pseudo-random perturbation in `[-amplitude, amplitude]`
/// added to `values`.
pub fn add_noise(values: &[f64], amplitude: f64, seed: u32) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = simple_hash(i as u32, seed);
            let unit = (h % 10_000) as f64 / 9_999.0;
            v + amplitude * (2.0 * unit - 1.0)
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
