//! Shared test utilities for the mesh-contour workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Small hand-checkable mesh fixtures
//! - Structured and ring mesh generators
//! - Scalar field generators
//! - Approximate float assertions
//!
//! Fixtures are plain arrays (`x`, `y`, triangle connectivity) so they carry
//! no dependency on the crates under test.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// # Usage
///
/// ```
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Macro for approximate equality of anything with `x` and `y` fields
/// against a coordinate pair.
///
/// ```ignore
/// assert_point_approx_eq!(line[0], (0.5, 0.5), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_point_approx_eq {
    ($point:expr, ($x:expr, $y:expr), $epsilon:expr) => {{
        let p = $point;
        $crate::assert_coords_approx_eq!((p.x, p.y), ($x, $y), $epsilon);
    }};
}
