//! Contouring and clipping for unstructured planar triangle meshes.
//!
//! Three pieces, used in this order:
//!
//! - [`topology`]: deduplicated edge table and triangle/edge adjacency
//! - [`contour`]: iso-line tracing by walking triangle adjacency
//! - [`clip`]: Liang–Barsky clipping of segments and polylines to a viewport
//!
//! # Architecture
//!
//! ```text
//! TriMesh (x, y, triangles)
//!      │
//!      ▼
//! MeshTopology::from_mesh ──► edges + owners
//!      │
//!      ▼
//! ContourTracer::trace_levels(levels)   (one independent walk per level)
//!      │
//!      ▼
//! Vec<Contour> ──► Viewport::clip_polyline ──► renderer
//! ```
//!
//! # Example
//!
//! ```
//! use mesh_contour::{ContourTracer, MeshTopology, TriMesh};
//!
//! let mesh = TriMesh::new(
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//!     vec![[0, 1, 2]],
//! )?;
//! let topology = MeshTopology::from_mesh(&mesh)?;
//! let values = [0.0, 1.0, 2.0];
//!
//! let lines = ContourTracer::new(&mesh, &topology, &values)?.trace(1.5)?;
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].len(), 2);
//! # Ok::<(), mesh_contour::ContourError>(())
//! ```

pub mod clip;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod topology;

pub use clip::{clip_segment, ClipInterval, ClipResult, Viewport};
pub use contour::{
    field_range, generate_contour_levels, interpolate_crossing, trace_contours, Contour,
    ContourTracer, Polyline, TieBreak, MAX_GENERATED_LEVELS,
};
pub use error::{ContourError, Result};
pub use geometry::{Bounds, Point2D};
pub use mesh::{structured_grid, TriMesh, TriangleId, VertexId};
pub use topology::{Edge, EdgeId, EdgeOwners, EdgeRecord, MeshTopology};
