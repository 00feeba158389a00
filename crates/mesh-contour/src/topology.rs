//! Edge table and triangle/edge adjacency for planar triangle meshes.
//!
//! Every undirected edge of the mesh gets exactly one [`EdgeId`]. Each
//! triangle knows the ids of its three edges (one per local slot), and each
//! edge knows the one or two triangles that own it.
//!
//! Local slots of triangle `(a, b, c)`:
//!
//! | slot | edge     |
//! |------|----------|
//! | 0    | `(b, c)` |
//! | 1    | `(c, a)` |
//! | 2    | `(a, b)` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContourError, Result};
use crate::mesh::{validate_triangles, TriMesh, TriangleId, VertexId};

/// Index into the edge table.
pub type EdgeId = usize;

/// Undirected edge stored with the smaller vertex index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub v0: VertexId,
    pub v1: VertexId,
}

impl Edge {
    /// Canonical edge between `a` and `b`, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }
}

/// Triangles owning an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeOwners {
    /// Edge on the mesh boundary, owned by a single triangle.
    Boundary(TriangleId),
    /// Interior edge shared by two triangles.
    Interior(TriangleId, TriangleId),
}

impl EdgeOwners {
    pub fn first(&self) -> TriangleId {
        match *self {
            EdgeOwners::Boundary(t) | EdgeOwners::Interior(t, _) => t,
        }
    }

    pub fn second(&self) -> Option<TriangleId> {
        match *self {
            EdgeOwners::Boundary(_) => None,
            EdgeOwners::Interior(_, t) => Some(t),
        }
    }

    /// The owner across the edge from `t`, if any.
    pub fn other(&self, t: TriangleId) -> Option<TriangleId> {
        match *self {
            EdgeOwners::Interior(a, b) if a == t => Some(b),
            EdgeOwners::Interior(a, b) if b == t => Some(a),
            _ => None,
        }
    }

    pub fn contains(&self, t: TriangleId) -> bool {
        match *self {
            EdgeOwners::Boundary(a) => a == t,
            EdgeOwners::Interior(a, b) => a == t || b == t,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            EdgeOwners::Boundary(_) => 1,
            EdgeOwners::Interior(_, _) => 2,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, EdgeOwners::Boundary(_))
    }
}

/// An entry of the edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub edge: Edge,
    pub owners: EdgeOwners,
}

/// Vertex pairs of a triangle's three local edge slots.
pub fn triangle_edge_vertices(tri: [VertexId; 3]) -> [(VertexId, VertexId); 3] {
    [(tri[1], tri[2]), (tri[2], tri[0]), (tri[0], tri[1])]
}

/// Deduplicated edge table with bidirectional triangle/edge adjacency.
///
/// Immutable once built; safe to share across threads for concurrent
/// contour tracing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshTopology {
    num_vertices: usize,
    edges: Vec<EdgeRecord>,
    triangle_edges: Vec<[EdgeId; 3]>,
}

impl MeshTopology {
    /// Build the topology of a validated mesh.
    pub fn from_mesh(mesh: &TriMesh) -> Result<Self> {
        Self::build(mesh.num_vertices(), mesh.triangles())
    }

    /// Build the edge table for `triangles` over `num_vertices` vertices.
    ///
    /// Edge ids are assigned in triangle order, then local slot order, so the
    /// result is deterministic for a given connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::InvalidMesh`] if a triangle references a vertex
    /// outside `[0, num_vertices)`, repeats a vertex, or if an edge is shared
    /// by more than two triangles.
    pub fn build(num_vertices: usize, triangles: &[[VertexId; 3]]) -> Result<Self> {
        validate_triangles(num_vertices, triangles)?;

        // Incident triangles per vertex
        let mut vertex_triangles: Vec<Vec<TriangleId>> = vec![Vec::new(); num_vertices];
        for (t, tri) in triangles.iter().enumerate() {
            for &v in tri {
                vertex_triangles[v].push(t);
            }
        }

        let mut edges: Vec<EdgeRecord> = Vec::with_capacity(triangles.len() * 2);
        let mut slots: Vec<[Option<EdgeId>; 3]> = vec![[None; 3]; triangles.len()];

        for (t, &tri) in triangles.iter().enumerate() {
            for (slot, &(a, b)) in triangle_edge_vertices(tri).iter().enumerate() {
                if slots[t][slot].is_some() {
                    continue;
                }
                let edge = Edge::new(a, b);

                let mut matched: Option<(TriangleId, usize)> = None;
                for &adj in &vertex_triangles[a] {
                    if adj == t {
                        continue;
                    }
                    let adj_slot = triangle_edge_vertices(triangles[adj])
                        .iter()
                        .position(|&(c, d)| Edge::new(c, d) == edge);
                    let Some(adj_slot) = adj_slot else {
                        continue;
                    };
                    if slots[adj][adj_slot].is_some() || matched.is_some() {
                        return Err(ContourError::invalid_mesh(format!(
                            "edge ({}, {}) is shared by more than two triangles (non-manifold at triangle {})",
                            edge.v0, edge.v1, t
                        )));
                    }
                    matched = Some((adj, adj_slot));
                }

                let id = edges.len();
                slots[t][slot] = Some(id);
                let owners = match matched {
                    Some((adj, adj_slot)) => {
                        slots[adj][adj_slot] = Some(id);
                        EdgeOwners::Interior(t, adj)
                    }
                    None => EdgeOwners::Boundary(t),
                };
                edges.push(EdgeRecord { edge, owners });
            }
        }

        let triangle_edges = slots
            .into_iter()
            .enumerate()
            .map(|(t, s)| match s {
                [Some(e0), Some(e1), Some(e2)] => Ok([e0, e1, e2]),
                _ => Err(ContourError::invalid_mesh(format!(
                    "triangle {} was left with an unassigned edge slot",
                    t
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let topology = Self {
            num_vertices,
            edges,
            triangle_edges,
        };

        debug!(
            vertices = num_vertices,
            triangles = topology.num_triangles(),
            edges = topology.num_edges(),
            boundary_edges = topology.boundary_edges().count(),
            "Built mesh topology"
        );

        Ok(topology)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangle_edges.len()
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn edge(&self, e: EdgeId) -> Edge {
        self.edges[e].edge
    }

    pub fn edge_owners(&self, e: EdgeId) -> EdgeOwners {
        self.edges[e].owners
    }

    pub fn is_boundary(&self, e: EdgeId) -> bool {
        self.edges[e].owners.is_boundary()
    }

    /// Edge ids of triangle `t`, in local slot order.
    pub fn triangle_edges(&self, t: TriangleId) -> [EdgeId; 3] {
        self.triangle_edges[t]
    }

    /// Triangle on the other side of local slot `slot` of triangle `t`.
    pub fn neighbor_across(&self, t: TriangleId, slot: usize) -> Option<TriangleId> {
        let e = self.triangle_edges[t][slot];
        self.edges[e].owners.other(t)
    }

    /// Ids of all edges owned by a single triangle.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, r)| r.owners.is_boundary())
            .map(|(e, _)| e)
    }

    /// Look up the id of the edge joining `a` and `b`.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let edge = Edge::new(a, b);
        self.edges.iter().position(|r| r.edge == edge)
    }

    /// Verify that triangle->edge and edge->triangle maps agree.
    pub fn check_consistency(&self) -> Result<()> {
        for (t, edges) in self.triangle_edges.iter().enumerate() {
            for &e in edges {
                let owners = self
                    .edges
                    .get(e)
                    .ok_or_else(|| {
                        ContourError::invalid_mesh(format!("triangle {} references missing edge {}", t, e))
                    })?
                    .owners;
                if !owners.contains(t) {
                    return Err(ContourError::invalid_mesh(format!(
                        "edge {} does not list triangle {} as an owner",
                        e, t
                    )));
                }
            }
        }
        for (e, record) in self.edges.iter().enumerate() {
            let owners = [Some(record.owners.first()), record.owners.second()];
            for t in owners.into_iter().flatten() {
                if !self.triangle_edges.get(t).is_some_and(|es| es.contains(&e)) {
                    return Err(ContourError::invalid_mesh(format!(
                        "triangle {} does not reference its edge {}",
                        t, e
                    )));
                }
            }
        }
        Ok(())
    }
}
