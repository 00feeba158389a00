//! Tests for edge table construction and triangle/edge adjacency.

use mesh_contour::{ContourError, Edge, EdgeOwners, MeshTopology, TriMesh};
use test_utils::{create_grid_mesh, create_ring_mesh, fixtures, MeshFixture};

fn topology_of(fixture: &MeshFixture) -> MeshTopology {
    MeshTopology::build(fixture.num_vertices(), &fixture.triangles).unwrap()
}

// ============================================================================
// Split unit square
// ============================================================================

#[test]
fn test_split_square_diagonal_shared_once() {
    let topo = topology_of(&fixtures::split_unit_square());

    assert_eq!(topo.num_edges(), 5);

    let diagonal: Vec<_> = topo
        .edges()
        .iter()
        .filter(|r| r.edge == Edge::new(0, 2))
        .collect();
    assert_eq!(diagonal.len(), 1, "diagonal must appear exactly once");
    assert_eq!(diagonal[0].owners, EdgeOwners::Interior(0, 1));
}

#[test]
fn test_split_square_boundary_edges_single_owner() {
    let topo = topology_of(&fixtures::split_unit_square());

    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        let e = topo.find_edge(a, b).expect("boundary edge present");
        assert_eq!(topo.edge_owners(e).count(), 1, "edge ({a}, {b})");
        assert!(topo.is_boundary(e));
    }
    assert_eq!(topo.boundary_edges().count(), 4);
}

#[test]
fn test_split_square_slot_assignment() {
    let topo = topology_of(&fixtures::split_unit_square());

    // Triangle [0, 1, 2]: slot 1 is (2, 0), the diagonal
    let diag = topo.find_edge(0, 2).unwrap();
    assert_eq!(topo.triangle_edges(0)[1], diag);
    // Triangle [0, 2, 3]: slot 2 is (0, 2)
    assert_eq!(topo.triangle_edges(1)[2], diag);

    assert_eq!(topo.neighbor_across(0, 1), Some(1));
    assert_eq!(topo.neighbor_across(1, 2), Some(0));
    assert_eq!(topo.neighbor_across(0, 0), None);
}

#[test]
fn test_edge_ids_follow_triangle_then_slot_order() {
    let topo = topology_of(&fixtures::split_unit_square());

    assert_eq!(topo.triangle_edges(0), [0, 1, 2]);
    assert_eq!(topo.edge(0), Edge::new(1, 2));
    assert_eq!(topo.edge(1), Edge::new(0, 2));
    assert_eq!(topo.edge(2), Edge::new(0, 1));
    // Second triangle reuses edge 1 and adds (2, 3), (3, 0)
    assert_eq!(topo.triangle_edges(1), [3, 4, 1]);
}

// ============================================================================
// Invariants on larger meshes
// ============================================================================

#[test]
fn test_grid_edge_count_matches_euler() {
    let (nx, ny) = (6, 5);
    let mesh = create_grid_mesh(nx, ny, (0.0, 1.0), (0.0, 1.0));
    let topo = topology_of(&mesh);

    // Horizontal + vertical + one diagonal per cell
    let expected = (nx - 1) * ny + nx * (ny - 1) + (nx - 1) * (ny - 1);
    assert_eq!(topo.num_edges(), expected);
    assert_eq!(topo.boundary_edges().count(), 2 * (nx - 1) + 2 * (ny - 1));
    topo.check_consistency().unwrap();
}

#[test]
fn test_every_edge_unique() {
    let mesh = create_grid_mesh(7, 7, (0.0, 1.0), (0.0, 1.0));
    let topo = topology_of(&mesh);

    let mut seen = std::collections::HashSet::new();
    for record in topo.edges() {
        assert!(record.edge.v0 < record.edge.v1, "edge must be canonical");
        assert!(seen.insert(record.edge), "duplicate edge {:?}", record.edge);
    }
}

#[test]
fn test_ring_has_no_boundary_in_angular_direction() {
    let mesh = create_ring_mesh(12, 3, 1.0, 2.0);
    let topo = topology_of(&mesh);

    // Only the inner and outer circles are boundary
    assert_eq!(topo.boundary_edges().count(), 24);
    topo.check_consistency().unwrap();
}

#[test]
fn test_from_mesh_matches_build() {
    let f = fixtures::grid_2x2();
    let mesh = TriMesh::new(f.x.clone(), f.y.clone(), f.triangles.clone()).unwrap();
    assert_eq!(MeshTopology::from_mesh(&mesh).unwrap(), topology_of(&f));
}

#[test]
fn test_empty_mesh() {
    let topo = MeshTopology::build(0, &[]).unwrap();
    assert_eq!(topo.num_edges(), 0);
    assert_eq!(topo.num_triangles(), 0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_out_of_range_index_is_invalid_mesh() {
    let err = MeshTopology::build(3, &[[0, 1, 2], [1, 2, 3]]).unwrap_err();
    assert!(matches!(err, ContourError::InvalidMesh(_)));
}

#[test]
fn test_bowtie_fan_is_rejected() {
    // Four triangles sharing edge (0, 1)
    let tris = [[0, 1, 2], [0, 1, 3], [1, 0, 4], [0, 1, 5]];
    let err = MeshTopology::build(6, &tris).unwrap_err();
    assert!(matches!(err, ContourError::InvalidMesh(_)));
}

#[test]
fn test_non_manifold_edge_away_from_first_triangle() {
    let tris = [[4, 5, 6], [0, 1, 2], [1, 0, 3], [0, 1, 4]];
    let err = MeshTopology::build(7, &tris).unwrap_err();
    assert!(matches!(err, ContourError::InvalidMesh(_)));
}
