//! Integration tests for pliant-mesh.

use pliant_math::Vec3;
use pliant_mesh::generators::{cube, uv_sphere};
use pliant_mesh::normals::compute_node_normals;
use pliant_mesh::{deduplicate, DeduplicatedMesh, Submesh, Vertex};
use pliant_types::PliantError;

fn v(x: f32, y: f32, z: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, z), Vec3::Y)
}

/// Two triangles sharing an edge, authored as 6 independent vertices:
/// positions A,B,C and B,C,D.
fn shared_edge_soup() -> Submesh {
    let a = v(0.0, 0.0, 0.0);
    let b = v(1.0, 0.0, 0.0);
    let c = v(0.0, 1.0, 0.0);
    let d = v(1.0, 1.0, 0.0);
    Submesh {
        vertices: vec![a, b, c, b, c, d],
        indices: vec![0, 1, 2, 3, 4, 5],
    }
}

// ─── Deduplicator ─────────────────────────────────────────────

#[test]
fn shared_edge_collapses_to_four_vertices() {
    let mesh = deduplicate(&[shared_edge_soup()]).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices, vec![0, 1, 2, 1, 2, 3]);
    assert_eq!(mesh.positions[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(mesh.positions[3], Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn cube_soup_collapses_to_eight_corners() {
    let mesh = deduplicate(&[cube(0.5)]).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.indices.len(), 36);
    assert!(mesh.validate().is_ok());
}

#[test]
fn index_count_equals_source_index_count() {
    let soup = shared_edge_soup();
    let total = soup.indices.len();
    let mesh = deduplicate(&[soup]).unwrap();
    assert_eq!(mesh.indices.len(), total);
}

#[test]
fn empty_input_yields_empty_mesh() {
    let mesh = deduplicate(&[]).unwrap();
    assert!(mesh.positions.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn dedup_is_deterministic() {
    let submeshes = vec![cube(0.5), uv_sphere(1.0, 8, 6)];
    let first = deduplicate(&submeshes).unwrap();
    let second = deduplicate(&submeshes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dedup_is_idempotent_on_unique_input() {
    // A single submesh with no duplicated positions passes through unchanged.
    let unique = Submesh {
        vertices: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        indices: vec![0, 1, 2],
    };
    let mesh = deduplicate(&[unique.clone()]).unwrap();
    assert_eq!(mesh.vertex_count(), unique.vertex_count());
    assert_eq!(mesh.indices, unique.indices);
    for (i, vertex) in unique.vertices.iter().enumerate() {
        assert_eq!(mesh.positions[i], vertex.position);
    }
}

#[test]
fn indices_remap_within_bounds() {
    let mesh = deduplicate(&[cube(0.5), uv_sphere(1.0, 12, 8)]).unwrap();
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn dedup_spans_submeshes() {
    // The same triangle authored twice in two submeshes shares all positions.
    let soup = shared_edge_soup();
    let mesh = deduplicate(&[soup.clone(), soup]).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices.len(), 12);
}

#[test]
fn differing_normals_still_merge() {
    // Hard edge: same position, different normals. One node comes out.
    let a = Vertex::new(Vec3::ZERO, Vec3::X);
    let b = Vertex::new(Vec3::ZERO, Vec3::Y);
    let c = v(1.0, 0.0, 0.0);
    let d = v(0.0, 1.0, 0.0);
    let soup = Submesh {
        vertices: vec![a, c, d, b, c, d],
        indices: vec![0, 1, 2, 3, 4, 5],
    };
    let mesh = deduplicate(&[soup]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2, 0, 1, 2]);
}

#[test]
fn negative_zero_merges_with_positive_zero() {
    let plus = v(0.0, 1.0, 0.0);
    let minus = v(-0.0, 1.0, 0.0);
    let other = v(1.0, 0.0, 0.0);
    let soup = Submesh {
        vertices: vec![plus, other, minus],
        indices: vec![0, 1, 2],
    };
    let mesh = deduplicate(&[soup]).unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    assert_eq!(mesh.indices, vec![0, 1, 0]);
}

#[test]
fn out_of_bounds_local_index_is_import_error() {
    let soup = Submesh {
        vertices: vec![v(0.0, 0.0, 0.0)],
        indices: vec![0, 1, 2],
    };
    let err = deduplicate(&[soup]).unwrap_err();
    assert!(matches!(err, PliantError::Import(_)));
}

// ─── Generators ───────────────────────────────────────────────

#[test]
fn cube_soup_shape() {
    let soup = cube(1.0);
    assert_eq!(soup.vertex_count(), 24);
    assert_eq!(soup.indices.len(), 36);
}

#[test]
fn sphere_soup_dedups_to_expected_counts() {
    let slices = 8;
    let stacks = 6;
    let soup = uv_sphere(1.0, slices, stacks);
    let mesh = deduplicate(&[soup]).unwrap();
    // (stacks - 1) rings of `slices` points, plus the two poles.
    assert_eq!(mesh.vertex_count() as u32, (stacks - 1) * slices + 2);
    assert_eq!(mesh.triangle_count() as u32, 2 * slices * (stacks - 1));
    assert!(mesh.validate().is_ok());
}

#[test]
fn sphere_points_lie_on_radius() {
    let soup = uv_sphere(2.0, 8, 6);
    for vertex in &soup.vertices {
        assert!((vertex.position.length() - 2.0).abs() < 1e-4);
    }
}

// ─── Validation ───────────────────────────────────────────────

#[test]
fn validate_rejects_empty_mesh() {
    let mesh = DeduplicatedMesh {
        positions: vec![],
        indices: vec![],
    };
    assert!(matches!(
        mesh.validate().unwrap_err(),
        PliantError::Topology(_)
    ));
}

#[test]
fn validate_rejects_non_triangle_count() {
    let mesh = DeduplicatedMesh {
        positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        indices: vec![0, 1],
    };
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_oob_index() {
    let mesh = DeduplicatedMesh {
        positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        indices: vec![0, 1, 3],
    };
    assert!(mesh.validate().is_err());
}

// ─── Normals ──────────────────────────────────────────────────

#[test]
fn flat_triangle_normals_face_up() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let faces = vec![[0u32, 1, 2]];
    let normals = compute_node_normals(&positions, &faces);
    for n in normals {
        assert!((n - Vec3::Y).length() < 1e-5);
    }
}

#[test]
fn isolated_node_keeps_zero_normal() {
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::splat(9.0)];
    let faces = vec![[0u32, 1, 2]];
    let normals = compute_node_normals(&positions, &faces);
    assert_eq!(normals[3], Vec3::ZERO);
}
