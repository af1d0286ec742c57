//! Procedural model generators.
//!
//! These stand in for the external asset importer: each produces a
//! [`Submesh`] authored the way real assets arrive — per-face vertices
//! with no index sharing across faces — so the deduplicator has real
//! work to do. Positions that coincide spatially are computed through
//! identical float expressions and therefore collapse exactly.

use std::f32::consts::PI;

use pliant_math::Vec3;

use crate::mesh::Submesh;
use crate::vertex::Vertex;

/// Generates an axis-aligned cube authored as 6 independent quads.
///
/// 24 source vertices (4 per face, with per-face normals) and 36
/// triangle-list indices. Deduplication collapses it to the 8 corner
/// positions.
///
/// # Example
/// ```
/// use pliant_mesh::{deduplicate, generators::cube};
/// let mesh = deduplicate(&[cube(0.5)]).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.indices.len(), 36);
/// ```
pub fn cube(half_extent: f32) -> Submesh {
    let h = half_extent;

    // One entry per face: (normal, four corners in CCW order seen from outside).
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
                Vec3::new(h, -h, h),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, -h, -h),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-h, h, -h),
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for corner in corners {
            vertices.push(Vertex::new(corner, normal));
        }
        // Two triangles per quad.
        indices.extend_from_slice(&[base, base + 1, base + 2]);
        indices.extend_from_slice(&[base, base + 2, base + 3]);
    }

    Submesh { vertices, indices }
}

/// Generates a UV sphere authored as a triangle soup.
///
/// Every triangle carries its own three vertices; seam and ring
/// positions are computed through the same expression for the same
/// `(ring, segment)` pair, so deduplication collapses the soup to
/// exactly `(stacks - 1) × slices + 2` unique positions.
///
/// # Arguments
/// - `radius` — Sphere radius in meters.
/// - `slices` — Longitude divisions (≥ 3).
/// - `stacks` — Latitude divisions (≥ 2).
pub fn uv_sphere(radius: f32, slices: u32, stacks: u32) -> Submesh {
    assert!(slices >= 3, "uv_sphere needs at least 3 slices");
    assert!(stacks >= 2, "uv_sphere needs at least 2 stacks");

    let point = |ring: u32, seg: u32| -> Vec3 {
        // Poles are returned as constants so every fan triangle shares
        // one exact position regardless of segment.
        if ring == 0 {
            return Vec3::new(0.0, radius, 0.0);
        }
        if ring == stacks {
            return Vec3::new(0.0, -radius, 0.0);
        }
        let theta = PI * ring as f32 / stacks as f32;
        let phi = 2.0 * PI * (seg % slices) as f32 / slices as f32;
        Vec3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.cos(),
            radius * theta.sin() * phi.sin(),
        )
    };

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let mut push_triangle = |a: Vec3, b: Vec3, c: Vec3| {
        let base = vertices.len() as u32;
        for p in [a, b, c] {
            // Radial normal; the simulator regenerates these anyway.
            vertices.push(Vertex::new(p, p / radius));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    };

    for seg in 0..slices {
        // North fan.
        push_triangle(point(0, 0), point(1, seg + 1), point(1, seg));
        // South fan.
        push_triangle(
            point(stacks, 0),
            point(stacks - 1, seg),
            point(stacks - 1, seg + 1),
        );
    }

    for ring in 1..stacks - 1 {
        for seg in 0..slices {
            let p00 = point(ring, seg);
            let p01 = point(ring, seg + 1);
            let p10 = point(ring + 1, seg);
            let p11 = point(ring + 1, seg + 1);
            push_triangle(p00, p11, p10);
            push_triangle(p00, p01, p11);
        }
    }

    Submesh { vertices, indices }
}
