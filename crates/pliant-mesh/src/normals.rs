//! Node normal computation from face geometry (area-weighted).
//!
//! Each face's normal, weighted by its area, is accumulated at its three
//! nodes and the sums are normalized. Mirrors what the simulator does to
//! node normals every step.

use pliant_math::Vec3;

/// Computes area-weighted node normals for a node/face graph.
///
/// Degenerate faces contribute a near-zero normal; nodes touched only by
/// degenerate faces keep a zero normal rather than a NaN.
pub fn compute_node_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[ia, ib, ic] in faces {
        let a = positions[ia as usize];
        let b = positions[ib as usize];
        let c = positions[ic as usize];

        // Cross product magnitude = 2 × face area.
        let face_normal = (b - a).cross(c - a);

        normals[ia as usize] += face_normal;
        normals[ib as usize] += face_normal;
        normals[ic as usize] += face_normal;
    }

    for normal in &mut normals {
        let len = normal.length();
        if len > 1e-10 {
            *normal /= len;
        }
    }

    normals
}
