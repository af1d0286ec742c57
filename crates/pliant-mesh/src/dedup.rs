//! Vertex deduplication — collapses a multi-submesh triangle soup into
//! one indexed mesh with unique positions.
//!
//! Only positions are compared, and they are compared exactly (no
//! epsilon). Two source vertices that share a position but differ in
//! normal (a hard edge between two faces) merge into one node: a soft
//! body needs one physical point per spatial location, and the simulator
//! regenerates shading normals itself every step.
//!
//! Lookup is a hash on the exact bit pattern of the position, so the
//! whole pass is O(total indices) while producing output identical to a
//! linear first-seen scan: stable first-seen vertex order, one output
//! index per source index.

use std::collections::HashMap;

use pliant_math::Vec3;
use pliant_types::{PliantError, PliantResult};

use crate::mesh::{DeduplicatedMesh, Submesh};

/// Exact-value hash key for a position.
///
/// Keyed on the IEEE bit pattern with `-0.0` canonicalized to `0.0`,
/// so key equality coincides with `==` on the components for every
/// value an importer or generator produces (no NaNs).
#[derive(PartialEq, Eq, Hash)]
struct PositionKey([u32; 3]);

impl PositionKey {
    fn new(p: Vec3) -> Self {
        Self([canonical_bits(p.x), canonical_bits(p.y), canonical_bits(p.z)])
    }
}

#[inline]
fn canonical_bits(c: f32) -> u32 {
    if c == 0.0 { 0.0f32.to_bits() } else { c.to_bits() }
}

/// Collapses submeshes into one indexed mesh with unique positions.
///
/// Indices are processed in submesh order, then index order; each is
/// resolved to its local vertex position and mapped to the first output
/// entry holding that exact position, appending a new entry when none
/// exists. The output index array has one entry per source index.
///
/// An empty submesh list yields an empty mesh. A submesh index outside
/// its own local vertex array is a malformed-input error.
pub fn deduplicate(submeshes: &[Submesh]) -> PliantResult<DeduplicatedMesh> {
    let total_indices: usize = submeshes.iter().map(|s| s.indices.len()).sum();

    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::with_capacity(total_indices);
    let mut first_seen: HashMap<PositionKey, u32> = HashMap::new();

    for (mesh_idx, submesh) in submeshes.iter().enumerate() {
        for &local in &submesh.indices {
            let vertex = submesh.vertices.get(local as usize).ok_or_else(|| {
                PliantError::Import(format!(
                    "Submesh {}: index {} out of bounds (vertex count: {})",
                    mesh_idx,
                    local,
                    submesh.vertices.len()
                ))
            })?;

            let key = PositionKey::new(vertex.position);
            let global = *first_seen.entry(key).or_insert_with(|| {
                positions.push(vertex.position);
                (positions.len() - 1) as u32
            });
            indices.push(global);
        }
    }

    tracing::debug!(
        submeshes = submeshes.len(),
        source_indices = total_indices,
        unique_positions = positions.len(),
        "deduplicated model"
    );

    Ok(DeduplicatedMesh { positions, indices })
}
