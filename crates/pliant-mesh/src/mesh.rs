//! Mesh container types: authored submeshes, the deduplicated
//! simulation input, and per-frame render buffers.

use pliant_math::Vec3;
use pliant_types::{PliantError, PliantResult};
use serde::{Deserialize, Serialize};

use crate::vertex::Vertex;

/// One independently-authored piece of a model asset.
///
/// Each submesh owns its local vertex array; indices reference into it.
/// Submeshes from the same model typically repeat positions along seams
/// and hard edges — the deduplicator collapses those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submesh {
    /// Local vertex array.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Submesh {
    /// Returns the number of local vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A model collapsed to unique positions — the simulation input.
///
/// Invariants (checked by [`validate`](Self::validate) except uniqueness,
/// which holds by construction):
/// - no two entries of `positions` share an `(x, y, z)` value
/// - every index is a valid offset into `positions`
/// - the index count is a multiple of 3 (triangle list)
///
/// Built once per imported model and shared read-only (via `Arc`) by
/// every deformable body instantiated from that model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeduplicatedMesh {
    /// Unique positions in first-seen order.
    pub positions: Vec<Vec3>,
    /// Remapped triangle-list indices into `positions`.
    pub indices: Vec<u32>,
}

impl DeduplicatedMesh {
    /// Returns the number of unique positions.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Validates the mesh as soft-body input.
    ///
    /// Checks:
    /// - at least one position
    /// - index count divisible by 3
    /// - all indices within bounds
    pub fn validate(&self) -> PliantResult<()> {
        if self.positions.is_empty() {
            return Err(PliantError::Topology(
                "Mesh has zero vertices".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(PliantError::Topology(format!(
                "Index count ({}) is not divisible by 3",
                self.indices.len()
            )));
        }

        let n = self.positions.len();
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(PliantError::Topology(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        Ok(())
    }
}

/// Render buffers regenerated every frame from a live deformable body.
///
/// Vertices are aligned to simulator node order; indices come from the
/// body's static face list. Discarded after the renderer consumes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    /// One vertex per simulator node, in node order.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// An empty mesh producing no draw work.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns true if there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
