//! Topology construction — the fixed node/face/link graph of a body.

use pliant_math::{Pose, Vec3};
use pliant_mesh::DeduplicatedMesh;
use pliant_types::{PliantError, PliantResult};

/// The node/face/link graph of a deformable body.
///
/// Built once at creation; ownership of the node state transfers to the
/// simulator, which is the sole mutator from then on. Node order here
/// defines the dense node ids carried by `faces` and `links` and used by
/// per-frame state extraction — it never changes over the body's lifetime.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Pose-transformed node positions, one per deduplicated vertex.
    pub nodes: Vec<Vec3>,
    /// Triangular faces as node-id triples, in mesh index order.
    pub faces: Vec<[u32; 3]>,
    /// Structural links, three per face, without deduplication.
    pub links: Vec<[u32; 2]>,
}

impl Topology {
    /// Builds a topology from a deduplicated mesh and a pose.
    ///
    /// Nodes are the mesh positions rotated then translated by `pose`.
    /// Links are the three edges of every face; a shared edge between
    /// two adjacent faces intentionally produces two structurally
    /// identical links (this biases stiffness toward interior edges but
    /// is the established behavior — do not deduplicate).
    ///
    /// Fails with a topology error, before any simulator involvement, on
    /// an empty mesh, a non-triangle index count, an out-of-range index,
    /// or a non-identity pose scale.
    pub fn build(mesh: &DeduplicatedMesh, pose: &Pose) -> PliantResult<Self> {
        mesh.validate()?;

        if !pose.has_unit_scale() {
            return Err(PliantError::Topology(format!(
                "Per-body scale is not supported (got {:?}); scaling a \
                 soft-body topology destabilizes the solver",
                pose.scale
            )));
        }

        let nodes: Vec<Vec3> = mesh
            .positions
            .iter()
            .map(|&p| pose.transform_point(p))
            .collect();

        let face_count = mesh.triangle_count();
        let mut faces = Vec::with_capacity(face_count);
        let mut links = Vec::with_capacity(face_count * 3);

        for t in 0..face_count {
            let [a, b, c] = mesh.triangle(t);
            faces.push([a, b, c]);
            links.push([a, b]);
            links.push([b, c]);
            links.push([c, a]);
        }

        Ok(Self { nodes, faces, links })
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of links (always `3 × face_count`).
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
