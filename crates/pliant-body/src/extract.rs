//! Per-frame state extraction — live node state back into render buffers.

use pliant_math::Vec3;
use pliant_mesh::{RenderMesh, Vertex};
use pliant_sim::SoftBodySim;
use pliant_types::{BodyHandle, NodeId, PliantError, PliantResult};

/// Rebuilds render buffers from a body's current simulator snapshot.
///
/// Emits one vertex per node, in node order, carrying the body's
/// constant color; the index buffer comes straight from the static face
/// list, whose entries are the dense node ids assigned at construction —
/// resolving a face corner is a direct O(1) index, no identity scan.
///
/// A body with zero nodes yields an empty mesh (legal: no draw work).
/// A face referencing a node id outside the current snapshot is a state
/// extraction error: the simulator changed the node count, which must
/// never happen for this body kind once created.
pub fn extract_render_mesh(
    sim: &dyn SoftBodySim,
    body: BodyHandle,
    color: Vec3,
) -> PliantResult<RenderMesh> {
    let node_count = sim.node_count(body)?;
    if node_count == 0 {
        return Ok(RenderMesh::empty());
    }

    let mut vertices = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let node = NodeId(i as u32);
        vertices.push(Vertex {
            position: sim.node_position(body, node)?,
            normal: sim.node_normal(body, node)?,
            color,
        });
    }

    let faces = sim.faces(body)?;
    let mut indices = Vec::with_capacity(faces.len() * 3);
    for &face in faces {
        for id in face {
            if id as usize >= node_count {
                return Err(PliantError::StateExtraction(format!(
                    "Face references node {} but the body has {} nodes; \
                     the simulator changed the node count after creation",
                    id, node_count
                )));
            }
            indices.push(id);
        }
    }

    Ok(RenderMesh { vertices, indices })
}
