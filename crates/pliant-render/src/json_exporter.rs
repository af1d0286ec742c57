//! JSON frame exporter — captures per-frame mesh data for inspection.
//!
//! Implements the [`Renderer`] trait. Records vertex positions and
//! triangle indices for every submitted body each frame, then serializes
//! the whole capture to a JSON file on [`write`](JsonFrameExporter::write).

use pliant_math::Mat4;
use pliant_mesh::RenderMesh;
use pliant_types::{PliantError, PliantResult};
use serde::Serialize;

use crate::renderer::Renderer;

/// One body's mesh in one frame.
#[derive(Serialize)]
struct BodyRecord {
    /// Interleaved positions `[x0, y0, z0, x1, y1, z1, ...]`.
    positions: Vec<f32>,
    /// Triangle-list indices.
    indices: Vec<u32>,
}

/// All bodies submitted during one frame.
#[derive(Serialize)]
struct FrameRecord {
    frame: u32,
    bodies: Vec<BodyRecord>,
}

/// Captures submitted frames and writes them as JSON.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("capture.json");
/// // ... run the session, passing the exporter as the renderer ...
/// exporter.write()?;
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    frames: Vec<FrameRecord>,
    current: Vec<BodyRecord>,
    completed_frames: u32,
}

impl JsonFrameExporter {
    /// Creates an exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            frames: Vec::new(),
            current: Vec::new(),
            completed_frames: 0,
        }
    }

    /// Serializes the capture and writes it to the output path.
    pub fn write(&self) -> PliantResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    /// Serializes the capture to a JSON string.
    pub fn to_json(&self) -> PliantResult<String> {
        serde_json::to_string(&self.frames)
            .map_err(|e| PliantError::Serialization(e.to_string()))
    }
}

impl Renderer for JsonFrameExporter {
    fn begin_frame(&mut self) -> PliantResult<()> {
        self.current.clear();
        Ok(())
    }

    fn submit(&mut self, mesh: &RenderMesh, _world: Mat4) -> PliantResult<()> {
        let mut positions = Vec::with_capacity(mesh.vertices.len() * 3);
        for vertex in &mesh.vertices {
            positions.push(vertex.position.x);
            positions.push(vertex.position.y);
            positions.push(vertex.position.z);
        }
        self.current.push(BodyRecord {
            positions,
            indices: mesh.indices.clone(),
        });
        Ok(())
    }

    fn end_frame(&mut self) -> PliantResult<()> {
        self.frames.push(FrameRecord {
            frame: self.completed_frames,
            bodies: std::mem::take(&mut self.current),
        });
        self.completed_frames += 1;
        Ok(())
    }

    fn frame_count(&self) -> u32 {
        self.completed_frames
    }

    fn name(&self) -> &str {
        "json_exporter"
    }
}
