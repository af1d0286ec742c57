//! Renderer trait and HeadlessRenderer stub.
//!
//! The session calls the renderer once per frame with one render mesh
//! and one world transform per active body. Node positions are already
//! world-space, so the transform is identity for every soft body. The
//! headless renderer discards all submissions, serving as a no-op for
//! tests and CI.

use pliant_math::Mat4;
use pliant_mesh::RenderMesh;
use pliant_types::PliantResult;

/// Trait for render backends consuming per-frame body meshes.
pub trait Renderer {
    /// Starts a new frame.
    fn begin_frame(&mut self) -> PliantResult<()>;

    /// Submits one body's render mesh with its world transform.
    fn submit(&mut self, mesh: &RenderMesh, world: Mat4) -> PliantResult<()>;

    /// Finishes the current frame.
    fn end_frame(&mut self) -> PliantResult<()>;

    /// Returns the number of completed frames.
    fn frame_count(&self) -> u32;

    /// Returns the renderer name.
    fn name(&self) -> &str;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
    submissions: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self {
            frames: 0,
            submissions: 0,
        }
    }

    /// Returns the total number of mesh submissions across all frames.
    pub fn submission_count(&self) -> u32 {
        self.submissions
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) -> PliantResult<()> {
        Ok(())
    }

    fn submit(&mut self, _mesh: &RenderMesh, _world: Mat4) -> PliantResult<()> {
        self.submissions += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> PliantResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }

    fn name(&self) -> &str {
        "headless"
    }
}
