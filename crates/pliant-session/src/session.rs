//! The session context — model cache, body registry, frame loop.

use std::collections::HashMap;
use std::sync::Arc;

use pliant_body::{build_soft_body, extract_render_mesh};
use pliant_math::{Mat4, Vec3};
use pliant_mesh::{deduplicate, DeduplicatedMesh, Submesh};
use pliant_render::Renderer;
use pliant_sim::SoftBodySim;
use pliant_types::constants::{MAX_FRAME_DT, SOLVER_SUBSTEPS};
use pliant_types::{BodyHandle, ModelId, PliantError, PliantResult, Scalar};

use crate::request::BodyCreationRequest;
use crate::stats::FrameStats;

/// One registered live body.
struct BodyEntry {
    handle: BodyHandle,
    color: Vec3,
}

/// Top-level session context.
///
/// Single-threaded and frame-driven: input sampling, one blocking
/// simulator step, per-body extraction, render submission — once per
/// frame, no overlap. Owns everything that used to be process-wide
/// state: the per-model dedup cache and the body/color registry.
pub struct Session {
    sim: Box<dyn SoftBodySim>,
    models: HashMap<ModelId, Arc<DeduplicatedMesh>>,
    bodies: Vec<BodyEntry>,
    stats: FrameStats,
}

impl Session {
    /// Creates a session driving the given simulator backend.
    pub fn new(sim: Box<dyn SoftBodySim>) -> Self {
        Self {
            sim,
            models: HashMap::new(),
            bodies: Vec::new(),
            stats: FrameStats::new(),
        }
    }

    /// Imports a model: deduplicates its submeshes once and caches the
    /// result for every body later instantiated from it.
    ///
    /// A malformed submesh rejects this model only; the session and any
    /// other models are unaffected.
    pub fn register_model(&mut self, id: ModelId, submeshes: &[Submesh]) -> PliantResult<()> {
        let mesh = deduplicate(submeshes)?;
        tracing::info!(
            model = id.0,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "registered model"
        );
        self.models.insert(id, Arc::new(mesh));
        Ok(())
    }

    /// Returns a registered model's deduplicated mesh.
    pub fn model(&self, id: ModelId) -> Option<&Arc<DeduplicatedMesh>> {
        self.models.get(&id)
    }

    /// Handles a body-creation request: builds the topology, hands it to
    /// the simulator, and registers the body for per-frame extraction.
    ///
    /// Fails fast — a rejected request leaves no partial body registered
    /// and the simulator untouched.
    pub fn spawn(&mut self, request: &BodyCreationRequest) -> PliantResult<BodyHandle> {
        let mesh = self
            .models
            .get(&request.model)
            .cloned()
            .ok_or_else(|| {
                PliantError::Import(format!("Unknown model id {}", request.model.0))
            })?;

        let handle = build_soft_body(
            self.sim.as_mut(),
            &mesh,
            &request.pose(),
            &request.params(),
        )?;

        self.bodies.push(BodyEntry {
            handle,
            color: request.color,
        });
        Ok(handle)
    }

    /// Returns the number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Read access to the simulator (for inspection and tests).
    pub fn sim(&self) -> &dyn SoftBodySim {
        self.sim.as_ref()
    }

    /// Frame statistics collected so far.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Runs one frame: clamps `elapsed` to the maximum timestep, steps
    /// the simulator with the fixed sub-iteration count, extracts every
    /// live body, and submits each render mesh with an identity world
    /// transform (node positions are already world-space).
    ///
    /// An extraction failure stops the frame and surfaces the error
    /// rather than silently skipping the body.
    pub fn frame(&mut self, elapsed: Scalar, renderer: &mut dyn Renderer) -> PliantResult<()> {
        let dt = elapsed.min(MAX_FRAME_DT);
        self.sim.step(dt, SOLVER_SUBSTEPS);

        renderer.begin_frame()?;
        for entry in &self.bodies {
            let mesh = extract_render_mesh(self.sim.as_ref(), entry.handle, entry.color)?;
            renderer.submit(&mesh, Mat4::IDENTITY)?;
        }
        renderer.end_frame()?;

        self.stats.record(elapsed);
        tracing::trace!(
            frame = self.stats.frame_count(),
            rate = self.stats.last_rate(),
            bodies = self.bodies.len(),
            "frame complete"
        );
        Ok(())
    }
}
