//! Gravity-only stub world.
//!
//! Implements the full [`SoftBodySim`] surface but skips constraint
//! solving: bodies fall ballistically, velocities are damped, and node
//! normals are recomputed from face geometry after each step. Links,
//! pressure, and material coefficients are recorded and queryable but do
//! not influence motion.
//!
//! The stub exists to:
//! 1. Validate the pipeline wiring (dedup → topology → sim → extraction)
//! 2. Give tests and the headless demo a live, mutating body
//! 3. Keep the trait honest — a real backend slots in without touching
//!    the rest of the pipeline

use pliant_math::Vec3;
use pliant_mesh::normals::compute_node_normals;
use pliant_types::constants::GRAVITY;
use pliant_types::{BodyHandle, NodeId, PliantError, PliantResult, Scalar};

use crate::world::{MaterialCoefficients, SoftBodySim};

/// Face indices are taken on trust at creation, like a real backend;
/// normals stay zero when a face is out of range and the invariant
/// surfaces later, at extraction.
fn safe_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let n = positions.len();
    if faces.iter().all(|f| f.iter().all(|&i| (i as usize) < n)) {
        compute_node_normals(positions, faces)
    } else {
        vec![Vec3::ZERO; n]
    }
}

struct StubBody {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    velocities: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    links: Vec<[u32; 2]>,
    total_mass: Scalar,
    pressure: Scalar,
    material: MaterialCoefficients,
    bending_order: u32,
    damping: Scalar,
    collision_margin: Scalar,
}

/// Stub simulator world. Gravity plus optional ground plane, nothing else.
pub struct StubWorld {
    gravity: Vec3,
    ground_height: Option<Scalar>,
    bodies: Vec<StubBody>,
}

impl StubWorld {
    /// Creates a world with default downward gravity and no ground.
    pub fn new() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            ground_height: None,
            bodies: Vec::new(),
        }
    }

    /// Sets the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Adds an infinite ground plane at the given Y height.
    pub fn with_ground(mut self, height: Scalar) -> Self {
        self.ground_height = Some(height);
        self
    }

    /// Returns the recorded link list of a body (inspection for tests).
    pub fn links(&self, body: BodyHandle) -> PliantResult<&[[u32; 2]]> {
        Ok(&self.body(body)?.links)
    }

    /// Returns the recorded bending-constraint order of a body.
    pub fn bending_order(&self, body: BodyHandle) -> PliantResult<u32> {
        Ok(self.body(body)?.bending_order)
    }

    /// Returns the recorded total mass of a body.
    pub fn total_mass(&self, body: BodyHandle) -> PliantResult<Scalar> {
        Ok(self.body(body)?.total_mass)
    }

    /// Returns the recorded pressure coefficient of a body.
    pub fn pressure_coefficient(&self, body: BodyHandle) -> PliantResult<Scalar> {
        Ok(self.body(body)?.pressure)
    }

    /// Returns the recorded material coefficients of a body.
    pub fn material_coefficients(&self, body: BodyHandle) -> PliantResult<MaterialCoefficients> {
        Ok(self.body(body)?.material)
    }

    /// Returns the recorded collision margin of a body.
    pub fn collision_margin(&self, body: BodyHandle) -> PliantResult<Scalar> {
        Ok(self.body(body)?.collision_margin)
    }

    fn body(&self, handle: BodyHandle) -> PliantResult<&StubBody> {
        self.bodies
            .get(handle.index())
            .ok_or_else(|| PliantError::Sim(format!("Unknown body handle {}", handle.0)))
    }

    fn body_mut(&mut self, handle: BodyHandle) -> PliantResult<&mut StubBody> {
        self.bodies
            .get_mut(handle.index())
            .ok_or_else(|| PliantError::Sim(format!("Unknown body handle {}", handle.0)))
    }
}

impl Default for StubWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftBodySim for StubWorld {
    fn create_body(&mut self, nodes: &[Vec3], faces: &[[u32; 3]]) -> PliantResult<BodyHandle> {
        let handle = BodyHandle(self.bodies.len() as u32);
        let n = nodes.len();
        self.bodies.push(StubBody {
            positions: nodes.to_vec(),
            normals: safe_normals(nodes, faces),
            velocities: vec![Vec3::ZERO; n],
            faces: faces.to_vec(),
            links: Vec::new(),
            total_mass: 1.0,
            pressure: 0.0,
            material: MaterialCoefficients::default(),
            bending_order: 0,
            damping: 0.0,
            collision_margin: 0.0,
        });
        tracing::debug!(handle = handle.0, nodes = n, faces = faces.len(), "created stub body");
        Ok(handle)
    }

    fn append_link(&mut self, body: BodyHandle, i: u32, j: u32) -> PliantResult<()> {
        self.body_mut(body)?.links.push([i, j]);
        Ok(())
    }

    fn set_total_mass(&mut self, body: BodyHandle, mass: Scalar) -> PliantResult<()> {
        if mass == 0.0 {
            // Zero total mass removes the body from dynamics entirely.
            return Err(PliantError::Sim(
                "Total mass of zero would remove the body from dynamics".into(),
            ));
        }
        self.body_mut(body)?.total_mass = mass;
        Ok(())
    }

    fn set_pressure_coefficient(&mut self, body: BodyHandle, pressure: Scalar)
        -> PliantResult<()> {
        self.body_mut(body)?.pressure = pressure;
        Ok(())
    }

    fn set_material_coefficients(
        &mut self,
        body: BodyHandle,
        coefficients: MaterialCoefficients,
    ) -> PliantResult<()> {
        self.body_mut(body)?.material = coefficients;
        Ok(())
    }

    fn generate_bending_constraints(&mut self, body: BodyHandle, order: u32) -> PliantResult<()> {
        self.body_mut(body)?.bending_order = order;
        Ok(())
    }

    fn set_damping(&mut self, body: BodyHandle, damping: Scalar) -> PliantResult<()> {
        self.body_mut(body)?.damping = damping;
        Ok(())
    }

    fn set_collision_margin(&mut self, body: BodyHandle, margin: Scalar) -> PliantResult<()> {
        self.body_mut(body)?.collision_margin = margin;
        Ok(())
    }

    fn step(&mut self, dt: Scalar, substeps: u32) {
        if substeps == 0 || dt <= 0.0 {
            return;
        }
        let h = dt / substeps as Scalar;

        for body in &mut self.bodies {
            for _ in 0..substeps {
                for i in 0..body.positions.len() {
                    body.velocities[i] += self.gravity * h;
                    body.positions[i] += body.velocities[i] * h;

                    if let Some(ground) = self.ground_height {
                        let floor = ground + body.collision_margin;
                        if body.positions[i].y < floor {
                            body.positions[i].y = floor;
                            if body.velocities[i].y < 0.0 {
                                body.velocities[i].y = 0.0;
                            }
                        }
                    }
                }
            }

            let factor = 1.0 - body.damping.clamp(0.0, 1.0) * dt;
            for v in &mut body.velocities {
                *v *= factor;
            }

            body.normals = safe_normals(&body.positions, &body.faces);
        }
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn node_count(&self, body: BodyHandle) -> PliantResult<usize> {
        Ok(self.body(body)?.positions.len())
    }

    fn node_position(&self, body: BodyHandle, node: NodeId) -> PliantResult<Vec3> {
        let b = self.body(body)?;
        b.positions
            .get(node.index())
            .copied()
            .ok_or_else(|| PliantError::Sim(format!("Node {} out of range", node.0)))
    }

    fn node_normal(&self, body: BodyHandle, node: NodeId) -> PliantResult<Vec3> {
        let b = self.body(body)?;
        b.normals
            .get(node.index())
            .copied()
            .ok_or_else(|| PliantError::Sim(format!("Node {} out of range", node.0)))
    }

    fn faces(&self, body: BodyHandle) -> PliantResult<&[[u32; 3]]> {
        Ok(&self.body(body)?.faces)
    }
}
