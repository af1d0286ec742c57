//! Simulator boundary trait.
//!
//! The pipeline calls these methods in a fixed order at body creation:
//!
//! ```text
//! let handle = sim.create_body(&nodes, &faces)?;
//! for link in links { sim.append_link(handle, i, j)?; }
//! sim.set_total_mass(handle, mass)?;       // mass first
//! sim.set_pressure_coefficient(...)?;      // pressure needs a valid mass
//! sim.set_material_coefficients(...)?;
//! sim.generate_bending_constraints(...)?;
//! sim.set_damping(...)?;
//! sim.set_collision_margin(...)?;
//! ```
//!
//! and then, per frame: `step(dt, substeps)` followed by read-only node
//! access for state extraction. Node order is stable: `node_position(i)`
//! refers to the same physical node as index `i` of the `nodes` slice
//! handed to `create_body`, for the lifetime of the body.

use pliant_math::Vec3;
use pliant_types::{BodyHandle, NodeId, PliantResult, Scalar};
use serde::{Deserialize, Serialize};

/// Material stiffness coefficients of a soft body, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialCoefficients {
    /// Linear stretch stiffness.
    pub stretch: Scalar,
    /// Volume preservation stiffness.
    pub volume: Scalar,
    /// Area preservation stiffness.
    pub area: Scalar,
}

impl Default for MaterialCoefficients {
    fn default() -> Self {
        let k = pliant_types::constants::DEFAULT_STIFFNESS;
        Self {
            stretch: k,
            volume: k,
            area: k,
        }
    }
}

/// Trait for soft-body simulator backends.
///
/// Implementors own every body created through them and are the sole
/// mutators of node positions and normals after creation. The pipeline
/// treats node state as a read-only snapshot.
pub trait SoftBodySim {
    /// Creates a soft body from world-space node positions and faces.
    ///
    /// Faces reference nodes by their index in `nodes`; those indices
    /// become the body's stable node ids.
    fn create_body(&mut self, nodes: &[Vec3], faces: &[[u32; 3]]) -> PliantResult<BodyHandle>;

    /// Appends a structural link between nodes `i` and `j`.
    fn append_link(&mut self, body: BodyHandle, i: u32, j: u32) -> PliantResult<()>;

    /// Distributes `mass` across the body's nodes.
    ///
    /// A total mass of exactly zero makes the body vanish from dynamics
    /// and must be rejected.
    fn set_total_mass(&mut self, body: BodyHandle, mass: Scalar) -> PliantResult<()>;

    /// Sets the internal pressure coefficient.
    fn set_pressure_coefficient(&mut self, body: BodyHandle, pressure: Scalar)
        -> PliantResult<()>;

    /// Sets the material stiffness coefficients.
    fn set_material_coefficients(
        &mut self,
        body: BodyHandle,
        coefficients: MaterialCoefficients,
    ) -> PliantResult<()>;

    /// Generates bending constraints between nodes at graph distance `order`.
    fn generate_bending_constraints(&mut self, body: BodyHandle, order: u32) -> PliantResult<()>;

    /// Sets the friction/damping coefficient.
    fn set_damping(&mut self, body: BodyHandle, damping: Scalar) -> PliantResult<()>;

    /// Sets the collision margin around the body's surface.
    fn set_collision_margin(&mut self, body: BodyHandle, margin: Scalar) -> PliantResult<()>;

    /// Advances every body by `dt` seconds using `substeps` sub-iterations.
    fn step(&mut self, dt: Scalar, substeps: u32);

    /// Returns the number of live bodies.
    fn body_count(&self) -> usize;

    /// Returns the node count of a body.
    fn node_count(&self, body: BodyHandle) -> PliantResult<usize>;

    /// Returns the current position of one node.
    fn node_position(&self, body: BodyHandle, node: NodeId) -> PliantResult<Vec3>;

    /// Returns the current normal of one node.
    fn node_normal(&self, body: BodyHandle, node: NodeId) -> PliantResult<Vec3>;

    /// Returns the body's static face list (stable from creation).
    fn faces(&self, body: BodyHandle) -> PliantResult<&[[u32; 3]]>;
}
