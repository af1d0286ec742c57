//! Soft-body creation against the simulator boundary.

use pliant_math::Pose;
use pliant_mesh::DeduplicatedMesh;
use pliant_sim::SoftBodySim;
use pliant_types::{BodyHandle, PliantResult};

use crate::params::BodyParams;
use crate::topology::Topology;

/// Builds a deformable body and hands it to the simulator.
///
/// Validation (parameters, then topology) happens entirely before the
/// first simulator call, so a rejected request leaves the simulator
/// untouched. Configuration calls run in a fixed order; in particular
/// mass is set before the pressure coefficient, since internal pressure
/// simulation depends on a valid total mass.
pub fn build_soft_body(
    sim: &mut dyn SoftBodySim,
    mesh: &DeduplicatedMesh,
    pose: &Pose,
    params: &BodyParams,
) -> PliantResult<BodyHandle> {
    params.validate()?;
    let topology = Topology::build(mesh, pose)?;

    let handle = sim.create_body(&topology.nodes, &topology.faces)?;

    for &[i, j] in &topology.links {
        sim.append_link(handle, i, j)?;
    }

    sim.set_total_mass(handle, params.mass)?;
    sim.set_pressure_coefficient(handle, params.internal_pressure)?;
    sim.set_material_coefficients(handle, params.material)?;
    sim.generate_bending_constraints(handle, params.bending_order)?;
    sim.set_damping(handle, params.damping)?;
    sim.set_collision_margin(handle, params.collision_margin)?;

    tracing::info!(
        handle = handle.0,
        nodes = topology.node_count(),
        faces = topology.face_count(),
        links = topology.link_count(),
        mass = params.mass,
        pressure = params.internal_pressure,
        "created soft body"
    );

    Ok(handle)
}
