//! Integration tests for pliant-sim.

use pliant_math::Vec3;
use pliant_sim::{MaterialCoefficients, SoftBodySim, StubWorld};
use pliant_types::{BodyHandle, NodeId, PliantError};

fn unit_triangle() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    (
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ],
        vec![[0, 1, 2]],
    )
}

#[test]
fn create_body_assigns_sequential_handles() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let a = world.create_body(&nodes, &faces).unwrap();
    let b = world.create_body(&nodes, &faces).unwrap();
    assert_eq!(a, BodyHandle(0));
    assert_eq!(b, BodyHandle(1));
    assert_eq!(world.body_count(), 2);
}

#[test]
fn node_order_round_trips() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new().with_gravity(Vec3::ZERO);
    let body = world.create_body(&nodes, &faces).unwrap();

    for (i, expected) in nodes.iter().enumerate() {
        let p = world.node_position(body, NodeId(i as u32)).unwrap();
        assert_eq!(p, *expected);
    }

    // Order survives stepping.
    world.step(1.0 / 60.0, 10);
    for (i, expected) in nodes.iter().enumerate() {
        let p = world.node_position(body, NodeId(i as u32)).unwrap();
        assert_eq!(p, *expected);
    }
}

#[test]
fn gravity_translates_all_nodes_equally() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let body = world.create_body(&nodes, &faces).unwrap();

    world.step(1.0 / 60.0, 10);

    let shift = world.node_position(body, NodeId(0)).unwrap() - nodes[0];
    assert!(shift.y < 0.0, "gravity should pull nodes down");
    assert_eq!(shift.x, 0.0);
    assert_eq!(shift.z, 0.0);

    for i in 1..nodes.len() {
        let s = world.node_position(body, NodeId(i as u32)).unwrap() - nodes[i];
        assert!((s - shift).length() < 1e-6);
    }
}

#[test]
fn normals_recomputed_after_step() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let body = world.create_body(&nodes, &faces).unwrap();

    world.step(1.0 / 60.0, 10);

    // Uniform translation keeps the face flat in the XZ plane.
    for i in 0..nodes.len() {
        let n = world.node_normal(body, NodeId(i as u32)).unwrap();
        assert!((n - Vec3::Y).length() < 1e-5);
    }
}

#[test]
fn ground_plane_stops_the_fall() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new().with_ground(-1.0);
    let body = world.create_body(&nodes, &faces).unwrap();

    for _ in 0..600 {
        world.step(1.0 / 60.0, 10);
    }

    for i in 0..nodes.len() {
        let p = world.node_position(body, NodeId(i as u32)).unwrap();
        assert!(p.y >= -1.0 - 1e-6);
    }
}

#[test]
fn zero_total_mass_is_rejected() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let body = world.create_body(&nodes, &faces).unwrap();
    let err = world.set_total_mass(body, 0.0).unwrap_err();
    assert!(matches!(err, PliantError::Sim(_)));
}

#[test]
fn configuration_is_recorded() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let body = world.create_body(&nodes, &faces).unwrap();

    world.set_total_mass(body, 100.0).unwrap();
    world.set_pressure_coefficient(body, 250.0).unwrap();
    world
        .set_material_coefficients(
            body,
            MaterialCoefficients {
                stretch: 0.9,
                volume: 0.8,
                area: 0.7,
            },
        )
        .unwrap();
    world.generate_bending_constraints(body, 2).unwrap();
    world.set_collision_margin(body, 0.075).unwrap();
    world.append_link(body, 0, 1).unwrap();
    world.append_link(body, 1, 2).unwrap();

    assert_eq!(world.total_mass(body).unwrap(), 100.0);
    assert_eq!(world.pressure_coefficient(body).unwrap(), 250.0);
    assert_eq!(world.material_coefficients(body).unwrap().volume, 0.8);
    assert_eq!(world.bending_order(body).unwrap(), 2);
    assert_eq!(world.collision_margin(body).unwrap(), 0.075);
    assert_eq!(world.links(body).unwrap(), &[[0, 1], [1, 2]]);
}

#[test]
fn unknown_handle_is_sim_error() {
    let world = StubWorld::new();
    let err = world.node_count(BodyHandle(5)).unwrap_err();
    assert!(matches!(err, PliantError::Sim(_)));
}

#[test]
fn zero_substeps_is_a_noop() {
    let (nodes, faces) = unit_triangle();
    let mut world = StubWorld::new();
    let body = world.create_body(&nodes, &faces).unwrap();
    world.step(1.0 / 60.0, 0);
    assert_eq!(world.node_position(body, NodeId(0)).unwrap(), nodes[0]);
}
