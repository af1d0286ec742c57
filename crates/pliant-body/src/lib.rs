//! # pliant-body
//!
//! Deformable-body construction and per-frame state extraction.
//!
//! ## Key Types
//!
//! - [`Topology`] — the fixed node/face/link graph of a body, built once
//!   from a deduplicated mesh and a pose.
//! - [`BodyParams`] — mass, internal pressure, material and damping
//!   coefficients handed to the simulator at creation.
//! - [`build_soft_body`] — validates, builds the topology, and issues
//!   the simulator configuration calls in the required order.
//! - [`extract_render_mesh`] — rebuilds render buffers from the live
//!   node state every frame.

pub mod builder;
pub mod extract;
pub mod params;
pub mod topology;

pub use builder::build_soft_body;
pub use extract::extract_render_mesh;
pub use params::BodyParams;
pub use topology::Topology;
