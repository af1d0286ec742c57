//! # pliant-sim
//!
//! The simulator boundary of the Pliant pipeline.
//!
//! ## Key Types
//!
//! - [`SoftBodySim`] — the trait every simulator backend implements.
//!   This is the exact collaborator surface the topology builder and
//!   state extractor program against; Pliant never implements
//!   integration itself.
//! - [`MaterialCoefficients`] — stretch/volume/area stiffness.
//! - [`StubWorld`] — gravity-only reference world for wiring validation,
//!   tests, and the headless demo.

pub mod stub;
pub mod world;

pub use stub::StubWorld;
pub use world::{MaterialCoefficients, SoftBodySim};
