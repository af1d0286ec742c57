//! # pliant-types
//!
//! Shared types, identifiers, error types, and constants for the
//! Pliant soft-body mesh pipeline.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Pliant crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{PliantError, PliantResult};
pub use ids::{BodyHandle, ModelId, NodeId};
pub use scalar::Scalar;
