//! # pliant-math
//!
//! Math primitives for the Pliant soft-body pipeline.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, `Mat4`, etc.)
//! - [`Pose`] — rigid placement (translation + Euler rotation) applied
//!   to a topology at creation time

pub mod pose;

pub use pose::Pose;

// Re-export glam types as the canonical math types for Pliant.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
