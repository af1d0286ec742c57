//! Scalar type alias for the pipeline.
//!
//! `f32` matches the renderer's vertex format and the simulator's
//! node state, so no narrowing happens at either boundary.

/// The floating-point type used throughout the pipeline.
pub type Scalar = f32;
