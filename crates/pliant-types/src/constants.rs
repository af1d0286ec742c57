//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: Scalar = 10.0;

/// Upper bound on the per-frame timestep handed to the simulator (seconds).
/// Elapsed frame time above this is clamped to bound integration error.
pub const MAX_FRAME_DT: Scalar = 1.0 / 60.0;

/// Fixed sub-iteration count per simulator step.
pub const SOLVER_SUBSTEPS: u32 = 10;

/// Default bending-constraint order (node-graph distance).
pub const DEFAULT_BENDING_ORDER: u32 = 2;

/// Default friction/damping coefficient.
pub const DEFAULT_DAMPING: Scalar = 0.5;

/// Default collision margin around a soft body's surface (meters).
pub const DEFAULT_COLLISION_MARGIN: Scalar = 0.075;

/// Default stiffness for the stretch/volume/area material coefficients.
pub const DEFAULT_STIFFNESS: Scalar = 1.0;
