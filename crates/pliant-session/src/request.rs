//! Body-creation request — the session's inbound contract.

use pliant_body::BodyParams;
use pliant_math::{Pose, Vec3};
use pliant_types::{ModelId, Scalar};
use serde::{Deserialize, Serialize};

/// A request from an external control surface (GUI, CLI, script) to
/// spawn one deformable body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCreationRequest {
    /// Which registered model to instantiate.
    pub model: ModelId,
    /// World-space spawn position.
    pub position: Vec3,
    /// Euler rotation in degrees: `[yaw, pitch, roll]`.
    pub rotation_degrees: Vec3,
    /// Nominal scale; must be `(1, 1, 1)` — non-identity values are
    /// rejected at topology construction.
    pub scale: Vec3,
    /// Total body mass (> 0).
    pub mass: Scalar,
    /// Internal pressure coefficient (≥ 0).
    pub internal_pressure: Scalar,
    /// Constant render color for this body.
    pub color: Vec3,
}

impl BodyCreationRequest {
    /// Creates a request with unit scale and white color.
    pub fn new(model: ModelId, position: Vec3, mass: Scalar, internal_pressure: Scalar) -> Self {
        Self {
            model,
            position,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
            mass,
            internal_pressure,
            color: Vec3::ONE,
        }
    }

    /// The pose this request asks for.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation_degrees).with_scale(self.scale)
    }

    /// The body parameters this request asks for (defaults for the
    /// coefficients the control surface does not expose).
    pub fn params(&self) -> BodyParams {
        BodyParams::new(self.mass, self.internal_pressure)
    }
}
