//! Body-creation parameters.

use pliant_sim::MaterialCoefficients;
use pliant_types::constants::{
    DEFAULT_BENDING_ORDER, DEFAULT_COLLISION_MARGIN, DEFAULT_DAMPING,
};
use pliant_types::{PliantError, PliantResult, Scalar};
use serde::{Deserialize, Serialize};

/// Physical parameters of a deformable body, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    /// Total mass, distributed across nodes. Must be positive: the
    /// simulator defines zero total mass as "vanish from dynamics".
    pub mass: Scalar,
    /// Internal pressure coefficient, ≥ 0. Depends on a valid total
    /// mass, so mass is always configured first.
    pub internal_pressure: Scalar,
    /// Stretch/volume/area stiffness.
    pub material: MaterialCoefficients,
    /// Bending-constraint order (node-graph distance, ≥ 2).
    pub bending_order: u32,
    /// Friction/damping coefficient in `[0, 1]`.
    pub damping: Scalar,
    /// Collision margin around the surface, > 0.
    pub collision_margin: Scalar,
}

impl BodyParams {
    /// Creates parameters with the given mass and pressure and default
    /// material, bending, damping, and margin values.
    pub fn new(mass: Scalar, internal_pressure: Scalar) -> Self {
        Self {
            mass,
            internal_pressure,
            material: MaterialCoefficients::default(),
            bending_order: DEFAULT_BENDING_ORDER,
            damping: DEFAULT_DAMPING,
            collision_margin: DEFAULT_COLLISION_MARGIN,
        }
    }

    /// Validates all parameters, before any simulator call.
    pub fn validate(&self) -> PliantResult<()> {
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return Err(PliantError::Topology(format!(
                "Body mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if self.internal_pressure < 0.0 {
            return Err(PliantError::Topology(format!(
                "Internal pressure must be non-negative, got {}",
                self.internal_pressure
            )));
        }
        if self.bending_order < 2 {
            return Err(PliantError::Topology(format!(
                "Bending order must be at least 2, got {}",
                self.bending_order
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(PliantError::Topology(format!(
                "Damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if !(self.collision_margin > 0.0) {
            return Err(PliantError::Topology(format!(
                "Collision margin must be positive, got {}",
                self.collision_margin
            )));
        }
        Ok(())
    }
}

impl Default for BodyParams {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}
