//! Rigid pose applied to a topology at body-creation time.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space placement of a deformable body at creation.
///
/// Rotation is given as Euler angles in degrees, applied yaw (Y),
/// then pitch (X), then roll (Z).
///
/// `scale` is accepted as a parameter but is NOT applied when
/// transforming node positions: scaling a soft-body topology after
/// construction destabilizes the solver, so a non-identity scale is
/// rejected at topology construction rather than silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space translation.
    pub translation: Vec3,
    /// Euler rotation in degrees: `[yaw, pitch, roll]`.
    pub rotation_degrees: Vec3,
    /// Nominal per-axis scale. Must be `(1, 1, 1)`; see type docs.
    pub scale: Vec3,
}

impl Pose {
    /// Creates a pose with unit scale.
    pub fn new(translation: Vec3, rotation_degrees: Vec3) -> Self {
        Self {
            translation,
            rotation_degrees,
            scale: Vec3::ONE,
        }
    }

    /// Identity pose: no translation, no rotation, unit scale.
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }

    /// Sets a nominal scale. Non-identity values are rejected later,
    /// at topology construction.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the rotation as a quaternion (yaw, pitch, roll order).
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        )
    }

    /// Transforms a point: rotate, then translate. Scale is not applied.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation() * point + self.translation
    }

    /// Returns true if the scale is exactly `(1, 1, 1)`.
    pub fn has_unit_scale(&self) -> bool {
        self.scale == Vec3::ONE
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
