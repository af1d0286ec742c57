//! Render-ready vertex format.

use pliant_math::Vec3;
use serde::{Deserialize, Serialize};

/// A single render vertex.
///
/// Produced by asset import (or a generator) on the way in, and by the
/// state extractor on the way out. Immutable once constructed; equality
/// is component-wise on exact floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// World- or model-space position.
    pub position: Vec3,
    /// Surface normal.
    pub normal: Vec3,
    /// Per-vertex color.
    pub color: Vec3,
}

impl Vertex {
    /// Creates a vertex with the given position and normal and a white color.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            color: Vec3::ONE,
        }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}
