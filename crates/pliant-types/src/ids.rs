//! Strongly-typed identifiers for pipeline entities.
//!
//! Newtype wrappers prevent accidental mixing of node indices with
//! body handles or model identifiers. `NodeId` is the dense integer
//! id assigned to every node at topology construction and carried
//! through the face/link lists and the simulator handle, so per-frame
//! state extraction resolves a face corner in O(1).

use serde::{Deserialize, Serialize};

/// Dense index of a node within one deformable body.
///
/// Assigned once at topology construction; stable for the body's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Handle to a deformable body owned by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

/// Identifier of a registered model asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub u32);

impl NodeId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl BodyHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for BodyHandle {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for ModelId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
