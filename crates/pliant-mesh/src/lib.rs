//! # pliant-mesh
//!
//! Mesh representation and preparation for the Pliant soft-body pipeline.
//!
//! ## Key Types
//!
//! - [`Vertex`] — position + normal + color, the renderer's vertex format.
//! - [`Submesh`] — one independently-authored piece of a model asset.
//! - [`DeduplicatedMesh`] — a model collapsed to unique positions, the
//!   canonical simulation input. Built once per model, shared by every
//!   body instantiated from it.
//! - [`RenderMesh`] — per-frame render buffers regenerated from live
//!   simulator state.
//! - [`dedup::deduplicate`] — the vertex deduplicator.
//! - Procedural generators standing in for the external asset importer.

pub mod dedup;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod vertex;

pub use dedup::deduplicate;
pub use mesh::{DeduplicatedMesh, RenderMesh, Submesh};
pub use vertex::Vertex;
