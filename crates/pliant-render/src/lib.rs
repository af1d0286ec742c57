//! # pliant-render
//!
//! Pluggable render boundary for Pliant.
//!
//! Provides a [`Renderer`] trait with a [`HeadlessRenderer`] stub and a
//! [`JsonFrameExporter`] that captures submitted frames as JSON for
//! offline inspection.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, Renderer};
