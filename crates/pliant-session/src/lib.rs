//! # pliant-session
//!
//! The top-level session context of the Pliant pipeline.
//!
//! A [`Session`] owns the simulator, a cache of deduplicated models
//! (dedup runs once per model, every body of that model shares the
//! result), and the registry of live bodies with their render colors.
//! It drives the frame loop: clamp elapsed time, step the simulator,
//! extract every body, submit to the renderer.
//!
//! ## Key Types
//!
//! - [`Session`] — the context object; created at session start, torn
//!   down at session end.
//! - [`BodyCreationRequest`] — what an external control surface sends
//!   to spawn a body.
//! - [`FrameStats`] — frame-rate monitor.

pub mod request;
pub mod session;
pub mod stats;

pub use request::BodyCreationRequest;
pub use session::Session;
pub use stats::FrameStats;
