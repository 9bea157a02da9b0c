//! Pure badge layout: variant parameters and per-participant content in, [`scene::BadgeScene`] out.

/// Cascade layout of one badge.
pub mod engine;
/// Renderer-agnostic badge description.
pub mod scene;
/// Named geometry bundles.
pub mod variant;
