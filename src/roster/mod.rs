//! Participant roster: storage backends, header detection, and record resolution.

/// Header detection and column mapping.
pub mod header;
/// Lookup and attendance confirmation.
pub mod resolver;
/// Row storage backends.
pub mod store;
