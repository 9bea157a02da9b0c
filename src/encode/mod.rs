//! Output encoders for rendered badges.

/// PNG encoding of premultiplied frames.
pub mod png;
