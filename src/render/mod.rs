//! Badge rendering: scene to SVG, SVG to pixels, raster slots composited on top.

/// Pixel-level compositing helpers.
pub mod composite;
/// Scene rasterization and slot placement.
pub mod compositor;
/// Scene to SVG document serialization.
pub mod svg;
