pub(crate) mod color;
pub(crate) mod decode;
pub(crate) mod logo;
pub(crate) mod qr;
pub(crate) mod svg_raster;
