use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::svg_raster,
    foundation::error::{PassError, PassResult},
};

/// Raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Wrap premultiplied RGBA8 bytes, checking the buffer length.
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> PassResult<Self> {
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(PassError::validation(format!(
                "rgba8 buffer length {} does not match {width}x{height}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Premultiply a straight-alpha `image` buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut rgba8_premul = img.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        }
    }

    /// Straight-alpha copy of the pixels, for resampling with `image`.
    pub fn to_straight_rgba_image(&self) -> PassResult<image::RgbaImage> {
        let mut raw = self.rgba8_premul.as_ref().clone();
        crate::encode::png::demultiply_rgba8_in_place(&mut raw);
        image::RgbaImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| PassError::validation("prepared image byte length mismatch"))
    }
}

/// Decode a raster image (PNG, JPEG, WebP, ...) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> PassResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(PreparedImage::from_rgba_image(dyn_img.to_rgba8()))
}

/// Return `true` when the bytes look like an SVG document rather than a raster format.
pub fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

/// Decode a logo from raster or SVG bytes.
///
/// SVG logos are rasterized at `svg_height` pixels tall so the later fit-inside resize only ever
/// shrinks them.
pub fn decode_logo(
    bytes: &[u8],
    svg_height: u32,
    fontdb: Arc<usvg::fontdb::Database>,
) -> PassResult<PreparedImage> {
    if !looks_like_svg(bytes) {
        return decode_image(bytes);
    }

    let tree = svg_raster::parse_svg(bytes, fontdb)?;
    let (w, h) = svg_raster::svg_raster_size_for_height(&tree, svg_height)?;
    let rgba8_premul = svg_raster::rasterize_svg_to_premul_rgba8(&tree, w, h)?;
    PreparedImage::from_premul(w, h, rgba8_premul)
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
