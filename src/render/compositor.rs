use std::sync::Arc;

use crate::{
    assets::{decode::PreparedImage, svg_raster},
    foundation::{
        error::{PassError, PassResult},
        math::centered_offset,
    },
    layout::{
        scene::{BadgeScene, ImageSlot},
        variant::SlotShape,
    },
    render::{composite::overlay_premul, svg::scene_to_svg},
};

/// A rendered badge as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Largest size with the aspect ratio of `src` that fits inside `slot`.
///
/// Without `allow_upscale`, images already smaller than the slot keep their size.
pub fn fit_inside(src: (u32, u32), slot: (u32, u32), allow_upscale: bool) -> (u32, u32) {
    let (sw, sh) = src;
    let (bw, bh) = slot;
    if sw == 0 || sh == 0 || bw == 0 || bh == 0 {
        return (0, 0);
    }

    let scale = (f64::from(bw) / f64::from(sw)).min(f64::from(bh) / f64::from(sh));
    let scale = if allow_upscale { scale } else { scale.min(1.0) };
    let w = ((f64::from(sw) * scale).round() as u32).clamp(1, bw);
    let h = ((f64::from(sh) * scale).round() as u32).clamp(1, bh);
    (w, h)
}

fn resize(
    img: &PreparedImage,
    width: u32,
    height: u32,
    filter: image::imageops::FilterType,
) -> PassResult<PreparedImage> {
    if img.width == width && img.height == height {
        return Ok(img.clone());
    }
    let straight = img.to_straight_rgba_image()?;
    let resized = image::imageops::resize(&straight, width, height, filter);
    Ok(PreparedImage::from_rgba_image(resized))
}

fn slot_size(slot: &ImageSlot) -> (u32, u32) {
    (
        slot.bounds.width().round().max(0.0) as u32,
        slot.bounds.height().round().max(0.0) as u32,
    )
}

/// Turns a [`BadgeScene`] plus its raster inputs into pixels.
///
/// Vector content goes through `usvg`/`resvg`; the QR code and logo are then composited into
/// their slots in premultiplied RGBA8.
#[derive(Clone)]
pub struct Compositor {
    fontdb: Arc<usvg::fontdb::Database>,
    allow_logo_upscale: bool,
}

impl Compositor {
    /// Compositor drawing text with `fontdb`.
    pub fn new(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fontdb,
            allow_logo_upscale: false,
        }
    }

    /// Let logos smaller than their slot be scaled up.
    pub fn with_logo_upscale(mut self, allow: bool) -> Self {
        self.allow_logo_upscale = allow;
        self
    }

    /// Font database shared with SVG logo decoding.
    pub fn fontdb(&self) -> &Arc<usvg::fontdb::Database> {
        &self.fontdb
    }

    /// Rasterize the vector part of `scene` (background, card, bands, text).
    pub fn rasterize_scene(&self, scene: &BadgeScene) -> PassResult<FrameRGBA> {
        let svg = scene_to_svg(scene);
        let tree = svg_raster::parse_svg(svg.as_bytes(), self.fontdb.clone())?;
        let (width, height) = (scene.canvas.width, scene.canvas.height);
        let data = svg_raster::rasterize_svg_to_premul_rgba8(&tree, width, height)?;
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    /// Render the full badge.
    ///
    /// `qr` is resized with nearest-neighbour sampling if it does not match the slot. A logo is
    /// drawn only when the scene has a logo slot.
    pub fn compose(
        &self,
        scene: &BadgeScene,
        qr: &PreparedImage,
        logo: Option<&PreparedImage>,
    ) -> PassResult<FrameRGBA> {
        let qr_slot = scene
            .qr_slot()
            .ok_or_else(|| PassError::validation("scene has no qr slot"))?;

        let mut frame = self.rasterize_scene(scene)?;

        if let (Some(slot), Some(logo)) = (scene.logo_slot(), logo) {
            self.place_logo(&mut frame, slot, logo)?;
        } else if scene.logo_slot().is_some() {
            tracing::debug!("logo slot left empty");
        }

        let (qw, qh) = slot_size(qr_slot);
        let qr = resize(qr, qw, qh, image::imageops::FilterType::Nearest)?;
        overlay_premul(
            &mut frame.data,
            frame.width,
            frame.height,
            &qr.rgba8_premul,
            qr.width,
            qr.height,
            qr_slot.bounds.x0.round() as i64,
            qr_slot.bounds.y0.round() as i64,
            false,
        )?;

        Ok(frame)
    }

    fn place_logo(
        &self,
        frame: &mut FrameRGBA,
        slot: &ImageSlot,
        logo: &PreparedImage,
    ) -> PassResult<()> {
        let (sw, sh) = slot_size(slot);
        let (w, h) = fit_inside((logo.width, logo.height), (sw, sh), self.allow_logo_upscale);
        if w == 0 || h == 0 {
            return Ok(());
        }

        let fitted = resize(logo, w, h, image::imageops::FilterType::Lanczos3)?;
        let left = slot.bounds.x0 + centered_offset(f64::from(sw), f64::from(w));
        let top = slot.bounds.y0 + centered_offset(f64::from(sh), f64::from(h));
        overlay_premul(
            &mut frame.data,
            frame.width,
            frame.height,
            &fitted.rgba8_premul,
            fitted.width,
            fitted.height,
            left as i64,
            top as i64,
            slot.shape == SlotShape::Circle,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
