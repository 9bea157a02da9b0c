use crate::{
    assets::decode::PreparedImage,
    foundation::core::Rgba8,
    foundation::error::{PassError, PassResult},
};

/// Produces a square raster QR symbol for a payload.
pub trait QrEncoder: Send + Sync {
    /// Encode `payload` into a `size_px`x`size_px` image.
    fn encode(&self, payload: &str, size_px: u32) -> PassResult<PreparedImage>;
}

/// [`QrEncoder`] backed by the `qrcode` crate (default error correction).
#[derive(Clone, Debug)]
pub struct QrCodeEncoder {
    /// Quiet-zone width in modules on each side.
    pub margin_modules: u32,
    /// Module color.
    pub dark: Rgba8,
    /// Background color.
    pub light: Rgba8,
}

impl Default for QrCodeEncoder {
    fn default() -> Self {
        Self {
            margin_modules: 1,
            dark: Rgba8::BLACK,
            light: Rgba8::WHITE,
        }
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, payload: &str, size_px: u32) -> PassResult<PreparedImage> {
        if size_px == 0 {
            return Err(PassError::encoding("qr size must be > 0"));
        }
        let code = qrcode::QrCode::new(payload.as_bytes())
            .map_err(|e| PassError::encoding(format!("qr encode: {e}")))?;

        let modules = code.width() as u32;
        let colors = code.to_colors();
        let total = modules + self.margin_modules * 2;
        if total > size_px {
            return Err(PassError::encoding(format!(
                "qr symbol needs {total} modules but only {size_px}px are available"
            )));
        }

        // Integer module scale, then nearest-neighbour to the exact slot size.
        let scale = (size_px / total).max(1);
        let native = total * scale;
        let dark = self.dark.to_premul().to_array();
        let light = self.light.to_premul().to_array();

        let mut img = image::RgbaImage::from_pixel(native, native, image::Rgba(light));
        for (idx, color) in colors.iter().enumerate() {
            if *color != qrcode::Color::Dark {
                continue;
            }
            let mx = (idx as u32) % modules + self.margin_modules;
            let my = (idx as u32) / modules + self.margin_modules;
            for y in my * scale..(my + 1) * scale {
                for x in mx * scale..(mx + 1) * scale {
                    img.put_pixel(x, y, image::Rgba(dark));
                }
            }
        }

        if native != size_px {
            img = image::imageops::resize(
                &img,
                size_px,
                size_px,
                image::imageops::FilterType::Nearest,
            );
        }

        PreparedImage::from_premul(size_px, size_px, img.into_raw())
    }
}

/// Attendance-confirmation URL encoded into each badge: `<base>/attend?pid=<id>`.
pub fn attendance_url(base: &str, identifier: &str) -> String {
    format!(
        "{}/attend?pid={}",
        base.trim().trim_end_matches('/'),
        urlencoding::encode(identifier)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/qr.rs"]
mod tests;
