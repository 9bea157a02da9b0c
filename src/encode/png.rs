use std::io::Cursor;

use crate::{
    foundation::{
        error::{PassError, PassResult},
        math::demul_u8,
    },
    render::compositor::FrameRGBA,
};

/// PNG signature bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Encode a frame as a straight-alpha RGBA8 PNG.
pub fn encode_png(frame: &FrameRGBA) -> PassResult<Vec<u8>> {
    if frame.width == 0 || frame.height == 0 {
        return Err(PassError::encoding("cannot encode an empty frame"));
    }
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(PassError::encoding(format!(
            "frame buffer length {} does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        demultiply_rgba8_in_place(&mut rgba);
    }

    let mut out = Cursor::new(Vec::with_capacity(rgba.len() / 4));
    image::write_buffer_with_format(
        &mut out,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PassError::encoding(format!("png encode failed: {e}")))?;
    Ok(out.into_inner())
}

pub(crate) fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        px[0] = demul_u8(px[0], a);
        px[1] = demul_u8(px[1], a);
        px[2] = demul_u8(px[2], a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
