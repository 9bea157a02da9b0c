use crate::foundation::{
    error::{PassError, PassResult},
    math::mul_div255_u8,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Coverage of the circle inscribed in a `w`x`h` box at pixel `(x, y)`, in `0..=255`.
///
/// Pixels are sampled at their centers with a one-pixel linear ramp at the edge.
pub fn circle_coverage(x: u32, y: u32, w: u32, h: u32) -> u8 {
    let cx = f64::from(w) / 2.0;
    let cy = f64::from(h) / 2.0;
    let r = cx.min(cy);
    let dx = f64::from(x) + 0.5 - cx;
    let dy = f64::from(y) + 0.5 - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    let cov = (r - dist + 0.5).clamp(0.0, 1.0);
    (cov * 255.0).round() as u8
}

/// Source-over `src` onto `dst` with its top-left corner at `(left, top)`.
///
/// Pixels falling outside `dst` are clipped. With `circle` set, `src` is masked to its inscribed
/// circle.
#[allow(clippy::too_many_arguments)]
pub fn overlay_premul(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    left: i64,
    top: i64,
    circle: bool,
) -> PassResult<()> {
    if dst.len() != dst_w as usize * dst_h as usize * 4 {
        return Err(PassError::validation("overlay destination length mismatch"));
    }
    if src.len() != src_w as usize * src_h as usize * 4 {
        return Err(PassError::validation("overlay source length mismatch"));
    }

    for sy in 0..src_h {
        let dy = top + i64::from(sy);
        if dy < 0 || dy >= i64::from(dst_h) {
            continue;
        }
        for sx in 0..src_w {
            let dx = left + i64::from(sx);
            if dx < 0 || dx >= i64::from(dst_w) {
                continue;
            }

            let si = (sy as usize * src_w as usize + sx as usize) * 4;
            let di = (dy as usize * dst_w as usize + dx as usize) * 4;
            let mut s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
            if circle {
                let cov = u16::from(circle_coverage(sx, sy, src_w, src_h));
                for c in &mut s {
                    *c = mul_div255_u8(u16::from(*c), cov);
                }
            }
            let d = [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]];
            dst[di..di + 4].copy_from_slice(&over(d, s, 1.0));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
