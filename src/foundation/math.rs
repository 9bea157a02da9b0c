pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Left offset that centers `content` inside `container`, rounded to the nearest pixel.
///
/// Halves round away from zero, so `(1080 - 561) / 2 = 259.5` lands on `260`.
pub fn centered_offset(container: f64, content: f64) -> f64 {
    ((container - content) / 2.0).round()
}

/// Undo premultiplication for one channel.
pub(crate) fn demul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
