use super::*;

fn frame(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat(width as usize * height as usize),
        premultiplied: true,
    }
}

#[test]
fn output_starts_with_png_signature_and_round_trips_dimensions() {
    let bytes = encode_png(&frame(3, 2, [255, 0, 0, 255])).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [255, 0, 0, 255]);
}

#[test]
fn premultiplied_pixels_are_demultiplied() {
    let bytes = encode_png(&frame(1, 1, [64, 0, 0, 128])).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);
}

#[test]
fn bad_buffers_are_encoding_errors() {
    let mut f = frame(2, 2, [0, 0, 0, 255]);
    f.data.pop();
    assert!(matches!(encode_png(&f), Err(PassError::Encoding(_))));
    assert!(matches!(
        encode_png(&frame(0, 0, [0; 4])),
        Err(PassError::Encoding(_))
    ));
}

#[test]
fn transparent_pixels_stay_black() {
    let mut px = vec![10, 20, 30, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
