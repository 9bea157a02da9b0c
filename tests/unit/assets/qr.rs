use super::*;

fn px(img: &PreparedImage, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * img.width + x) * 4) as usize;
    let d = &img.rgba8_premul;
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

#[test]
fn encodes_to_exact_square_size() {
    let enc = QrCodeEncoder::default();
    let img = enc.encode("https://example.org/attend?pid=42", 560).unwrap();
    assert_eq!((img.width, img.height), (560, 560));
    assert_eq!(img.rgba8_premul.len(), 560 * 560 * 4);
}

#[test]
fn quiet_zone_is_one_module_and_finder_is_dark() {
    let payload = "https://example.org/attend?pid=42";
    let modules = qrcode::QrCode::new(payload).unwrap().width() as u32;
    let scale = 4;
    let size = (modules + 2) * scale;

    let img = QrCodeEncoder::default().encode(payload, size).unwrap();
    assert_eq!(px(&img, 0, 0), [255, 255, 255, 255]);
    assert_eq!(px(&img, scale - 1, scale - 1), [255, 255, 255, 255]);
    // Top-left finder pattern corner module.
    assert_eq!(px(&img, scale, scale), [0, 0, 0, 255]);
    assert_eq!(px(&img, size - scale - 1, scale), [0, 0, 0, 255]);
    assert_eq!(px(&img, size - 1, size - 1), [255, 255, 255, 255]);
}

#[test]
fn too_small_target_is_an_encoding_failure() {
    let err = QrCodeEncoder::default()
        .encode("https://example.org/attend?pid=42", 10)
        .unwrap_err();
    assert!(matches!(err, PassError::Encoding(_)));
    assert!(QrCodeEncoder::default().encode("x", 0).is_err());
}

#[test]
fn attendance_url_encodes_identifier() {
    assert_eq!(
        attendance_url("https://checkin.example.org/", "A 7/ñ"),
        "https://checkin.example.org/attend?pid=A%207%2F%C3%B1"
    );
    assert_eq!(
        attendance_url("http://localhost:3000", "42"),
        "http://localhost:3000/attend?pid=42"
    );
}
