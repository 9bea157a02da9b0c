use super::*;
use crate::layout::{
    engine::{BadgeContent, EventTheme, layout_badge},
    variant::LayoutVariant,
};

fn solid(width: u32, height: u32, px: [u8; 4]) -> PreparedImage {
    PreparedImage::from_premul(width, height, px.repeat(width as usize * height as usize)).unwrap()
}

fn scene(variant: &LayoutVariant, has_logo: bool) -> BadgeScene {
    let content = BadgeContent {
        identifier: "42",
        name: "Ada",
        confirmation_url: "https://checkin.example/attend?pid=42",
        has_logo,
    };
    layout_badge(&content, &EventTheme::default(), variant).unwrap()
}

fn compositor() -> Compositor {
    // No faces: text is skipped, keeping pixel checks independent of host fonts.
    Compositor::new(Arc::new(usvg::fontdb::Database::new()))
}

#[test]
fn fit_inside_keeps_aspect_and_never_upscales_by_default() {
    assert_eq!(fit_inside((1040, 184), (520, 92), false), (520, 92));
    assert_eq!(fit_inside((100, 50), (520, 92), false), (100, 50));
    assert_eq!(fit_inside((100, 50), (520, 92), true), (184, 92));
    assert_eq!(fit_inside((2000, 100), (520, 92), false), (520, 26));
    assert_eq!(fit_inside((0, 10), (520, 92), false), (0, 0));
}

#[test]
fn frame_matches_canvas_and_background() {
    let v = LayoutVariant::classic();
    let frame = compositor()
        .compose(&scene(&v, false), &solid(560, 560, [0, 0, 0, 255]), None)
        .unwrap();
    assert_eq!((frame.width, frame.height), (1080, 1500));
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([0xee, 0xf2, 0xf7, 255]));
}

#[test]
fn qr_is_scaled_into_its_slot() {
    let v = LayoutVariant::classic();
    let frame = compositor()
        .compose(&scene(&v, false), &solid(100, 100, [0, 0, 0, 255]), None)
        .unwrap();
    // Slot spans x 260..820, y 358..918.
    assert_eq!(frame.pixel(540, 638), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(260, 358), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(819, 917), Some([0, 0, 0, 255]));
    assert_ne!(frame.pixel(259, 638), Some([0, 0, 0, 255]));
    assert_ne!(frame.pixel(540, 918), Some([0, 0, 0, 255]));
}

#[test]
fn logo_is_centered_in_its_slot() {
    let v = LayoutVariant::classic();
    let red = [255, 0, 0, 255];
    let frame = compositor()
        .compose(
            &scene(&v, true),
            &solid(560, 560, [0, 0, 0, 255]),
            Some(&solid(100, 50, red)),
        )
        .unwrap();
    // Slot 280..800 x 48..140; a 100x50 logo lands at 490..590 x 69..119.
    assert_eq!(frame.pixel(540, 94), Some(red));
    assert_eq!(frame.pixel(490, 69), Some(red));
    assert_ne!(frame.pixel(489, 94), Some(red));
    assert_ne!(frame.pixel(540, 119), Some(red));
}

#[test]
fn round_logo_is_clipped_to_a_circle() {
    let v = LayoutVariant::round_logo();
    let red = [255, 0, 0, 255];
    let frame = compositor()
        .compose(
            &scene(&v, true),
            &solid(560, 560, [0, 0, 0, 255]),
            Some(&solid(92, 92, red)),
        )
        .unwrap();
    // Slot 494..586 x 48..140.
    assert_eq!(frame.pixel(540, 94), Some(red));
    assert_ne!(frame.pixel(494, 48), Some(red));
}

#[test]
fn logo_without_slot_is_ignored() {
    let v = LayoutVariant::classic();
    let red = [255, 0, 0, 255];
    let frame = compositor()
        .compose(
            &scene(&v, false),
            &solid(560, 560, [0, 0, 0, 255]),
            Some(&solid(100, 50, red)),
        )
        .unwrap();
    assert_ne!(frame.pixel(540, 94), Some(red));
}
