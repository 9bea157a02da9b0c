use std::sync::Arc;

use super::*;
use crate::{
    assets::logo::StaticLogo,
    encode::png::PNG_SIGNATURE,
    render::compositor::FrameRGBA,
    roster::store::MemoryRosterStore,
};

fn roster() -> MemoryRosterStore {
    MemoryRosterStore::from_strs(&[
        &["id", "nombre", "asistencia"],
        &["42", "Ada Lovelace", ""],
        &["7", "", "si"],
    ])
}

fn service(store: MemoryRosterStore) -> CheckinService<MemoryRosterStore> {
    let compositor = Compositor::new(Arc::new(usvg::fontdb::Database::new()));
    CheckinService::new(
        store,
        EventTheme::default(),
        LayoutVariant::compact(),
        compositor,
    )
    .with_base_url("https://checkin.example")
}

fn tiny_png() -> Vec<u8> {
    encode_png(&FrameRGBA {
        width: 4,
        height: 2,
        data: [255, 0, 0, 255].repeat(8),
        premultiplied: true,
    })
    .unwrap()
}

struct FailingQr;

impl QrEncoder for FailingQr {
    fn encode(&self, _payload: &str, _size_px: u32) -> PassResult<PreparedImage> {
        Err(PassError::encoding("qr backend down"))
    }
}

#[test]
fn card_file_name_url_encodes_the_identifier() {
    assert_eq!(card_file_name("42"), "card-42.png");
    assert_eq!(card_file_name("a b/c"), "card-a%20b%2Fc.png");
}

#[test]
fn confirm_twice_writes_once() {
    let svc = service(roster());
    let first = svc.confirm_attendance("42").unwrap();
    assert_eq!(
        first,
        Confirmation {
            display_name: "Ada Lovelace".to_owned(),
            identifier: "42".to_owned(),
            already_marked: false,
        }
    );
    let second = svc.confirm_attendance("42").unwrap();
    assert!(second.already_marked);
    assert_eq!(svc.resolver().store().write_count(), 1);
}

#[test]
fn listing_uses_display_names() {
    let list = service(roster()).list_participants().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].display_name, "ID 7");
    assert!(list[1].attendance_marked);
}

#[test]
fn unknown_and_empty_identifiers_are_expected_outcomes() {
    let svc = service(roster());
    let err = svc.render_badge("99").unwrap_err();
    assert!(matches!(err, PassError::NotFound(_)));
    assert!(!err.is_fault());

    let err = svc.confirm_attendance("  ").unwrap_err();
    assert!(matches!(err, PassError::InvalidInput(_)));
}

#[test]
fn offline_store_is_a_fault() {
    let store = roster();
    store.set_offline(true);
    let err = service(store).list_participants().unwrap_err();
    assert!(err.is_fault());
}

#[test]
fn rendered_badge_is_a_png_of_the_variant_size() {
    let png = service(roster()).render_badge("42").unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (720, 1000));
}

#[test]
fn scene_links_to_the_requested_origin() {
    let svc = service(roster());
    let scene = svc.badge_scene("42", "https://door.example/").unwrap();
    assert_eq!(scene.qr_payload, "https://door.example/attend?pid=42");
    assert!(scene.logo_slot().is_none());
}

#[test]
fn decodable_logo_gets_a_slot() {
    let svc = service(roster()).with_logo_provider(StaticLogo(tiny_png()));
    let scene = svc.badge_scene("42", "https://checkin.example").unwrap();
    assert!(scene.logo_slot().is_some());
}

#[test]
fn undecodable_logo_is_skipped_not_fatal() {
    let svc = service(roster()).with_logo_provider(StaticLogo(b"not an image".to_vec()));
    let scene = svc.badge_scene("42", "https://checkin.example").unwrap();
    assert!(scene.logo_slot().is_none());
    svc.render_badge("42").unwrap();
}

#[test]
fn qr_failure_is_fatal() {
    let svc = service(roster()).with_qr_encoder(FailingQr);
    let err = svc.render_badge("42").unwrap_err();
    assert!(matches!(err, PassError::Encoding(_)));
    assert!(err.is_fault());
}
