use super::*;

fn content<'a>(name: &'a str, has_logo: bool) -> BadgeContent<'a> {
    BadgeContent {
        identifier: "42",
        name,
        confirmation_url: "https://checkin.example/attend?pid=42",
        has_logo,
    }
}

fn theme() -> EventTheme {
    EventTheme {
        event_name: "RustConf".to_owned(),
        event_date: "2026-10-19".to_owned(),
        footer_tagline: "Main hall".to_owned(),
        ..EventTheme::default()
    }
}

#[test]
fn classic_cascade_matches_reference_geometry() {
    let m = compute_metrics(&LayoutVariant::classic());
    assert_eq!(m.card_top, 28.0);
    assert_eq!(m.header_bottom, 288.0);
    assert_eq!(m.title_baseline, 198.0);
    assert_eq!(m.qr_top, 358.0);
    assert_eq!(m.qr_left, 260.0);
    assert_eq!(m.qr_bottom, 918.0);
    assert_eq!(m.name_baseline, 1038.0);
    assert_eq!(m.legend_top, 1068.0);
    assert_eq!(m.footer_top, 1362.0);
    assert_eq!(m.card_bottom, 1472.0);
    assert_eq!(m.overflow, 0.0);
}

#[test]
fn growing_the_qr_shifts_everything_below_by_the_same_delta() {
    let base = LayoutVariant::classic();
    let mut bigger = base.clone();
    bigger.qr_size += 40;

    let a = compute_metrics(&base);
    let b = compute_metrics(&bigger);
    assert_eq!(b.header_bottom, a.header_bottom);
    assert_eq!(b.title_baseline, a.title_baseline);
    assert_eq!(b.qr_top, a.qr_top);
    assert_eq!(b.qr_bottom - a.qr_bottom, 40.0);
    assert_eq!(b.name_baseline - a.name_baseline, 40.0);
    assert_eq!(b.legend_top - a.legend_top, 40.0);
    assert_eq!(b.footer_top, a.footer_top);
}

#[test]
fn footer_moves_down_instead_of_overlapping_the_legend() {
    let mut v = LayoutVariant::classic();
    v.qr_size = 800;
    let m = compute_metrics(&v);
    assert!(m.overflow > 0.0);
    assert_eq!(m.footer_top - m.legend_bottom, f64::from(v.gap_name_legend));

    let scene = layout_badge(&content("Ada", false), &theme(), &v).unwrap();
    assert_eq!(
        scene.canvas.height,
        v.canvas.height + m.overflow as u32
    );
    assert_eq!(scene.metrics.card_bottom, f64::from(scene.canvas.height) - 28.0);
}

#[test]
fn slots_and_pill_are_horizontally_centered() {
    for v in [
        LayoutVariant::classic(),
        LayoutVariant::compact(),
        LayoutVariant::round_logo(),
    ] {
        let scene = layout_badge(&content("Ada", true), &theme(), &v).unwrap();
        let w = f64::from(scene.canvas.width);
        let qr = scene.qr_slot().unwrap().bounds;
        assert_eq!(qr.x0, w - qr.x1);
        let logo = scene.logo_slot().unwrap().bounds;
        assert_eq!(logo.x0, w - logo.x1);
        for t in scene.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        }) {
            assert_eq!(t.anchor.x, w / 2.0);
        }
    }
}

#[test]
fn missing_logo_removes_the_slot_without_moving_anything() {
    let v = LayoutVariant::classic();
    let with = layout_badge(&content("Ada", true), &theme(), &v).unwrap();
    let without = layout_badge(&content("Ada", false), &theme(), &v).unwrap();
    assert!(without.logo_slot().is_none());
    assert_eq!(with.metrics, without.metrics);
    assert_eq!(with.qr_slot(), without.qr_slot());
}

#[test]
fn paint_order_puts_card_first_and_footer_last() {
    let scene = layout_badge(&content("Ada", true), &theme(), &LayoutVariant::classic()).unwrap();
    let rects: Vec<_> = scene.rects().collect();
    assert_eq!(rects.len(), 4);
    assert!(rects[0].shadow.is_some());
    assert!(matches!(rects[1].paint, Paint::HorizontalGradient { .. }));
    assert!(matches!(
        scene.primitives.last(),
        Some(Primitive::Text(TextPrimitive {
            role: TextRole::Footer,
            ..
        }))
    ));
}

#[test]
fn blank_name_falls_back_to_identifier() {
    let scene = layout_badge(&content("   ", false), &theme(), &LayoutVariant::classic()).unwrap();
    assert_eq!(scene.text(TextRole::Name).unwrap().text, "ID 42");
}

#[test]
fn footer_caption_drops_blank_segments() {
    assert_eq!(footer_caption("2026-10-19", "Main hall"), "2026-10-19 · Main hall");
    assert_eq!(footer_caption("", "Main hall"), "Main hall");
    assert_eq!(footer_caption("2026-10-19", " "), "2026-10-19");
    assert_eq!(footer_caption("", ""), "");

    let mut t = theme();
    t.event_date.clear();
    t.footer_tagline.clear();
    let scene = layout_badge(&content("Ada", false), &t, &LayoutVariant::classic()).unwrap();
    assert!(scene.text(TextRole::Footer).is_none());
    assert_eq!(scene.rects().count(), 4);
}

#[test]
fn empty_event_name_omits_the_title() {
    let mut t = theme();
    t.event_name = String::new();
    let scene = layout_badge(&content("Ada", false), &t, &LayoutVariant::classic()).unwrap();
    assert!(scene.text(TextRole::Title).is_none());
}

#[test]
fn long_names_shrink_then_truncate() {
    let (text, size) = fit_name("Ada Lovelace", 1000.0, 56.0, 36.0);
    assert_eq!((text.as_str(), size), ("Ada Lovelace", 56.0));

    let name = "Augusta Ada King Countess of Lovelace";
    let (text, size) = fit_name(name, 928.0, 56.0, 36.0);
    assert_eq!(text, name);
    assert!(size < 56.0 && size >= 36.0);
    assert!(estimate_text_width(&text, size) <= 928.0);

    let very_long = "x".repeat(200);
    let (text, size) = fit_name(&very_long, 928.0, 56.0, 36.0);
    assert_eq!(size, 36.0);
    assert!(text.ends_with('…'));
    assert!(estimate_text_width(&text, size) <= 928.0);
}

#[test]
fn empty_confirmation_url_is_rejected() {
    let mut c = content("Ada", false);
    c.confirmation_url = " ";
    let err = layout_badge(&c, &theme(), &LayoutVariant::classic()).unwrap_err();
    assert!(matches!(err, PassError::InvalidInput(_)));
}

#[test]
fn invalid_variant_is_rejected() {
    let mut v = LayoutVariant::classic();
    v.qr_size = 0;
    assert!(layout_badge(&content("Ada", false), &theme(), &v).is_err());
}
