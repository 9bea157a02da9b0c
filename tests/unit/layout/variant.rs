use super::*;

#[test]
fn presets_are_valid() {
    for name in [VariantName::Classic, VariantName::Compact, VariantName::RoundLogo] {
        name.variant().validate().unwrap();
    }
}

#[test]
fn round_logo_has_square_circular_slot() {
    let v = LayoutVariant::round_logo();
    assert_eq!(v.logo_shape, SlotShape::Circle);
    assert_eq!(v.logo_max_width, v.logo_height);
    assert_eq!(v.qr_size, LayoutVariant::classic().qr_size);
}

#[test]
fn names_deserialize_kebab_case() {
    let n: VariantName = serde_json::from_str("\"round-logo\"").unwrap();
    assert_eq!(n, VariantName::RoundLogo);
    assert_eq!(VariantName::default(), VariantName::Classic);
}

#[test]
fn oversized_qr_is_rejected() {
    let mut v = LayoutVariant::classic();
    v.qr_size = v.card_width() + 1;
    assert!(matches!(v.validate(), Err(PassError::Validation(_))));
}

#[test]
fn logo_must_fit_header() {
    let mut v = LayoutVariant::classic();
    v.logo_height = v.header_height;
    assert!(v.validate().is_err());
}

#[test]
fn margins_must_leave_a_card() {
    let mut v = LayoutVariant::compact();
    v.card_margin = v.canvas.width / 2;
    assert!(v.validate().is_err());
}

#[test]
fn huge_hand_built_values_are_rejected_without_overflow() {
    let mut v = LayoutVariant::classic();
    v.card_margin = u32::MAX;
    assert_eq!(v.card_width(), 0);
    assert!(matches!(v.validate(), Err(PassError::Validation(_))));

    let mut v = LayoutVariant::classic();
    v.name_side_padding = u32::MAX / 2 + 1;
    assert!(matches!(v.validate(), Err(PassError::Validation(_))));

    let mut v = LayoutVariant::classic();
    v.logo_top_offset = u32::MAX;
    assert!(matches!(v.validate(), Err(PassError::Validation(_))));
}

#[test]
fn non_positive_font_sizes_are_rejected() {
    let mut v = LayoutVariant::classic();
    v.legend_size = 0.0;
    assert!(v.validate().is_err());

    let mut v = LayoutVariant::classic();
    v.name_min_size = v.name_size + 1.0;
    assert!(v.validate().is_err());
}
