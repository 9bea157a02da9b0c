use super::*;

fn empty_db() -> Arc<usvg::fontdb::Database> {
    Arc::new(usvg::fontdb::Database::new())
}

#[test]
fn raster_size_scales_to_target_height() {
    let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50"></svg>"#;
    let tree = parse_svg(svg, empty_db()).unwrap();
    assert_eq!(svg_raster_size_for_height(&tree, 100).unwrap(), (400, 100));
}

#[test]
fn rasterizes_filled_rect_premultiplied() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
        <rect width="4" height="4" fill="#ff0000" fill-opacity="0.5"/>
    </svg>"##;
    let tree = parse_svg(svg, empty_db()).unwrap();
    let px = rasterize_svg_to_premul_rgba8(&tree, 4, 4).unwrap();
    assert_eq!(px.len(), 4 * 4 * 4);
    let a = px[3];
    assert!((127..=129).contains(&a));
    assert!(px[0] <= a);
    assert_eq!(px[1], 0);
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_svg(b"<svg", empty_db()).is_err());
}
