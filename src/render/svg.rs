use std::fmt::Write as _;

use crate::{
    foundation::core::{Rect, Rgba8},
    layout::{
        scene::{BadgeScene, Corners, Paint, Primitive, RectPrimitive, TextPrimitive},
        variant::DropShadow,
    },
};

/// Serialize the vector part of a scene (everything except image slots) as an SVG document.
///
/// The document is sized to the scene canvas with a 1:1 viewBox, so SVG user units are pixels.
pub fn scene_to_svg(scene: &BadgeScene) -> String {
    let w = scene.canvas.width;
    let h = scene.canvas.height;

    let mut defs = String::new();
    let mut body = String::new();

    let _ = writeln!(
        body,
        r#"<rect x="0" y="0" width="{w}" height="{h}"{}/>"#,
        fill_attrs(scene.background)
    );

    for (i, prim) in scene.primitives.iter().enumerate() {
        match prim {
            Primitive::Rect(rect) => write_rect(&mut defs, &mut body, i, rect),
            Primitive::Text(text) => write_text(&mut body, text),
            Primitive::Image(_) => {}
        }
    }

    let mut out = String::with_capacity(defs.len() + body.len() + 256);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if !defs.is_empty() {
        out.push_str("<defs>\n");
        out.push_str(&defs);
        out.push_str("</defs>\n");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn write_rect(defs: &mut String, body: &mut String, index: usize, rect: &RectPrimitive) {
    let fill = match rect.paint {
        Paint::Solid(c) => fill_attrs(c),
        Paint::HorizontalGradient { start, end } => {
            let id = format!("paint-{index}");
            let _ = writeln!(
                defs,
                r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="0"><stop offset="0"{}/><stop offset="1"{}/></linearGradient>"#,
                stop_attrs(start),
                stop_attrs(end),
            );
            format!(r#" fill="url(#{id})""#)
        }
    };

    let filter = match rect.shadow {
        Some(shadow) => {
            let id = format!("shadow-{index}");
            write_shadow_filter(defs, &id, shadow);
            format!(r#" filter="url(#{id})""#)
        }
        None => String::new(),
    };

    let _ = writeln!(body, r#"<path d="{}"{fill}{filter}/>"#, rounded_rect_path(rect.bounds, rect.radius, rect.corners));
}

fn write_shadow_filter(defs: &mut String, id: &str, shadow: DropShadow) {
    let _ = writeln!(
        defs,
        r#"<filter id="{id}" x="-20%" y="-20%" width="140%" height="140%"><feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="{}"/></filter>"#,
        shadow.dx,
        shadow.dy,
        shadow.blur,
        shadow.color.to_hex_rgb(),
        fmt_opacity(shadow.color),
    );
}

fn write_text(body: &mut String, text: &TextPrimitive) {
    let _ = writeln!(
        body,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}"{}>{}</text>"#,
        text.anchor.x,
        text.anchor.y,
        xml_escape(&text.font_family),
        text.size_px,
        text.weight,
        fill_attrs(text.color),
        xml_escape(&text.text),
    );
}

/// Path for `bounds` with `radius` applied to the selected corners.
///
/// The radius is clamped to half the shorter side.
pub fn rounded_rect_path(bounds: Rect, radius: f64, corners: Corners) -> String {
    let r = radius.max(0.0).min(bounds.width() / 2.0).min(bounds.height() / 2.0);
    let (rt, rb) = match corners {
        Corners::All => (r, r),
        Corners::Top => (r, 0.0),
        Corners::Bottom => (0.0, r),
    };
    let (x0, y0, x1, y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);

    let mut d = String::new();
    let _ = write!(d, "M{} {}H{}", x0 + rt, y0, x1 - rt);
    if rt > 0.0 {
        let _ = write!(d, "A{rt} {rt} 0 0 1 {} {}", x1, y0 + rt);
    }
    let _ = write!(d, "V{}", y1 - rb);
    if rb > 0.0 {
        let _ = write!(d, "A{rb} {rb} 0 0 1 {} {}", x1 - rb, y1);
    }
    let _ = write!(d, "H{}", x0 + rb);
    if rb > 0.0 {
        let _ = write!(d, "A{rb} {rb} 0 0 1 {} {}", x0, y1 - rb);
    }
    let _ = write!(d, "V{}", y0 + rt);
    if rt > 0.0 {
        let _ = write!(d, "A{rt} {rt} 0 0 1 {} {}", x0 + rt, y0);
    }
    d.push('Z');
    d
}

fn fill_attrs(c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#" fill="{}""#, c.to_hex_rgb())
    } else {
        format!(r#" fill="{}" fill-opacity="{}""#, c.to_hex_rgb(), fmt_opacity(c))
    }
}

fn stop_attrs(c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#" stop-color="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#" stop-color="{}" stop-opacity="{}""#,
            c.to_hex_rgb(),
            fmt_opacity(c)
        )
    }
}

fn fmt_opacity(c: Rgba8) -> String {
    format!("{:.3}", c.opacity())
}

/// Escape text for use in SVG character data and double-quoted attributes.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
