use crate::{
    foundation::{
        core::{Canvas, Point, Rect, Rgba8},
        error::{PassError, PassResult},
        math::centered_offset,
    },
    layout::{
        scene::{
            BadgeMetrics, BadgeScene, Corners, ImageSlot, Paint, Primitive, RectPrimitive, SlotKind,
            TextPrimitive, TextRole,
        },
        variant::{LayoutVariant, SlotShape},
    },
};

/// Separator between footer caption segments.
pub const CAPTION_SEPARATOR: &str = " · ";

/// Default font stack for badge text.
pub const DEFAULT_FONT_FAMILY: &str = "Inter, Arial, 'DejaVu Sans', sans-serif";

// Mean advance of a bold sans glyph, in ems. Used only to decide when a name must shrink.
const BOLD_ADVANCE_EM: f64 = 0.6;

const ELLIPSIS: char = '…';

/// Event-wide branding, fixed at startup and passed to every layout call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EventTheme {
    /// Event title drawn on the header band.
    pub event_name: String,
    /// Event date; omitted from the footer when blank.
    pub event_date: String,
    /// Header gradient start (the theme color).
    pub primary: Rgba8,
    /// Header gradient end.
    pub gradient_end: Rgba8,
    /// Footer text after the date.
    pub footer_tagline: String,
    /// Instruction text inside the legend pill.
    pub legend_text: String,
    /// CSS font-family list used for all text.
    pub font_family: String,
}

impl Default for EventTheme {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            event_date: String::new(),
            primary: Rgba8::rgb(0x0b, 0x57, 0xd0),
            gradient_end: Rgba8::rgb(0x17, 0x4e, 0xa6),
            footer_tagline: String::new(),
            legend_text: "ESCANEA EL QR PARA REGISTRAR TU ASISTENCIA".to_owned(),
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

/// Per-participant input to the layout.
#[derive(Clone, Copy, Debug)]
pub struct BadgeContent<'a> {
    /// Participant identifier, used for the name fallback.
    pub identifier: &'a str,
    /// Raw participant name; blank names become `ID <identifier>`.
    pub name: &'a str,
    /// URL the QR code must encode.
    pub confirmation_url: &'a str,
    /// Whether a logo will be supplied to the compositor.
    pub has_logo: bool,
}

/// `"<date> · <tagline>"`, dropping blank segments and their separator.
pub fn footer_caption(event_date: &str, tagline: &str) -> String {
    [event_date.trim(), tagline.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(CAPTION_SEPARATOR)
}

/// Rough rendered width of `text` in a bold sans face.
pub fn estimate_text_width(text: &str, size_px: f64) -> f64 {
    text.chars().count() as f64 * size_px * BOLD_ADVANCE_EM
}

/// Fit a name into `max_width`: shrink toward `min_size`, then truncate with an ellipsis.
///
/// Returns the text to draw and its font size. Names are never wrapped.
pub fn fit_name(name: &str, max_width: f64, size: f64, min_size: f64) -> (String, f64) {
    let n = name.chars().count();
    if n == 0 || estimate_text_width(name, size) <= max_width {
        return (name.to_owned(), size);
    }

    let shrunk = (max_width / (n as f64 * BOLD_ADVANCE_EM)).floor();
    if shrunk >= min_size {
        return (name.to_owned(), shrunk);
    }

    let max_chars = (max_width / (min_size * BOLD_ADVANCE_EM)).floor() as usize;
    let keep = max_chars.saturating_sub(1).max(1);
    let mut text: String = name.chars().take(keep).collect::<String>().trim_end().to_owned();
    text.push(ELLIPSIS);
    (text, min_size)
}

/// Derive every vertical anchor from the variant's independent parameters.
///
/// The header, QR, name, and legend stack top-down; the footer hangs from the card bottom. If
/// the legend would come within `gap_name_legend` of the footer, the canvas grows by exactly
/// that overflow so the footer moves down with it.
pub fn compute_metrics(variant: &LayoutVariant) -> BadgeMetrics {
    let w = f64::from(variant.canvas.width);
    let h = f64::from(variant.canvas.height);
    let margin = f64::from(variant.card_margin);

    let card_top = margin;
    let header_bottom = card_top + f64::from(variant.header_height);
    let qr_top = header_bottom + f64::from(variant.gap_header_qr);
    let qr_bottom = qr_top + f64::from(variant.qr_size);
    let name_baseline = qr_bottom + f64::from(variant.gap_qr_name);
    let legend_top = name_baseline + f64::from(variant.gap_name_legend);
    let legend_bottom = legend_top + f64::from(variant.legend_height);

    let base_card_bottom = h - margin;
    let base_footer_top = base_card_bottom - f64::from(variant.footer_height);
    let clearance = f64::from(variant.gap_name_legend);
    let overflow = (legend_bottom + clearance - base_footer_top).max(0.0);

    BadgeMetrics {
        card_left: margin,
        card_right: w - margin,
        card_top,
        card_bottom: base_card_bottom + overflow,
        header_bottom,
        title_baseline: card_top + f64::from(variant.title_baseline_offset),
        qr_left: centered_offset(w, f64::from(variant.qr_size)),
        qr_top,
        qr_bottom,
        name_baseline,
        legend_top,
        legend_bottom,
        footer_top: base_footer_top + overflow,
        overflow,
    }
}

/// Build the badge scene for one participant.
pub fn layout_badge(
    content: &BadgeContent<'_>,
    theme: &EventTheme,
    variant: &LayoutVariant,
) -> PassResult<BadgeScene> {
    variant.validate()?;
    if content.confirmation_url.trim().is_empty() {
        return Err(PassError::invalid_input("confirmation url is empty"));
    }

    let m = compute_metrics(variant);
    let canvas = Canvas {
        width: variant.canvas.width,
        height: variant.canvas.height + m.overflow as u32,
    };
    let w = f64::from(canvas.width);
    let mid_x = w / 2.0;
    let card_w = m.card_right - m.card_left;
    let palette = &variant.palette;

    let text = |role: TextRole, y: f64, text: String, size_px: f64, weight: u16, color: Rgba8| {
        Primitive::Text(TextPrimitive {
            role,
            anchor: Point::new(mid_x, y),
            text,
            size_px,
            weight,
            color,
            font_family: theme.font_family.clone(),
        })
    };

    let mut primitives = Vec::with_capacity(10);

    primitives.push(Primitive::Rect(RectPrimitive {
        bounds: Rect::new(m.card_left, m.card_top, m.card_right, m.card_bottom),
        radius: variant.corner_radius,
        corners: Corners::All,
        paint: Paint::Solid(palette.card),
        shadow: variant.card_shadow,
    }));
    primitives.push(Primitive::Rect(RectPrimitive {
        bounds: Rect::new(m.card_left, m.card_top, m.card_right, m.header_bottom),
        radius: variant.corner_radius,
        corners: Corners::Top,
        paint: Paint::HorizontalGradient {
            start: theme.primary,
            end: theme.gradient_end,
        },
        shadow: None,
    }));

    let title = theme.event_name.trim();
    if !title.is_empty() {
        primitives.push(text(
            TextRole::Title,
            m.title_baseline,
            title.to_owned(),
            variant.title_size,
            800,
            palette.title_text,
        ));
    }

    if content.has_logo {
        let logo_w = f64::from(variant.logo_max_width);
        let logo_left = centered_offset(w, logo_w);
        let logo_top = m.card_top + f64::from(variant.logo_top_offset);
        primitives.push(Primitive::Image(ImageSlot {
            kind: SlotKind::Logo,
            bounds: Rect::new(
                logo_left,
                logo_top,
                logo_left + logo_w,
                logo_top + f64::from(variant.logo_height),
            ),
            shape: variant.logo_shape,
        }));
    }

    let qr = f64::from(variant.qr_size);
    primitives.push(Primitive::Image(ImageSlot {
        kind: SlotKind::Qr,
        bounds: Rect::new(m.qr_left, m.qr_top, m.qr_left + qr, m.qr_bottom),
        shape: SlotShape::Rect,
    }));

    let raw_name = content.name.trim();
    let display_name = if raw_name.is_empty() {
        format!("ID {}", content.identifier.trim())
    } else {
        raw_name.to_owned()
    };
    let name_width = card_w - 2.0 * f64::from(variant.name_side_padding);
    let (name, name_size) = fit_name(
        &display_name,
        name_width,
        variant.name_size,
        variant.name_min_size,
    );
    if name != display_name || name_size != variant.name_size {
        tracing::debug!(
            original = %display_name,
            fitted = %name,
            size = name_size,
            "name fitted to badge width"
        );
    }
    primitives.push(text(
        TextRole::Name,
        m.name_baseline,
        name,
        name_size,
        800,
        palette.name_text,
    ));

    let legend_w = f64::from(variant.legend_width);
    let legend_left = centered_offset(w, legend_w);
    primitives.push(Primitive::Rect(RectPrimitive {
        bounds: Rect::new(legend_left, m.legend_top, legend_left + legend_w, m.legend_bottom),
        radius: variant.legend_radius,
        corners: Corners::All,
        paint: Paint::Solid(palette.legend_fill),
        shadow: None,
    }));
    let legend = theme.legend_text.trim();
    if !legend.is_empty() {
        primitives.push(text(
            TextRole::Legend,
            m.legend_top + f64::from(variant.legend_baseline_offset),
            legend.to_owned(),
            variant.legend_size,
            700,
            palette.legend_text,
        ));
    }

    if variant.footer_height > 0 {
        primitives.push(Primitive::Rect(RectPrimitive {
            bounds: Rect::new(m.card_left, m.footer_top, m.card_right, m.card_bottom),
            radius: variant.corner_radius,
            corners: Corners::Bottom,
            paint: Paint::Solid(palette.footer_fill),
            shadow: None,
        }));
        let caption = footer_caption(&theme.event_date, &theme.footer_tagline);
        if !caption.is_empty() {
            primitives.push(text(
                TextRole::Footer,
                m.footer_top + f64::from(variant.footer_baseline_offset),
                caption,
                variant.footer_size,
                400,
                palette.footer_text,
            ));
        }
    }

    Ok(BadgeScene {
        canvas,
        background: palette.background,
        primitives,
        qr_payload: content.confirmation_url.trim().to_owned(),
        metrics: m,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
