use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    layout::variant::{DropShadow, SlotShape},
};

/// Fill of a rectangle primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Left-to-right linear gradient across the rectangle.
    HorizontalGradient {
        /// Color at the left edge.
        start: Rgba8,
        /// Color at the right edge.
        end: Rgba8,
    },
}

/// Which corners of a rectangle take the radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corners {
    /// All four corners.
    All,
    /// Top-left and top-right only.
    Top,
    /// Bottom-left and bottom-right only.
    Bottom,
}

/// Filled, optionally rounded rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectPrimitive {
    /// Absolute pixel bounds.
    pub bounds: Rect,
    /// Corner radius (`0` for square corners).
    pub radius: f64,
    /// Corners the radius applies to.
    pub corners: Corners,
    /// Fill.
    pub paint: Paint,
    /// Optional shadow drawn beneath the rectangle.
    pub shadow: Option<DropShadow>,
}

/// Single line of text centered horizontally on `anchor.x` with its baseline at `anchor.y`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextPrimitive {
    /// What the text is for (title, name, ...).
    pub role: TextRole,
    /// Center-of-baseline anchor.
    pub anchor: Point,
    /// Text content, already fitted.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight (400 regular, 700 bold, 800 extra bold).
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// CSS font-family list.
    pub font_family: String,
}

/// Semantic role of a text primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Event name on the header band.
    Title,
    /// Participant display name.
    Name,
    /// Instruction text in the legend pill.
    Legend,
    /// Footer caption.
    Footer,
}

/// What a raster slot receives at composition time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// The attendance QR code.
    Qr,
    /// The event logo.
    Logo,
}

/// Region reserved for a raster image supplied to the compositor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ImageSlot {
    /// Slot content.
    pub kind: SlotKind,
    /// Bounding box; the image is fitted inside and centered.
    pub bounds: Rect,
    /// Clip applied to the placed image.
    pub shape: SlotShape,
}

/// One drawable element of a badge.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Vector rectangle.
    Rect(RectPrimitive),
    /// Vector text.
    Text(TextPrimitive),
    /// Raster placeholder.
    Image(ImageSlot),
}

/// Vertical cascade and anchors the scene was built from, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BadgeMetrics {
    /// Card left edge.
    pub card_left: f64,
    /// Card right edge.
    pub card_right: f64,
    /// Card top edge.
    pub card_top: f64,
    /// Card bottom edge (after any growth).
    pub card_bottom: f64,
    /// Header band bottom.
    pub header_bottom: f64,
    /// Title baseline.
    pub title_baseline: f64,
    /// QR left edge.
    pub qr_left: f64,
    /// QR top edge.
    pub qr_top: f64,
    /// QR bottom edge.
    pub qr_bottom: f64,
    /// Name baseline.
    pub name_baseline: f64,
    /// Legend pill top.
    pub legend_top: f64,
    /// Legend pill bottom.
    pub legend_bottom: f64,
    /// Footer band top.
    pub footer_top: f64,
    /// Pixels the canvas grew by to keep the footer clear of the legend.
    pub overflow: f64,
}

/// Renderer-agnostic description of one badge.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BadgeScene {
    /// Output size.
    pub canvas: Canvas,
    /// Full-canvas background color.
    pub background: Rgba8,
    /// Primitives in paint order.
    pub primitives: Vec<Primitive>,
    /// Payload to encode into the QR slot.
    pub qr_payload: String,
    /// Layout anchors, for inspection and tests.
    pub metrics: BadgeMetrics,
}

impl BadgeScene {
    /// First slot of the given kind.
    pub fn slot(&self, kind: SlotKind) -> Option<&ImageSlot> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Image(slot) if slot.kind == kind => Some(slot),
            _ => None,
        })
    }

    /// The QR slot. Every scene built by the layout engine has one.
    pub fn qr_slot(&self) -> Option<&ImageSlot> {
        self.slot(SlotKind::Qr)
    }

    /// The logo slot, present only when a logo was available at layout time.
    pub fn logo_slot(&self) -> Option<&ImageSlot> {
        self.slot(SlotKind::Logo)
    }

    /// First text primitive with the given role.
    pub fn text(&self, role: TextRole) -> Option<&TextPrimitive> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Text(t) if t.role == role => Some(t),
            _ => None,
        })
    }

    /// Rectangle primitives in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
    }
}
