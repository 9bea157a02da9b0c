use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{PassError, PassResult},
};

/// Named badge styles selectable from configuration and the CLI.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum VariantName {
    /// Tall 1080x1500 badge with a wide gradient header.
    #[default]
    Classic,
    /// Smaller 720x1000 badge with the same structure.
    Compact,
    /// Classic geometry with the logo clipped to a circle.
    RoundLogo,
}

impl VariantName {
    /// Geometry bundle for this name.
    pub fn variant(self) -> LayoutVariant {
        match self {
            Self::Classic => LayoutVariant::classic(),
            Self::Compact => LayoutVariant::compact(),
            Self::RoundLogo => LayoutVariant::round_logo(),
        }
    }
}

/// Clip applied to the logo when it is composited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotShape {
    /// Axis-aligned rectangle, no clipping.
    Rect,
    /// Circle inscribed in the placed image.
    Circle,
}

/// Offset-and-blur shadow drawn under the card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DropShadow {
    /// Horizontal offset in pixels.
    pub dx: f64,
    /// Vertical offset in pixels.
    pub dy: f64,
    /// Gaussian standard deviation in pixels.
    pub blur: f64,
    /// Shadow color; alpha is the shadow opacity.
    pub color: Rgba8,
}

/// Fixed colors of a badge style. The header gradient comes from the event theme instead.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Palette {
    /// Canvas background behind the card.
    pub background: Rgba8,
    /// Card panel fill.
    pub card: Rgba8,
    /// Event title on the header band.
    pub title_text: Rgba8,
    /// Participant name.
    pub name_text: Rgba8,
    /// Legend pill fill.
    pub legend_fill: Rgba8,
    /// Legend text.
    pub legend_text: Rgba8,
    /// Footer band fill.
    pub footer_fill: Rgba8,
    /// Footer caption.
    pub footer_text: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xee, 0xf2, 0xf7),
            card: Rgba8::WHITE,
            title_text: Rgba8::WHITE,
            name_text: Rgba8::rgb(0x1f, 0x29, 0x37),
            legend_fill: Rgba8::rgb(0xee, 0xf1, 0xf5),
            legend_text: Rgba8::rgb(0x4b, 0x55, 0x63),
            footer_fill: Rgba8::rgb(0xf3, 0xf4, 0xf6),
            footer_text: Rgba8::rgb(0x6b, 0x72, 0x80),
        }
    }
}

/// Geometric constants of one badge style, in pixels.
///
/// Vertical positions are never stored here; the layout engine derives them from these
/// values with a single cascade (header, QR, name, legend), plus the bottom-anchored footer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutVariant {
    /// Base canvas size. Height may grow if the cascade would run into the footer.
    pub canvas: Canvas,
    /// Distance from every canvas edge to the card.
    pub card_margin: u32,
    /// Card and header corner radius.
    pub corner_radius: f64,
    /// Shadow under the card, if any.
    pub card_shadow: Option<DropShadow>,
    /// Header band height.
    pub header_height: u32,
    /// Title baseline, measured from the card top.
    pub title_baseline_offset: u32,
    /// Title font size.
    pub title_size: f64,
    /// Gap between header bottom and QR top.
    pub gap_header_qr: u32,
    /// QR side length.
    pub qr_size: u32,
    /// Gap between QR bottom and the name baseline.
    pub gap_qr_name: u32,
    /// Name font size.
    pub name_size: f64,
    /// Smallest size a long name may shrink to before it is truncated.
    pub name_min_size: f64,
    /// Horizontal padding inside the card reserved around the name.
    pub name_side_padding: u32,
    /// Gap between the name baseline and the legend pill top.
    pub gap_name_legend: u32,
    /// Legend pill width.
    pub legend_width: u32,
    /// Legend pill height.
    pub legend_height: u32,
    /// Legend pill corner radius.
    pub legend_radius: f64,
    /// Legend text size.
    pub legend_size: f64,
    /// Legend baseline, measured from the pill top.
    pub legend_baseline_offset: u32,
    /// Footer band height; `0` disables the footer.
    pub footer_height: u32,
    /// Footer caption size.
    pub footer_size: f64,
    /// Footer caption baseline, measured from the footer top.
    pub footer_baseline_offset: u32,
    /// Logo slot top, measured from the card top.
    pub logo_top_offset: u32,
    /// Logo slot height.
    pub logo_height: u32,
    /// Logo slot width.
    pub logo_max_width: u32,
    /// Logo clip.
    pub logo_shape: SlotShape,
    /// Colors.
    pub palette: Palette,
}

impl Default for LayoutVariant {
    fn default() -> Self {
        Self::classic()
    }
}

impl LayoutVariant {
    /// 1080x1500 badge: 260px gradient header, 560px QR, legend pill and footer.
    pub fn classic() -> Self {
        Self {
            canvas: Canvas {
                width: 1080,
                height: 1500,
            },
            card_margin: 28,
            corner_radius: 26.0,
            card_shadow: Some(DropShadow {
                dx: 0.0,
                dy: 16.0,
                blur: 22.0,
                color: Rgba8::rgba(0, 0, 0, 41),
            }),
            header_height: 260,
            title_baseline_offset: 170,
            title_size: 64.0,
            gap_header_qr: 70,
            qr_size: 560,
            gap_qr_name: 120,
            name_size: 56.0,
            name_min_size: 36.0,
            name_side_padding: 48,
            gap_name_legend: 30,
            legend_width: 880,
            legend_height: 84,
            legend_radius: 20.0,
            legend_size: 30.0,
            legend_baseline_offset: 55,
            footer_height: 110,
            footer_size: 30.0,
            footer_baseline_offset: 65,
            logo_top_offset: 20,
            logo_height: 92,
            logo_max_width: 520,
            logo_shape: SlotShape::Rect,
            palette: Palette::default(),
        }
    }

    /// 720x1000 badge with proportionally smaller elements.
    pub fn compact() -> Self {
        Self {
            canvas: Canvas {
                width: 720,
                height: 1000,
            },
            card_margin: 20,
            corner_radius: 20.0,
            card_shadow: Some(DropShadow {
                dx: 0.0,
                dy: 10.0,
                blur: 14.0,
                color: Rgba8::rgba(0, 0, 0, 41),
            }),
            header_height: 180,
            title_baseline_offset: 118,
            title_size: 44.0,
            gap_header_qr: 48,
            qr_size: 360,
            gap_qr_name: 84,
            name_size: 40.0,
            name_min_size: 26.0,
            name_side_padding: 32,
            gap_name_legend: 22,
            legend_width: 600,
            legend_height: 60,
            legend_radius: 14.0,
            legend_size: 20.0,
            legend_baseline_offset: 39,
            footer_height: 80,
            footer_size: 20.0,
            footer_baseline_offset: 47,
            logo_top_offset: 14,
            logo_height: 64,
            logo_max_width: 360,
            logo_shape: SlotShape::Rect,
            palette: Palette::default(),
        }
    }

    /// Classic geometry with a square logo slot clipped to a circle.
    pub fn round_logo() -> Self {
        let base = Self::classic();
        Self {
            logo_max_width: base.logo_height,
            logo_shape: SlotShape::Circle,
            ..base
        }
    }

    /// Card width: canvas width minus both margins.
    pub fn card_width(&self) -> u32 {
        self.canvas.width.saturating_sub(self.card_margin.saturating_mul(2))
    }

    /// Reject parameter sets that cannot produce a non-overlapping badge.
    pub fn validate(&self) -> PassResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PassError::validation("canvas width/height must be > 0"));
        }
        let margins = self.card_margin.saturating_mul(2);
        if margins >= self.canvas.width || margins >= self.canvas.height {
            return Err(PassError::validation("card margins leave no room for the card"));
        }
        let card_w = self.card_width();
        if self.qr_size == 0 || self.qr_size > card_w {
            return Err(PassError::validation(format!(
                "qr size {} must be in 1..={card_w}",
                self.qr_size
            )));
        }
        if self.legend_width > card_w {
            return Err(PassError::validation("legend pill is wider than the card"));
        }
        if self.logo_max_width > card_w {
            return Err(PassError::validation("logo slot is wider than the card"));
        }
        if self.logo_top_offset.saturating_add(self.logo_height) > self.header_height {
            return Err(PassError::validation("logo slot does not fit in the header"));
        }
        if self.title_baseline_offset > self.header_height {
            return Err(PassError::validation("title baseline lies below the header"));
        }
        if self.name_side_padding.saturating_mul(2) >= card_w {
            return Err(PassError::validation("name padding leaves no room for the name"));
        }
        for (what, v) in [
            ("title_size", self.title_size),
            ("name_size", self.name_size),
            ("name_min_size", self.name_min_size),
            ("legend_size", self.legend_size),
            ("footer_size", self.footer_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(PassError::validation(format!(
                    "{what} must be finite and > 0"
                )));
            }
        }
        if self.name_min_size > self.name_size {
            return Err(PassError::validation("name_min_size exceeds name_size"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/variant.rs"]
mod tests;
