//! The three operations exposed to a surrounding HTTP or CLI layer.
//!
//! Every call re-reads the roster; the service itself only holds read-only configuration.

use crate::{
    assets::{
        decode::{PreparedImage, decode_logo},
        logo::{DirLogoProvider, LogoProvider, NoLogo},
        qr::{QrCodeEncoder, QrEncoder, attendance_url},
        svg_raster::build_fontdb,
    },
    config::EventConfig,
    encode::png::encode_png,
    foundation::error::{PassError, PassResult},
    layout::{
        engine::{BadgeContent, EventTheme, layout_badge},
        scene::BadgeScene,
        variant::LayoutVariant,
    },
    render::compositor::Compositor,
    roster::{
        resolver::{ParticipantRecord, RosterResolver},
        store::{CsvRosterStore, RosterStore},
    },
};

/// Reply to a successful attendance confirmation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Confirmation {
    /// Name to greet the participant with.
    pub display_name: String,
    /// Matched identifier.
    pub identifier: String,
    /// `true` when attendance had been recorded before this call.
    pub already_marked: bool,
}

/// One row of the participant listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParticipantSummary {
    /// Identifier cell.
    pub identifier: String,
    /// Stored name, or `ID <identifier>` when blank.
    pub display_name: String,
    /// Whether attendance is recorded.
    pub attendance_marked: bool,
}

impl From<&ParticipantRecord> for ParticipantSummary {
    fn from(r: &ParticipantRecord) -> Self {
        Self {
            identifier: r.identifier.clone(),
            display_name: r.display_name(),
            attendance_marked: r.attendance_marked,
        }
    }
}

/// Download file name for a participant's badge: `card-<url-encoded id>.png`.
pub fn card_file_name(identifier: &str) -> String {
    format!("card-{}.png", urlencoding::encode(identifier.trim()))
}

fn log_failure(op: &'static str, err: &PassError) {
    if err.is_fault() {
        tracing::error!(op, error = ?err, "request failed");
    } else {
        tracing::debug!(op, error = %err, "request rejected");
    }
}

/// Check-in operations over one roster with fixed event branding.
pub struct CheckinService<S> {
    resolver: RosterResolver<S>,
    theme: EventTheme,
    variant: LayoutVariant,
    base_url: String,
    compositor: Compositor,
    qr: Box<dyn QrEncoder>,
    logo: Box<dyn LogoProvider>,
}

impl CheckinService<CsvRosterStore> {
    /// Build the service described by a configuration: CSV roster, directory logo, fonts.
    pub fn from_config(cfg: &EventConfig) -> PassResult<Self> {
        cfg.validate()?;
        let compositor = Compositor::new(build_fontdb(&cfg.font_dirs))
            .with_logo_upscale(cfg.allow_logo_upscale);
        let mut svc = Self::new(
            CsvRosterStore::new(&cfg.roster_path),
            cfg.theme(),
            cfg.variant.variant(),
            compositor,
        )
        .with_base_url(cfg.public_base_url.clone());
        if let Some(dir) = &cfg.logo_dir {
            svc = svc.with_logo_provider(DirLogoProvider::new(dir));
        }
        Ok(svc)
    }
}

impl<S: RosterStore> CheckinService<S> {
    /// Service with the default QR encoder, no logo, and a localhost base URL.
    pub fn new(store: S, theme: EventTheme, variant: LayoutVariant, compositor: Compositor) -> Self {
        Self {
            resolver: RosterResolver::new(store),
            theme,
            variant,
            base_url: EventConfig::default().public_base_url,
            compositor,
            qr: Box::new(QrCodeEncoder::default()),
            logo: Box::new(NoLogo),
        }
    }

    /// Origin used for confirmation links.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the QR encoder.
    pub fn with_qr_encoder(mut self, qr: impl QrEncoder + 'static) -> Self {
        self.qr = Box::new(qr);
        self
    }

    /// Replace the logo source.
    pub fn with_logo_provider(mut self, logo: impl LogoProvider + 'static) -> Self {
        self.logo = Box::new(logo);
        self
    }

    /// Roster access, mainly for tests and tooling.
    pub fn resolver(&self) -> &RosterResolver<S> {
        &self.resolver
    }

    /// Render a participant's badge as PNG bytes, linking to the configured base URL.
    pub fn render_badge(&self, identifier: &str) -> PassResult<Vec<u8>> {
        self.render_badge_for(identifier, &self.base_url)
    }

    /// Render a participant's badge as PNG bytes with an explicit (e.g. request-derived) origin.
    #[tracing::instrument(skip(self))]
    pub fn render_badge_for(&self, identifier: &str, base_url: &str) -> PassResult<Vec<u8>> {
        self.try_render(identifier, base_url)
            .inspect_err(|e| log_failure("render_badge", e))
    }

    fn try_render(&self, identifier: &str, base_url: &str) -> PassResult<Vec<u8>> {
        let logo = self.load_logo();
        let scene = self.scene_with_logo(identifier, base_url, logo.is_some())?;
        let qr = self.qr.encode(&scene.qr_payload, self.variant.qr_size)?;
        let frame = self.compositor.compose(&scene, &qr, logo.as_ref())?;
        let png = encode_png(&frame)?;
        tracing::debug!(bytes = png.len(), "badge rendered");
        Ok(png)
    }

    /// Layout a participant's badge without rasterizing it.
    ///
    /// The logo slot is included when the logo source currently yields a decodable image.
    pub fn badge_scene(&self, identifier: &str, base_url: &str) -> PassResult<BadgeScene> {
        let has_logo = self.load_logo().is_some();
        self.scene_with_logo(identifier, base_url, has_logo)
            .inspect_err(|e| log_failure("badge_scene", e))
    }

    fn scene_with_logo(
        &self,
        identifier: &str,
        base_url: &str,
        has_logo: bool,
    ) -> PassResult<BadgeScene> {
        let record = self.resolver.find_by_identifier(identifier)?;
        let url = attendance_url(base_url, &record.identifier);
        let content = BadgeContent {
            identifier: &record.identifier,
            name: &record.name,
            confirmation_url: &url,
            has_logo,
        };
        layout_badge(&content, &self.theme, &self.variant)
    }

    fn load_logo(&self) -> Option<PreparedImage> {
        let bytes = self.logo.logo_bytes()?;
        match decode_logo(&bytes, self.variant.logo_height, self.compositor.fontdb().clone()) {
            Ok(img) if img.width > 0 && img.height > 0 => Some(img),
            Ok(_) => {
                tracing::warn!("logo decoded to an empty image; rendering without it");
                None
            }
            Err(err) => {
                let err = PassError::asset_missing(format!("undecodable logo: {err}"));
                tracing::warn!(error = %err, "rendering without logo");
                None
            }
        }
    }

    /// Record attendance for a participant. Idempotent.
    #[tracing::instrument(skip(self))]
    pub fn confirm_attendance(&self, identifier: &str) -> PassResult<Confirmation> {
        self.resolver
            .confirm_attendance(identifier)
            .map(|outcome| Confirmation {
                display_name: outcome.record.display_name(),
                identifier: outcome.record.identifier,
                already_marked: outcome.already_marked,
            })
            .inspect_err(|e| log_failure("confirm_attendance", e))
    }

    /// Every roster participant in store order.
    #[tracing::instrument(skip(self))]
    pub fn list_participants(&self) -> PassResult<Vec<ParticipantSummary>> {
        self.resolver
            .list_all()
            .map(|records| records.iter().map(ParticipantSummary::from).collect())
            .inspect_err(|e| log_failure("list_participants", e))
    }
}

#[cfg(test)]
#[path = "../tests/unit/service.rs"]
mod tests;
