//! eventpass is an event check-in toolkit: roster lookup, QR attendance links, and badge rendering.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: identifier -> [`ParticipantRecord`] via a [`RosterStore`] (flexible headers,
//!    first match wins)
//! 2. **Layout**: record + [`EventTheme`] + [`LayoutVariant`] -> [`BadgeScene`] (pure, absolute
//!    pixel coordinates from a single vertical cascade)
//! 3. **Composite**: scene -> SVG -> pixels (`resvg`), then logo and QR overlaid in premultiplied
//!    RGBA8
//! 4. **Encode**: frame -> PNG bytes
//!
//! [`CheckinService`] wires these together behind the three exposed operations: render a badge,
//! confirm attendance, list participants.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic layout**: the same inputs always produce the same scene.
//! - **No caching**: the roster is re-read on every call; attendance is a single-cell write.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Event configuration (JSON file + environment overrides).
pub mod config;
pub mod encode;
pub mod layout;
pub mod render;
pub mod roster;
pub mod service;

pub use crate::assets::color::parse_hex_color;
pub use crate::assets::decode::{PreparedImage, decode_image, decode_logo};
pub use crate::assets::logo::{DirLogoProvider, LOGO_EXTENSIONS, LogoProvider, NoLogo, StaticLogo};
pub use crate::assets::qr::{QrCodeEncoder, QrEncoder, attendance_url};
pub use crate::assets::svg_raster::build_fontdb;
pub use crate::config::EventConfig;
pub use crate::encode::png::encode_png;
pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Rgba8Premul};
pub use crate::foundation::error::{PassError, PassResult};
pub use crate::layout::engine::{BadgeContent, EventTheme, layout_badge};
pub use crate::layout::scene::BadgeScene;
pub use crate::layout::variant::{LayoutVariant, VariantName};
pub use crate::render::compositor::{Compositor, FrameRGBA};
pub use crate::roster::resolver::{AttendanceOutcome, ParticipantRecord, RosterResolver};
pub use crate::roster::store::{
    ColumnIndex, CsvRosterStore, MemoryRosterStore, RosterStore, Row, RowLocation,
};
pub use crate::service::{
    CheckinService, Confirmation, ParticipantSummary, card_file_name,
};
