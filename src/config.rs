use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use url::Url;

use crate::{
    assets::color::parse_hex_color,
    foundation::{
        core::Rgba8,
        error::{PassError, PassResult},
    },
    layout::{
        engine::{DEFAULT_FONT_FAMILY, EventTheme},
        variant::VariantName,
    },
};

/// Overrides `event_name`.
pub const ENV_EVENT_NAME: &str = "EVENTPASS_EVENT_NAME";
/// Overrides `event_date`.
pub const ENV_EVENT_DATE: &str = "EVENTPASS_EVENT_DATE";
/// Overrides `theme_color`.
pub const ENV_THEME_COLOR: &str = "EVENTPASS_THEME_COLOR";
/// Overrides `public_base_url`.
pub const ENV_BASE_URL: &str = "EVENTPASS_BASE_URL";

/// Process-wide event configuration, loaded once at startup.
///
/// Every field has a default, so `{}` is a valid (if bare) configuration file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventConfig {
    /// Event title on the badge header.
    pub event_name: String,
    /// Event date shown in the footer; may be empty.
    pub event_date: String,
    /// Header gradient start color.
    pub theme_color: Rgba8,
    /// Header gradient end color.
    pub gradient_end_color: Rgba8,
    /// Footer text after the date.
    pub footer_tagline: String,
    /// Instruction text in the legend pill.
    pub legend_text: String,
    /// Origin used to build confirmation URLs (`<base>/attend?pid=<id>`).
    pub public_base_url: String,
    /// Badge style.
    pub variant: VariantName,
    /// CSV roster file.
    pub roster_path: PathBuf,
    /// Directory searched for `logo.{png,jpg,jpeg,webp,svg}`; no logo when unset.
    pub logo_dir: Option<PathBuf>,
    /// Extra directories scanned for fonts, in addition to system fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Let logos smaller than their slot be scaled up.
    pub allow_logo_upscale: bool,
    /// CSS font-family list for badge text.
    pub font_family: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        let theme = EventTheme::default();
        Self {
            event_name: theme.event_name,
            event_date: theme.event_date,
            theme_color: theme.primary,
            gradient_end_color: theme.gradient_end,
            footer_tagline: theme.footer_tagline,
            legend_text: theme.legend_text,
            public_base_url: "http://localhost:3000".to_owned(),
            variant: VariantName::default(),
            roster_path: PathBuf::from("roster.csv"),
            logo_dir: None,
            font_dirs: Vec::new(),
            allow_logo_upscale: false,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl EventConfig {
    /// Parse a JSON configuration.
    pub fn from_reader(r: impl Read) -> PassResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PassError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a JSON configuration file.
    ///
    /// Relative `roster_path`, `logo_dir`, and `font_dirs` are resolved against the file's
    /// directory.
    pub fn from_path(path: impl AsRef<Path>) -> PassResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PassError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let Some(base) = path.parent() {
            cfg.resolve_relative_paths(base);
        }
        Ok(cfg)
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        let join = |p: &Path| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.to_path_buf()
            }
        };
        self.roster_path = join(&self.roster_path);
        self.logo_dir = self.logo_dir.as_deref().map(join);
        self.font_dirs = self.font_dirs.iter().map(|p| join(p)).collect();
    }

    /// Apply `EVENTPASS_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> PassResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `EVENTPASS_*` overrides from `lookup`.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> PassResult<()> {
        if let Some(v) = lookup(ENV_EVENT_NAME) {
            self.event_name = v;
        }
        if let Some(v) = lookup(ENV_EVENT_DATE) {
            self.event_date = v;
        }
        if let Some(v) = lookup(ENV_THEME_COLOR) {
            self.theme_color = parse_hex_color(&v)?;
        }
        if let Some(v) = lookup(ENV_BASE_URL) {
            self.public_base_url = v;
        }
        Ok(())
    }

    /// Reject configurations that cannot produce working confirmation links.
    ///
    /// `public_base_url` must parse as an `http`/`https` URL with a host and no query,
    /// fragment, or whitespace, since `/attend?pid=<id>` is appended to it verbatim.
    pub fn validate(&self) -> PassResult<()> {
        let base = self.public_base_url.trim();
        if base.is_empty() {
            return Err(PassError::validation("public_base_url must not be empty"));
        }
        if base.chars().any(char::is_whitespace) {
            return Err(PassError::validation(format!(
                "public_base_url must not contain whitespace, got '{base}'"
            )));
        }
        let url = Url::parse(base).map_err(|e| {
            PassError::validation(format!("public_base_url '{base}' is not a URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PassError::validation(format!(
                "public_base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(PassError::validation(format!(
                "public_base_url must name a host, got '{base}'"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(PassError::validation(format!(
                "public_base_url must not carry a query or fragment, got '{base}'"
            )));
        }
        self.variant.variant().validate()
    }

    /// Immutable branding passed to every layout call.
    pub fn theme(&self) -> EventTheme {
        EventTheme {
            event_name: self.event_name.clone(),
            event_date: self.event_date.clone(),
            primary: self.theme_color,
            gradient_end: self.gradient_end_color,
            footer_tagline: self.footer_tagline.clone(),
            legend_text: self.legend_text.clone(),
            font_family: self.font_family.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
