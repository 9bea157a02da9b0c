use std::path::PathBuf;

/// File extensions tried for the event logo, in preference order.
pub const LOGO_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "svg"];

/// Optional source of raw logo bytes.
///
/// Implementations decide which file or variant to try; the compositor only sees bytes.
/// Returning `None` means "render without a logo".
pub trait LogoProvider: Send + Sync {
    /// Fetch the logo bytes, if any are available.
    fn logo_bytes(&self) -> Option<Vec<u8>>;
}

/// Provider used when the event has no logo.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLogo;

impl LogoProvider for NoLogo {
    fn logo_bytes(&self) -> Option<Vec<u8>> {
        None
    }
}

/// Provider holding logo bytes already in memory.
#[derive(Clone, Debug)]
pub struct StaticLogo(pub Vec<u8>);

impl LogoProvider for StaticLogo {
    fn logo_bytes(&self) -> Option<Vec<u8>> {
        Some(self.0.clone())
    }
}

/// Looks for `<stem>.<ext>` in a directory for each of [`LOGO_EXTENSIONS`].
#[derive(Clone, Debug)]
pub struct DirLogoProvider {
    dir: PathBuf,
    stem: String,
}

impl DirLogoProvider {
    /// Look for `dir/logo.{png,jpg,jpeg,webp,svg}`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_stem(dir, "logo")
    }

    /// Look for `dir/<stem>.{png,jpg,jpeg,webp,svg}`.
    pub fn with_stem(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    /// Candidate paths in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        LOGO_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{ext}", self.stem)))
            .collect()
    }
}

impl LogoProvider for DirLogoProvider {
    fn logo_bytes(&self) -> Option<Vec<u8>> {
        for path in self.candidates() {
            match std::fs::read(&path) {
                Ok(bytes) if !bytes.is_empty() => {
                    tracing::debug!(path = %path.display(), "logo found");
                    return Some(bytes);
                }
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "skipping empty logo file");
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot read logo file");
                }
            }
        }
        tracing::warn!(
            dir = %self.dir.display(),
            stem = %self.stem,
            "no logo found; rendering without it"
        );
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/logo.rs"]
mod tests;
