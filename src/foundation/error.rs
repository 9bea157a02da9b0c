/// Convenience result type used across eventpass.
pub type PassResult<T> = Result<T, PassError>;

/// Top-level error taxonomy for roster lookups and badge rendering.
#[derive(thiserror::Error, Debug)]
pub enum PassError {
    /// Missing or malformed request input (e.g. an empty identifier).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The identifier does not match any roster row.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing roster store could not be read or written.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A store address (row/column) is outside what the store holds.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// An optional asset (logo) is absent or undecodable.
    #[error("asset missing: {0}")]
    AssetMissing(String),

    /// QR generation or final image encoding failed.
    #[error("encoding failure: {0}")]
    Encoding(String),

    /// Invalid configuration or impossible layout parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PassError {
    /// Build a [`PassError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`PassError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`PassError::StoreUnavailable`] value.
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Build a [`PassError::InvalidLocation`] value.
    pub fn invalid_location(msg: impl Into<String>) -> Self {
        Self::InvalidLocation(msg.into())
    }

    /// Build a [`PassError::AssetMissing`] value.
    pub fn asset_missing(msg: impl Into<String>) -> Self {
        Self::AssetMissing(msg.into())
    }

    /// Build a [`PassError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`PassError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return `true` for infrastructure faults that callers surface as server errors.
    ///
    /// Expected outcomes (`InvalidInput`, `NotFound`, `AssetMissing`, `Validation`) return `false`
    /// and are logged tersely.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable(_) | Self::InvalidLocation(_) | Self::Encoding(_) | Self::Other(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
