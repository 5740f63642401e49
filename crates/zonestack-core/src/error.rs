//! Error types for the ZoneStack core.

/// Core error type for ZoneStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum ZoneStackError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Invalid organizational unit ID format.
    #[error("invalid organizational unit ID: {0} (must start with 'ou-' or 'r-')")]
    InvalidOrgUnitId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for ZoneStack operations.
pub type ZoneStackResult<T> = Result<T, ZoneStackError>;
