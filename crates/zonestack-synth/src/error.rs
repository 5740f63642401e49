//! Error types for the synthesis engine.
//!
//! Every error here is unrecoverable at this layer: it propagates up to the
//! orchestration entry point, which aborts the run before deployment.

use zonestack_core::{AccountId, ZoneStackError};
use zonestack_model::PrincipalKind;

/// Error type for a synthesis run.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// A referenced template file does not exist or cannot be read.
    #[error("cannot read template {path}: {source}")]
    TemplateRead {
        /// The path as referenced by configuration.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A named principal cannot be resolved in the target account.
    #[error("{kind} {name} not found in account {account}")]
    PrincipalNotFound {
        /// Kind of principal that was looked up.
        kind: PrincipalKind,
        /// Configured principal name.
        name: String,
        /// Account the lookup ran against.
        account: AccountId,
    },

    /// A symbolic account or OU name could not be resolved.
    #[error("cannot resolve {name}: {reason}")]
    AccountResolution {
        /// The symbolic name.
        name: String,
        /// Why resolution failed.
        reason: String,
    },

    /// A core-layer error (invalid identifier, configuration).
    #[error(transparent)]
    Core(#[from] ZoneStackError),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
