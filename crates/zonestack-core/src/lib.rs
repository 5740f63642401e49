//! Core types, deployment context, and configuration for ZoneStack.
//!
//! This crate provides the foundational building blocks shared across the
//! ZoneStack synthesis pipeline: strongly-typed AWS identifiers, the
//! deployment context an account/region synthesis run executes in, and the
//! synthesis configuration.

mod config;
mod context;
mod error;
mod types;

pub use config::SynthConfig;
pub use context::DeploymentContext;
pub use error::{ZoneStackError, ZoneStackResult};
pub use types::{AccountId, AwsRegion, OrgUnitId};
