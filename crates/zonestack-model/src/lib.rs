//! Landing-zone model types for ZoneStack.
//!
//! The model is split the way the synthesis pipeline consumes it:
//!
//! - [`input`] — plain-data configuration definitions as they arrive from
//!   the landing-zone configuration loader (stack sets, portfolios,
//!   products, associations).
//! - [`output`] — synthesized resource declarations as they are handed to
//!   the deployment backend, plus the [`output::SynthesizedTemplate`]
//!   container they accumulate in.
//!
//! Configuration types deserialize with `camelCase` field names; declaration
//! types serialize with `PascalCase` field names, matching the
//! CloudFormation wire convention.

pub mod input;
pub mod output;

pub use input::{
    AssociationDirective, LandingZoneConfig, PortfolioDefinition, PrincipalKind,
    ProductDefinition, ProductVersionDefinition, ShareTargets, StackSetDefinition, TagOptionSet,
};
pub use output::{Declaration, LogicalId, ParameterRegistration, SynthesizedTemplate};
