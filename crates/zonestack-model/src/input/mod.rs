//! Configuration definitions consumed by the synthesis engine.
//!
//! These are plain data read once from the landing-zone configuration; the
//! loader/parser itself lives outside this workspace. All types deserialize
//! with `camelCase` field names.

mod association;
mod portfolio;
mod product;
mod stack_set;
mod tag_options;

pub use association::{AssociationDirective, PrincipalKind};
pub use portfolio::{PortfolioDefinition, ShareTargets};
pub use product::{ProductDefinition, ProductVersionDefinition, SupportDetails};
pub use stack_set::{Capability, DeploymentTargets, StackSetDefinition};
pub use tag_options::TagOptionSet;

use serde::{Deserialize, Serialize};

/// The complete landing-zone configuration walked by a synthesis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingZoneConfig {
    /// Stack sets administered from the admin account / home region.
    pub stack_sets: Vec<StackSetDefinition>,
    /// Service Catalog portfolios, each scoped to one account and a set of
    /// regions.
    pub portfolios: Vec<PortfolioDefinition>,
}
