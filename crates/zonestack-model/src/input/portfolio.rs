//! Portfolio configuration definitions.

use serde::{Deserialize, Serialize};

use zonestack_core::AwsRegion;

use crate::input::{AssociationDirective, ProductDefinition, TagOptionSet};

/// Accounts and organizational units a portfolio is shared with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareTargets {
    /// Concrete account IDs to share with directly.
    pub accounts: Vec<String>,
    /// Symbolic OU names to share with, or [`ShareTargets::ROOT_MARKER`]
    /// for an organization-wide share.
    pub organizational_units: Vec<String>,
    /// Whether tag options propagate with the share.
    pub share_tag_options: bool,
}

impl ShareTargets {
    /// Synthetic OU name meaning "the whole organization".
    pub const ROOT_MARKER: &str = "Root";

    /// `true` when no share of any kind is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.organizational_units.is_empty()
    }

    /// `true` when the OU list carries the organization-wide marker.
    #[must_use]
    pub fn is_organization_wide(&self) -> bool {
        self.organizational_units
            .iter()
            .any(|ou| ou == Self::ROOT_MARKER)
    }
}

/// One configured Service Catalog portfolio.
///
/// Portfolio names are unique within their account/region scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDefinition {
    /// Portfolio display name.
    pub name: String,
    /// Provider name shown in the catalog.
    pub provider_name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Symbolic name of the account this portfolio lives in.
    pub account: String,
    /// Regions this portfolio is synthesized in.
    pub regions: Vec<AwsRegion>,
    /// Tag options constrained to this portfolio.
    #[serde(default)]
    pub tag_options: Option<TagOptionSet>,
    /// Accounts and OUs this portfolio is shared with.
    #[serde(default)]
    pub share_targets: ShareTargets,
    /// Products configured under this portfolio.
    #[serde(default)]
    pub products: Vec<ProductDefinition>,
    /// Principal access grants for this portfolio.
    #[serde(default)]
    pub associations: Vec<AssociationDirective>,
}
