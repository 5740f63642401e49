//! Portfolio and portfolio-share declarations.

use serde::{Deserialize, Serialize};

use zonestack_core::{AccountId, OrgUnitId};

use crate::output::{LogicalId, TagOptionPair};

/// One synthesized Service Catalog portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// Portfolio display name.
    pub display_name: String,
    /// Provider name shown in the catalog.
    pub provider_name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Flattened tag options attached to this portfolio.
    pub tag_options: Vec<TagOptionPair>,
}

/// A direct account-level portfolio share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountShareDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// The shared portfolio.
    pub portfolio: LogicalId,
    /// The portfolio must exist before the share is applied.
    pub depends_on: Vec<LogicalId>,
    /// Account the portfolio is shared with.
    pub account_id: AccountId,
    /// Whether tag options propagate with the share.
    pub share_tag_options: bool,
}

/// An OU-scoped or organization-wide portfolio share.
///
/// Emitted only from the management account. When `organization_wide` is
/// set, `organizational_unit_ids` is empty and `organization_id` names the
/// whole organization as the share target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationShareDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// The shared portfolio.
    pub portfolio: LogicalId,
    /// The portfolio must exist before the share is applied.
    pub depends_on: Vec<LogicalId>,
    /// Concrete OU IDs the share is scoped to.
    pub organizational_unit_ids: Vec<OrgUnitId>,
    /// Whether the share targets the whole organization.
    pub organization_wide: bool,
    /// Organization ID, present only for organization-wide shares.
    pub organization_id: Option<String>,
    /// Whether tag options propagate with the share.
    pub share_tag_options: bool,
    /// Retention, in days, for the share's access logs.
    pub log_retention_days: u32,
    /// KMS key alias encrypting the share's access logs.
    pub log_key_alias: String,
}
