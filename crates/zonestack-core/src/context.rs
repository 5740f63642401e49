//! Deployment context for a single synthesis run.
//!
//! A synthesis run always executes for exactly one account and one region.
//! The context is passed explicitly to every builder rather than read from
//! ambient process state, so the guard conditions (administrator account,
//! home region, management account) are checkable in isolation.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::{AccountId, AwsRegion};

/// The account/region coordinates a synthesis run executes in, plus the
/// designated landing-zone control accounts it is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentContext {
    /// The account currently being synthesized.
    pub account: AccountId,

    /// The region currently being synthesized.
    pub region: AwsRegion,

    /// The stack-set administrator account.
    pub admin_account: AccountId,

    /// The home region where stack sets are administered.
    pub home_region: AwsRegion,

    /// The organization management account.
    pub management_account: AccountId,

    /// The AWS Organizations organization ID, when known.
    #[builder(default)]
    pub organization_id: Option<String>,
}

impl DeploymentContext {
    /// `true` when the run executes in the stack-set administrator account
    /// and the home region. Stack-set declarations are only emitted there.
    #[must_use]
    pub fn is_admin_home(&self) -> bool {
        self.account == self.admin_account && self.region == self.home_region
    }

    /// `true` when the run executes in the organization management account.
    /// Organization-level portfolio shares are only emitted there.
    #[must_use]
    pub fn is_management_account(&self) -> bool {
        self.account == self.management_account
    }
}
