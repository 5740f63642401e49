//! Trait seams for the external resolution services.
//!
//! Account/OU resolution and identity lookups live outside this workspace;
//! the engine only depends on these traits. Every lookup that may find
//! nothing returns `Ok(None)` rather than assuming existence, so callers
//! decide how absence is reported.

use zonestack_core::{AccountId, OrgUnitId};

use crate::error::SynthResult;

/// Resolves symbolic account and OU names from the landing-zone
/// configuration into concrete identifiers.
pub trait AccountResolver {
    /// Resolve a symbolic account name to its account ID.
    fn resolve_account(&self, name: &str) -> SynthResult<AccountId>;

    /// Resolve a symbolic OU name to its organizational unit ID.
    fn resolve_organizational_unit(&self, name: &str) -> SynthResult<OrgUnitId>;
}

/// Resolves identity principals referenced by association directives.
pub trait PrincipalResolver {
    /// Find an IAM group by name in an account; returns its ARN.
    fn find_group_arn(&self, name: &str, account: &AccountId) -> SynthResult<Option<String>>;

    /// Find an IAM user by name in an account; returns its ARN.
    fn find_user_arn(&self, name: &str, account: &AccountId) -> SynthResult<Option<String>>;

    /// Find an IAM role by name in an account; returns its ARN.
    fn find_role_arn(&self, name: &str, account: &AccountId) -> SynthResult<Option<String>>;

    /// Find an IAM role by its full ARN.
    fn find_role_by_arn(&self, arn: &str) -> SynthResult<Option<String>>;

    /// Resolve the ARN of the IAM role an Identity Center permission set
    /// provisions in an account.
    fn permission_set_role_arn(
        &self,
        permission_set: &str,
        account: &AccountId,
    ) -> SynthResult<Option<String>>;
}
