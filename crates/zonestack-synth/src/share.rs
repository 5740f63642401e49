//! Portfolio share emission.

use tracing::debug;

use zonestack_core::{AccountId, DeploymentContext, SynthConfig};
use zonestack_model::input::ShareTargets;
use zonestack_model::output::{
    AccountShareDeclaration, Declaration, LogicalId, OrganizationShareDeclaration,
    SynthesizedTemplate,
};

use crate::error::SynthResult;
use crate::resolver::AccountResolver;

/// Emit the share declarations granting other accounts and OUs visibility
/// of a portfolio.
///
/// Direct account shares are emitted for every target account except the
/// current one. OU shares are only emitted from the management account;
/// the `Root` marker turns the share organization-wide, in which case no
/// concrete OU IDs are carried. Every share depends on the portfolio's
/// creation.
pub fn synthesize_shares(
    portfolio_name: &str,
    portfolio: &LogicalId,
    targets: &ShareTargets,
    ctx: &DeploymentContext,
    config: &SynthConfig,
    accounts: &dyn AccountResolver,
    out: &mut SynthesizedTemplate,
) -> SynthResult<()> {
    for target in &targets.accounts {
        let account_id = AccountId::new(target.clone())?;
        if account_id == ctx.account {
            debug!(account = %account_id, "skipping self-share");
            continue;
        }
        out.push(Declaration::AccountShare(AccountShareDeclaration {
            logical_id: LogicalId::for_resource(
                "PortfolioShare",
                &format!("{portfolio_name}{account_id}"),
            ),
            portfolio: portfolio.clone(),
            depends_on: vec![portfolio.clone()],
            account_id,
            share_tag_options: targets.share_tag_options,
        }));
    }

    if !ctx.is_management_account() {
        return Ok(());
    }

    let organization_wide = targets.is_organization_wide();
    let ou_ids = if organization_wide {
        Vec::new()
    } else {
        targets
            .organizational_units
            .iter()
            .map(|name| accounts.resolve_organizational_unit(name))
            .collect::<SynthResult<Vec<_>>>()?
    };

    if organization_wide || !ou_ids.is_empty() {
        debug!(portfolio = %portfolio, organization_wide, "emitting organization share");
        out.push(Declaration::OrganizationShare(OrganizationShareDeclaration {
            logical_id: LogicalId::for_resource("PortfolioOrgShare", portfolio_name),
            portfolio: portfolio.clone(),
            depends_on: vec![portfolio.clone()],
            organizational_unit_ids: ou_ids,
            organization_wide,
            organization_id: organization_wide
                .then(|| ctx.organization_id.clone())
                .flatten(),
            share_tag_options: targets.share_tag_options,
            log_retention_days: config.share_log_retention_days,
            log_key_alias: config.share_log_key_alias.clone(),
        }));
    }

    Ok(())
}
