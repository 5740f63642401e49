//! Principal access-grant emission.

use tracing::{debug, warn};

use zonestack_core::DeploymentContext;
use zonestack_model::input::{AssociationDirective, PrincipalKind};
use zonestack_model::output::{
    AssociationDeclaration, Declaration, LogicalId, SynthesizedTemplate,
};

use crate::error::{SynthError, SynthResult};
use crate::resolver::PrincipalResolver;

/// Emit the access grant for one association directive, dispatched on the
/// principal kind.
///
/// Group, user, and role principals are looked up by name in the current
/// account. A permission set is first resolved to the role ARN it
/// provisions, then that role is looked up. A failed lookup is fatal and
/// names the principal and the account. An unrecognized kind emits nothing
/// but is warned about rather than silently dropped.
pub fn synthesize_association(
    directive: &AssociationDirective,
    portfolio_name: &str,
    portfolio: &LogicalId,
    ctx: &DeploymentContext,
    principals: &dyn PrincipalResolver,
    out: &mut SynthesizedTemplate,
) -> SynthResult<()> {
    let arn = match &directive.kind {
        PrincipalKind::Group => principals.find_group_arn(&directive.name, &ctx.account)?,
        PrincipalKind::User => principals.find_user_arn(&directive.name, &ctx.account)?,
        PrincipalKind::Role => principals.find_role_arn(&directive.name, &ctx.account)?,
        PrincipalKind::PermissionSet => {
            match principals.permission_set_role_arn(&directive.name, &ctx.account)? {
                Some(role_arn) => principals.find_role_by_arn(&role_arn)?,
                None => None,
            }
        }
        PrincipalKind::Unknown(kind) => {
            warn!(
                kind = %kind,
                name = %directive.name,
                "unrecognized principal kind, no association emitted"
            );
            return Ok(());
        }
    };

    let Some(principal_arn) = arn else {
        return Err(SynthError::PrincipalNotFound {
            kind: directive.kind.clone(),
            name: directive.name.clone(),
            account: ctx.account.clone(),
        });
    };

    debug!(principal = %principal_arn, portfolio = %portfolio, "emitting principal association");
    out.push(Declaration::PrincipalAssociation(AssociationDeclaration {
        logical_id: LogicalId::for_resource(
            "PrincipalAssociation",
            &format!("{portfolio_name}{}", directive.name),
        ),
        portfolio: portfolio.clone(),
        depends_on: vec![portfolio.clone()],
        principal_arn,
        principal_kind: directive.kind.clone(),
    }));

    Ok(())
}
