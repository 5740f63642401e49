//! Stack-set emission.

use tracing::debug;

use zonestack_core::DeploymentContext;
use zonestack_model::input::StackSetDefinition;
use zonestack_model::output::{
    Declaration, LogicalId, OperationPreferences, StackSetDeclaration, SynthesizedTemplate,
};

use crate::error::SynthResult;
use crate::resolver::AccountResolver;
use crate::template_store::TemplateStore;

/// Emit one stack-set declaration per definition.
///
/// Stack sets are administered centrally: nothing is emitted unless the run
/// executes in the administrator account and the home region. Target
/// accounts and OUs are resolved from their symbolic names, and the
/// referenced template body is embedded verbatim. A template that cannot be
/// read aborts the whole emission.
pub fn synthesize_stack_sets(
    definitions: &[StackSetDefinition],
    ctx: &DeploymentContext,
    accounts: &dyn AccountResolver,
    templates: &dyn TemplateStore,
    out: &mut SynthesizedTemplate,
) -> SynthResult<()> {
    if !ctx.is_admin_home() {
        debug!(
            account = %ctx.account,
            region = %ctx.region,
            "not the admin account/home region, skipping stack sets"
        );
        return Ok(());
    }

    for definition in definitions {
        let target_accounts = definition
            .targets
            .accounts
            .iter()
            .map(|name| accounts.resolve_account(name))
            .collect::<SynthResult<Vec<_>>>()?;
        let target_ous = definition
            .targets
            .organizational_units
            .iter()
            .map(|name| accounts.resolve_organizational_unit(name))
            .collect::<SynthResult<Vec<_>>>()?;

        let template_body = templates.read_template(&definition.template_path)?;

        debug!(name = %definition.name, "emitting stack set");
        out.push(Declaration::StackSet(StackSetDeclaration {
            logical_id: LogicalId::for_resource("StackSet", &definition.name),
            stack_set_name: definition.name.clone(),
            description: definition.description.clone(),
            capabilities: definition.capabilities.clone(),
            template_body,
            accounts: target_accounts,
            organizational_unit_ids: target_ous,
            regions: definition.regions.clone(),
            operation_preferences: OperationPreferences::default(),
        }));
    }

    Ok(())
}
