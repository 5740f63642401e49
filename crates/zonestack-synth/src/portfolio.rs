//! Portfolio resource emission.

use tracing::debug;

use zonestack_core::SynthConfig;
use zonestack_model::input::PortfolioDefinition;
use zonestack_model::output::{
    Declaration, LogicalId, ParameterRegistration, PortfolioDeclaration, SynthesizedTemplate,
    TagOptionPair,
};

/// Emit the portfolio declaration and register its identifier under the
/// well-known parameter path.
///
/// The parameter is registered unconditionally, whether or not the
/// portfolio has shares, products, or associations; downstream consumers
/// rely on it. Returns the portfolio's logical ID for dependent
/// declarations.
pub fn synthesize_portfolio(
    definition: &PortfolioDefinition,
    config: &SynthConfig,
    out: &mut SynthesizedTemplate,
) -> LogicalId {
    let logical_id = LogicalId::for_resource("Portfolio", &definition.name);
    let tag_options = definition
        .tag_options
        .as_ref()
        .map(TagOptionPair::from_set)
        .unwrap_or_default();

    debug!(name = %definition.name, "emitting portfolio");
    out.push(Declaration::Portfolio(PortfolioDeclaration {
        logical_id: logical_id.clone(),
        display_name: definition.name.clone(),
        provider_name: definition.provider_name.clone(),
        description: definition.description.clone(),
        tag_options,
    }));

    out.register_parameter(ParameterRegistration {
        name: ParameterRegistration::portfolio_id_path(&config.namespace, &definition.name),
        value: logical_id.to_string(),
    });

    logical_id
}
