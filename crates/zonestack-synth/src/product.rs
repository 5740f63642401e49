//! Product emission.

use std::path::Path;

use tracing::debug;

use zonestack_core::SynthConfig;
use zonestack_model::input::ProductDefinition;
use zonestack_model::output::{
    Declaration, LogicalId, ProductDeclaration, ProductPortfolioAssociation,
    ProvisioningArtifact, SynthesizedTemplate, TagOptionPair,
};

/// Emit a product declaration with one provisioning artifact per configured
/// version, and associate the product with its owning portfolio.
///
/// Version template paths resolve against the configured base directory and
/// every artifact requests template validation. Each configured version
/// maps 1:1 to one artifact.
pub fn synthesize_product(
    definition: &ProductDefinition,
    portfolio_name: &str,
    portfolio: &LogicalId,
    config: &SynthConfig,
    out: &mut SynthesizedTemplate,
) {
    let logical_id = LogicalId::for_resource("Product", &definition.name);
    let support = definition.support.clone().unwrap_or_default();
    let tag_options = definition
        .tag_options
        .as_ref()
        .map(TagOptionPair::from_set)
        .unwrap_or_default();

    let provisioning_artifacts = definition
        .versions
        .iter()
        .map(|version| ProvisioningArtifact {
            name: version.name.clone(),
            description: version.description.clone(),
            template_path: Path::new(&config.template_dir)
                .join(&version.template_path)
                .display()
                .to_string(),
            validate_template: true,
        })
        .collect();

    debug!(name = %definition.name, portfolio = %portfolio, "emitting product");
    out.push(Declaration::Product(ProductDeclaration {
        logical_id: logical_id.clone(),
        name: definition.name.clone(),
        owner: definition.owner.clone(),
        distributor: definition.distributor.clone(),
        description: definition.description.clone(),
        support_email: support.email,
        support_url: support.url,
        support_description: support.description,
        tag_options,
        provisioning_artifacts,
    }));

    out.push(Declaration::ProductAssociation(ProductPortfolioAssociation {
        logical_id: LogicalId::for_resource(
            "ProductAssociation",
            &format!("{portfolio_name}{}", definition.name),
        ),
        portfolio: portfolio.clone(),
        product: logical_id.clone(),
        depends_on: vec![portfolio.clone(), logical_id],
    }));
}
