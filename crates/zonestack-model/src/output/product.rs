//! Product declarations and product-to-portfolio associations.

use serde::{Deserialize, Serialize};

use crate::output::{LogicalId, TagOptionPair};

/// One deployable version of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningArtifact {
    /// Version name (e.g. `"v1"`).
    pub name: String,
    /// Human-readable description of this version.
    pub description: Option<String>,
    /// Template path resolved against the configured base directory.
    pub template_path: String,
    /// Whether the backend validates the template before accepting it.
    /// Always requested by this engine.
    pub validate_template: bool,
}

/// One synthesized Service Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// Product name.
    pub name: String,
    /// Product owner.
    pub owner: String,
    /// Product distributor.
    pub distributor: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Support contact email.
    pub support_email: Option<String>,
    /// Support URL.
    pub support_url: Option<String>,
    /// Support description.
    pub support_description: Option<String>,
    /// Flattened tag options attached to this product.
    pub tag_options: Vec<TagOptionPair>,
    /// One artifact per configured version, in configuration order.
    pub provisioning_artifacts: Vec<ProvisioningArtifact>,
}

/// Associates a product with its owning portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductPortfolioAssociation {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// The owning portfolio.
    pub portfolio: LogicalId,
    /// The associated product.
    pub product: LogicalId,
    /// Both resources must exist before the association is applied.
    pub depends_on: Vec<LogicalId>,
}
