//! Product configuration definitions.

use serde::{Deserialize, Serialize};

use crate::input::TagOptionSet;

/// Support metadata surfaced to product consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportDetails {
    /// Support contact email.
    pub email: Option<String>,
    /// Support URL.
    pub url: Option<String>,
    /// Free-form support description.
    pub description: Option<String>,
}

/// One version of a product.
///
/// Each configuration entry maps 1:1 to one provisioning artifact; there is
/// no dedup or versioning identity beyond what is declared here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersionDefinition {
    /// Version name (e.g. `"v1"`).
    pub name: String,
    /// Human-readable description of this version.
    #[serde(default)]
    pub description: Option<String>,
    /// Template path, relative to the configured template base directory.
    pub template_path: String,
}

/// One product configured under a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDefinition {
    /// Product name, unique within its portfolio.
    pub name: String,
    /// Product owner.
    pub owner: String,
    /// Product distributor.
    #[serde(default)]
    pub distributor: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Support metadata.
    #[serde(default)]
    pub support: Option<SupportDetails>,
    /// Tag options constrained to this product.
    #[serde(default)]
    pub tag_options: Option<TagOptionSet>,
    /// Versions of this product, one provisioning artifact each.
    pub versions: Vec<ProductVersionDefinition>,
}
