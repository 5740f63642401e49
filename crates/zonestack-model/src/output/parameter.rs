//! Discoverable parameter registrations.

use serde::{Deserialize, Serialize};

/// A generated resource identifier recorded under a well-known parameter
/// name for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterRegistration {
    /// Parameter name.
    pub name: String,
    /// Parameter value (the generated identifier).
    pub value: String,
}

impl ParameterRegistration {
    /// The well-known parameter name recording a portfolio's ID:
    /// `/<namespace>/servicecatalog/portfolios/<portfolio-name>/id`.
    #[must_use]
    pub fn portfolio_id_path(namespace: &str, portfolio_name: &str) -> String {
        format!("/{namespace}/servicecatalog/portfolios/{portfolio_name}/id")
    }
}
