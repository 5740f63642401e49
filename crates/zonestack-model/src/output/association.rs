//! Principal access-grant declarations.

use serde::{Deserialize, Serialize};

use crate::input::PrincipalKind;
use crate::output::LogicalId;

/// Grants a resolved identity principal access to a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// The portfolio access is granted on.
    pub portfolio: LogicalId,
    /// The portfolio must exist before the grant is applied.
    pub depends_on: Vec<LogicalId>,
    /// ARN of the resolved principal.
    pub principal_arn: String,
    /// The configured principal kind the grant was resolved from.
    pub principal_kind: PrincipalKind,
}
