//! Declaration identity and the synthesized-template container.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::output::{
    AccountShareDeclaration, AssociationDeclaration, OrganizationShareDeclaration,
    ParameterRegistration, PortfolioDeclaration, ProductDeclaration,
    ProductPortfolioAssociation, StackSetDeclaration,
};

/// Logical identity of a declaration within a synthesized template.
///
/// Built from a resource-kind prefix plus the configured name, reduced to
/// the alphanumeric characters CloudFormation logical IDs permit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalId(String);

impl LogicalId {
    /// Build a logical ID for a resource kind and configured name.
    #[must_use]
    pub fn for_resource(kind: &str, name: &str) -> Self {
        let mut id = String::with_capacity(kind.len() + name.len());
        id.push_str(kind);
        id.extend(name.chars().filter(char::is_ascii_alphanumeric));
        Self(id)
    }

    /// Get the logical ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Any resource declaration the synthesis engine can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Declaration {
    /// A stack-set deployment.
    StackSet(StackSetDeclaration),
    /// A Service Catalog portfolio.
    Portfolio(PortfolioDeclaration),
    /// A direct account-level portfolio share.
    AccountShare(AccountShareDeclaration),
    /// An OU-scoped or organization-wide portfolio share.
    OrganizationShare(OrganizationShareDeclaration),
    /// A Service Catalog product with its provisioning artifacts.
    Product(ProductDeclaration),
    /// A product-to-portfolio association.
    ProductAssociation(ProductPortfolioAssociation),
    /// A principal access grant on a portfolio.
    PrincipalAssociation(AssociationDeclaration),
}

impl Declaration {
    /// The logical ID of the declared resource.
    #[must_use]
    pub fn logical_id(&self) -> &LogicalId {
        match self {
            Self::StackSet(d) => &d.logical_id,
            Self::Portfolio(d) => &d.logical_id,
            Self::AccountShare(d) => &d.logical_id,
            Self::OrganizationShare(d) => &d.logical_id,
            Self::Product(d) => &d.logical_id,
            Self::ProductAssociation(d) => &d.logical_id,
            Self::PrincipalAssociation(d) => &d.logical_id,
        }
    }
}

/// The in-memory model a synthesis run appends declarations into.
///
/// Declarations are stored in emission order; the only ordering the model
/// encodes beyond that are the explicit `DependsOn` edges individual
/// declarations carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SynthesizedTemplate {
    /// All emitted resource declarations, in emission order.
    pub declarations: Vec<Declaration>,
    /// Discoverable parameter registrations for downstream consumers.
    pub parameters: Vec<ParameterRegistration>,
}

impl SynthesizedTemplate {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Register a discoverable parameter.
    pub fn register_parameter(&mut self, parameter: ParameterRegistration) {
        self.parameters.push(parameter);
    }

    /// All stack-set declarations, in emission order.
    pub fn stack_sets(&self) -> impl Iterator<Item = &StackSetDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::StackSet(s) => Some(s),
            _ => None,
        })
    }

    /// All portfolio declarations, in emission order.
    pub fn portfolios(&self) -> impl Iterator<Item = &PortfolioDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Portfolio(p) => Some(p),
            _ => None,
        })
    }

    /// All direct account shares, in emission order.
    pub fn account_shares(&self) -> impl Iterator<Item = &AccountShareDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::AccountShare(s) => Some(s),
            _ => None,
        })
    }

    /// All OU/organization shares, in emission order.
    pub fn organization_shares(&self) -> impl Iterator<Item = &OrganizationShareDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::OrganizationShare(s) => Some(s),
            _ => None,
        })
    }

    /// All product declarations, in emission order.
    pub fn products(&self) -> impl Iterator<Item = &ProductDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Product(p) => Some(p),
            _ => None,
        })
    }

    /// All principal access grants, in emission order.
    pub fn principal_associations(&self) -> impl Iterator<Item = &AssociationDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::PrincipalAssociation(a) => Some(a),
            _ => None,
        })
    }

    /// Look up a registered parameter value by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}
