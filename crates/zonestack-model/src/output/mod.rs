//! Synthesized resource declarations.
//!
//! These are the shapes handed to the deployment backend. All declarations
//! serialize with `PascalCase` field names, matching the CloudFormation wire
//! convention. Declarations that must be applied after another resource
//! exists carry explicit `DependsOn` edges.

mod association;
mod parameter;
mod portfolio;
mod product;
mod stack_set;
mod tag_options;
mod template;

pub use association::AssociationDeclaration;
pub use parameter::ParameterRegistration;
pub use portfolio::{
    AccountShareDeclaration, OrganizationShareDeclaration, PortfolioDeclaration,
};
pub use product::{ProductDeclaration, ProductPortfolioAssociation, ProvisioningArtifact};
pub use stack_set::{OperationPreferences, RegionConcurrency, StackSetDeclaration};
pub use tag_options::TagOptionPair;
pub use template::{Declaration, LogicalId, SynthesizedTemplate};
