//! Stack-set configuration definitions.

use serde::{Deserialize, Serialize};

use zonestack_core::AwsRegion;

/// CloudFormation capability acknowledged by a stack-set deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Allows creating IAM resources.
    #[serde(rename = "CAPABILITY_IAM")]
    Iam,
    /// Allows creating IAM resources with custom names.
    #[serde(rename = "CAPABILITY_NAMED_IAM")]
    NamedIam,
    /// Allows macro expansion during deployment.
    #[serde(rename = "CAPABILITY_AUTO_EXPAND")]
    AutoExpand,
}

impl Capability {
    /// Returns the CloudFormation wire-format string for this capability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iam => "CAPABILITY_IAM",
            Self::NamedIam => "CAPABILITY_NAMED_IAM",
            Self::AutoExpand => "CAPABILITY_AUTO_EXPAND",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic deployment targets of a stack set.
///
/// Account and OU entries are symbolic names from the landing-zone
/// configuration; the account resolver turns them into concrete IDs at
/// synthesis time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTargets {
    /// Symbolic account names to deploy into.
    pub accounts: Vec<String>,
    /// Symbolic organizational unit names to deploy into.
    pub organizational_units: Vec<String>,
}

/// One configured stack set.
///
/// Read once from configuration and used to emit exactly one declaration;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSetDefinition {
    /// Stack-set name, unique within the administrator account.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Capabilities acknowledged for every deployment of this stack set.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    /// Accounts and OUs the stack set deploys into.
    #[serde(default)]
    pub targets: DeploymentTargets,
    /// Regions the stack set deploys into.
    pub regions: Vec<AwsRegion>,
    /// Template path, relative to the configured template base directory.
    /// The template body is embedded verbatim in the declaration.
    pub template_path: String,
}
