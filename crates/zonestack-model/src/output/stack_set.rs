//! Stack-set declarations.

use serde::{Deserialize, Serialize};

use zonestack_core::{AccountId, AwsRegion, OrgUnitId};

use crate::input::Capability;
use crate::output::LogicalId;

/// How the deployment backend sequences a stack-set operation across
/// regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionConcurrency {
    /// One region at a time.
    #[serde(rename = "SEQUENTIAL")]
    Sequential,
    /// All regions at once.
    #[serde(rename = "PARALLEL")]
    Parallel,
}

/// Operational parameters baked into every stack-set declaration.
///
/// Every stack set this engine emits uses the same fixed preferences; the
/// deployment backend applies them when it executes the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationPreferences {
    /// Percentage of targets that may fail before the operation stops.
    pub failure_tolerance_percentage: u8,
    /// Percentage of targets deployed to concurrently.
    pub max_concurrent_percentage: u8,
    /// Region sequencing mode.
    pub region_concurrency_type: RegionConcurrency,
}

impl OperationPreferences {
    /// Failure tolerance applied to every emitted stack set.
    pub const FAILURE_TOLERANCE_PERCENTAGE: u8 = 25;
    /// Concurrency ceiling applied to every emitted stack set.
    pub const MAX_CONCURRENT_PERCENTAGE: u8 = 35;
}

impl Default for OperationPreferences {
    fn default() -> Self {
        Self {
            failure_tolerance_percentage: Self::FAILURE_TOLERANCE_PERCENTAGE,
            max_concurrent_percentage: Self::MAX_CONCURRENT_PERCENTAGE,
            region_concurrency_type: RegionConcurrency::Parallel,
        }
    }
}

/// One synthesized stack set, ready for the deployment backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetDeclaration {
    /// Logical identity within the synthesized template.
    pub logical_id: LogicalId,
    /// Stack-set name.
    pub stack_set_name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Capabilities acknowledged for deployments.
    pub capabilities: Vec<Capability>,
    /// Template body, embedded verbatim.
    pub template_body: String,
    /// Resolved target account IDs.
    pub accounts: Vec<AccountId>,
    /// Resolved target OU IDs.
    pub organizational_unit_ids: Vec<OrgUnitId>,
    /// Target regions.
    pub regions: Vec<AwsRegion>,
    /// Fixed operation preferences.
    pub operation_preferences: OperationPreferences,
}
