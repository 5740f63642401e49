//! Synthesis configuration.
//!
//! Provides [`SynthConfig`] for settings that apply to every declaration a
//! synthesis run emits. Values can be loaded from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Configuration for a synthesis run.
///
/// All fields have defaults. Configuration can be loaded from environment
/// variables via [`SynthConfig::from_env`].
///
/// # Examples
///
/// ```
/// use zonestack_core::SynthConfig;
///
/// let config = SynthConfig::default();
/// assert_eq!(config.namespace, "zonestack");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SynthConfig {
    /// Namespace prefix for discoverable parameter names
    /// (e.g. `/<namespace>/servicecatalog/portfolios/<name>/id`).
    #[builder(default = String::from("zonestack"))]
    pub namespace: String,

    /// Base directory that version and stack-set template paths are
    /// resolved against.
    #[builder(default = String::from("templates"))]
    pub template_dir: String,

    /// Retention period, in days, for the access logs attached to
    /// organization-level portfolio shares.
    #[builder(default = 365)]
    pub share_log_retention_days: u32,

    /// KMS key alias used to encrypt organization-share access logs.
    #[builder(default = String::from("alias/zonestack/share-logs"))]
    pub share_log_key_alias: String,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            namespace: String::from("zonestack"),
            template_dir: String::from("templates"),
            share_log_retention_days: 365,
            share_log_key_alias: String::from("alias/zonestack/share-logs"),
        }
    }
}

impl SynthConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("ZONESTACK_NAMESPACE") {
            config.namespace = v;
        }
        if let Ok(v) = std::env::var("ZONESTACK_TEMPLATE_DIR") {
            config.template_dir = v;
        }
        if let Ok(v) = std::env::var("ZONESTACK_SHARE_LOG_RETENTION_DAYS") {
            if let Ok(days) = v.parse() {
                config.share_log_retention_days = days;
            }
        }
        if let Ok(v) = std::env::var("ZONESTACK_SHARE_LOG_KEY_ALIAS") {
            config.share_log_key_alias = v;
        }

        config
    }
}
