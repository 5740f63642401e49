//! Tag-option configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A constrained key -> allowed-values mapping controlling which tags may be
/// applied to a portfolio or product.
///
/// Backed by a `BTreeMap` so iteration (and therefore declaration emission)
/// is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOptionSet(BTreeMap<String, Vec<String>>);

impl TagOptionSet {
    /// Create an empty tag-option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an allowed value for a key.
    pub fn allow(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// `true` when no keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, allowed values)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for TagOptionSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
