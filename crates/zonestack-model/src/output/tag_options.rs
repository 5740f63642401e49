//! Flattened tag-option declarations.

use serde::{Deserialize, Serialize};

use crate::input::TagOptionSet;

/// One allowed key/value pair of a tag-option set.
///
/// A configured `key -> [v1, v2]` mapping flattens to one pair per allowed
/// value, which is how the catalog service models tag options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagOptionPair {
    /// Tag key.
    pub key: String,
    /// One allowed value for the key.
    pub value: String,
}

impl TagOptionPair {
    /// Flatten a configured tag-option set into declaration pairs, in key
    /// order.
    #[must_use]
    pub fn from_set(set: &TagOptionSet) -> Vec<Self> {
        let mut pairs = Vec::new();
        for (key, values) in set.iter() {
            for value in values {
                pairs.push(Self {
                    key: key.to_owned(),
                    value: value.clone(),
                });
            }
        }
        pairs
    }
}
