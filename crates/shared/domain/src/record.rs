use serde::{Deserialize, Serialize};

/// One leaf of a flattened naming tree.
///
/// Sub-contexts never appear as records; only their leaf descendants do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatRecord {
    /// Full slash-joined path from the traversal root to this binding.
    pub path: String,
    /// The binding's own name, without prefix.
    pub name: String,
    /// String form of the bound value; `None` when the leaf is bound to null.
    pub value: Option<String>,
}

impl FlatRecord {
    pub fn new(path: impl Into<String>, name: impl Into<String>, value: Option<String>) -> Self {
        Self { path: path.into(), name: name.into(), value }
    }
}
