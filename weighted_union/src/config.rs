use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`DisjointSet`](crate::DisjointSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnionFindConfig {
    /// Apply path-halving while walking up to a root.
    pub path_compression: bool,
}

impl Default for UnionFindConfig {
    fn default() -> Self {
        UnionFindConfig {
            path_compression: true,
        }
    }
}

impl UnionFindConfig {
    pub fn without_compression() -> Self {
        UnionFindConfig {
            path_compression: false,
        }
    }
}
