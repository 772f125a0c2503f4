//! Point-in-time copies of the forest, for diagnostics only.

use serde::{Deserialize, Serialize};

use crate::config::UnionFindConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub count: usize,
    pub config: UnionFindConfig,
    pub parent: Vec<usize>,
    pub height: Vec<usize>,
}

impl Snapshot {
    pub fn roots(&self) -> Vec<usize> {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .collect()
    }

    /// One `"{site}: {parent}, {height}"` line per site.
    pub fn show(&self) -> String {
        let mut s = String::new();
        for (i, (p, h)) in self.parent.iter().zip(self.height.iter()).enumerate() {
            s.push_str(&format!("{}: {}, {}\n", i, p, h));
        }
        s
    }
}
