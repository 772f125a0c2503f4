//! Disjoint sets over a fixed universe of sites, merged by tree height and
//! optionally compressed by path-halving.

pub mod config;
pub mod error;
pub mod snapshot;
pub mod union_find;

pub use config::UnionFindConfig;
pub use error::Error;
pub use snapshot::Snapshot;
pub use union_find::{DisjointSet, UnionFind};
