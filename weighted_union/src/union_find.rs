//! Height-weighted quick-union over a fixed universe of sites `0..n`.

use std::fmt;

use crate::config::UnionFindConfig;
use crate::error::Error;
use crate::snapshot::Snapshot;

/// Operations shared by union-find structures over sites `0..size()`.
pub trait UnionFind {
    /// Number of sites, fixed at construction.
    fn size(&self) -> usize;

    /// Current component count.
    fn components(&self) -> usize;

    /// Root of the component containing `p`. May restructure the forest.
    fn find(&mut self, p: usize) -> Result<usize, Error>;

    /// Merges the components of `p` and `q`, decrementing the component count.
    fn union(&mut self, p: usize, q: usize) -> Result<(), Error>;

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Unions `p` and `q` only if they are not already connected.
    /// Returns whether a merge happened.
    fn connect(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        if self.connected(p, q)? {
            return Ok(false);
        }
        self.union(p, q)?;
        Ok(true)
    }
}

/// Array-backed forest. `parent[i] == i` iff `i` is a root, and
/// `height[r]` bounds the height of the tree rooted at `r`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    height: Vec<usize>,
    count: usize,
    config: UnionFindConfig,
}

impl DisjointSet {
    /// `n` singleton components, with path compression.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, UnionFindConfig::default())
    }

    pub fn with_config(n: usize, config: UnionFindConfig) -> Self {
        log::debug!(
            "disjoint set with {} sites, path compression {}",
            n,
            config.path_compression
        );
        DisjointSet {
            parent: (0..n).collect(),
            height: vec![1; n],
            count: n,
            config,
        }
    }

    /// Like [`DisjointSet::with_config`], for callers holding a signed length.
    pub fn try_new(n: i64, config: UnionFindConfig) -> Result<Self, Error> {
        let n = usize::try_from(n)
            .map_err(|_| Error::InvalidArgument(format!("negative number of sites {}", n)))?;
        Ok(Self::with_config(n, config))
    }

    pub fn config(&self) -> UnionFindConfig {
        self.config
    }

    /// Only meant for tests and experiments. Existing paths are left as they are.
    pub fn set_path_compression(&mut self, path_compression: bool) {
        log::debug!("path compression set to {}", path_compression);
        self.config.path_compression = path_compression;
    }

    fn validate(&self, p: usize) -> Result<(), Error> {
        if p >= self.parent.len() {
            return Err(Error::OutOfRange {
                index: p,
                size: self.parent.len(),
            });
        }
        Ok(())
    }

    // p must be valid
    fn root_of(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            if self.config.path_compression {
                self.halve_path(root);
            }
            root = self.parent[root];
        }
        root
    }

    /// Points every node from `i` up to the root at its grandparent,
    /// stepping to each node's original parent.
    fn halve_path(&mut self, mut i: usize) {
        while self.parent[i] != i {
            let p = self.parent[i];
            self.parent[i] = self.parent[p];
            i = p;
        }
    }

    /// Attaches the shorter tree under the taller one. Returns false when
    /// `i` and `j` already share a root.
    fn merge_components(&mut self, i: usize, j: usize) -> bool {
        let ri = self.root_of(i);
        let rj = self.root_of(j);
        if ri == rj {
            return false;
        }
        if self.height[ri] == self.height[rj] {
            self.parent[rj] = ri;
            self.height[ri] += 1;
            log::trace!("{} under {}, height now {}", rj, ri, self.height[ri]);
        } else if self.height[ri] < self.height[rj] {
            self.parent[ri] = rj;
            log::trace!("{} under {}", ri, rj);
        } else {
            self.parent[rj] = ri;
            log::trace!("{} under {}", rj, ri);
        }
        true
    }

    pub fn parent_of(&self, p: usize) -> Result<usize, Error> {
        self.validate(p)?;
        Ok(self.parent[p])
    }

    /// Stored height of `p`. Only meaningful when `p` is a root.
    pub fn height_of(&self, p: usize) -> Result<usize, Error> {
        self.validate(p)?;
        Ok(self.height[p])
    }

    /// Parent hops from `p` to its root, without compressing.
    pub fn depth_of(&self, p: usize) -> Result<usize, Error> {
        self.validate(p)?;
        let mut p = p;
        let mut depth = 0;
        while self.parent[p] != p {
            p = self.parent[p];
            depth += 1;
        }
        Ok(depth)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            count: self.count,
            config: self.config,
            parent: self.parent.clone(),
            height: self.height.clone(),
        }
    }

    pub fn show(&self) -> String {
        self.snapshot().show()
    }
}

impl UnionFind for DisjointSet {
    fn size(&self) -> usize {
        self.parent.len()
    }

    fn components(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize, Error> {
        self.validate(p)?;
        Ok(self.root_of(p))
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.root_of(p) == self.root_of(q))
    }

    /// Calling this on sites that are already connected still decrements the
    /// component count without changing the partition. Use
    /// [`UnionFind::connect`] to keep the count accurate.
    fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        self.validate(p)?;
        self.validate(q)?;
        let (i, j) = (self.root_of(p), self.root_of(q));
        if !self.merge_components(i, j) {
            log::trace!("union of already connected {} and {}", p, q);
        }
        self.count = self.count.saturating_sub(1);
        Ok(())
    }
}

impl fmt::Display for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DisjointSet:")?;
        writeln!(f, "  count: {}", self.count)?;
        writeln!(f, "  path compression? {}", self.config.path_compression)?;
        writeln!(f, "  parents: {:?}", self.parent)?;
        write!(f, "  heights: {:?}", self.height)
    }
}
