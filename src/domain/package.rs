//! Package branch and package types
//!
//! A branch is the stable lineage identity a manifest item refers to; a
//! package is one concrete version within that branch.

use std::fmt;

/// Identity of a package branch, stable across versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub u64);

/// Identity of one concrete package version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub u64);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package lineage, independent of any concrete version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageBranch {
    pub id: BranchId,
    pub name: String,
}

/// One released version within a package branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: PackageId,
    pub branch: BranchId,
    pub version: String,
}

impl Package {
    /// Label in `name-version` form, as emitted for pinned assignments
    pub fn versioned_label(&self, branch: &PackageBranch) -> String {
        format!("{}-{}", branch.name, self.version)
    }
}
