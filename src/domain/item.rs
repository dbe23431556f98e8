//! Assignment kinds and records

use crate::domain::package::{BranchId, PackageId};

/// The four assignment kinds a manifest node carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Install,
    Uninstall,
    Update,
    Optional,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Install,
        ItemKind::Uninstall,
        ItemKind::Update,
        ItemKind::Optional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Install => "install",
            ItemKind::Uninstall => "uninstall",
            ItemKind::Update => "update",
            ItemKind::Optional => "optional",
        }
    }
}

/// One assignment entry under one kind on one node
///
/// An absent `package` means the assignment floats to the latest version of
/// the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub branch: BranchId,
    pub package: Option<PackageId>,
}

impl AssignmentRecord {
    /// Floating assignment to whatever the branch's latest version is
    pub fn floating(branch: BranchId) -> Self {
        Self {
            branch,
            package: None,
        }
    }

    /// Assignment pinned to one concrete package version
    pub fn pinned(branch: BranchId, package: PackageId) -> Self {
        Self {
            branch,
            package: Some(package),
        }
    }
}

/// What an operator hands to the association editor: a specific package, or
/// a bare branch that floats to its latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    Package(PackageId),
    Branch(BranchId),
}
