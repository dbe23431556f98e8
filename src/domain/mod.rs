//! Domain types for manifest nodes, packages and assignment records
//!
//! Contains the data model the rest of the crate operates on: package
//! branches and their versioned packages, the four assignment kinds, and the
//! manifest node roles (computer, computer group, bundle).

pub mod item;
pub mod node;
pub mod package;

pub use item::{AssignmentRecord, ItemKind, ItemRef};
pub use node::{ManifestNode, NodeId, NodeRole, conform_to_shortname};
pub use package::{BranchId, Package, PackageBranch, PackageId};
