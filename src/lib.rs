//! Muster - manifest precedence resolution for managed software fleets
//!
//! A fleet-management server hands every client machine a manifest: what to
//! install, uninstall, keep updated, or offer optionally. Manifests compose:
//! a computer inherits from the bundles it references and from its computer
//! group, groups and bundles reference further bundles, and conflicts have
//! to resolve the same way every time. Muster is that resolution engine.
//!
//! For one node and one assignment kind, [`Catalog::resolve`] computes the
//! effective branch-keyed item set by applying, in order:
//!
//! 1. group-inherited items (lowest precedence),
//! 2. bundle-inherited items, later references overriding earlier ones,
//! 3. cross-kind exclusion (an uninstalled branch never surfaces as an
//!    inherited install, and vice versa; updates and optional installs are
//!    pruned against both resolved sets),
//! 4. the node's own items, which always win.
//!
//! The surrounding application (storage, routing, authentication, payload
//! rendering) is intentionally not here. The catalog holds an in-memory
//! snapshot of the graph; resolution is a pure read over it.
//!
//! ```
//! use muster::Snapshot;
//!
//! let catalog = Snapshot::from_yaml(r#"
//! branches:
//!   - name: firefox
//!     versions: ["102.0"]
//! nodes:
//!   - name: base-apps
//!     role: bundle
//!     installs: [firefox]
//!   - name: imac-01
//!     role: computer
//!     bundles: [base-apps]
//! "#)?.into_catalog()?;
//!
//! let computer = catalog.find_node(Some("default"), "imac-01")?;
//! assert_eq!(catalog.managed_installs(computer.id)?, vec!["firefox"]);
//! # Ok::<(), muster::MusterError>(())
//! ```

pub mod assign;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod payload;
pub mod resolver;

pub use catalog::{Catalog, Snapshot};
pub use domain::{
    AssignmentRecord, BranchId, ItemKind, ItemRef, ManifestNode, NodeId, NodeRole, Package,
    PackageBranch, PackageId, conform_to_shortname,
};
pub use error::{MusterError, Result};
pub use payload::ManifestPayload;
pub use resolver::{ResolvedSet, Resolver, index_items};
