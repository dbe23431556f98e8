//! In-memory catalog of manifest nodes, package branches and packages
//!
//! The catalog is the store the resolver reads from and the association
//! editor writes to. It owns every node together with that node's assignment
//! records; bundle and group references between nodes are by id. Resolution
//! never mutates the catalog; the embedding application is responsible for
//! handing each resolution call a consistent snapshot.

pub mod lookup;
pub mod snapshot;

pub use snapshot::Snapshot;

use std::collections::HashMap;

use crate::domain::{
    BranchId, ManifestNode, NodeId, NodeRole, Package, PackageBranch, PackageId,
};
use crate::error::{Result, invalid_reference};

/// Store of one consistent fleet graph
#[derive(Debug, Default)]
pub struct Catalog {
    branches: HashMap<BranchId, PackageBranch>,
    packages: HashMap<PackageId, Package>,
    /// Package ids per branch in registration order; last is the latest
    releases: HashMap<BranchId, Vec<PackageId>>,
    nodes: HashMap<NodeId, ManifestNode>,
    next_branch: u64,
    next_package: u64,
    next_node: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package branch
    pub fn add_branch(&mut self, name: impl Into<String>) -> BranchId {
        self.next_branch += 1;
        let id = BranchId(self.next_branch);
        self.branches.insert(
            id,
            PackageBranch {
                id,
                name: name.into(),
            },
        );
        id
    }

    /// Register a package version under a branch; the most recently
    /// registered package is the branch's latest
    pub fn add_package(
        &mut self,
        branch: BranchId,
        version: impl Into<String>,
    ) -> Result<PackageId> {
        if !self.branches.contains_key(&branch) {
            return Err(invalid_reference(format!("package branch {branch}")));
        }
        self.next_package += 1;
        let id = PackageId(self.next_package);
        self.packages.insert(
            id,
            Package {
                id,
                branch,
                version: version.into(),
            },
        );
        self.releases.entry(branch).or_default().push(id);
        Ok(id)
    }

    pub fn add_computer(&mut self, name: impl Into<String>, unit: impl Into<String>) -> NodeId {
        self.add_node(name, unit, NodeRole::Computer { group: None })
    }

    pub fn add_group(&mut self, name: impl Into<String>, unit: impl Into<String>) -> NodeId {
        self.add_node(name, unit, NodeRole::Group)
    }

    pub fn add_bundle(&mut self, name: impl Into<String>, unit: impl Into<String>) -> NodeId {
        self.add_node(name, unit, NodeRole::Bundle)
    }

    fn add_node(
        &mut self,
        name: impl Into<String>,
        unit: impl Into<String>,
        role: NodeRole,
    ) -> NodeId {
        self.next_node += 1;
        let id = NodeId(self.next_node);
        self.nodes.insert(id, ManifestNode::new(id, name, unit, role));
        id
    }

    /// Remove a node; its owned records go with it, and bundle or group
    /// references to it are stripped from the surviving nodes
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        if self.nodes.remove(&id).is_none() {
            return Err(invalid_reference(format!("manifest node {id}")));
        }
        for node in self.nodes.values_mut() {
            node.bundles.retain(|bundle| *bundle != id);
            if let NodeRole::Computer { group } = &mut node.role {
                if *group == Some(id) {
                    *group = None;
                }
            }
        }
        Ok(())
    }

    /// Change a node's display name; its short identifier follows
    pub fn rename_node(&mut self, id: NodeId, name: impl Into<String>) -> Result<()> {
        self.node_mut(id)?.set_name(name);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&ManifestNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| invalid_reference(format!("manifest node {id}")))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut ManifestNode> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| invalid_reference(format!("manifest node {id}")))
    }

    pub fn branch(&self, id: BranchId) -> Result<&PackageBranch> {
        self.branches
            .get(&id)
            .ok_or_else(|| invalid_reference(format!("package branch {id}")))
    }

    pub fn package(&self, id: PackageId) -> Result<&Package> {
        self.packages
            .get(&id)
            .ok_or_else(|| invalid_reference(format!("package {id}")))
    }

    /// The most recently registered package of a branch, if any
    pub fn latest_package(&self, branch: BranchId) -> Option<&Package> {
        self.releases
            .get(&branch)?
            .last()
            .and_then(|id| self.packages.get(id))
    }

    /// Branches with at least one registered package, in registration order;
    /// what an operator may pick from when editing assignments
    pub fn assignable_branches(&self) -> Vec<&PackageBranch> {
        let mut ids: Vec<BranchId> = self
            .releases
            .iter()
            .filter(|(_, packages)| !packages.is_empty())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids.iter().filter_map(|id| self.branches.get(id)).collect()
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &ManifestNode> {
        self.nodes.values()
    }
}
