//! Association editing for manifest nodes
//!
//! The only place assignment records and references are created or replaced.
//! Every operation validates its references against the catalog before it
//! touches the node, so a failed edit leaves the node unchanged. Reference
//! edits are also where bundle cycles are refused; the resolver's own guard
//! is the backstop for graphs built by other means.

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{AssignmentRecord, ItemKind, ItemRef, NodeId, NodeRole};
use crate::error::{Result, cyclic_reference, invalid_reference};

impl Catalog {
    /// Replace a node's entire assignment sequence for one kind.
    ///
    /// Items naming a specific package produce pinned records; items naming
    /// a bare branch produce records floating to the branch's latest.
    pub fn assign_items(&mut self, node: NodeId, kind: ItemKind, items: &[ItemRef]) -> Result<()> {
        let records = items
            .iter()
            .map(|item| self.record_for(*item))
            .collect::<Result<Vec<AssignmentRecord>>>()?;
        let count = records.len();
        *self.node_mut(node)?.items_mut(kind) = records;
        debug!(node = node.0, kind = kind.as_str(), count, "replaced assignment items");
        Ok(())
    }

    /// Append one item to a node's sequence for a kind, replacing any
    /// existing record of the same branch; branch identity stays unique per
    /// node and kind by construction
    pub fn append_item(&mut self, node: NodeId, kind: ItemKind, item: ItemRef) -> Result<()> {
        let record = self.record_for(item)?;
        let items = self.node_mut(node)?.items_mut(kind);
        items.retain(|existing| existing.branch != record.branch);
        items.push(record);
        Ok(())
    }

    /// Replace a node's ordered bundle references
    pub fn set_bundles(&mut self, node: NodeId, bundles: Vec<NodeId>) -> Result<()> {
        self.node(node)?;
        for bundle in &bundles {
            let target = self.node(*bundle)?;
            if !target.is_bundle() {
                return Err(invalid_reference(format!(
                    "'{}' is not a bundle",
                    target.name()
                )));
            }
            self.ensure_acyclic(node, *bundle)?;
        }
        self.node_mut(node)?.bundles = bundles;
        Ok(())
    }

    /// Append one bundle reference
    pub fn add_bundle_ref(&mut self, node: NodeId, bundle: NodeId) -> Result<()> {
        let target = self.node(bundle)?;
        if !target.is_bundle() {
            return Err(invalid_reference(format!(
                "'{}' is not a bundle",
                target.name()
            )));
        }
        self.ensure_acyclic(node, bundle)?;
        self.node_mut(node)?.bundles.push(bundle);
        Ok(())
    }

    /// Set or clear a computer's group reference
    pub fn set_group(&mut self, node: NodeId, group: Option<NodeId>) -> Result<()> {
        if let Some(group) = group {
            let target = self.node(group)?;
            if !target.is_group() {
                return Err(invalid_reference(format!(
                    "'{}' is not a computer group",
                    target.name()
                )));
            }
        }
        let node = self.node_mut(node)?;
        match &mut node.role {
            NodeRole::Computer { group: slot } => {
                *slot = group;
                Ok(())
            }
            _ => Err(invalid_reference(format!(
                "'{}' is not a computer and cannot reference a group",
                node.name()
            ))),
        }
    }

    fn record_for(&self, item: ItemRef) -> Result<AssignmentRecord> {
        match item {
            ItemRef::Package(id) => {
                let package = self
                    .package(id)
                    .map_err(|_| invalid_reference(format!("package {id}")))?;
                Ok(AssignmentRecord::pinned(package.branch, id))
            }
            ItemRef::Branch(id) => {
                self.branch(id)
                    .map_err(|_| invalid_reference(format!("package branch {id}")))?;
                Ok(AssignmentRecord::floating(id))
            }
        }
    }

    /// Refuse a bundle reference that would make `node` reachable from
    /// itself. Only bundle-to-bundle edges can close a loop: nothing in the
    /// graph references a computer, and bundles never reference groups.
    fn ensure_acyclic(&self, node: NodeId, new_bundle: NodeId) -> Result<()> {
        let mut path = Vec::new();
        if self.reaches(new_bundle, node, &mut path) {
            let mut chain = vec![self.node(node).map(|n| n.name().to_string())?];
            for id in path {
                chain.push(self.node(id).map(|n| n.name().to_string())?);
            }
            return Err(cyclic_reference(chain.join(" -> ")));
        }
        Ok(())
    }

    fn reaches(&self, from: NodeId, target: NodeId, path: &mut Vec<NodeId>) -> bool {
        path.push(from);
        if from == target {
            return true;
        }
        if let Ok(node) = self.node(from) {
            for bundle in node.bundles() {
                if self.reaches(*bundle, target, path) {
                    return true;
                }
            }
        }
        path.pop();
        false
    }
}
