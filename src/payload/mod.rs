//! Projection of resolved sets and manifest payload assembly
//!
//! Turns resolved item sets into the flat string lists client manifests
//! carry, and assembles the payload handed to the external renderer. Any
//! resolution failure propagates before a payload is built, so a payload
//! never carries a partial item list.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{AssignmentRecord, ItemKind, NodeId};
use crate::error::Result;
use crate::resolver::ResolvedSet;

/// What a client manifest carries. With precedence resolution disabled the
/// item lists hold the node's own assignments only and `included_manifests`
/// names the bundle/group manifests the client merges itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_manifests: Option<Vec<String>>,
    pub managed_installs: Vec<String>,
    pub managed_uninstalls: Vec<String>,
    pub managed_updates: Vec<String>,
    pub optional_installs: Vec<String>,
}

impl Catalog {
    /// Flat item labels for a resolved set: the branch name, or
    /// `name-version` when the assignment pins a package.
    ///
    /// Order follows the mapping's iteration order and is not guaranteed
    /// stable across calls; callers needing determinism sort explicitly.
    pub fn project(&self, resolved: &ResolvedSet) -> Result<Vec<String>> {
        resolved
            .values()
            .map(|record| self.item_label(record))
            .collect()
    }

    /// Item labels for one node and kind. With `use_precedence` the
    /// effective resolved set is projected; without it, the node's own
    /// assignment sequence as-is, in assignment order.
    pub fn managed_items(
        &self,
        node: NodeId,
        kind: ItemKind,
        use_precedence: bool,
    ) -> Result<Vec<String>> {
        if use_precedence {
            let resolved = self.resolve(node, kind)?;
            self.project(&resolved)
        } else {
            self.node(node)?
                .items(kind)
                .iter()
                .map(|record| self.item_label(record))
                .collect()
        }
    }

    pub fn managed_installs(&self, node: NodeId) -> Result<Vec<String>> {
        self.managed_items(node, ItemKind::Install, true)
    }

    pub fn managed_uninstalls(&self, node: NodeId) -> Result<Vec<String>> {
        self.managed_items(node, ItemKind::Uninstall, true)
    }

    pub fn managed_updates(&self, node: NodeId) -> Result<Vec<String>> {
        self.managed_items(node, ItemKind::Update, true)
    }

    pub fn optional_installs(&self, node: NodeId) -> Result<Vec<String>> {
        self.managed_items(node, ItemKind::Optional, true)
    }

    /// Manifest file paths of the node's bundles in reference order, then
    /// its group; what a client merges itself when precedence resolution is
    /// left to it
    pub fn included_manifests(&self, node: NodeId) -> Result<Vec<String>> {
        let node = self.node(node)?;
        let mut paths = Vec::with_capacity(node.bundles().len() + 1);
        for bundle in node.bundles() {
            paths.push(format!("{}.plist", self.node(*bundle)?.path_form()));
        }
        if let Some(group) = node.group() {
            paths.push(format!("{}.plist", self.node(group)?.path_form()));
        }
        Ok(paths)
    }

    /// Assemble the payload for one node. Fails before building anything if
    /// any of the four resolutions fails.
    pub fn manifest_payload(&self, node: NodeId, use_precedence: bool) -> Result<ManifestPayload> {
        let included_manifests = if use_precedence {
            None
        } else {
            Some(self.included_manifests(node)?)
        };
        Ok(ManifestPayload {
            name: self.node(node)?.name().to_string(),
            included_manifests,
            managed_installs: self.managed_items(node, ItemKind::Install, use_precedence)?,
            managed_uninstalls: self.managed_items(node, ItemKind::Uninstall, use_precedence)?,
            managed_updates: self.managed_items(node, ItemKind::Update, use_precedence)?,
            optional_installs: self.managed_items(node, ItemKind::Optional, use_precedence)?,
        })
    }

    fn item_label(&self, record: &AssignmentRecord) -> Result<String> {
        let branch = self.branch(record.branch)?;
        match record.package {
            Some(id) => {
                let package = self.package(id)?;
                Ok(package.versioned_label(branch))
            }
            None => Ok(branch.name.clone()),
        }
    }
}
