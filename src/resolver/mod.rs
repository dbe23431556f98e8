//! Precedence resolution over the manifest reference graph
//!
//! This module handles:
//! - Recursively computing a node's effective item set per assignment kind
//! - Override order: own items > bundle-inherited items > group-inherited items
//! - Cross-kind exclusion (an uninstalled branch never surfaces as an
//!   inherited install, and vice versa)
//! - Cycle detection over the bundle/group reference graph
//!
//! Resolution is a pure read: it walks already-loaded catalog data, performs
//! no I/O and caches nothing across calls. A fresh [`Resolver`] is built per
//! top-level call; its memo table only short-circuits diamond-shaped
//! reference graphs within that call.

pub mod index;

pub use index::index_items;

use std::collections::HashMap;

use tracing::trace;

use crate::catalog::Catalog;
use crate::domain::{AssignmentRecord, BranchId, ItemKind, ManifestNode, NodeId};
use crate::error::{Result, cyclic_reference};

/// Effective mapping from branch identity to the winning assignment record
/// for one node and one kind
pub type ResolvedSet = HashMap<BranchId, AssignmentRecord>;

/// One resolution call's walk over the reference graph
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    /// (node, kind) pairs currently on the walk, for cycle detection
    stack: Vec<(NodeId, ItemKind)>,
    /// Sub-results already computed during this call
    memo: HashMap<(NodeId, ItemKind), ResolvedSet>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stack: Vec::new(),
            memo: HashMap::new(),
        }
    }

    /// Resolve the effective item set for one node and kind.
    ///
    /// Total over acyclic reference graphs; a node with no items, bundles or
    /// group resolves to an empty mapping. A reference cycle fails with
    /// [`crate::MusterError::CyclicReference`] instead of recursing
    /// unboundedly.
    pub fn resolve(&mut self, node: NodeId, kind: ItemKind) -> Result<ResolvedSet> {
        if let Some(hit) = self.memo.get(&(node, kind)) {
            return Ok(hit.clone());
        }
        if self.stack.contains(&(node, kind)) {
            return Err(cyclic_reference(self.render_chain(node, kind)));
        }

        self.stack.push((node, kind));
        let resolved = self.resolve_uncached(node, kind);
        self.stack.pop();

        let resolved = resolved?;
        self.memo.insert((node, kind), resolved.clone());
        Ok(resolved)
    }

    fn resolve_uncached(&mut self, id: NodeId, kind: ItemKind) -> Result<ResolvedSet> {
        let catalog = self.catalog;
        let node = catalog.node(id)?;
        trace!(node = %node.name(), kind = kind.as_str(), "resolving effective items");

        let exclusion = self.exclusion_set(node, kind)?;
        let own = index_items(node.items(kind));

        // Group-inherited items are the floor of the merge
        let mut effective = match node.group() {
            Some(group) => self.resolve(group, kind)?,
            None => ResolvedSet::new(),
        };

        // Bundles overlay the group; a later reference wins over an earlier
        for bundle in node.bundles() {
            let inherited = self.resolve(*bundle, kind)?;
            effective.extend(inherited);
        }

        // Inherited entries conflicting with the exclusion set are pruned;
        // the node's own items then win unconditionally
        effective.retain(|branch, _| !exclusion.contains_key(branch));
        effective.extend(own);

        Ok(effective)
    }

    /// Branches that must not surface in this kind's inherited items.
    ///
    /// Installs and uninstalls exclude each other using the node's own
    /// records only; updates and optional installs exclude everything in the
    /// fully resolved install and uninstall sets.
    fn exclusion_set(&mut self, node: &ManifestNode, kind: ItemKind) -> Result<ResolvedSet> {
        match kind {
            ItemKind::Install => Ok(index_items(node.items(ItemKind::Uninstall))),
            ItemKind::Uninstall => Ok(index_items(node.items(ItemKind::Install))),
            ItemKind::Update | ItemKind::Optional => {
                let mut excluded = self.resolve(node.id, ItemKind::Install)?;
                excluded.extend(self.resolve(node.id, ItemKind::Uninstall)?);
                Ok(excluded)
            }
        }
    }

    /// Chain of names from the first occurrence of the re-entered node
    fn render_chain(&self, node: NodeId, kind: ItemKind) -> String {
        let start = self
            .stack
            .iter()
            .position(|entry| *entry == (node, kind))
            .unwrap_or(0);
        let mut names: Vec<String> = self.stack[start..]
            .iter()
            .map(|(id, _)| self.node_label(*id))
            .collect();
        names.push(self.node_label(node));
        names.join(" -> ")
    }

    fn node_label(&self, id: NodeId) -> String {
        self.catalog
            .node(id)
            .map(|n| n.name().to_string())
            .unwrap_or_else(|_| format!("node {id}"))
    }
}

impl Catalog {
    /// Resolve one node and kind with a fresh walk over current data
    pub fn resolve(&self, node: NodeId, kind: ItemKind) -> Result<ResolvedSet> {
        Resolver::new(self).resolve(node, kind)
    }
}
