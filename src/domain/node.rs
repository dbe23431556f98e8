//! Manifest node type and naming helpers
//!
//! A manifest node is any entity that owns assignment records and can
//! reference bundles: a computer, a computer group, or a bundle. Only
//! computers can additionally reference a group, which the role enum makes
//! structurally impossible to get wrong.

use std::fmt;

use crate::domain::item::{AssignmentRecord, ItemKind};

/// Identity of a manifest node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a manifest node plays in the reference graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// A client machine; the only role that can reference a group
    Computer { group: Option<NodeId> },
    /// A group of computers
    Group,
    /// A reusable composition unit referenced by other nodes
    Bundle,
}

impl NodeRole {
    /// Path segment used when rendering manifest file paths
    pub fn path_segment(self) -> &'static str {
        match self {
            NodeRole::Computer { .. } => "computers",
            NodeRole::Group => "computer_groups",
            NodeRole::Bundle => "bundles",
        }
    }
}

/// A computer, computer group or bundle with its owned assignment records
/// and outgoing references
#[derive(Debug, Clone)]
pub struct ManifestNode {
    pub id: NodeId,
    name: String,
    shortname: String,
    unit: String,
    pub(crate) role: NodeRole,
    pub(crate) bundles: Vec<NodeId>,
    pub(crate) install_items: Vec<AssignmentRecord>,
    pub(crate) uninstall_items: Vec<AssignmentRecord>,
    pub(crate) update_items: Vec<AssignmentRecord>,
    pub(crate) optional_install_items: Vec<AssignmentRecord>,
}

impl ManifestNode {
    pub(crate) fn new(
        id: NodeId,
        name: impl Into<String>,
        unit: impl Into<String>,
        role: NodeRole,
    ) -> Self {
        let mut node = Self {
            id,
            name: String::new(),
            shortname: String::new(),
            unit: unit.into(),
            role,
            bundles: Vec::new(),
            install_items: Vec::new(),
            uninstall_items: Vec::new(),
            update_items: Vec::new(),
            optional_install_items: Vec::new(),
        };
        node.set_name(name);
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short identifier derived from the display name; never set directly
    pub fn shortname(&self) -> &str {
        &self.shortname
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Setting the name recomputes the short identifier
    pub(crate) fn set_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.shortname = conform_to_shortname(&value);
        self.name = value;
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.role, NodeRole::Computer { .. })
    }

    pub fn is_group(&self) -> bool {
        matches!(self.role, NodeRole::Group)
    }

    pub fn is_bundle(&self) -> bool {
        matches!(self.role, NodeRole::Bundle)
    }

    /// Group reference; always `None` for non-computer roles
    pub fn group(&self) -> Option<NodeId> {
        match self.role {
            NodeRole::Computer { group } => group,
            _ => None,
        }
    }

    /// Ordered bundle references
    pub fn bundles(&self) -> &[NodeId] {
        &self.bundles
    }

    /// The node's own assignment records for one kind, in assignment order
    pub fn items(&self, kind: ItemKind) -> &[AssignmentRecord] {
        match kind {
            ItemKind::Install => &self.install_items,
            ItemKind::Uninstall => &self.uninstall_items,
            ItemKind::Update => &self.update_items,
            ItemKind::Optional => &self.optional_install_items,
        }
    }

    pub(crate) fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<AssignmentRecord> {
        match kind {
            ItemKind::Install => &mut self.install_items,
            ItemKind::Uninstall => &mut self.uninstall_items,
            ItemKind::Update => &mut self.update_items,
            ItemKind::Optional => &mut self.optional_install_items,
        }
    }

    /// `id_name` form, unique across a deployment
    pub fn unique_form(&self) -> String {
        format!("{}_{}", self.id, self.name)
    }

    /// `unit/kind/id_name` form, the manifest file path without extension
    pub fn path_form(&self) -> String {
        format!("{}/{}/{}", self.unit, self.role.path_segment(), self.unique_form())
    }
}

/// Takes a display name and returns the short identifier form: lowercased,
/// trimmed, runs of anything outside `[a-z0-9]` collapsed to a single `-`,
/// leading and trailing `-` stripped.
///
/// The result can be empty (e.g. for a name of only punctuation); uniqueness
/// and non-emptiness are enforced by the persistence layer, not here.
pub fn conform_to_shortname(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}
