//! Declarative snapshot format for catalogs
//!
//! The embedding application normally builds catalogs from its own records;
//! tests, tools and fixtures declare a whole fleet graph in YAML or JSON and
//! load it in one call. Everything references by name, and loading validates
//! every reference through the same paths an operator edit would take.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::domain::{BranchId, ItemKind, ItemRef, NodeId, PackageId};
use crate::error::{Result, invalid_reference};

/// A whole fleet graph, declared by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub branches: Vec<BranchDecl>,
    #[serde(default)]
    pub nodes: Vec<NodeDecl>,
}

/// A package branch and its released versions, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDecl {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleDecl {
    Computer,
    Group,
    Bundle,
}

/// One manifest node with its references and assignments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDecl {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub role: RoleDecl,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub installs: Vec<ItemDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uninstalls: Vec<ItemDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<ItemDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_installs: Vec<ItemDecl>,
}

fn default_unit() -> String {
    "default".to_string()
}

/// An assignment: a bare branch name floats to the branch's latest version,
/// a `{branch, version}` pair pins one concrete package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDecl {
    Branch(String),
    Pinned { branch: String, version: String },
}

impl Snapshot {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build a catalog from the declared graph, validating every reference
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut catalog = Catalog::new();

        let mut branch_ids: HashMap<String, BranchId> = HashMap::new();
        let mut package_ids: HashMap<(String, String), PackageId> = HashMap::new();
        for decl in &self.branches {
            if branch_ids.contains_key(&decl.name) {
                return Err(invalid_reference(format!(
                    "duplicate package branch '{}'",
                    decl.name
                )));
            }
            let branch = catalog.add_branch(decl.name.clone());
            branch_ids.insert(decl.name.clone(), branch);
            for version in &decl.versions {
                let package = catalog.add_package(branch, version.clone())?;
                package_ids.insert((decl.name.clone(), version.clone()), package);
            }
        }

        // Nodes first, references second, so forward references by name work
        let mut node_ids: HashMap<String, NodeId> = HashMap::new();
        for decl in &self.nodes {
            if node_ids.contains_key(&decl.name) {
                return Err(invalid_reference(format!(
                    "duplicate manifest node '{}'",
                    decl.name
                )));
            }
            let id = match decl.role {
                RoleDecl::Computer => catalog.add_computer(decl.name.clone(), decl.unit.clone()),
                RoleDecl::Group => catalog.add_group(decl.name.clone(), decl.unit.clone()),
                RoleDecl::Bundle => catalog.add_bundle(decl.name.clone(), decl.unit.clone()),
            };
            node_ids.insert(decl.name.clone(), id);
        }

        for decl in &self.nodes {
            let id = node_ids[&decl.name];

            let bundles = decl
                .bundles
                .iter()
                .map(|name| {
                    node_ids
                        .get(name)
                        .copied()
                        .ok_or_else(|| invalid_reference(format!("bundle '{name}'")))
                })
                .collect::<Result<Vec<NodeId>>>()?;
            if !bundles.is_empty() {
                catalog.set_bundles(id, bundles)?;
            }

            if let Some(group_name) = &decl.group {
                let group = node_ids
                    .get(group_name)
                    .copied()
                    .ok_or_else(|| invalid_reference(format!("group '{group_name}'")))?;
                catalog.set_group(id, Some(group))?;
            }

            let kinds = [
                (ItemKind::Install, &decl.installs),
                (ItemKind::Uninstall, &decl.uninstalls),
                (ItemKind::Update, &decl.updates),
                (ItemKind::Optional, &decl.optional_installs),
            ];
            for (kind, items) in kinds {
                if items.is_empty() {
                    continue;
                }
                let refs = items
                    .iter()
                    .map(|item| item_ref(item, &branch_ids, &package_ids))
                    .collect::<Result<Vec<ItemRef>>>()?;
                catalog.assign_items(id, kind, &refs)?;
            }
        }

        Ok(catalog)
    }
}

fn item_ref(
    item: &ItemDecl,
    branch_ids: &HashMap<String, BranchId>,
    package_ids: &HashMap<(String, String), PackageId>,
) -> Result<ItemRef> {
    match item {
        ItemDecl::Branch(name) => branch_ids
            .get(name)
            .copied()
            .map(ItemRef::Branch)
            .ok_or_else(|| invalid_reference(format!("package branch '{name}'"))),
        ItemDecl::Pinned { branch, version } => package_ids
            .get(&(branch.clone(), version.clone()))
            .copied()
            .map(ItemRef::Package)
            .ok_or_else(|| invalid_reference(format!("package '{branch}-{version}'"))),
    }
}
