//! Cross-kind exclusion tests
//!
//! An uninstalled branch must never surface as an inherited install (and
//! vice versa), and updates/optional installs are pruned against the fully
//! resolved install and uninstall sets, while a node's own assignments are
//! never stripped from their own kind's resolution.

mod common;

use common::catalog_with_branches;
use muster::{ItemKind, ItemRef};
use pretty_assertions::assert_eq;

#[test]
fn own_uninstall_strips_bundle_supplied_install() {
    let (mut catalog, branches) = catalog_with_branches();

    let bundle = catalog.add_bundle("legacy-apps", "hq");
    catalog
        .append_item(bundle, ItemKind::Install, ItemRef::Branch(branches.flash))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_bundles(computer, vec![bundle]).unwrap();
    catalog
        .append_item(computer, ItemKind::Uninstall, ItemRef::Branch(branches.flash))
        .unwrap();

    let installs = catalog.resolve(computer, ItemKind::Install).unwrap();
    assert!(!installs.contains_key(&branches.flash));
    let uninstalls = catalog.resolve(computer, ItemKind::Uninstall).unwrap();
    assert!(uninstalls.contains_key(&branches.flash));
}

#[test]
fn own_uninstall_strips_group_supplied_install() {
    let (mut catalog, branches) = catalog_with_branches();

    let group = catalog.add_group("lab", "hq");
    catalog
        .append_item(group, ItemKind::Install, ItemRef::Branch(branches.flash))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_group(computer, Some(group)).unwrap();
    catalog
        .append_item(computer, ItemKind::Uninstall, ItemRef::Branch(branches.flash))
        .unwrap();

    let installs = catalog.resolve(computer, ItemKind::Install).unwrap();
    assert!(!installs.contains_key(&branches.flash));
}

#[test]
fn own_install_overrides_own_uninstall_exclusion() {
    // A branch both installed and uninstalled directly on the node stays in
    // both resolutions; direct edits are never silently dropped
    let (mut catalog, branches) = catalog_with_branches();
    let computer = catalog.add_computer("imac-01", "hq");
    catalog
        .append_item(computer, ItemKind::Install, ItemRef::Branch(branches.flash))
        .unwrap();
    catalog
        .append_item(computer, ItemKind::Uninstall, ItemRef::Branch(branches.flash))
        .unwrap();

    let installs = catalog.resolve(computer, ItemKind::Install).unwrap();
    assert!(installs.contains_key(&branches.flash));
    let uninstalls = catalog.resolve(computer, ItemKind::Uninstall).unwrap();
    assert!(uninstalls.contains_key(&branches.flash));
}

#[test]
fn own_install_strips_inherited_uninstall() {
    let (mut catalog, branches) = catalog_with_branches();

    let bundle = catalog.add_bundle("cleanup", "hq");
    catalog
        .append_item(bundle, ItemKind::Uninstall, ItemRef::Branch(branches.firefox))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_bundles(computer, vec![bundle]).unwrap();
    catalog
        .append_item(computer, ItemKind::Install, ItemRef::Branch(branches.firefox))
        .unwrap();

    let uninstalls = catalog.resolve(computer, ItemKind::Uninstall).unwrap();
    assert!(!uninstalls.contains_key(&branches.firefox));
}

#[test]
fn updates_are_pruned_against_resolved_installs() {
    // The install comes from a bundle and the update from the group; the
    // update is still pruned because exclusion for updates uses the fully
    // resolved install set, not just the node's own records
    let (mut catalog, branches) = catalog_with_branches();

    let bundle = catalog.add_bundle("base-apps", "hq");
    catalog
        .append_item(bundle, ItemKind::Install, ItemRef::Branch(branches.firefox))
        .unwrap();

    let group = catalog.add_group("lab", "hq");
    catalog
        .append_item(group, ItemKind::Update, ItemRef::Branch(branches.firefox))
        .unwrap();
    catalog
        .append_item(group, ItemKind::Update, ItemRef::Branch(branches.chrome))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_bundles(computer, vec![bundle]).unwrap();
    catalog.set_group(computer, Some(group)).unwrap();

    let updates = catalog.resolve(computer, ItemKind::Update).unwrap();
    assert!(!updates.contains_key(&branches.firefox));
    assert!(updates.contains_key(&branches.chrome));
}

#[test]
fn optional_installs_are_pruned_against_resolved_uninstalls() {
    let (mut catalog, branches) = catalog_with_branches();

    let group = catalog.add_group("lab", "hq");
    catalog
        .append_item(group, ItemKind::Optional, ItemRef::Branch(branches.flash))
        .unwrap();
    catalog
        .append_item(group, ItemKind::Optional, ItemRef::Branch(branches.chrome))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_group(computer, Some(group)).unwrap();
    catalog
        .append_item(computer, ItemKind::Uninstall, ItemRef::Branch(branches.flash))
        .unwrap();

    let optional = catalog.resolve(computer, ItemKind::Optional).unwrap();
    assert!(!optional.contains_key(&branches.flash));
    assert!(optional.contains_key(&branches.chrome));
}

#[test]
fn own_optional_survives_even_when_installed() {
    let (mut catalog, branches) = catalog_with_branches();

    let bundle = catalog.add_bundle("base-apps", "hq");
    catalog
        .append_item(bundle, ItemKind::Install, ItemRef::Branch(branches.firefox))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_bundles(computer, vec![bundle]).unwrap();
    catalog
        .append_item(computer, ItemKind::Optional, ItemRef::Branch(branches.firefox))
        .unwrap();

    let optional = catalog.resolve(computer, ItemKind::Optional).unwrap();
    assert!(optional.contains_key(&branches.firefox));
}

#[test]
fn scenario_firefox_pin_with_group_supplied_chrome() {
    // Computer pins firefox to one version; its group installs an older
    // firefox and chrome; no bundles. The pin wins, chrome flows through.
    let (mut catalog, branches) = catalog_with_branches();

    let group = catalog.add_group("lab", "hq");
    catalog
        .append_item(group, ItemKind::Install, ItemRef::Package(branches.firefox_v1))
        .unwrap();
    catalog
        .append_item(group, ItemKind::Install, ItemRef::Package(branches.chrome_v1))
        .unwrap();

    let computer = catalog.add_computer("imac-01", "hq");
    catalog.set_group(computer, Some(group)).unwrap();
    catalog
        .append_item(computer, ItemKind::Install, ItemRef::Package(branches.firefox_v2))
        .unwrap();

    let resolved = catalog.resolve(computer, ItemKind::Install).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[&branches.firefox].package, Some(branches.firefox_v2));
    assert_eq!(resolved[&branches.chrome].package, Some(branches.chrome_v1));
}
