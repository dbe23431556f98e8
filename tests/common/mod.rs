//! Shared fixtures for integration tests

use std::sync::Once;

use muster::{BranchId, Catalog, PackageId};

static TRACING: Once = Once::new();

/// Route resolver traces to the test output when RUST_LOG asks for them
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Branch and package ids registered by [`catalog_with_branches`]
#[allow(dead_code)]
pub struct Branches {
    pub firefox: BranchId,
    pub firefox_v1: PackageId,
    pub firefox_v2: PackageId,
    pub chrome: BranchId,
    pub chrome_v1: PackageId,
    pub flash: BranchId,
}

/// A catalog with a handful of branches and versions; tests add the nodes
/// they need on top
#[allow(dead_code)]
pub fn catalog_with_branches() -> (Catalog, Branches) {
    init_tracing();
    let mut catalog = Catalog::new();
    let firefox = catalog.add_branch("firefox");
    let firefox_v1 = catalog.add_package(firefox, "101.0").expect("known branch");
    let firefox_v2 = catalog.add_package(firefox, "102.0").expect("known branch");
    let chrome = catalog.add_branch("chrome");
    let chrome_v1 = catalog.add_package(chrome, "114.0").expect("known branch");
    let flash = catalog.add_branch("flash");
    catalog.add_package(flash, "32.0").expect("known branch");
    (
        catalog,
        Branches {
            firefox,
            firefox_v1,
            firefox_v2,
            chrome,
            chrome_v1,
            flash,
        },
    )
}
