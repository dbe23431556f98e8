//! Error types and handling for Muster
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`assign`]: Association editing errors
//! - [`catalog`]: Catalog lookup errors
//! - [`resolve`]: Resolution errors
//! - [`snapshot`]: Snapshot parsing errors

pub mod assign;
pub mod catalog;
pub mod resolve;
pub mod snapshot;

pub use assign::invalid_reference;
pub use catalog::{malformed_selector, not_found as node_not_found};
pub use resolve::cyclic as cyclic_reference;
pub use snapshot::parse_failed as snapshot_parse_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Muster operations
#[derive(Error, Diagnostic, Debug)]
pub enum MusterError {
    // Association editing errors
    #[error("Invalid reference: {what}")]
    #[diagnostic(
        code(muster::assign::invalid_reference),
        help("Check that the referenced package, branch or manifest exists and has the expected role")
    )]
    InvalidReference { what: String },

    // Resolution errors
    #[error("Cyclic manifest reference: {chain}")]
    #[diagnostic(
        code(muster::resolve::cyclic_reference),
        help("Remove the bundle reference that closes the loop")
    )]
    CyclicReference { chain: String },

    // Catalog lookup errors
    #[error("Malformed manifest selector: '{input}'")]
    #[diagnostic(
        code(muster::catalog::malformed_selector),
        help("Valid selectors: a numeric id, 'id-shortname', or a shortname within a unit")
    )]
    MalformedSelector { input: String },

    #[error("No manifest matches selector '{selector}'")]
    #[diagnostic(code(muster::catalog::node_not_found))]
    NodeNotFound { selector: String },

    // Snapshot errors
    #[error("Failed to parse snapshot: {reason}")]
    #[diagnostic(code(muster::snapshot::parse_failed))]
    SnapshotParseFailed { reason: String },
}

impl From<serde_yaml::Error> for MusterError {
    fn from(err: serde_yaml::Error) -> Self {
        MusterError::SnapshotParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MusterError {
    fn from(err: serde_json::Error) -> Self {
        MusterError::SnapshotParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MusterError>;
