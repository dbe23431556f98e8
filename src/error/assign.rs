//! Association editing errors

use super::MusterError;

/// Creates an invalid reference error
pub fn invalid_reference(what: impl Into<String>) -> MusterError {
    MusterError::InvalidReference { what: what.into() }
}
