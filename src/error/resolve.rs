//! Resolution errors

use super::MusterError;

/// Creates a cyclic reference error from an already rendered chain
pub fn cyclic(chain: impl Into<String>) -> MusterError {
    MusterError::CyclicReference {
        chain: chain.into(),
    }
}
