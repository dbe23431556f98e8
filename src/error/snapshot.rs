//! Snapshot parsing errors

use super::MusterError;

/// Creates a snapshot parse error
pub fn parse_failed(reason: impl Into<String>) -> MusterError {
    MusterError::SnapshotParseFailed {
        reason: reason.into(),
    }
}
