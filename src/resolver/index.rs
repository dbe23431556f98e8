//! Branch-keyed indexing of assignment records

use std::collections::HashMap;

use crate::domain::{AssignmentRecord, BranchId};

/// Build the branch-keyed mapping for a sequence of assignment records.
///
/// A later record with the same branch silently overwrites an earlier one;
/// within a single sequence the last assignment is authoritative.
pub fn index_items(records: &[AssignmentRecord]) -> HashMap<BranchId, AssignmentRecord> {
    let mut indexed = HashMap::with_capacity(records.len());
    for record in records {
        indexed.insert(record.branch, *record);
    }
    indexed
}
