// crates/domain/src/model/file_occurrence.rs
use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use usage_trends_shared_kernel::OccurrenceCount;

/// Per-file match count at a single revision, for the HTML breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOccurrence {
    /// Path relative to the repository root, as git prints it.
    pub path: String,
    pub count: OccurrenceCount,
}

impl FileOccurrence {
    pub fn new(path: impl Into<String>, count: impl Into<OccurrenceCount>) -> Self {
        Self { path: path.into(), count: count.into() }
    }
}

/// Orders rows count-descending; ties keep the order git printed them in.
pub fn sort_by_count(rows: &mut [FileOccurrence]) {
    rows.sort_by_key(|row| Reverse(row.count));
}
