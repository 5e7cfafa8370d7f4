// crates/domain/src/model/tagged_commit.rs
use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use usage_trends_shared_kernel::{CategoryName, CommitId, DomainError, DomainResult, OccurrenceCount};

/// One commit annotated with per-category occurrence counts. Serializes
/// to the `tagged_history.json` entry shape: fixed fields first, then
/// one field per category (alphabetical, which keeps the output stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedCommit {
    pub commit: CommitId,
    pub unix_timestamp: i64,
    pub human_readable_time: String,
    #[serde(flatten)]
    counts: BTreeMap<CategoryName, OccurrenceCount>,
}

impl TaggedCommit {
    pub fn new(
        commit: CommitId,
        unix_timestamp: i64,
        counts: BTreeMap<CategoryName, OccurrenceCount>,
    ) -> DomainResult<Self> {
        let time = Local
            .timestamp_opt(unix_timestamp, 0)
            .single()
            .ok_or(DomainError::InvalidTimestamp { value: unix_timestamp })?;
        Ok(Self {
            commit,
            unix_timestamp,
            human_readable_time: time.format("%Y-%m-%d %H:%M:%S").to_string(),
            counts,
        })
    }

    /// Count for `category`, zero when the category was not tracked at
    /// the time this entry was produced.
    pub fn count_for(&self, category: &CategoryName) -> OccurrenceCount {
        self.counts.get(category).copied().unwrap_or_default()
    }

    pub fn counts(&self) -> &BTreeMap<CategoryName, OccurrenceCount> {
        &self.counts
    }
}
