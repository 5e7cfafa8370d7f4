// crates/ports/src/repository.rs
use serde::{Deserialize, Serialize};
use usage_trends_shared_kernel::{CommitId, OccurrenceCount, Result};

/// A commit whose diff touched at least one tracked pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub id: CommitId,
    pub timestamp: i64,
}

/// DTO for per-file counts as reported by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCountDto {
    pub path: String,
    pub count: u64,
}

/// Port for reading usage history out of a version-controlled tree.
pub trait HistorySource: Send + Sync {
    /// Refresh remote refs before scanning.
    fn fetch(&self) -> Result<()>;

    /// Commits on the scan revision whose diffs touch `pattern`,
    /// oldest first.
    fn matching_commits(&self, pattern: &str) -> Result<Vec<CommitRef>>;

    /// Total matching lines in the tree at `commit`, honoring the
    /// excluded pathspecs.
    fn count_occurrences(
        &self,
        commit: &CommitId,
        pattern: &str,
        ignored: &[String],
    ) -> Result<OccurrenceCount>;

    /// Matching line count per file in the tree at `rev`.
    fn count_by_file(
        &self,
        rev: &str,
        pattern: &str,
        ignored: &[String],
    ) -> Result<Vec<FileCountDto>>;
}
