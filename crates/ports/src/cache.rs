// crates/ports/src/cache.rs
use std::collections::BTreeMap;

use usage_trends_shared_kernel::{CommitId, Result};

/// Raw per-category counts as persisted: category name -> count.
pub type CachedCounts = BTreeMap<String, u64>;

/// Port for the commit -> counts store carried between runs.
pub trait CountCache {
    fn get(&self, commit: &CommitId) -> Option<&CachedCounts>;

    fn insert(&mut self, commit: CommitId, counts: CachedCounts);

    /// Entries added since the store was loaded.
    fn added(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Persist the current contents.
    fn flush(&mut self) -> Result<()>;
}
