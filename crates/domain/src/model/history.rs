// crates/domain/src/model/history.rs
use serde::{Deserialize, Serialize};

use crate::model::TaggedCommit;

/// Tagged commits in scan order (oldest first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    commits: Vec<TaggedCommit>,
}

impl History {
    pub fn new(commits: Vec<TaggedCommit>) -> Self {
        Self { commits }
    }

    pub fn commits(&self) -> &[TaggedCommit] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn latest(&self) -> Option<&TaggedCommit> {
        self.commits.last()
    }

    pub fn latest_timestamp(&self) -> Option<i64> {
        self.latest().map(|c| c.unix_timestamp)
    }
}

impl FromIterator<TaggedCommit> for History {
    fn from_iter<I: IntoIterator<Item = TaggedCommit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
