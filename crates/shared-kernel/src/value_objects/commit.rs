// crates/shared-kernel/src/value_objects/commit.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Abbreviated or full git object name, always lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Accepts anything `git rev-parse` would print: 4 to 64 hex digits.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let hex = value.len() >= 4
            && value.len() <= 64
            && value.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if hex {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidCommitId { value })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 10 digits, for progress messages.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(10)]
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
