// crates/shared-kernel/src/value_objects/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a tracked usage category. Doubles as the JSON field
/// name in `tagged_history.json`, so it is restricted to snake case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let mut bytes = value.bytes();
        let valid = match bytes.next() {
            Some(b) => {
                b.is_ascii_lowercase()
                    && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
            }
            None => false,
        };
        if valid {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidCategoryName {
                name: value,
                details: "expected a non-empty snake_case identifier".to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
