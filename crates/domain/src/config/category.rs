// crates/domain/src/config/category.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use usage_trends_shared_kernel::{CategoryName, DomainError, DomainResult};

/// One tracked usage category: a word-boundary ERE handed to git, plus
/// the pathspecs excluded from matching (definitions, tests, vendored
/// trees and the like).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    /// Extended regular expression passed to `git log -G` and `git grep -E`.
    pub pattern: String,
    /// Human title used in plot legends and HTML headings.
    #[serde(default)]
    pub label: Option<String>,
    /// Git pathspecs excluded from counting, without the `:!` prefix.
    #[serde(default)]
    pub ignored: Vec<String>,
    /// Whether the category gets a per-file table in `index.html`.
    /// Typically switched off for the API being migrated to.
    #[serde(default = "default_true")]
    pub table: bool,
}

fn default_true() -> bool {
    true
}

impl Category {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.name.as_str())
    }

    /// The regex crate is stricter than POSIX ERE in places; this is a
    /// best-effort lint before git ever sees the pattern.
    pub fn validate(&self) -> DomainResult<()> {
        if self.pattern.trim().is_empty() {
            return Err(DomainError::InvalidPattern {
                pattern: self.pattern.clone(),
                details: "pattern is empty".to_string(),
            });
        }
        Regex::new(&self.pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: self.pattern.clone(),
            details: e.to_string(),
        })?;
        if let Some(spec) = self.ignored.iter().find(|s| s.trim().is_empty()) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("category '{}' has an empty ignored pathspec {spec:?}", self.name),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(pattern: &str) -> Category {
        Category {
            name: CategoryName::new("core_stream").expect("valid name"),
            pattern: pattern.to_string(),
            label: None,
            ignored: vec![],
            table: true,
        }
    }

    #[test]
    fn accepts_alternation_patterns() {
        let cat = category("(Allocating|Fixed)MemoryStream|Core::Stream");
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_malformed_patterns() {
        assert!(category("  ").validate().is_err());
        assert!(category("(unclosed").validate().is_err());
    }

    #[test]
    fn label_falls_back_to_name() {
        let mut cat = category("x");
        assert_eq!(cat.label(), "core_stream");
        cat.label = Some("Core::Stream".to_string());
        assert_eq!(cat.label(), "Core::Stream");
    }

    #[test]
    fn rejects_blank_ignored_pathspec() {
        let mut cat = category("x");
        cat.ignored = vec!["Tests/*".to_string(), " ".to_string()];
        assert!(cat.validate().is_err());
    }
}
