// crates/domain/src/config/aggregate.rs
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use usage_trends_shared_kernel::{DomainError, DomainResult};

use crate::config::Category;

pub const DEFAULT_REVISION: &str = "origin/master";
pub const DEFAULT_CACHE_FILE: &str = "cache.json";
/// Flush cadence for the count cache, in newly counted commits.
pub const DEFAULT_CACHE_SAVE_EVERY: usize = 50;

pub const HISTORY_JSON_FILE: &str = "tagged_history.json";
pub const HISTORY_CSV_FILE: &str = "tagged_history.csv";
pub const INDEX_FILE: &str = "index.html";

/// Domain representation of resolved configuration options.
#[derive(Debug, Clone)]
pub struct Config {
    pub repo_dir: PathBuf,
    pub revision: String,
    pub fetch: bool,
    pub categories: Vec<Category>,
    pub cache_path: PathBuf,
    pub cache_save_every: usize,
    pub output_dir: PathBuf,
    pub site_dir: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    /// Base URL prepended to file paths in the HTML tables.
    pub file_view_url: String,
    pub plots: bool,
    pub html: bool,
}

impl Config {
    pub fn validate(&self) -> DomainResult<()> {
        if self.categories.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "at least one category must be configured".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            category.validate()?;
            if !seen.insert(category.name.as_str()) {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("duplicate category name '{}'", category.name),
                });
            }
        }
        if self.cache_save_every == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "cache_save_every must be at least 1".to_string(),
            });
        }
        if self.revision.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "revision must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Single ERE matching any tracked category, for the `git log -G` scan.
    pub fn joined_pattern(&self) -> String {
        let patterns: Vec<&str> = self.categories.iter().map(|c| c.pattern.as_str()).collect();
        patterns.join("|")
    }

    pub fn history_json_path(&self) -> PathBuf {
        self.output_dir.join(HISTORY_JSON_FILE)
    }

    pub fn history_csv_path(&self) -> PathBuf {
        self.output_dir.join(HISTORY_CSV_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use usage_trends_shared_kernel::CategoryName;

    use super::*;

    fn sample_config() -> Config {
        let categories = vec![
            Category {
                name: CategoryName::new("core_stream").expect("valid"),
                pattern: "Core::Stream".to_string(),
                label: Some("Core::Stream".to_string()),
                ignored: vec!["AK/*Stream.cpp".to_string()],
                table: false,
            },
            Category {
                name: CategoryName::new("c_file").expect("valid"),
                pattern: "fopen|fdopen".to_string(),
                label: None,
                ignored: vec![],
                table: true,
            },
        ];
        Config {
            repo_dir: PathBuf::from("serenity"),
            revision: DEFAULT_REVISION.to_string(),
            fetch: true,
            categories,
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            cache_save_every: DEFAULT_CACHE_SAVE_EVERY,
            output_dir: PathBuf::from("out"),
            site_dir: None,
            template_path: None,
            file_view_url: "https://example.org/blob/master".to_string(),
            plots: true,
            html: true,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn joined_pattern_preserves_category_order() {
        assert_eq!(sample_config().joined_pattern(), "Core::Stream|fopen|fdopen");
    }

    #[test]
    fn rejects_empty_categories() {
        let mut config = sample_config();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_category_names() {
        let mut config = sample_config();
        let dup = config.categories[0].clone();
        config.categories.push(dup);
        let err = config.validate().expect_err("duplicates must fail");
        assert!(err.to_string().contains("duplicate category name"));
    }

    #[test]
    fn rejects_zero_save_interval() {
        let mut config = sample_config();
        config.cache_save_every = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn output_paths_land_in_output_dir() {
        let config = sample_config();
        assert_eq!(config.history_csv_path(), PathBuf::from("out/tagged_history.csv"));
        assert_eq!(config.index_path(), PathBuf::from("out/index.html"));
    }
}
