// crates/usecase/src/orchestrator.rs
use std::collections::BTreeMap;

use usage_trends_domain::{Config, History, TaggedCommit};
use usage_trends_ports::{
    cache::{CachedCounts, CountCache},
    progress::ProgressSink,
    repository::{CommitRef, HistorySource},
};
use usage_trends_shared_kernel::{ApplicationError, OccurrenceCount, Result};

use crate::dto::UpdateOutcome;

/// Walks every commit that touched a tracked pattern and tags it with
/// per-category counts, consulting the cache first.
pub struct UpdateHistory<'a> {
    source: &'a dyn HistorySource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> UpdateHistory<'a> {
    pub fn new(source: &'a dyn HistorySource, progress: Option<&'a dyn ProgressSink>) -> Self {
        Self { source, progress }
    }

    pub fn run(&self, config: &Config, cache: &mut dyn CountCache) -> Result<UpdateOutcome> {
        if config.fetch {
            self.source.fetch()?;
        }

        let refs = self.source.matching_commits(&config.joined_pattern())?;
        if refs.is_empty() {
            return Err(ApplicationError::HistoryScanFailed {
                reason: "no commits touch any tracked pattern".to_string(),
                source: None,
            }
            .into());
        }
        self.info(&format!("found {} matching commits", refs.len()));

        let mut commits = Vec::with_capacity(refs.len());
        let mut cache_hits = 0;
        let mut cache_misses = 0;
        for commit_ref in refs {
            let counts = match self.cached_counts(config, cache, &commit_ref) {
                Some(counts) => {
                    cache_hits += 1;
                    counts
                }
                None => {
                    cache_misses += 1;
                    let counts = self.count_commit(config, cache, &commit_ref)?;
                    // Cadence runs on commits counted this run, not on
                    // new cache keys: a recount replaces existing keys
                    // without growing the cache, and its work needs the
                    // same periodic persistence.
                    if cache_misses % config.cache_save_every == 0 {
                        self.info("saving cache");
                        cache.flush()?;
                    }
                    counts
                }
            };
            commits.push(tag_commit(config, commit_ref, &counts)?);
        }
        cache.flush()?;

        Ok(UpdateOutcome { history: History::new(commits), cache_hits, cache_misses })
    }

    /// A cached entry is only usable when it covers every configured
    /// category; anything else gets recounted.
    fn cached_counts(
        &self,
        config: &Config,
        cache: &dyn CountCache,
        commit_ref: &CommitRef,
    ) -> Option<CachedCounts> {
        let entry = cache.get(&commit_ref.id)?;
        config
            .categories
            .iter()
            .all(|c| entry.contains_key(c.name.as_str()))
            .then(|| entry.clone())
    }

    fn count_commit(
        &self,
        config: &Config,
        cache: &mut dyn CountCache,
        commit_ref: &CommitRef,
    ) -> Result<CachedCounts> {
        let mut counts = CachedCounts::new();
        for category in &config.categories {
            let count =
                self.source.count_occurrences(&commit_ref.id, &category.pattern, &category.ignored)?;
            counts.insert(category.name.as_str().to_string(), count.value());
        }
        cache.insert(commit_ref.id.clone(), counts.clone());
        self.info(&format!(
            "extended cache by {} (now containing {} entries)",
            commit_ref.id.short(),
            cache.len()
        ));
        Ok(counts)
    }

    fn info(&self, message: &str) {
        if let Some(progress) = self.progress {
            progress.info(message);
        }
    }
}

fn tag_commit(config: &Config, commit_ref: CommitRef, counts: &CachedCounts) -> Result<TaggedCommit> {
    let mut typed = BTreeMap::new();
    for category in &config.categories {
        let count = counts.get(category.name.as_str()).copied().unwrap_or_default();
        typed.insert(category.name.clone(), OccurrenceCount::new(count));
    }
    Ok(TaggedCommit::new(commit_ref.id, commit_ref.timestamp, typed)?)
}
