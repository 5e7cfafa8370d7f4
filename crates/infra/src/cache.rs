// crates/infra/src/cache.rs
use std::{
    collections::HashMap,
    fs,
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use usage_trends_ports::cache::{CachedCounts, CountCache};
use usage_trends_shared_kernel::{CommitId, InfrastructureError, Result};

const CACHE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    entries: HashMap<String, CachedCounts>,
}

/// `cache.json` store: full commit hash -> per-category counts. A
/// missing, corrupt or version-mismatched file degrades to a full
/// recount instead of failing the run.
pub struct JsonCountCache {
    path: PathBuf,
    entries: HashMap<String, CachedCounts>,
    added: usize,
}

impl JsonCountCache {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut entries = HashMap::new();

        match fs::read_to_string(&path) {
            Ok(contents) if !contents.is_empty() => {
                match serde_json::from_str::<CacheFile>(&contents) {
                    Ok(file) if file.version == CACHE_VERSION => {
                        entries = file.entries;
                    }
                    Ok(file) => {
                        eprintln!(
                            "[warn] cache version {} in {} does not match {CACHE_VERSION}; regenerating all data",
                            file.version,
                            path.display()
                        );
                    }
                    Err(err) => {
                        eprintln!("[warn] failed to parse cache {}: {err}", path.display());
                    }
                }
            }
            Ok(_) => {}
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                eprintln!("[warn] failed to read cache {}: {err}", path.display());
            }
            Err(_) => {
                eprintln!(
                    "[warn] no cache file at {}; regenerating all data",
                    path.display()
                );
            }
        }

        Self { path, entries, added: 0 }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CountCache for JsonCountCache {
    fn get(&self, commit: &CommitId) -> Option<&CachedCounts> {
        self.entries.get(commit.as_str())
    }

    fn insert(&mut self, commit: CommitId, counts: CachedCounts) {
        if self.entries.insert(commit.as_str().to_string(), counts).is_none() {
            self.added += 1;
        }
    }

    fn added(&self) -> usize {
        self.added
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn flush(&mut self) -> Result<()> {
        let file = CacheFile { version: CACHE_VERSION, entries: self.entries.clone() };
        let data = serde_json::to_vec(&file)?;

        // Advisory lock on a sidecar, since the cache itself gets
        // renamed over by the atomic write.
        let lock_path = self.path.with_extension("lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| InfrastructureError::FileWrite { path: lock_path.clone(), source })?;
        lock.lock_exclusive()
            .map_err(|source| InfrastructureError::FileWrite { path: lock_path, source })?;

        let result = crate::persistence::FileWriter::atomic_write(&self.path, &data)
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source });
        let _ = fs2::FileExt::unlock(&lock);
        result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(id: &str) -> CommitId {
        CommitId::new(id).expect("valid id")
    }

    fn counts(n: u64) -> CachedCounts {
        CachedCounts::from([("core_stream".to_string(), n)])
    }

    #[test]
    fn roundtrips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");

        let mut cache = JsonCountCache::load(&path);
        cache.insert(commit("aaaa1111"), counts(5));
        cache.insert(commit("bbbb2222"), counts(9));
        cache.flush().expect("flush");

        let reloaded = JsonCountCache::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(&commit("bbbb2222")), Some(&counts(9)));
        assert_eq!(reloaded.added(), 0, "loaded entries are not new");
    }

    #[test]
    fn version_mismatch_discards_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"version":99,"entries":{"aaaa1111":{"core_stream":5}}}"#)
            .expect("seed cache");

        let cache = JsonCountCache::load(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        fs::write(&path, "{ not json").expect("seed cache");

        let cache = JsonCountCache::load(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_a_commit_does_not_count_as_new() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut cache = JsonCountCache::load(dir.path().join("cache.json"));
        cache.insert(commit("aaaa1111"), counts(1));
        cache.insert(commit("aaaa1111"), counts(2));
        assert_eq!(cache.added(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&commit("aaaa1111")), Some(&counts(2)));
    }
}
