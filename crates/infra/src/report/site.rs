// crates/infra/src/report/site.rs
use std::{fs, path::Path};

use usage_trends_domain::config::aggregate::{HISTORY_CSV_FILE, HISTORY_JSON_FILE, INDEX_FILE};
use usage_trends_shared_kernel::{InfrastructureError, Result};

/// Copies the publishable bundle into `site_dir`: the HTML entry point,
/// every rendered PNG, the tagged history pair, and the cache so the
/// next pipeline run can restore it. Returns the number of staged files.
pub fn stage_bundle(output_dir: &Path, cache_path: &Path, site_dir: &Path) -> Result<usize> {
    fs::create_dir_all(site_dir)
        .map_err(|source| InfrastructureError::FileWrite { path: site_dir.to_path_buf(), source })?;

    let mut staged = 0;
    let entries = fs::read_dir(output_dir)
        .map_err(|source| InfrastructureError::FileRead { path: output_dir.to_path_buf(), source })?;
    for entry in entries {
        let entry = entry
            .map_err(|source| InfrastructureError::FileRead { path: output_dir.to_path_buf(), source })?;
        let name = entry.file_name();
        if should_stage(&name.to_string_lossy()) {
            copy_into(&entry.path(), site_dir)?;
            staged += 1;
        }
    }

    // The cache may live outside the output directory.
    if cache_path.is_file() {
        copy_into(cache_path, site_dir)?;
        staged += 1;
    }
    Ok(staged)
}

fn should_stage(name: &str) -> bool {
    name == INDEX_FILE
        || name == HISTORY_JSON_FILE
        || name == HISTORY_CSV_FILE
        || name.ends_with(".png")
}

fn copy_into(file: &Path, site_dir: &Path) -> Result<()> {
    let Some(name) = file.file_name() else {
        return Err(InfrastructureError::OutputError {
            message: format!("cannot stage {}: no file name", file.display()),
            source: None,
        }
        .into());
    };
    let target = site_dir.join(name);
    fs::copy(file, &target)
        .map_err(|source| InfrastructureError::FileWrite { path: target, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("write fixture");
    }

    #[test]
    fn stages_bundle_files_and_skips_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");
        let site = dir.path().join("_site");
        fs::create_dir(&out).expect("mkdir");

        for name in [INDEX_FILE, HISTORY_JSON_FILE, HISTORY_CSV_FILE, "output_total.png"] {
            touch(&out.join(name));
        }
        touch(&out.join("scratch.txt"));
        let cache = dir.path().join("cache.json");
        touch(&cache);

        let staged = stage_bundle(&out, &cache, &site).expect("stage");
        assert_eq!(staged, 5);
        assert!(site.join("output_total.png").is_file());
        assert!(site.join("cache.json").is_file());
        assert!(!site.join("scratch.txt").exists());
    }

    #[test]
    fn missing_cache_is_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");
        fs::create_dir(&out).expect("mkdir");
        touch(&out.join(INDEX_FILE));

        let staged =
            stage_bundle(&out, &dir.path().join("absent.json"), &dir.path().join("_site"))
                .expect("stage");
        assert_eq!(staged, 1);
    }

    #[test]
    fn overwrites_previously_staged_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");
        let site = dir.path().join("_site");
        fs::create_dir(&out).expect("mkdir");
        fs::create_dir(&site).expect("mkdir");
        fs::write(out.join(INDEX_FILE), b"new").expect("write");
        fs::write(site.join(INDEX_FILE), b"old").expect("write");

        stage_bundle(&out, Path::new("absent.json"), &site).expect("stage");
        assert_eq!(fs::read(site.join(INDEX_FILE)).expect("read"), b"new");
    }
}
