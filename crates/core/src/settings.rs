// crates/core/src/settings.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use usage_trends_domain::Category;
use usage_trends_infra::persistence::FileReader;
use usage_trends_shared_kernel::{InfrastructureError, Result};

/// On-disk settings. Every scalar is optional so command-line flags can
/// fill the gaps; only the category list has no flag equivalent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub repo: Option<PathBuf>,
    pub revision: Option<String>,
    pub categories: Vec<Category>,
    pub cache: Option<PathBuf>,
    pub cache_save_every: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub site_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub file_view_url: Option<String>,
}

impl Settings {
    /// Parses the file at `path`. The extension picks the format:
    /// `.yaml`/`.yml` is YAML, anything else is JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        if is_yaml(path) { parse_yaml(path, &text) } else { Ok(serde_json::from_str(&text)?) }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(_path: &Path, text: &str) -> Result<Settings> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _text: &str) -> Result<Settings> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: format!("{} requires the `yaml` feature", path.display()),
    }
    .into())
}
