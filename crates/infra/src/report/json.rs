// crates/infra/src/report/json.rs
use std::path::Path;

use usage_trends_domain::History;
use usage_trends_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Writes `tagged_history.json`: the full tagged history as a pretty
/// JSON array, one object per commit.
pub fn write_history_json(path: &Path, history: &History) -> Result<()> {
    let mut data = serde_json::to_vec_pretty(history)?;
    data.push(b'\n');
    FileWriter::atomic_write(path, &data)
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
    Ok(())
}
