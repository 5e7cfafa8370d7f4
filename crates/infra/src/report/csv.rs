// crates/infra/src/report/csv.rs
use std::fmt::Write as _;
use std::path::Path;

use usage_trends_domain::{Category, History, TaggedCommit};
use usage_trends_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Writes `tagged_history.csv`: timestamp followed by one column per
/// category, in configured order. No header row, gnuplot addresses
/// columns by number. A synthetic trailing row repeats the last counts
/// at `now` so the plotted line reaches the present.
pub fn write_history_csv(
    path: &Path,
    history: &History,
    categories: &[Category],
    now: i64,
) -> Result<()> {
    let mut text = String::new();
    for commit in history.commits() {
        text.push_str(&csv_line(commit, categories, commit.unix_timestamp));
    }
    if let Some(last) = history.latest() {
        text.push_str(&csv_line(last, categories, now));
    }
    FileWriter::atomic_write(path, text.as_bytes())
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
    Ok(())
}

pub(crate) fn csv_line(commit: &TaggedCommit, categories: &[Category], timestamp: i64) -> String {
    let mut line = timestamp.to_string();
    for category in categories {
        let _ = write!(line, ",{}", commit.count_for(&category.name));
    }
    line.push('\n');
    line
}
