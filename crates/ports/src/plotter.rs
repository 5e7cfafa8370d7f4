// crates/ports/src/plotter.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use usage_trends_shared_kernel::Result;

/// One plotted series; column order follows the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub title: String,
}

/// One windowed graph pair (absolute + delta).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// File stem: `output_<stem>.png` and `output_<stem>_delta.png`.
    pub stem: String,
    /// Window start, unix seconds.
    pub start: i64,
    /// Delta plot box width in seconds.
    pub boxwidth: i64,
}

/// Everything a renderer needs to produce the graph bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotPlan {
    /// CSV file name, relative to `output_dir`.
    pub csv_file: String,
    pub output_dir: PathBuf,
    pub series: Vec<SeriesSpec>,
    pub windows: Vec<WindowSpec>,
    /// Unix timestamp used as the right edge of windowed plots.
    pub now: i64,
}

/// Port for rendering trend graphs from the CSV history.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, plan: &PlotPlan) -> Result<()>;
}
