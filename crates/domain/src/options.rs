// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

/// Time windows rendered as individual trend graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotWindow {
    Week,
    Month,
    Year,
}

impl PlotWindow {
    pub const ALL: [PlotWindow; 3] = [PlotWindow::Week, PlotWindow::Month, PlotWindow::Year];

    /// Window length in seconds. All months are 31 days and all years
    /// are 366 days, which overshoots on purpose so a commit on the
    /// boundary still shows up.
    pub const fn seconds(self) -> i64 {
        match self {
            PlotWindow::Week => 7 * DAY,
            PlotWindow::Month => 31 * DAY,
            PlotWindow::Year => 366 * DAY,
        }
    }

    /// gnuplot box width for the delta plot, scaled to the window.
    pub const fn boxwidth(self) -> i64 {
        match self {
            PlotWindow::Week => HOUR,
            PlotWindow::Month => 6 * HOUR,
            PlotWindow::Year => DAY,
        }
    }

    pub const fn file_stem(self) -> &'static str {
        match self {
            PlotWindow::Week => "week",
            PlotWindow::Month => "month",
            PlotWindow::Year => "year",
        }
    }

    /// A repository with no matching commit in the last week is merely
    /// quiet; one with nothing in a month or a year is broken input.
    pub const fn stale_is_fatal(self) -> bool {
        !matches!(self, PlotWindow::Week)
    }
}

impl fmt::Display for PlotWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for PlotWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(PlotWindow::Week),
            "month" => Ok(PlotWindow::Month),
            "year" => Ok(PlotWindow::Year),
            other => Err(format!("Unknown plot window: {other}")),
        }
    }
}
