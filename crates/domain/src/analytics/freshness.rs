// crates/domain/src/analytics/freshness.rs
use usage_trends_shared_kernel::{DomainError, DomainResult};

use crate::options::PlotWindow;

/// Which windows are worth plotting, given the newest commit timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPlan {
    pub fresh: Vec<PlotWindow>,
    /// Stale but tolerated windows, to be surfaced as warnings.
    pub stale: Vec<PlotWindow>,
}

/// Classifies every window against `now`. A stale month or year aborts
/// the run; a stale week only drops that graph.
pub fn plan_windows(latest_commit: i64, now: i64) -> DomainResult<WindowPlan> {
    let mut plan = WindowPlan { fresh: Vec::new(), stale: Vec::new() };
    for window in PlotWindow::ALL {
        if latest_commit > now - window.seconds() {
            plan.fresh.push(window);
        } else if window.stale_is_fatal() {
            return Err(DomainError::StaleHistory {
                window: window.to_string(),
                latest: latest_commit,
                now,
            });
        } else {
            plan.stale.push(window);
        }
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn recent_commit_keeps_all_windows() {
        let plan = plan_windows(NOW - 3600, NOW).expect("fresh history");
        assert_eq!(plan.fresh, PlotWindow::ALL.to_vec());
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn quiet_week_is_tolerated() {
        let latest = NOW - PlotWindow::Week.seconds() - 1;
        let plan = plan_windows(latest, NOW).expect("still plottable");
        assert_eq!(plan.fresh, vec![PlotWindow::Month, PlotWindow::Year]);
        assert_eq!(plan.stale, vec![PlotWindow::Week]);
    }

    #[test]
    fn boundary_commit_counts_as_stale() {
        // Strict inequality, as the window is half-open.
        let latest = NOW - PlotWindow::Week.seconds();
        let plan = plan_windows(latest, NOW).expect("plottable");
        assert_eq!(plan.stale, vec![PlotWindow::Week]);
    }

    #[test]
    fn dead_month_aborts() {
        let latest = NOW - PlotWindow::Month.seconds() - 1;
        let err = plan_windows(latest, NOW).expect_err("stale month is fatal");
        assert!(err.to_string().contains("month"));
    }
}
