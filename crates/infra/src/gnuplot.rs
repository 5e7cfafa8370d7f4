// crates/infra/src/gnuplot.rs
use std::{fmt::Write as _, process::Command};

use usage_trends_ports::plotter::{ChartRenderer, PlotPlan};
use usage_trends_shared_kernel::{InfraResult, InfrastructureError, Result};

/// gnuplot before 5 interprets time x-ranges relative to the year 2000
/// instead of the unix epoch, and only the x-range.
const Y2K_EPOCH_OFFSET: i64 = 946_684_800;

/// `ChartRenderer` over the `gnuplot` binary. One generated script
/// renders the whole bundle: the all-time graph plus an absolute and a
/// delta graph per fresh window.
pub struct GnuplotRenderer;

impl GnuplotRenderer {
    pub fn new() -> Self {
        Self
    }

    fn probe_epoch_offset(&self) -> InfraResult<i64> {
        let output = Command::new("gnuplot").arg("--version").output().map_err(|e| {
            InfrastructureError::PlotError { details: format!("failed to launch gnuplot: {e}") }
        })?;
        if !output.status.success() {
            return Err(InfrastructureError::PlotError {
                details: "gnuplot --version failed".to_string(),
            });
        }
        let text = String::from_utf8_lossy(&output.stdout);
        let major = parse_major_version(&text).ok_or_else(|| InfrastructureError::PlotError {
            details: format!("unrecognized gnuplot version string {:?}", text.trim()),
        })?;
        Ok(epoch_offset(major))
    }
}

impl Default for GnuplotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for GnuplotRenderer {
    fn render(&self, plan: &PlotPlan) -> Result<()> {
        let offset = self.probe_epoch_offset()?;
        let script = build_script(plan, offset);
        let output = Command::new("gnuplot")
            .arg("-e")
            .arg(&script)
            .current_dir(&plan.output_dir)
            .output()
            .map_err(|e| InfrastructureError::PlotError {
                details: format!("failed to launch gnuplot: {e}"),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(InfrastructureError::PlotError {
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }
}

pub(crate) fn parse_major_version(text: &str) -> Option<u32> {
    let mut words = text.split_whitespace();
    if words.next()? != "gnuplot" {
        return None;
    }
    words.next()?.split('.').next()?.parse().ok()
}

pub(crate) const fn epoch_offset(major: u32) -> i64 {
    if major < 5 { Y2K_EPOCH_OFFSET } else { 0 }
}

/// Plot clause for the absolute graphs: stepped lines per series, the
/// first series drawn heavier, and the last CSV row called out with a
/// labeled point per series.
fn series_clause(plan: &PlotPlan) -> String {
    let mut clause = format!("\"{}\"", plan.csv_file);
    for (index, series) in plan.series.iter().enumerate() {
        let source = if index == 0 { "" } else { "'' " };
        let weight = if index == 0 { 2 } else { 1 };
        let _ = write!(
            clause,
            " {source}using 1:{col} lw {weight} title \"{title}\",",
            col = index + 2,
            title = series.title,
        );
    }
    for index in 0..plan.series.len() {
        let col = index + 2;
        let vertical = if index == 0 { "-.5" } else { "0" };
        let _ = write!(
            clause,
            " '< tail -n 1 {csv}' using 1:{col}:{col} with labels right point linecolor {color} pointtype 7 offset -2,{vertical} notitle,",
            csv = plan.csv_file,
            color = index + 1,
        );
    }
    clause.pop();
    clause
}

/// Plot clause for the delta graphs: per-commit differences as boxes.
fn delta_clause(plan: &PlotPlan) -> String {
    let mut clause = format!("\"{}\"", plan.csv_file);
    for (index, series) in plan.series.iter().enumerate() {
        let source = if index == 0 { "" } else { "'' " };
        let _ = write!(
            clause,
            " {source}using 1:(delta_v(${col})) with boxes title \"{title}\",",
            col = index + 2,
            title = series.title,
        );
    }
    clause.pop();
    clause
}

pub(crate) fn build_script(plan: &PlotPlan, epoch_offset: i64) -> String {
    let lines = series_clause(plan);
    let deltas = delta_clause(plan);

    let mut windowed = String::new();
    for window in &plan.windows {
        let from = window.start - epoch_offset;
        let to = plan.now - epoch_offset;
        let _ = write!(
            windowed,
            "\nset boxwidth {boxwidth};\n\
             set output \"output_{stem}.png\"; plot [{from}:{to}] {lines};\n\
             set output \"output_{stem}_delta.png\"; plot [{from}:{to}] {deltas};\n",
            boxwidth = window.boxwidth,
            stem = window.stem,
        );
    }

    format!(
        "delta_v(x) = ( vD = x - old_v, old_v = x, vD);\n\
         old_v = NaN;\n\
         set style fill solid;\n\
         set xzeroaxis;\n\
         set style data steps;\n\
         set terminal pngcairo size 1800,600 enhanced;\n\
         set xdata time;\n\
         set grid xtics;\n\
         set timefmt \"%s\";\n\
         set format x \"%Y-%m-%d\";\n\
         set ylabel \"Count\";\n\
         set datafile separator \",\";\n\
         set output \"output_total.png\";\n\
         set key center top;\n\
         plot {lines};\n\
         set terminal pngcairo size 900,300 enhanced;\n\
         set key left top font \",8\";\n\
         {windowed}\n"
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use usage_trends_ports::plotter::{SeriesSpec, WindowSpec};

    use super::*;

    fn plan() -> PlotPlan {
        PlotPlan {
            csv_file: "tagged_history.csv".to_string(),
            output_dir: PathBuf::from("out"),
            series: vec![
                SeriesSpec { title: "Core::Stream".to_string() },
                SeriesSpec { title: "C FILE*".to_string() },
            ],
            windows: vec![WindowSpec { stem: "week".to_string(), start: 900, boxwidth: 3600 }],
            now: 1000,
        }
    }

    #[test]
    fn recognizes_version_banners() {
        assert_eq!(parse_major_version("gnuplot 5.4 patchlevel 8"), Some(5));
        assert_eq!(parse_major_version("gnuplot 4.6 patchlevel 0"), Some(4));
        assert_eq!(parse_major_version("definitely not gnuplot"), None);
        assert_eq!(parse_major_version(""), None);
    }

    #[test]
    fn old_gnuplot_gets_the_epoch_shift() {
        assert_eq!(epoch_offset(4), 946_684_800);
        assert_eq!(epoch_offset(5), 0);
        assert_eq!(epoch_offset(6), 0);
    }

    #[test]
    fn script_columns_follow_series_order() {
        let script = build_script(&plan(), 0);
        assert!(script.contains("using 1:2 lw 2 title \"Core::Stream\""));
        assert!(script.contains("'' using 1:3 lw 1 title \"C FILE*\""));
        assert!(script.contains("set output \"output_total.png\""));
    }

    #[test]
    fn windowed_sections_are_rendered_per_window() {
        let script = build_script(&plan(), 0);
        assert!(script.contains("set output \"output_week.png\"; plot [900:1000]"));
        assert!(script.contains("set output \"output_week_delta.png\""));
        assert!(script.contains("set boxwidth 3600;"));
        assert!(!script.contains("output_month"));
    }

    #[test]
    fn epoch_offset_shifts_the_ranges_only() {
        let script = build_script(&plan(), 100);
        assert!(script.contains("plot [800:900]"));
        assert!(!script.contains("plot [900:1000]"));
    }

    #[test]
    fn delta_plots_wrap_columns_in_delta_v() {
        let script = build_script(&plan(), 0);
        assert!(script.contains("using 1:(delta_v($2)) with boxes title \"Core::Stream\""));
        assert!(script.contains("'' using 1:(delta_v($3)) with boxes title \"C FILE*\""));
    }

    #[test]
    fn last_point_labels_reference_the_csv_tail() {
        let script = build_script(&plan(), 0);
        assert!(script.contains("'< tail -n 1 tagged_history.csv' using 1:2:2 with labels"));
        assert!(script.contains("offset -2,-.5"));
    }
}
