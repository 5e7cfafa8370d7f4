// crates/core/src/bootstrap.rs
use std::fs;

use anyhow::Context as _;
use chrono::Utc;
use usage_trends_domain::{
    Config, History,
    analytics::plan_windows,
    config::aggregate::HISTORY_CSV_FILE,
    model::file_occurrence::sort_by_count,
    FileOccurrence,
};
use usage_trends_infra::{
    cache::JsonCountCache,
    git::GitCli,
    gnuplot::GnuplotRenderer,
    notify::ConsoleNotifier,
    report,
    report::html::CategoryTable,
};
use usage_trends_ports::{
    plotter::{ChartRenderer, PlotPlan, SeriesSpec, WindowSpec},
    progress::ProgressSink,
    repository::HistorySource,
};
use usage_trends_usecase::UpdateHistory;

/// Runs the whole pipeline for a resolved configuration: scan, count,
/// write the tagged history, then render the optional graph and HTML
/// bundle and stage it for publishing.
pub fn run_with_config(config: &Config) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;

    let notifier = ConsoleNotifier;
    let git = GitCli::new(&config.repo_dir, &config.revision);
    git.verify_worktree()
        .with_context(|| format!("inspecting repository {}", config.repo_dir.display()))?;

    // The cache flushes mid-run, so both target directories must exist
    // before the scan starts.
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    if let Some(parent) = config.cache_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut cache = JsonCountCache::load(&config.cache_path);
    let outcome = UpdateHistory::new(&git, Some(&notifier))
        .run(config, &mut cache)
        .context("updating the tagged history")?;
    notifier.info(&format!(
        "tagged {} commits ({} cached, {} counted)",
        outcome.history.len(),
        outcome.cache_hits,
        outcome.cache_misses
    ));

    report::json::write_history_json(&config.history_json_path(), &outcome.history)
        .context("writing the JSON history")?;
    let now = Utc::now().timestamp();
    report::csv::write_history_csv(
        &config.history_csv_path(),
        &outcome.history,
        &config.categories,
        now,
    )
    .context("writing the CSV history")?;

    if config.plots {
        render_plots(config, &outcome.history, now, &notifier)?;
    }
    if config.html {
        render_index(config, &git)?;
    }
    if let Some(site_dir) = &config.site_dir {
        let staged = report::site::stage_bundle(&config.output_dir, &config.cache_path, site_dir)
            .with_context(|| format!("staging the bundle into {}", site_dir.display()))?;
        notifier.info(&format!("staged {staged} files into {}", site_dir.display()));
    }
    Ok(())
}

fn render_plots(
    config: &Config,
    history: &History,
    now: i64,
    notifier: &ConsoleNotifier,
) -> anyhow::Result<()> {
    let Some(latest) = history.latest_timestamp() else {
        return Ok(());
    };
    let windows = plan_windows(latest, now).context("checking history freshness")?;
    for window in &windows.stale {
        notifier.warn(&format!("no commit within the last {window}; skipping that graph"));
    }

    let plan = PlotPlan {
        csv_file: HISTORY_CSV_FILE.to_string(),
        output_dir: config.output_dir.clone(),
        series: config
            .categories
            .iter()
            .map(|c| SeriesSpec { title: c.label().to_string() })
            .collect(),
        windows: windows
            .fresh
            .iter()
            .map(|w| WindowSpec {
                stem: w.file_stem().to_string(),
                start: now - w.seconds(),
                boxwidth: w.boxwidth(),
            })
            .collect(),
        now,
    };
    GnuplotRenderer::new().render(&plan).context("rendering graphs")?;
    Ok(())
}

fn render_index(config: &Config, source: &dyn HistorySource) -> anyhow::Result<()> {
    let mut tables = Vec::new();
    for category in config.categories.iter().filter(|c| c.table) {
        let counts = source
            .count_by_file(&config.revision, &category.pattern, &category.ignored)
            .with_context(|| format!("counting files for category '{}'", category.name))?;
        let mut rows: Vec<FileOccurrence> =
            counts.into_iter().map(|dto| FileOccurrence::new(dto.path, dto.count)).collect();
        sort_by_count(&mut rows);
        tables.push(CategoryTable { label: category.label().to_string(), rows });
    }

    let template =
        report::html::load_template(config.template_path()).context("loading the HTML template")?;
    let html = report::html::render_index(&template, &tables, &config.file_view_url);
    report::html::write_index(&config.index_path(), &html).context("writing index.html")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn invalid_config_fails_before_touching_the_repository() {
        let config = Config {
            repo_dir: PathBuf::from("/nonexistent"),
            revision: "origin/master".to_string(),
            fetch: false,
            categories: vec![],
            cache_path: PathBuf::from("cache.json"),
            cache_save_every: 50,
            output_dir: PathBuf::from("/nonexistent/out"),
            site_dir: None,
            template_path: None,
            file_view_url: String::new(),
            plots: false,
            html: false,
        };

        let err = run_with_config(&config).expect_err("must fail");
        assert!(format!("{err:#}").contains("at least one category"));
    }
}
