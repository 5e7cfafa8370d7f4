// src/config.rs
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use usage_trends_core::{
    Settings,
    domain::{
        Config,
        config::aggregate::{DEFAULT_CACHE_FILE, DEFAULT_CACHE_SAVE_EVERY, DEFAULT_REVISION},
    },
};

use crate::cli::Args;

/// Resolves the effective configuration: settings file first, flags on
/// top, defaults underneath.
pub fn build(args: &Args) -> Result<Config> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings {}", path.display()))?,
        None => Settings::default(),
    };
    merge(args, settings)
}

fn merge(args: &Args, settings: Settings) -> Result<Config> {
    if settings.categories.is_empty() {
        bail!("no categories configured; provide a settings file with a `categories` list");
    }
    let Some(repo_dir) = args.repo.clone().or(settings.repo) else {
        bail!("no repository configured; pass --repo or set `repo` in the settings file");
    };

    let output_dir =
        args.output_dir.clone().or(settings.output_dir).unwrap_or_else(|| PathBuf::from("."));
    let cache_path = args
        .cache
        .clone()
        .or(settings.cache)
        .unwrap_or_else(|| output_dir.join(DEFAULT_CACHE_FILE));

    let config = Config {
        repo_dir,
        revision: args
            .revision
            .clone()
            .or(settings.revision)
            .unwrap_or_else(|| DEFAULT_REVISION.to_string()),
        fetch: !args.no_fetch,
        categories: settings.categories,
        cache_path,
        cache_save_every: args
            .cache_save_every
            .or(settings.cache_save_every)
            .unwrap_or(DEFAULT_CACHE_SAVE_EVERY),
        output_dir,
        site_dir: if args.no_stage { None } else { args.site_dir.clone().or(settings.site_dir) },
        template_path: args.template.clone().or(settings.template),
        file_view_url: args.file_view_url.clone().or(settings.file_view_url).unwrap_or_default(),
        plots: !args.no_plots,
        html: !args.no_html,
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use usage_trends_core::domain::Category;
    use usage_trends_core::shared_kernel::CategoryName;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("usage_trends").chain(argv.iter().copied()))
    }

    fn settings() -> Settings {
        Settings {
            repo: Some(PathBuf::from("serenity")),
            revision: Some("origin/master".to_string()),
            categories: vec![Category {
                name: CategoryName::new("c_file").expect("valid"),
                pattern: "fopen".to_string(),
                label: None,
                ignored: vec![],
                table: true,
            }],
            ..Settings::default()
        }
    }

    #[test]
    fn flags_override_the_settings_file() {
        let config = merge(
            &args(&["--repo", "elsewhere", "--revision", "trunk", "--cache-save-every", "7"]),
            settings(),
        )
        .expect("merge");
        assert_eq!(config.repo_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.revision, "trunk");
        assert_eq!(config.cache_save_every, 7);
    }

    #[test]
    fn defaults_fill_whatever_is_left() {
        let mut settings = settings();
        settings.revision = None;
        let config = merge(&args(&[]), settings).expect("merge");
        assert_eq!(config.revision, DEFAULT_REVISION);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.cache_path, PathBuf::from("./cache.json"));
        assert_eq!(config.cache_save_every, DEFAULT_CACHE_SAVE_EVERY);
        assert!(config.fetch);
        assert!(config.plots);
        assert!(config.html);
    }

    #[test]
    fn cache_defaults_next_to_the_artifacts() {
        let config = merge(&args(&["--output-dir", "public"]), settings()).expect("merge");
        assert_eq!(config.cache_path, PathBuf::from("public/cache.json"));
    }

    #[test]
    fn no_flags_invert_the_toggles() {
        let config =
            merge(&args(&["--no-fetch", "--no-plots", "--no-html"]), settings()).expect("merge");
        assert!(!config.fetch);
        assert!(!config.plots);
        assert!(!config.html);
    }

    #[test]
    fn no_stage_discards_the_site_dir() {
        let mut settings = settings();
        settings.site_dir = Some(PathBuf::from("_site"));
        let config = merge(&args(&["--no-stage"]), settings).expect("merge");
        assert_eq!(config.site_dir, None);
    }

    #[test]
    fn missing_categories_is_rejected() {
        let mut settings = settings();
        settings.categories.clear();
        let err = merge(&args(&[]), settings).expect_err("must fail");
        assert!(err.to_string().contains("no categories configured"));
    }

    #[test]
    fn missing_repository_is_rejected() {
        let mut settings = settings();
        settings.repo = None;
        let err = merge(&args(&[]), settings).expect_err("must fail");
        assert!(err.to_string().contains("no repository configured"));
    }
}
