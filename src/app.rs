// src/app.rs
use anyhow::Result;
use clap::Parser;
use usage_trends_core::run_with_config;

use crate::{cli::Args, config};

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = config::build(&args)?;
    run_with_config(&config)
}
