//! # Core
//!
//! Facade over the layered workspace. Consumers get the settings
//! loader, the pipeline entry point, and re-exports of every layer so a
//! single dependency is enough:
//!
//! - [`settings`]: optional on-disk settings file (JSON, YAML behind
//!   the `yaml` feature)
//! - [`bootstrap`]: wires git, cache, gnuplot and the report writers
//!   through the history update use case

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod settings;

pub use bootstrap::run_with_config;
pub use settings::Settings;

pub use usage_trends_domain as domain;
pub use usage_trends_infra as infra;
pub use usage_trends_ports as ports;
pub use usage_trends_shared_kernel as shared_kernel;
pub use usage_trends_usecase as usecase;
