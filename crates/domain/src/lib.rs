// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod options;

pub use config::{Category, Config};
pub use model::{FileOccurrence, History, TaggedCommit};
pub use options::PlotWindow;
