// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod git;
pub mod gnuplot;
pub mod notify;
pub mod persistence;
pub mod report;
