// src/cli.rs
pub mod args;

pub use args::Args;
