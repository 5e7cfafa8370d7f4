//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`repository`]: Scanning and counting over a git repository
//! - [`cache`]: Persisted commit -> counts store
//! - [`plotter`]: Trend graph rendering
//! - [`progress`]: Progress reporting for long-running operations
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod plotter;
pub mod progress;
pub mod repository;
