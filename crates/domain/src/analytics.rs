// crates/domain/src/analytics.rs
pub mod freshness;

pub use freshness::{WindowPlan, plan_windows};
