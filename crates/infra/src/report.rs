// crates/infra/src/report.rs
pub mod csv;
pub mod html;
pub mod json;
pub mod site;
