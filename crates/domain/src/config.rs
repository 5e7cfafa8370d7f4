// crates/domain/src/config.rs
pub mod aggregate;
pub mod category;

pub use aggregate::Config;
pub use category::Category;
