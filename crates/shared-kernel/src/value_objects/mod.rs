// crates/shared-kernel/src/value_objects/mod.rs
pub mod category;
pub mod commit;
pub mod counts;

pub use category::CategoryName;
pub use commit::CommitId;
pub use counts::OccurrenceCount;
