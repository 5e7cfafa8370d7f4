// crates/domain/src/model.rs
pub mod file_occurrence;
pub mod history;
pub mod tagged_commit;

pub use file_occurrence::FileOccurrence;
pub use history::History;
pub use tagged_commit::TaggedCommit;
