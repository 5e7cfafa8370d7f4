// crates/ports/src/progress.rs

/// Sink for user-facing progress and warning lines.
pub trait ProgressSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
