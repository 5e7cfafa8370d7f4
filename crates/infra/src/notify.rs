// crates/infra/src/notify.rs
use usage_trends_ports::progress::ProgressSink;

/// Progress sink writing prefixed lines to stderr, keeping stdout free
/// for whatever the caller pipes the artifacts through.
pub struct ConsoleNotifier;

impl ProgressSink for ConsoleNotifier {
    fn info(&self, message: &str) {
        eprintln!("[usage_trends] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[warn] {message}");
    }
}
