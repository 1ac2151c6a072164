//! Progress reporting seam between worker tasks and the console UI.
use indicatif::ProgressBar;

/// Receives progress events from a single chunk's worker task.
pub trait ProgressObserver: Send + Sync {
    /// Records `n` more bytes downloaded.
    fn inc(&self, n: u64);
    /// Shows a transient status message.
    fn message(&self, msg: String);
    /// Marks this chunk as finished.
    fn finish(&self);
}

/// indicatif-backed observer used by the CLI.
pub struct ConsoleObserver {
    pub pb: ProgressBar,
}

impl ProgressObserver for ConsoleObserver {
    fn inc(&self, n: u64) {
        self.pb.inc(n);
    }

    fn message(&self, msg: String) {
        self.pb.set_message(msg);
    }

    fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}

/// Observer that swallows everything; used by tests and library callers
/// that do not want console output.
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn inc(&self, _n: u64) {}
    fn message(&self, _msg: String) {}
    fn finish(&self) {}
}
