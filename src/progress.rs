use std::io::Write;
use std::sync::Mutex;

/// Receives live progress from scan workers.
///
/// Called concurrently from every worker, possibly out of numeric order: a
/// worker that incremented to 7 may report before one that incremented to 5.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, target: &str, completed: u64, total: u64);
}

/// Overwriting `\r` status line on stderr.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report(&self, target: &str, completed: u64, total: u64) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\rScanning target {target}: port {completed}/{total}");
        if completed == total {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }
}

/// Discards all progress.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _target: &str, _completed: u64, _total: u64) {}
}

/// Keeps every report in call order.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<(String, u64, u64)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, u64, u64)> {
        self.events
            .lock()
            .map(|g| g.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, target: &str, completed: u64, total: u64) {
        let mut guard = self
            .events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push((target.to_string(), completed, total));
    }
}
