//! Shared test utilities used across unit test modules.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

/// Formatted log output captured while a closure ran.
#[derive(Debug, Default)]
pub struct CapturedLogs {
    lines: Vec<String>,
}

impl CapturedLogs {
    /// Lines emitted at `level` ("ERROR", "WARN", "INFO", "DEBUG").
    pub fn at(&self, level: &str) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.trim_start().starts_with(level))
            .collect()
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a plain-text `fmt` subscriber installed on this thread and
/// return what it logged at `DEBUG` and above.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(move || writer.clone())
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);

    let output = String::from_utf8_lossy(&buf.0.lock()).into_owned();
    let lines = output.lines().map(str::to_string).collect();
    (value, CapturedLogs { lines })
}
