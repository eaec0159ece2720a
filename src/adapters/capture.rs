use crate::domain::ports::LineSink;
use crate::utils::error::{ConsoleError, Result};
use std::sync::Mutex;

/// In-memory sink recording emitted lines, for tests and embedders that need
/// to observe output.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far, in emission order.
    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.clone())
    }

    /// Drains and returns the recorded lines.
    pub fn take(&self) -> Result<Vec<String>> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<String>>> {
        self.lines.lock().map_err(|e| ConsoleError::SinkError {
            message: format!("capture buffer poisoned: {}", e),
        })
    }
}

impl LineSink for CaptureSink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lock()?.push(line.to_string());
        Ok(())
    }
}
