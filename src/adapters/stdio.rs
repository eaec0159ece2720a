use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::io::Write;

/// Line sink backed by the process-wide standard output stream.
///
/// The handle lock is held across the line and terminator writes, so each
/// call reaches the stream as one uninterrupted unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Same discipline against the standard error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = std::io::stderr().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
