use crate::utils::error::Result;

/// Destination for fully formatted output lines.
///
/// Implementations receive one complete line per call, without the
/// terminator. Appending the terminator within the same underlying write is
/// the sink's job, so per-call atomicity under concurrent callers is whatever
/// the backing stream provides.
pub trait LineSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}
