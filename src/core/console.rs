use crate::adapters::stdio::StdoutSink;
use crate::core::render;
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::fmt::Display;

/// Console engine: renders values, joins them with single spaces and emits
/// one line per call through its sink.
pub struct Console<S: LineSink> {
    sink: S,
}

impl Console<StdoutSink> {
    /// Console over the process-wide standard output stream.
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }
}

impl<S: LineSink> Console<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Emits exactly one line: each value in its canonical textual form,
    /// joined with single spaces in argument order. An empty slice emits an
    /// empty line. Write failures are dropped; use
    /// [`try_log_args`](Self::try_log_args) to observe them.
    pub fn log_args(&self, values: &[&dyn Display]) {
        let _ = self.try_log_args(values);
    }

    /// Fallible form of [`log_args`](Self::log_args); surfaces the sink
    /// error instead of swallowing it.
    pub fn try_log_args(&self, values: &[&dyn Display]) -> Result<()> {
        self.sink.write_line(&render::join_spaced(values))
    }

    /// Convenience for homogeneous sequences; same joining rule.
    pub fn log<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let line = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = self.sink.write_line(&line);
    }
}

/// Variadic call surface: `log!(console, 1, true, "x")` emits `1 true x`.
/// With no values, `log!(console)` emits an empty line.
#[macro_export]
macro_rules! log {
    ($console:expr $(, $value:expr)* $(,)?) => {
        $console.log_args(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
