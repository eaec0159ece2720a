pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::capture::CaptureSink;
pub use crate::adapters::stdio::{StderrSink, StdoutSink};
pub use crate::core::console::Console;
pub use crate::core::render::DisplayList;
pub use crate::domain::ports::LineSink;
pub use crate::utils::error::{ConsoleError, Result};
