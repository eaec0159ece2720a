pub mod console;
pub mod render;

pub use crate::domain::ports::LineSink;
pub use crate::utils::error::Result;
