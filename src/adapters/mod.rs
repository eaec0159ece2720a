// Adapters layer: concrete line sinks behind the domain's LineSink port.

pub mod capture;
pub mod stdio;
