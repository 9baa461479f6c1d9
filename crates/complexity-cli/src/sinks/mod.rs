//! Report sinks: human-readable console tables and machine-readable JSON.

pub mod console;
pub mod json;

pub use console::ConsoleSink;
pub use json::JsonSink;
