//! Output devices attached to the CPU.

/// Stdout and in-memory console implementations.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};
