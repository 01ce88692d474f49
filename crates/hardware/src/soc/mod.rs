//! System components around the core.
//!
//! This module organizes what the CPU talks to: the 256-byte main memory and the console
//! device that receives program output.

/// Console device implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Device trait definitions.
pub mod traits;

pub use devices::{BufferConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::Console;
