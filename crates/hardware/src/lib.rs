//! LS-8 system simulator library.
//!
//! This crate implements a simulator for the LS-8, an 8-bit educational instruction set:
//! 1. **Core:** Register file, flags, ALU, and the fetch-decode-execute engine.
//! 2. **Memory:** A flat 256-byte address space shared by code, data, and stack.
//! 3. **ISA:** Opcode table, decoding into typed instructions, and disassembly.
//! 4. **`SoC`:** Main memory and console devices for program output.
//! 5. **Simulation:** Loader, configuration, and statistics collection.
//!
//! # Example
//!
//! ```
//! use ls8_core::soc::BufferConsole;
//! use ls8_core::{Config, Simulator};
//!
//! // LDI R0,8 / PRN R0 / HLT
//! let image = [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001];
//! let mut sim = Simulator::with_program(&Config::default(), BufferConsole::new(), &image).unwrap();
//! let steps = sim.run().unwrap();
//! assert_eq!(steps, 3);
//! assert_eq!(sim.console().output(), "8\n");
//! ```

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (registers, flags, ALU, execution engine).
pub mod core;
/// Instruction set (opcodes, decode, instruction, disassembly).
pub mod isa;
/// Program loader and top-level simulator.
pub mod sim;
/// Main memory and console devices.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator pairing a CPU with a console.
pub use crate::sim::simulator::Simulator;
