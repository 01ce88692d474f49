//! Core processor implementation.
//!
//! This module contains the LS-8 CPU: its architectural registers, the ALU, and the
//! fetch-decode-execute engine that ties them to memory.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, CpuState};
