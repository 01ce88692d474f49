//! Execution units.
//!
//! The LS-8 has a single functional unit besides the engine itself: the integer ALU.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
