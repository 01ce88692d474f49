//! LS-8 architectural state.
//!
//! This module contains the programmer-visible registers of the machine:
//! 1. **GPRs:** The eight general-purpose registers, including the stack pointer.
//! 2. **Flags:** The comparison flags register written by `CMP`.

/// Comparison flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
