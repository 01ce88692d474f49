//! Simulator error definitions.
//!
//! This module defines the failure taxonomy of the simulator. It provides:
//! 1. **Load Failures:** The program image could not be read or does not fit in memory.
//! 2. **Decode Failures:** A fetched byte is not an instruction, or names a missing register.
//! 3. **Arithmetic Failures:** Division or modulo by zero inside the ALU.
//! 4. **Top-Level Errors:** `SimError`, which wraps the above for the run loop and the CLI.
//!
//! None of these are retried. Each carries enough context (PC, opcode, line number) for the
//! message alone to locate the fault.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::Addr;
use crate::core::units::alu::AluOp;

/// Failure to produce a memory image from a program source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("could not read program '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The image holds more bytes than memory has cells.
    #[error("program image is {len} bytes but memory holds only {capacity}")]
    ImageTooLarge {
        /// Number of bytes in the image.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// A line holds a binary literal that is wider than eight bits.
    #[error("line {line}: binary literal '{literal}' does not fit in a byte")]
    ByteOutOfRange {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending literal.
        literal: String,
    },
}

/// Failure to turn the bytes at PC into an executable instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode byte matches no known instruction.
    #[error("unrecognized opcode {opcode:#010b} at {pc}")]
    UnknownOpcode {
        /// The raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: Addr,
    },

    /// A register operand is outside `R0`-`R7`.
    #[error("operand {index} of instruction at {pc} is not a register (R0-R7)")]
    InvalidRegister {
        /// The raw operand byte.
        index: u8,
        /// Address of the instruction carrying the operand.
        pc: Addr,
    },
}

/// Failure raised by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// `DIV` or `MOD` with a zero divisor.
    #[error("{op} by zero")]
    DivisionByZero {
        /// The operation that was attempted.
        op: AluOp,
    },
}

/// Any failure that stops a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program could not be loaded; execution never started.
    #[error("load failure: {0}")]
    Load(#[from] LoadError),

    /// The engine fetched something it cannot execute.
    #[error("decode failure: {0}")]
    Decode(#[from] DecodeError),

    /// The ALU rejected its operands.
    #[error("arithmetic failure at {pc}: {source}")]
    Arithmetic {
        /// Address of the faulting instruction.
        pc: Addr,
        /// The ALU failure.
        #[source]
        source: AluError,
    },

    /// The configured step budget ran out before the program halted.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },

    /// Writing program output failed.
    #[error("console output failed: {0}")]
    Output(#[from] io::Error),
}
