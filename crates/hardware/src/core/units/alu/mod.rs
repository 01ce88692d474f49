//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU. The engine reads registers A and B, hands
//! their values here, and writes any result back to register A. All arithmetic wraps modulo
//! 256; the only failure is a zero divisor.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, Cmp
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide, increment).
pub mod arithmetic;

/// Bitwise logical operations and comparison.
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use std::fmt;

use crate::common::error::AluError;
use crate::core::arch::flags::Flags;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication (low 8 bits).
    Mul,
    /// Unsigned division.
    Div,
    /// Unsigned remainder.
    Mod,
    /// Increment register A.
    Inc,
    /// Decrement register A.
    Dec,
    /// Compare A with B, updating flags only.
    Cmp,
    /// Bitwise AND.
    And,
    /// Bitwise NOT of register A.
    Not,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Shift left, zero fill.
    Shl,
    /// Shift right (logical), zero fill.
    Shr,
}

impl AluOp {
    /// Every ALU operation, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Inc,
        Self::Dec,
        Self::Cmp,
        Self::And,
        Self::Not,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Returns the assembly mnemonic of the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Returns `true` if the operation reads only register A.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// What an ALU operation produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// New contents for register A.
    Value(u8),
    /// New contents for the flags register; no register is written.
    Flags(Flags),
}

/// Arithmetic Logic Unit for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Value of register A
    /// * `b`  - Value of register B (ignored by unary operations)
    ///
    /// # Returns
    ///
    /// The value to write back to register A, or the new flags for `Cmp`.
    ///
    /// # Errors
    ///
    /// [`AluError::DivisionByZero`] for `Div` or `Mod` when `b` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 9, 3), Ok(AluOutput::Value(27)));
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), Ok(AluOutput::Value(44)));
    /// assert!(Alu::execute(AluOp::Div, 1, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, AluError> {
        let value = match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b)?,

            AluOp::And | AluOp::Not | AluOp::Or | AluOp::Xor => logic::execute(op, a, b),

            AluOp::Cmp => return Ok(AluOutput::Flags(logic::compare(a, b))),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),
        };
        Ok(AluOutput::Value(value))
    }
}
