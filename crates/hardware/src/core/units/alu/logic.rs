//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, and NOT, plus the `CMP` comparison that produces flags
//! instead of a register value.

use super::AluOp;
use crate::core::arch::flags::Flags;

/// Executes a bitwise logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand. `Not` ignores it.
///
/// # Returns
///
/// The 8-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    }
}

/// Compares two unsigned register values.
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
