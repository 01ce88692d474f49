//! ALU arithmetic operations.
//!
//! Implements 8-bit addition, subtraction, multiplication, division, remainder, increment,
//! and decrement. Results wrap modulo 256; overflow is never signalled. Division and
//! remainder are unsigned and reject a zero divisor instead of producing a value.

use super::AluOp;
use crate::common::error::AluError;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand. `Inc` and `Dec` ignore it.
///
/// # Returns
///
/// The wrapped 8-bit result. Returns `0` for non-arithmetic opcodes.
///
/// # Errors
///
/// [`AluError::DivisionByZero`] when `op` is `Div` or `Mod` and `b` is zero.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    let value = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(AluError::DivisionByZero { op })?,
        AluOp::Mod => a.checked_rem(b).ok_or(AluError::DivisionByZero { op })?,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        _ => 0,
    };
    Ok(value)
}
