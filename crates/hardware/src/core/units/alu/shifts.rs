//! ALU shift operations.
//!
//! Implements shift-left (SHL) and logical shift-right (SHR). Vacated bits are filled with
//! zero. The shift amount is the full value of register B, so shifting by eight or more
//! clears the register rather than wrapping the amount.

use super::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted 8-bit result. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = u32::from(b);
    match op {
        AluOp::Shl => a.checked_shl(amount).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amount).unwrap_or(0),
        _ => 0,
    }
}
