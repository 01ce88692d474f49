//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Address-space size and the stack region boundaries.
//! 2. **Register Constants:** Register count and the stack-pointer register.
//! 3. **Opcode Layout:** Field shifts and masks for the `AABCDDDD` opcode byte.

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP_REGISTER: usize = 7;

/// Initial stack pointer value. Addresses above it (0xF5-0xFF) are left unused.
pub const STACK_TOP: u8 = 0xF4;

/// Shift that brings the operand-count field (bits 7-6) down to bit 0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit marking an opcode that is carried out by the ALU (bit 5).
pub const ALU_OP_BIT: u8 = 1 << 5;

/// Bit marking an opcode that writes PC itself (bit 4).
pub const SETS_PC_BIT: u8 = 1 << 4;

/// Mask for the instruction identifier field (bits 3-0).
pub const IDENTIFIER_MASK: u8 = 0x0F;

/// Largest number of operand bytes any instruction may carry.
pub const MAX_OPERANDS: u8 = 2;
