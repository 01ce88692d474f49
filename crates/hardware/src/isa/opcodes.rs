//! LS-8 Opcode Bytes.
//!
//! Every opcode byte follows the layout `AABCDDDD`:
//! - `AA`   number of operand bytes that follow (0-2)
//! - `B`    1 if the ALU carries out the instruction
//! - `C`    1 if the instruction writes PC itself
//! - `DDDD` instruction identifier within its class

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;
/// Print a register as an ASCII character.
pub const PRA: u8 = 0b0100_1000;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;
/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;
/// Jump if the greater-than flag is set.
pub const JGT: u8 = 0b0101_0111;
/// Jump if the less-than flag is set.
pub const JLT: u8 = 0b0101_1000;
/// Jump if the less-than or equal flag is set.
pub const JLE: u8 = 0b0101_1001;
/// Jump if the greater-than or equal flag is set.
pub const JGE: u8 = 0b0101_1010;

/// Increment a register.
pub const INC: u8 = 0b0110_0101;
/// Decrement a register.
pub const DEC: u8 = 0b0110_0110;
/// Bitwise NOT of a register.
pub const NOT: u8 = 0b0110_1001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Load register A from the address in register B.
pub const LD: u8 = 0b1000_0011;
/// Store register B at the address in register A.
pub const ST: u8 = 0b1000_0100;

/// Add register B to register A.
pub const ADD: u8 = 0b1010_0000;
/// Subtract register B from register A.
pub const SUB: u8 = 0b1010_0001;
/// Multiply register A by register B.
pub const MUL: u8 = 0b1010_0010;
/// Divide register A by register B.
pub const DIV: u8 = 0b1010_0011;
/// Remainder of register A divided by register B.
pub const MOD: u8 = 0b1010_0100;
/// Compare register A with register B.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND of registers A and B.
pub const AND: u8 = 0b1010_1000;
/// Bitwise OR of registers A and B.
pub const OR: u8 = 0b1010_1010;
/// Bitwise XOR of registers A and B.
pub const XOR: u8 = 0b1010_1011;
/// Shift register A left by register B bits.
pub const SHL: u8 = 0b1010_1100;
/// Shift register A right by register B bits.
pub const SHR: u8 = 0b1010_1101;

/// Every defined opcode byte.
pub const ALL: [u8; 32] = [
    NOP, HLT, RET, PUSH, POP, PRN, PRA, CALL, JMP, JEQ, JNE, JGT, JLT, JLE, JGE, INC, DEC, NOT,
    LDI, LD, ST, ADD, SUB, MUL, DIV, MOD, CMP, AND, OR, XOR, SHL, SHR,
];
