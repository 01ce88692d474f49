//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, opcode-byte field extraction, the typed instruction
//! representation, and the decoder and disassembler built on them.

/// Register role conventions (stack pointer).
pub mod abi;

/// Instruction decoding (and encoding) between bytes and [`instruction::Instruction`].
pub mod decode;

/// Instruction disassembler for debug tracing and program listings.
pub mod disasm;

/// Opcode-byte field extraction and the typed instruction enum.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;
