//! LS-8 Instruction Decoder.
//!
//! This module turns the opcode byte at PC and the two bytes after it into a typed
//! [`Instruction`]. Decoding happens once per instruction; the engine dispatches on the
//! resulting variant and never re-inspects the raw byte. Register operands are validated
//! here, so an out-of-range index is reported before any state changes.

use crate::common::addr::Addr;
use crate::common::error::DecodeError;
use crate::common::reg::Reg;
use crate::core::units::alu::AluOp;
use crate::isa::instruction::{Condition, Instruction, OpcodeBits};
use crate::isa::opcodes;

/// A decoded instruction together with its encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the opcode was fetched from.
    pub pc: Addr,
    /// Raw opcode byte.
    pub opcode: u8,
    /// The decoded instruction.
    pub instruction: Instruction,
}

impl Decoded {
    /// Encoded length in bytes, including operands.
    pub fn encoded_len(&self) -> u8 {
        self.opcode.encoded_len()
    }

    /// Address of the instruction that follows this one in memory.
    pub fn next_pc(&self) -> Addr {
        self.pc.wrapping_add(self.encoded_len())
    }
}

/// Decodes one instruction.
///
/// Both operand bytes are always supplied; instructions that take fewer simply ignore
/// the rest.
///
/// # Arguments
///
/// * `pc` - Address of the opcode byte, used for diagnostics.
/// * `bytes` - The opcode byte followed by the two bytes after it.
///
/// # Errors
///
/// [`DecodeError::UnknownOpcode`] if the opcode is not part of the instruction set, or
/// [`DecodeError::InvalidRegister`] if a register operand is not `R0`-`R7`.
pub fn decode(pc: Addr, bytes: [u8; 3]) -> Result<Decoded, DecodeError> {
    let [opcode, operand_a, operand_b] = bytes;
    let reg = |index: u8| Reg::new(index).ok_or(DecodeError::InvalidRegister { index, pc });

    let instruction = match opcode {
        opcodes::NOP => Instruction::Nop,
        opcodes::HLT => Instruction::Hlt,
        opcodes::RET => Instruction::Ret,

        opcodes::LDI => Instruction::Ldi {
            reg: reg(operand_a)?,
            imm: operand_b,
        },
        opcodes::LD => Instruction::Ld {
            a: reg(operand_a)?,
            b: reg(operand_b)?,
        },
        opcodes::ST => Instruction::St {
            a: reg(operand_a)?,
            b: reg(operand_b)?,
        },

        opcodes::PRN => Instruction::Prn {
            reg: reg(operand_a)?,
        },
        opcodes::PRA => Instruction::Pra {
            reg: reg(operand_a)?,
        },
        opcodes::PUSH => Instruction::Push {
            reg: reg(operand_a)?,
        },
        opcodes::POP => Instruction::Pop {
            reg: reg(operand_a)?,
        },
        opcodes::CALL => Instruction::Call {
            reg: reg(operand_a)?,
        },

        _ => {
            if let Some(cond) = jump_condition(opcode) {
                Instruction::Jump {
                    cond,
                    reg: reg(operand_a)?,
                }
            } else if let Some(op) = alu_op(opcode) {
                let a = reg(operand_a)?;
                let b = if op.is_unary() { a } else { reg(operand_b)? };
                Instruction::Alu { op, a, b }
            } else {
                return Err(DecodeError::UnknownOpcode { opcode, pc });
            }
        }
    };

    Ok(Decoded {
        pc,
        opcode,
        instruction,
    })
}

/// Maps a jump opcode to its branch condition.
const fn jump_condition(opcode: u8) -> Option<Condition> {
    let cond = match opcode {
        opcodes::JMP => Condition::Always,
        opcodes::JEQ => Condition::Equal,
        opcodes::JNE => Condition::NotEqual,
        opcodes::JGT => Condition::Greater,
        opcodes::JLT => Condition::Less,
        opcodes::JLE => Condition::LessOrEqual,
        opcodes::JGE => Condition::GreaterOrEqual,
        _ => return None,
    };
    Some(cond)
}

/// Maps an ALU-class opcode to its operation.
fn alu_op(opcode: u8) -> Option<AluOp> {
    if !opcode.is_alu_op() {
        return None;
    }
    let op = match opcode {
        opcodes::ADD => AluOp::Add,
        opcodes::SUB => AluOp::Sub,
        opcodes::MUL => AluOp::Mul,
        opcodes::DIV => AluOp::Div,
        opcodes::MOD => AluOp::Mod,
        opcodes::INC => AluOp::Inc,
        opcodes::DEC => AluOp::Dec,
        opcodes::CMP => AluOp::Cmp,
        opcodes::AND => AluOp::And,
        opcodes::NOT => AluOp::Not,
        opcodes::OR => AluOp::Or,
        opcodes::XOR => AluOp::Xor,
        opcodes::SHL => AluOp::Shl,
        opcodes::SHR => AluOp::Shr,
        _ => return None,
    };
    Some(op)
}

/// Returns the opcode byte that encodes `instruction`.
///
/// Inverse of [`decode`] on the opcode byte; used by the disassembler and by tools that
/// assemble programs.
pub const fn encode_opcode(instruction: &Instruction) -> u8 {
    match instruction {
        Instruction::Nop => opcodes::NOP,
        Instruction::Hlt => opcodes::HLT,
        Instruction::Ret => opcodes::RET,
        Instruction::Ldi { .. } => opcodes::LDI,
        Instruction::Ld { .. } => opcodes::LD,
        Instruction::St { .. } => opcodes::ST,
        Instruction::Prn { .. } => opcodes::PRN,
        Instruction::Pra { .. } => opcodes::PRA,
        Instruction::Push { .. } => opcodes::PUSH,
        Instruction::Pop { .. } => opcodes::POP,
        Instruction::Call { .. } => opcodes::CALL,
        Instruction::Jump { cond, .. } => match cond {
            Condition::Always => opcodes::JMP,
            Condition::Equal => opcodes::JEQ,
            Condition::NotEqual => opcodes::JNE,
            Condition::Greater => opcodes::JGT,
            Condition::Less => opcodes::JLT,
            Condition::LessOrEqual => opcodes::JLE,
            Condition::GreaterOrEqual => opcodes::JGE,
        },
        Instruction::Alu { op, .. } => match op {
            AluOp::Add => opcodes::ADD,
            AluOp::Sub => opcodes::SUB,
            AluOp::Mul => opcodes::MUL,
            AluOp::Div => opcodes::DIV,
            AluOp::Mod => opcodes::MOD,
            AluOp::Inc => opcodes::INC,
            AluOp::Dec => opcodes::DEC,
            AluOp::Cmp => opcodes::CMP,
            AluOp::And => opcodes::AND,
            AluOp::Not => opcodes::NOT,
            AluOp::Or => opcodes::OR,
            AluOp::Xor => opcodes::XOR,
            AluOp::Shl => opcodes::SHL,
            AluOp::Shr => opcodes::SHR,
        },
    }
}

/// Encodes `instruction` into its opcode and operand bytes.
///
/// Unary ALU operations emit a single register operand.
pub fn encode(instruction: &Instruction) -> Vec<u8> {
    let opcode = encode_opcode(instruction);
    let mut bytes = vec![opcode];
    match *instruction {
        Instruction::Nop | Instruction::Hlt | Instruction::Ret => {}
        Instruction::Ldi { reg, imm } => bytes.extend([reg.val(), imm]),
        Instruction::Ld { a, b } | Instruction::St { a, b } => bytes.extend([a.val(), b.val()]),
        Instruction::Alu { op, a, b } => {
            bytes.push(a.val());
            if !op.is_unary() {
                bytes.push(b.val());
            }
        }
        Instruction::Prn { reg }
        | Instruction::Pra { reg }
        | Instruction::Push { reg }
        | Instruction::Pop { reg }
        | Instruction::Call { reg }
        | Instruction::Jump { reg, .. } => bytes.push(reg.val()),
    }
    bytes
}
