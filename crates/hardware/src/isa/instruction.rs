//! Instruction encoding and decoded instruction types.
//!
//! Provides field extraction for the `AABCDDDD` opcode byte and the typed
//! [`Instruction`] enum that the decoder produces and the engine executes.

use crate::common::Reg;
use crate::common::constants::{ALU_OP_BIT, IDENTIFIER_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::core::arch::flags::Flags;
use crate::core::units::alu::AluOp;

/// Trait for extracting fields from an LS-8 opcode byte.
pub trait OpcodeBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    fn operand_count(&self) -> u8;

    /// Whether the instruction is carried out by the ALU (bit 5).
    fn is_alu_op(&self) -> bool;

    /// Whether the instruction writes PC itself (bit 4).
    ///
    /// The engine must not auto-advance PC after such an instruction unless it
    /// declines to jump.
    fn sets_pc(&self) -> bool;

    /// Instruction identifier within its class (bits 3-0).
    fn identifier(&self) -> u8;

    /// Total encoded length in bytes (opcode plus operands).
    fn encoded_len(&self) -> u8 {
        1 + self.operand_count()
    }
}

impl OpcodeBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline(always)]
    fn is_alu_op(&self) -> bool {
        self & ALU_OP_BIT != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline(always)]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// Branch condition evaluated against the flags register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Unconditional (`JMP`).
    Always,
    /// Equal flag set (`JEQ`).
    Equal,
    /// Equal flag clear (`JNE`).
    NotEqual,
    /// Greater-than flag set (`JGT`).
    Greater,
    /// Less-than flag set (`JLT`).
    Less,
    /// Less-than or equal flag set (`JLE`).
    LessOrEqual,
    /// Greater-than or equal flag set (`JGE`).
    GreaterOrEqual,
}

impl Condition {
    /// Returns `true` if a jump with this condition is taken under `flags`.
    pub const fn holds(self, flags: Flags) -> bool {
        match self {
            Self::Always => true,
            Self::Equal => flags.equal(),
            Self::NotEqual => !flags.equal(),
            Self::Greater => flags.greater(),
            Self::Less => flags.less(),
            Self::LessOrEqual => flags.less() || flags.equal(),
            Self::GreaterOrEqual => flags.greater() || flags.equal(),
        }
    }

    /// Returns the jump mnemonic for this condition.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Always => "JMP",
            Self::Equal => "JEQ",
            Self::NotEqual => "JNE",
            Self::Greater => "JGT",
            Self::Less => "JLT",
            Self::LessOrEqual => "JLE",
            Self::GreaterOrEqual => "JGE",
        }
    }
}

/// A decoded LS-8 instruction with validated operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Do nothing.
    Nop,
    /// Stop the CPU.
    Hlt,
    /// `reg <- imm`.
    Ldi {
        /// Destination register.
        reg: Reg,
        /// Immediate value.
        imm: u8,
    },
    /// `a <- Memory[b]`.
    Ld {
        /// Destination register.
        a: Reg,
        /// Register holding the source address.
        b: Reg,
    },
    /// `Memory[a] <- b`.
    St {
        /// Register holding the destination address.
        a: Reg,
        /// Source register.
        b: Reg,
    },
    /// Print a register as a decimal integer followed by a newline.
    Prn {
        /// Register to print.
        reg: Reg,
    },
    /// Print a register as an ASCII character.
    Pra {
        /// Register to print.
        reg: Reg,
    },
    /// ALU operation on registers `a` and `b`, result in `a`.
    ///
    /// Unary operations carry `b == a`.
    Alu {
        /// Operation selector.
        op: AluOp,
        /// First operand and destination.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// Push a register onto the stack.
    Push {
        /// Source register.
        reg: Reg,
    },
    /// Pop the stack into a register.
    Pop {
        /// Destination register.
        reg: Reg,
    },
    /// Push the return address and jump to the address in `reg`.
    Call {
        /// Register holding the subroutine address.
        reg: Reg,
    },
    /// Pop the return address into PC.
    Ret,
    /// Jump to the address in `reg` if `cond` holds.
    Jump {
        /// Branch condition.
        cond: Condition,
        /// Register holding the target address.
        reg: Reg,
    },
}

impl Instruction {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ldi { .. } => "LDI",
            Self::Ld { .. } => "LD",
            Self::St { .. } => "ST",
            Self::Prn { .. } => "PRN",
            Self::Pra { .. } => "PRA",
            Self::Alu { op, .. } => op.mnemonic(),
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
            Self::Call { .. } => "CALL",
            Self::Ret => "RET",
            Self::Jump { cond, .. } => cond.mnemonic(),
        }
    }
}
