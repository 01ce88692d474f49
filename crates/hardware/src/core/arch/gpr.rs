//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Stack Pointer:** `R7` doubles as the stack pointer and boots at [`STACK_TOP`].
//! 3. **Debugging:** Provides a formatted dump of the complete register state.

use crate::common::Reg;
use crate::common::addr::Addr;
use crate::common::constants::{NUM_REGISTERS, STACK_TOP};
use crate::isa::abi::REG_SP;

/// General-purpose register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register zeroed except the stack pointer.
    pub const fn new() -> Self {
        Self::with_stack_pointer(STACK_TOP)
    }

    /// Creates a register file whose stack pointer starts at `sp`.
    pub const fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP.index()] = sp;
        Self { regs }
    }

    /// Reads a register.
    #[inline(always)]
    pub const fn read(&self, reg: Reg) -> u8 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline(always)]
    pub const fn write(&mut self, reg: Reg, val: u8) {
        self.regs[reg.index()] = val;
    }

    /// Returns the stack pointer (`R7`) as an address.
    #[inline(always)]
    pub const fn sp(&self) -> Addr {
        Addr(self.regs[REG_SP.index()])
    }

    /// Replaces the stack pointer.
    #[inline(always)]
    pub const fn set_sp(&mut self, sp: Addr) {
        self.regs[REG_SP.index()] = sp.val();
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the register contents to stderr, four per line.
    pub fn dump(&self) {
        for (i, vals) in self.regs.chunks(4).enumerate() {
            let line: Vec<String> = vals
                .iter()
                .enumerate()
                .map(|(j, v)| format!("R{}={:#04x}", i * 4 + j, v))
                .collect();
            eprintln!("{}", line.join(" "));
        }
    }
}
