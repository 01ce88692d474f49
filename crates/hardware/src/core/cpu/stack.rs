//! Stack operations.
//!
//! The stack lives in main memory, grows downward from the reset value of `R7`, and is
//! addressed only through `R7`. Push pre-decrements the stack pointer and then writes;
//! pop reads and then post-increments. Both wrap at the ends of the address space.

use super::Cpu;

impl Cpu {
    /// Pushes one byte onto the stack.
    pub const fn push(&mut self, value: u8) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.memory.write(sp, value);
        self.stats.observe_stack_depth(self.stack_depth());
    }

    /// Pops one byte off the stack.
    pub const fn pop(&mut self) -> u8 {
        let sp = self.regs.sp();
        let value = self.memory.read(sp);
        self.regs.set_sp(sp.wrapping_add(1));
        value
    }

    /// Returns the byte on top of the stack without popping it.
    pub const fn peek(&self) -> u8 {
        self.memory.read(self.regs.sp())
    }
}
