//! Main Execution Loop.
//!
//! This module implements the instruction cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and the two bytes after it.
//! 2. **Decode:** Produces a typed instruction with validated register operands.
//! 3. **Execute:** Dispatches to the ALU or applies the effect directly.
//! 4. **Advance:** Moves PC past the instruction unless the instruction set PC itself.
//!
//! Any failure halts the CPU before the faulting instruction changes state, so nothing
//! further executes after an error is reported.

use tracing::trace;

use super::{Cpu, CpuState};
use crate::common::addr::Addr;
use crate::common::error::SimError;
use crate::core::units::alu::{Alu, AluOutput};
use crate::isa::decode::{Decoded, decode};
use crate::isa::instruction::Instruction;
use crate::soc::traits::Console;

impl Cpu {
    /// Executes one instruction.
    ///
    /// After the CPU has halted this does nothing and returns [`CpuState::Halted`].
    ///
    /// # Arguments
    ///
    /// * `console` - Receives `PRN`/`PRA` output.
    ///
    /// # Returns
    ///
    /// The run state after the instruction retired.
    ///
    /// # Errors
    ///
    /// Any [`SimError`] raised while decoding or executing. The CPU is halted when an
    /// error is returned.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<CpuState, SimError> {
        if self.is_halted() {
            return Ok(CpuState::Halted);
        }

        if let Some(limit) = self.max_steps.filter(|&limit| self.steps >= limit) {
            self.state = CpuState::Halted;
            return Err(SimError::StepLimitExceeded { limit });
        }

        let outcome = self
            .fetch_decode()
            .and_then(|decoded| self.execute(decoded, console));

        match outcome {
            Ok(()) => {
                self.steps += 1;
                Ok(self.state)
            }
            Err(e) => {
                self.state = CpuState::Halted;
                Err(e)
            }
        }
    }

    /// Executes instructions until the CPU halts or fails.
    ///
    /// # Returns
    ///
    /// The total number of instructions retired.
    ///
    /// # Errors
    ///
    /// The first [`SimError`] raised by [`Cpu::step`].
    pub fn run(&mut self, console: &mut dyn Console) -> Result<u64, SimError> {
        while self.step(console)? == CpuState::Running {}
        Ok(self.steps)
    }

    /// Fetches and decodes the instruction at PC.
    fn fetch_decode(&self) -> Result<Decoded, SimError> {
        let decoded = decode(self.pc, self.memory.fetch3(self.pc))?;
        if self.trace {
            trace!(
                pc = %decoded.pc,
                opcode = format_args!("{:#010b}", decoded.opcode),
                regs = ?self.regs.snapshot(),
                flags = %self.flags,
                "{}",
                decoded.instruction
            );
        }
        Ok(decoded)
    }

    /// Applies one decoded instruction and advances PC.
    fn execute(&mut self, decoded: Decoded, console: &mut dyn Console) -> Result<(), SimError> {
        let mut next_pc = decoded.next_pc();
        let mut jumped = false;

        match decoded.instruction {
            Instruction::Nop => {}
            Instruction::Hlt => self.state = CpuState::Halted,

            Instruction::Ldi { reg, imm } => self.regs.write(reg, imm),
            Instruction::Ld { a, b } => {
                let value = self.memory.read(Addr(self.regs.read(b)));
                self.regs.write(a, value);
            }
            Instruction::St { a, b } => {
                let addr = Addr(self.regs.read(a));
                self.memory.write(addr, self.regs.read(b));
            }

            Instruction::Prn { reg } => console.print_decimal(self.regs.read(reg))?,
            Instruction::Pra { reg } => console.print_char(self.regs.read(reg))?,

            Instruction::Alu { op, a, b } => {
                let (lhs, rhs) = (self.regs.read(a), self.regs.read(b));
                let output = Alu::execute(op, lhs, rhs).map_err(|source| SimError::Arithmetic {
                    pc: decoded.pc,
                    source,
                })?;
                match output {
                    AluOutput::Value(value) => self.regs.write(a, value),
                    AluOutput::Flags(flags) => self.flags = flags,
                }
            }

            Instruction::Push { reg } => {
                let value = self.regs.read(reg);
                self.push(value);
            }
            Instruction::Pop { reg } => {
                let value = self.pop();
                self.regs.write(reg, value);
            }

            Instruction::Call { reg } => {
                let target = Addr(self.regs.read(reg));
                self.push(next_pc.val());
                next_pc = target;
                jumped = true;
            }
            Instruction::Ret => {
                next_pc = Addr(self.pop());
                jumped = true;
            }
            Instruction::Jump { cond, reg } => {
                if cond.holds(self.flags) {
                    next_pc = Addr(self.regs.read(reg));
                    jumped = true;
                }
            }
        }

        self.pc = next_pc;
        self.stats.record(&decoded.instruction, jumped);
        Ok(())
    }
}
