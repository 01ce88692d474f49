//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 simulator. It provides:
//! 1. **Throughput:** Retired instructions and host-side instructions per second.
//! 2. **Instruction mix:** Counts by category (data, ALU, stack, branch, call, I/O).
//! 3. **Control flow:** Conditional branches taken versus not taken.
//!
//! Reports go to stderr; stdout belongs to the program being simulated.

use std::time::Instant;

use crate::isa::instruction::{Condition, Instruction};

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of data-movement instructions (LDI, LD, ST, NOP).
    pub inst_data: u64,
    /// Count of ALU instructions.
    pub inst_alu: u64,
    /// Count of PUSH/POP instructions.
    pub inst_stack: u64,
    /// Count of jump instructions.
    pub inst_branch: u64,
    /// Count of CALL/RET instructions.
    pub inst_call: u64,
    /// Count of PRN/PRA instructions.
    pub inst_io: u64,
    /// Count of HLT instructions (0 or 1 per run).
    pub inst_system: u64,

    /// Conditional jumps whose condition held.
    pub branches_taken: u64,
    /// Conditional jumps whose condition did not hold.
    pub branches_not_taken: u64,

    /// Deepest the stack grew below its starting pointer, in bytes.
    pub max_stack_depth: u8,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_data: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_call: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            max_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The instruction that completed.
    /// * `jumped` - Whether it transferred control (only meaningful for jumps).
    pub const fn record(&mut self, instruction: &Instruction, jumped: bool) {
        self.instructions_retired += 1;
        match instruction {
            Instruction::Nop
            | Instruction::Ldi { .. }
            | Instruction::Ld { .. }
            | Instruction::St { .. } => self.inst_data += 1,
            Instruction::Alu { .. } => self.inst_alu += 1,
            Instruction::Push { .. } | Instruction::Pop { .. } => self.inst_stack += 1,
            Instruction::Call { .. } | Instruction::Ret => self.inst_call += 1,
            Instruction::Prn { .. } | Instruction::Pra { .. } => self.inst_io += 1,
            Instruction::Hlt => self.inst_system += 1,
            Instruction::Jump { cond, .. } => {
                self.inst_branch += 1;
                if !matches!(cond, Condition::Always) {
                    if jumped {
                        self.branches_taken += 1;
                    } else {
                        self.branches_not_taken += 1;
                    }
                }
            }
        }
    }

    /// Records the current stack depth, keeping the maximum.
    pub const fn observe_stack_depth(&mut self, depth: u8) {
        if depth > self.max_stack_depth {
            self.max_stack_depth = depth;
        }
    }

    /// Prints all statistics to stderr.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let ips = if seconds > 0.0 {
            self.instructions_retired as f64 / seconds
        } else {
            0.0
        };

        eprintln!();
        eprintln!("==========================================================");
        eprintln!("LS-8 SIMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.6} s");
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("sim_ips                  {ips:.0}");
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        let mix = |name: &str, n: u64| eprintln!("  {name:<23}{n} ({:.2}%)", pct(n));
        mix("op.data", self.inst_data);
        mix("op.alu", self.inst_alu);
        mix("op.stack", self.inst_stack);
        mix("op.branch", self.inst_branch);
        mix("op.call", self.inst_call);
        mix("op.io", self.inst_io);
        mix("op.system", self.inst_system);
        eprintln!("----------------------------------------------------------");
        eprintln!("CONTROL FLOW");
        eprintln!("  branch.taken           {}", self.branches_taken);
        eprintln!("  branch.not_taken       {}", self.branches_not_taken);
        eprintln!("  stack.max_depth        {}", self.max_stack_depth);
        eprintln!("==========================================================");
    }
}
