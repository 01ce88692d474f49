//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, flags, program counter, and run state.
//! 2. **Memory:** Owns the 256-byte address space shared by code, data, and stack.
//! 3. **Execution Control:** Step budget, instruction tracing, and statistics.
//!
//! A `Cpu` is created fresh for every run and owned exclusively by its caller.

/// Fetch, decode, and execute.
pub mod execution;

/// Stack push/pop and subroutine linkage.
pub mod stack;

use tracing::debug;

use crate::common::addr::Addr;
use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Run state of the processor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CpuState {
    /// Instructions are being executed.
    #[default]
    Running,
    /// A `HLT` retired or a fatal failure occurred; no further instructions execute.
    Halted,
}

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: Gpr,
    /// Comparison flags, written only by `CMP`.
    pub flags: Flags,
    /// Program counter.
    pub pc: Addr,
    /// Main memory.
    pub memory: Memory,
    /// Current run state.
    pub state: CpuState,

    /// Emit a trace event for every executed instruction.
    pub trace: bool,
    /// Stop with an error once this many instructions have retired.
    pub max_steps: Option<u64>,
    /// Instructions retired so far.
    pub steps: u64,
    /// Performance statistics.
    pub stats: SimStats,

    /// Stack pointer at reset; stack depth is measured from here.
    initial_sp: Addr,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// Memory and registers are zeroed, except the stack pointer which takes
    /// `config.general.initial_sp`. PC starts at `config.general.start_pc`.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration.
    pub fn new(config: &Config) -> Self {
        let general = &config.general;
        Self {
            regs: Gpr::with_stack_pointer(general.initial_sp),
            flags: Flags::default(),
            pc: Addr(general.start_pc),
            memory: Memory::new(),
            state: CpuState::Running,
            trace: general.trace_instructions,
            max_steps: general.max_steps,
            steps: 0,
            stats: SimStats::default(),
            initial_sp: Addr(general.initial_sp),
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::ImageTooLarge`] if the image exceeds the address space.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load(image)?;
        debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Returns `true` once the CPU has stopped.
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Number of bytes currently pushed below the reset stack pointer.
    ///
    /// Measured modulo 256, so a stack that wraps below 0x00 keeps counting.
    pub const fn stack_depth(&self) -> u8 {
        self.initial_sp.val().wrapping_sub(self.regs.sp().val())
    }

    /// Prints PC, flags, registers, and non-zero memory to stderr.
    pub fn dump_state(&self) {
        eprintln!();
        eprintln!("==========================================================");
        eprintln!("LS-8 MACHINE STATE");
        eprintln!("==========================================================");
        eprintln!(
            "PC {}  FL {:#010b} ({})  steps {}",
            self.pc,
            self.flags.bits(),
            self.flags,
            self.steps
        );
        eprintln!("----------------------------------------------------------");
        self.regs.dump();
        eprintln!("----------------------------------------------------------");
        self.memory.dump();
        eprintln!("==========================================================");
    }
}
