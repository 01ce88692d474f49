//! Simulator: owns the CPU and the console it prints to.
//!
//! Keeping the console beside the CPU rather than inside it lets the same `Cpu` drive
//! stdout in the CLI and an in-memory buffer in tests.

use std::fmt;

use tracing::{debug, warn};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::{Cpu, CpuState};
use crate::soc::traits::Console;

/// Top-level simulator: CPU state plus output device.
pub struct Simulator<C: Console> {
    /// CPU architectural state (registers, flags, memory, stats).
    pub cpu: Cpu,
    console: C,
}

impl<C: Console> fmt::Debug for Simulator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .finish_non_exhaustive()
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator in the reset state described by `config`.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
        }
    }

    /// Creates a simulator and loads `image` into memory.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] if the image does not fit in memory.
    pub fn with_program(config: &Config, console: C, image: &[u8]) -> Result<Self, SimError> {
        let mut sim = Self::new(config, console);
        sim.cpu.load_program(image)?;
        Ok(sim)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Any failure from [`Cpu::step`]; the CPU is halted afterwards.
    pub fn tick(&mut self) -> Result<CpuState, SimError> {
        self.cpu.step(&mut self.console)
    }

    /// Runs until the program halts or fails, then flushes the console.
    ///
    /// # Returns
    ///
    /// The number of instructions retired.
    ///
    /// # Errors
    ///
    /// The failure that stopped the run, or [`SimError::Output`] if the final flush fails.
    pub fn run(&mut self) -> Result<u64, SimError> {
        let result = self.cpu.run(&mut self.console);
        let flushed = self.console.flush();

        match &result {
            Ok(steps) => debug!(steps, pc = %self.cpu.pc, "halted"),
            Err(e) => warn!(pc = %self.cpu.pc, steps = self.cpu.steps, "run failed: {e}"),
        }

        let steps = result?;
        flushed?;
        Ok(steps)
    }

    /// Returns the console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Returns the console mutably.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consumes the simulator, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }
}
