//! Simulation utilities and program loading.
//!
//! Provides the program loader and the [`Simulator`](simulator::Simulator) that ties a
//! CPU to its console.

/// Program text parsing and file loading.
pub mod loader;

/// CPU plus console, driven to completion.
pub mod simulator;
