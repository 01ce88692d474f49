//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Types:** A strong type for 8-bit memory addresses.
//! 2. **Constants:** Machine-wide constants for memory, registers, and opcode layout.
//! 3. **Error Handling:** Load, decode, arithmetic, and top-level simulation errors.
//! 4. **Register Indices:** A bounded register-number type validated at decode time.

/// Address type definitions.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register index type.
pub mod reg;

pub use addr::Addr;
pub use error::{AluError, DecodeError, LoadError, SimError};
pub use reg::Reg;
