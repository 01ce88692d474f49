//! LS-8 register conventions.

use crate::common::Reg;

/// Stack pointer. PUSH/POP/CALL/RET address memory through it.
pub const REG_SP: Reg = Reg::R7;
