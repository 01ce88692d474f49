//! Register index type.
//!
//! Operand bytes name registers directly, but only the low eight values are meaningful.
//! `Reg` is constructed fallibly at decode time so that every index the engine sees is
//! already known to be in range.

use std::fmt;

use super::constants::NUM_REGISTERS;

/// A validated general-purpose register index (`R0`-`R7`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

impl Reg {
    /// `R0`.
    pub const R0: Self = Self(0);
    /// `R1`.
    pub const R1: Self = Self(1);
    /// `R2`.
    pub const R2: Self = Self(2);
    /// `R3`.
    pub const R3: Self = Self(3);
    /// `R4`.
    pub const R4: Self = Self(4);
    /// `R5`.
    pub const R5: Self = Self(5);
    /// `R6`.
    pub const R6: Self = Self(6);
    /// `R7`, reserved as the stack pointer.
    pub const R7: Self = Self(7);

    /// Builds a register index from an operand byte.
    ///
    /// # Returns
    ///
    /// `Some(Reg)` if `index` is 0-7, otherwise `None`.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_REGISTERS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the register number.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns the register number as an array index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all eight registers in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGISTERS as u8).map(Self)
    }
}

impl TryFrom<u8> for Reg {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(index)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
