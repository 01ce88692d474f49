//! Memory address type.
//!
//! This module defines a strong type for LS-8 memory addresses. It provides the following:
//! 1. **Type Safety:** Distinguishes addresses from register values and immediates.
//! 2. **Bounded Range:** An 8-bit address can only name cells 0-255, so every address is valid.
//! 3. **Explicit Wrapping:** Offsets past 0xFF wrap to the bottom of memory.

use std::fmt;

/// An address in the 256-byte LS-8 address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u8);

impl Addr {
    /// Creates a new address from a raw byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 8-bit address value.
    #[inline(always)]
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Returns the raw 8-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns the address as an index into a memory array.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the address `offset` bytes further on, wrapping past 0xFF.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(self, offset: u8) -> Self {
        Self(self.0.wrapping_add(offset))
    }

    /// Returns the address `offset` bytes earlier, wrapping below 0x00.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(self, offset: u8) -> Self {
        Self(self.0.wrapping_sub(offset))
    }
}

impl From<u8> for Addr {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
