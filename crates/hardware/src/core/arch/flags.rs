//! LS-8 Flags Register.
//!
//! The flags register records the outcome of the most recent `CMP`. Its layout is
//! `00000LGE`:
//! 1. **E (bit 0):** The operands were equal.
//! 2. **G (bit 1):** Register A was greater than register B.
//! 3. **L (bit 2):** Register A was less than register B.
//!
//! Exactly one of the three bits is set after a comparison; the upper bits are always zero.

use std::cmp::Ordering;
use std::fmt;

/// Equal bit.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Greater-than bit.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Less-than bit.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Mask of all meaningful flag bits.
const FLAG_MASK: u8 = FLAG_EQUAL | FLAG_GREATER | FLAG_LESS;

/// The comparison flags register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Builds a flags value from raw bits, discarding bits 3-7.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & FLAG_MASK)
    }

    /// Returns the raw register contents.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Computes the flags for comparing `a` against `b`.
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Self(FLAG_EQUAL),
            Ordering::Greater => Self(FLAG_GREATER),
            Ordering::Less => Self(FLAG_LESS),
        }
    }

    /// Returns `true` if the last comparison found the operands equal.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Returns `true` if the last comparison found A greater than B.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Returns `true` if the last comparison found A less than B.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
