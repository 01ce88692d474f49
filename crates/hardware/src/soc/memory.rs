//! Main Memory.
//!
//! This module implements the LS-8's flat, unprotected 256-byte RAM. It provides:
//! 1. **Byte Access:** Read and write by [`Addr`]; every 8-bit address is in range.
//! 2. **Image Loading:** Copies a program image in from address 0.
//! 3. **Inspection:** Slice access and hex dumps for debugging and tests.
//!
//! The stack shares this array, occupying the high addresses and growing downward.

use std::ops::{Index, IndexMut};

use crate::common::addr::Addr;
use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// The LS-8 address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    #[inline(always)]
    pub const fn read(&self, addr: Addr) -> u8 {
        self.cells[addr.index()]
    }

    /// Writes one byte.
    #[inline(always)]
    pub const fn write(&mut self, addr: Addr, val: u8) {
        self.cells[addr.index()] = val;
    }

    /// Reads the byte at `addr` and the two bytes after it, wrapping past 0xFF.
    pub const fn fetch3(&self, addr: Addr) -> [u8; 3] {
        [
            self.read(addr),
            self.read(addr.wrapping_add(1)),
            self.read(addr.wrapping_add(2)),
        ]
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Cells past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// [`LoadError::ImageTooLarge`] if the image does not fit; memory is unchanged.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Dumps memory to stderr, sixteen bytes per row, skipping all-zero rows.
    pub fn dump(&self) {
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            if chunk.iter().all(|b| *b == 0) {
                continue;
            }
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            eprintln!("{:#04x}: {}", row * 16, bytes.join(" "));
        }
    }
}

impl Index<Addr> for Memory {
    type Output = u8;

    fn index(&self, addr: Addr) -> &u8 {
        &self.cells[addr.index()]
    }
}

impl IndexMut<Addr> for Memory {
    fn index_mut(&mut self, addr: Addr) -> &mut u8 {
        &mut self.cells[addr.index()]
    }
}
