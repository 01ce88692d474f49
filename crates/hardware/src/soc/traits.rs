//! Output device trait.
//!
//! This module defines the `Console` trait that receives everything an LS-8 program prints.
//! It provides:
//! 1. **Raw Output:** `write_str`, the only method an implementor must supply.
//! 2. **Instruction Formats:** `print_decimal` for `PRN` and `print_char` for `PRA`.
//! 3. **Lifecycle:** `flush`, called by the simulator when a run ends.

use std::io;

/// Sink for program output.
pub trait Console {
    /// Writes text verbatim.
    ///
    /// # Errors
    ///
    /// Any I/O error from the underlying sink.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Writes `value` as a decimal integer followed by a newline (`PRN`).
    ///
    /// # Errors
    ///
    /// Any I/O error from the underlying sink.
    fn print_decimal(&mut self, value: u8) -> io::Result<()> {
        self.write_str(&format!("{value}\n"))
    }

    /// Writes `value` as a single character (`PRA`).
    ///
    /// # Errors
    ///
    /// Any I/O error from the underlying sink.
    fn print_char(&mut self, value: u8) -> io::Result<()> {
        let mut buf = [0; 4];
        self.write_str(char::from(value).encode_utf8(&mut buf))
    }

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Any I/O error from the underlying sink.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
