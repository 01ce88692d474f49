//! Console devices.
//!
//! Two implementations of [`Console`]:
//! - [`StdoutConsole`] buffers output and writes it to the process's stdout.
//! - [`BufferConsole`] keeps output in memory, for tests and embedders.

use std::io::{self, BufWriter, Stdout, Write};

use crate::soc::traits::Console;

/// Threshold for flushing buffered output to stdout (4 KiB).
const FLUSH_THRESHOLD: usize = 4096;

/// Console that writes to standard output.
#[derive(Debug)]
pub struct StdoutConsole {
    out: BufWriter<Stdout>,
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutConsole {
    /// Creates a console bound to the process's stdout.
    pub fn new() -> Self {
        Self {
            out: BufWriter::with_capacity(FLUSH_THRESHOLD, io::stdout()),
        }
    }
}

impl Console for StdoutConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Console that captures output in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferConsole {
    text: String,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.text
    }

    /// Output split into lines, without terminators.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Takes the captured output, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl Console for BufferConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.text.push_str(text);
        Ok(())
    }
}
