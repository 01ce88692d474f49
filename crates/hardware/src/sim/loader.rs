//! Program Loader.
//!
//! This module turns LS-8 program sources into memory images. It performs:
//! 1. **File reading:** Reads a program file from disk.
//! 2. **Parsing:** One byte per line as a base-2 literal; the first whitespace-separated
//!    token counts, anything after it (typically a `#` comment) is ignored.
//! 3. **Validation:** Literals wider than eight bits and images larger than memory are
//!    rejected with the offending line.
//!
//! Lines that are blank, comment-only, or do not start with a binary literal are skipped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Parses program text into a memory image.
///
/// # Arguments
///
/// * `source` - Program text.
///
/// # Returns
///
/// The image bytes, in address order starting at 0.
///
/// # Errors
///
/// [`LoadError::ByteOutOfRange`] for a literal above `0b1111_1111`, or
/// [`LoadError::ImageTooLarge`] if the program holds more than 256 bytes.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let source = "# print8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001 # HLT\n";
/// assert_eq!(parse_program(source).unwrap(), vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        let Some(token) = code.split_whitespace().next() else {
            continue;
        };
        if !token.bytes().all(|b| b == b'0' || b == b'1') {
            continue;
        }

        let byte = u8::from_str_radix(token, 2).map_err(|_| LoadError::ByteOutOfRange {
            line: idx + 1,
            literal: token.to_string(),
        })?;
        image.push(byte);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ImageTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(image)
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise any error from
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}
