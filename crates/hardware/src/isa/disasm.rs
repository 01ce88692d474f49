//! Instruction Disassembler for LS-8.
//!
//! Converts encoded instructions into human-readable assembly for debug tracing,
//! program listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::common::Addr;
//! use ls8_core::isa::disasm::disassemble;
//!
//! let text = disassemble(Addr(0), [0b1000_0010, 0, 8]);
//! assert_eq!(text, "LDI R0, 8");
//! ```

use std::fmt;

use crate::common::addr::Addr;
use crate::common::constants::MEMORY_SIZE;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.mnemonic();
        match *self {
            Self::Nop | Self::Hlt | Self::Ret => f.write_str(name),
            Self::Ldi { reg, imm } => write!(f, "{name} {reg}, {imm}"),
            Self::Ld { a, b } | Self::St { a, b } => write!(f, "{name} {a}, {b}"),
            Self::Alu { op, a, b } => {
                if op.is_unary() {
                    write!(f, "{name} {a}")
                } else {
                    write!(f, "{name} {a}, {b}")
                }
            }
            Self::Prn { reg }
            | Self::Pra { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jump { reg, .. } => write!(f, "{name} {reg}"),
        }
    }
}

/// Disassembles the instruction starting with `bytes[0]`.
///
/// Returns assembly like `"ADD R0, R1"`, or `".byte 0b...."` when the bytes do not decode.
///
/// # Arguments
///
/// * `pc` - Address of the opcode byte.
/// * `bytes` - The opcode byte followed by the two bytes after it.
pub fn disassemble(pc: Addr, bytes: [u8; 3]) -> String {
    decode(pc, bytes).map_or_else(
        |_| format!(".byte {:#010b}", bytes[0]),
        |decoded| decoded.instruction.to_string(),
    )
}

/// One line of a program listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the first byte.
    pub addr: Addr,
    /// The bytes this line covers.
    pub bytes: Vec<u8>,
    /// Disassembled text.
    pub text: String,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: Vec<String> = self.bytes.iter().map(|b| format!("{b:08b}")).collect();
        write!(f, "{}  {:<26}  {}", self.addr, encoded.join(" "), self.text)
    }
}

/// Produces a linear-sweep listing of a program image.
///
/// Bytes that do not decode are listed one at a time as `.byte` so the sweep can
/// resynchronise. Only the first [`MEMORY_SIZE`] bytes are considered.
pub fn listing(image: &[u8]) -> Vec<ListingLine> {
    let image = &image[..image.len().min(MEMORY_SIZE)];
    let byte_at = |i: usize| image.get(i).copied().unwrap_or(0);

    let mut lines = Vec::new();
    let mut offset = 0;
    while offset < image.len() {
        let addr = Addr(offset as u8);
        let bytes = [byte_at(offset), byte_at(offset + 1), byte_at(offset + 2)];
        let (len, text) = decode(addr, bytes).map_or_else(
            |_| (1, format!(".byte {:#010b}", bytes[0])),
            |decoded| {
                (
                    usize::from(decoded.encoded_len()),
                    decoded.instruction.to_string(),
                )
            },
        );
        let end = (offset + len).min(image.len());
        lines.push(ListingLine {
            addr,
            bytes: image[offset..end].to_vec(),
            text,
        });
        offset += len;
    }
    lines
}
