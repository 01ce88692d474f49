//! # Register Indexing Tests
//!
//! Verifies that register indices are validated on construction and that the
//! stack-pointer convention is exposed consistently.

use ls8_core::common::Reg;
use ls8_core::common::constants::{NUM_REGISTERS, SP_REGISTER};
use ls8_core::isa::abi::REG_SP;
use rstest::rstest;

/// Every index below eight names a register.
#[rstest]
fn reg_new_accepts_valid_indices(#[values(0, 1, 2, 3, 4, 5, 6, 7)] index: u8) {
    let reg = Reg::new(index).unwrap();
    assert_eq!(reg.val(), index);
    assert_eq!(reg.index(), usize::from(index));
}

/// Indices from eight upward are rejected.
#[rstest]
#[case(8)]
#[case(9)]
#[case(0x80)]
#[case(0xFF)]
fn reg_new_rejects_out_of_range(#[case] index: u8) {
    assert_eq!(Reg::new(index), None);
    assert_eq!(Reg::try_from(index), Err(index));
}

/// `Reg::all` yields each register once, in order.
#[test]
fn reg_all_enumerates_eight_registers() {
    let all: Vec<Reg> = Reg::all().collect();
    assert_eq!(all.len(), NUM_REGISTERS);
    assert_eq!(all.first(), Some(&Reg::R0));
    assert_eq!(all.last(), Some(&Reg::R7));
}

/// The ABI stack pointer is R7.
#[test]
fn stack_pointer_is_r7() {
    assert_eq!(REG_SP, Reg::R7);
    assert_eq!(REG_SP.index(), SP_REGISTER);
}

/// Registers display as `R<n>`.
#[test]
fn reg_display() {
    assert_eq!(Reg::R0.to_string(), "R0");
    assert_eq!(Reg::R7.to_string(), "R7");
}
