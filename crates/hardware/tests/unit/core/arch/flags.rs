//! # Flags Register Tests
//!
//! Verifies the `00000LGE` layout and that a comparison sets exactly one flag.

use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, Flags};
use proptest::prelude::*;

#[test]
fn test_flags_default_is_clear() {
    let flags = Flags::default();
    assert_eq!(flags.bits(), 0);
    assert!(!flags.equal());
    assert!(!flags.greater());
    assert!(!flags.less());
}

#[test]
fn test_flags_bit_layout() {
    assert_eq!(FLAG_EQUAL, 0b001);
    assert_eq!(FLAG_GREATER, 0b010);
    assert_eq!(FLAG_LESS, 0b100);
}

#[test]
fn test_compare_equal() {
    assert_eq!(Flags::compare(7, 7).bits(), FLAG_EQUAL);
}

#[test]
fn test_compare_greater() {
    assert_eq!(Flags::compare(200, 3).bits(), FLAG_GREATER);
}

#[test]
fn test_compare_less() {
    assert_eq!(Flags::compare(0, 255).bits(), FLAG_LESS);
}

#[test]
fn test_from_bits_masks_upper_bits() {
    assert_eq!(Flags::from_bits(0xFF).bits(), 0b111);
}

#[test]
fn test_display() {
    assert_eq!(Flags::compare(1, 1).to_string(), "--E");
    assert_eq!(Flags::compare(2, 1).to_string(), "-G-");
    assert_eq!(Flags::compare(1, 2).to_string(), "L--");
    assert_eq!(Flags::default().to_string(), "---");
}

proptest! {
    #[test]
    fn compare_sets_exactly_one_flag(a: u8, b: u8) {
        let flags = Flags::compare(a, b);
        prop_assert_eq!(flags.bits().count_ones(), 1);
        prop_assert_eq!(flags.equal(), a == b);
        prop_assert_eq!(flags.greater(), a > b);
        prop_assert_eq!(flags.less(), a < b);
    }
}
