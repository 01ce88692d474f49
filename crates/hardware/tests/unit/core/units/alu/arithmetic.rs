//! ALU Arithmetic Operation Tests.
//!
//! Deterministic edge-case tests for the 8-bit integer arithmetic operations,
//! plus properties checking that ADD and MUL agree with modulo-256 arithmetic
//! for every operand pair.
//!   - Boundary values (0, 1, 0x7F, 0x80, 0xFF)
//!   - Overflow/underflow wrapping behavior
//!   - Division and remainder by zero

use ls8_core::common::error::AluError;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
use proptest::prelude::*;
use rstest::rstest;

// ─── Constants ───────────────────────────────────────────────────────────────

const ZERO: u8 = 0;
const ONE: u8 = 1;
const I8_MAX: u8 = 0x7F;
const I8_MIN: u8 = 0x80;
const U8_MAX: u8 = 0xFF;

// ─── Helper ──────────────────────────────────────────────────────────────────

/// Execute an ALU operation expected to produce a register value.
fn alu(op: AluOp, a: u8, b: u8) -> u8 {
    match Alu::execute(op, a, b).unwrap() {
        AluOutput::Value(v) => v,
        AluOutput::Flags(f) => panic!("{op} produced flags {f}"),
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  ADD / SUB
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(ZERO, ZERO, 0)]
#[case(42, ZERO, 42)]
#[case(I8_MAX, ONE, I8_MIN)]
#[case(U8_MAX, ONE, 0)]
#[case(200, 100, 44)]
#[case(U8_MAX, U8_MAX, 0xFE)]
fn add_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(10, 3, 7)]
#[case(ZERO, ONE, U8_MAX)]
#[case(I8_MIN, ONE, I8_MAX)]
#[case(5, 5, 0)]
fn sub_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Sub, a, b), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  MUL
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn mul_small() {
    assert_eq!(alu(AluOp::Mul, 9, 3), 27);
}

#[test]
fn mul_keeps_low_eight_bits() {
    assert_eq!(alu(AluOp::Mul, 16, 16), 0);
    assert_eq!(alu(AluOp::Mul, U8_MAX, U8_MAX), 1);
    assert_eq!(alu(AluOp::Mul, 20, 13), (260u16 % 256) as u8);
}

// ═════════════════════════════════════════════════════════════════════════════
//  DIV / MOD
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn div_truncates() {
    assert_eq!(alu(AluOp::Div, 27, 4), 6);
    assert_eq!(alu(AluOp::Div, U8_MAX, ONE), U8_MAX);
    assert_eq!(alu(AluOp::Div, 3, 200), 0);
}

#[test]
fn mod_remainder() {
    assert_eq!(alu(AluOp::Mod, 27, 4), 3);
    assert_eq!(alu(AluOp::Mod, U8_MAX, 16), 15);
}

#[rstest]
#[case(AluOp::Div)]
#[case(AluOp::Mod)]
fn divide_by_zero_is_an_error(#[case] op: AluOp) {
    assert_eq!(
        Alu::execute(op, 10, ZERO),
        Err(AluError::DivisionByZero { op })
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  INC / DEC
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn inc_wraps_at_top() {
    assert_eq!(alu(AluOp::Inc, 41, ZERO), 42);
    assert_eq!(alu(AluOp::Inc, U8_MAX, ZERO), 0);
}

#[test]
fn dec_wraps_at_bottom() {
    assert_eq!(alu(AluOp::Dec, 43, ZERO), 42);
    assert_eq!(alu(AluOp::Dec, ZERO, ZERO), U8_MAX);
}

#[test]
fn unary_ops_ignore_b() {
    assert_eq!(alu(AluOp::Inc, 1, 99), 2);
    assert_eq!(alu(AluOp::Dec, 1, 99), 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Properties
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_is_mod_256(a: u8, b: u8) {
        prop_assert_eq!(
            alu(AluOp::Add, a, b),
            ((u16::from(a) + u16::from(b)) % 256) as u8
        );
    }

    #[test]
    fn mul_is_mod_256(a: u8, b: u8) {
        prop_assert_eq!(
            alu(AluOp::Mul, a, b),
            ((u16::from(a) * u16::from(b)) % 256) as u8
        );
    }

    #[test]
    fn sub_inverts_add(a: u8, b: u8) {
        prop_assert_eq!(alu(AluOp::Sub, alu(AluOp::Add, a, b), b), a);
    }

    #[test]
    fn div_and_mod_recombine(a in any::<u8>(), b in 1u8..=255) {
        let q = alu(AluOp::Div, a, b);
        let r = alu(AluOp::Mod, a, b);
        prop_assert!(r < b);
        prop_assert_eq!(u16::from(q) * u16::from(b) + u16::from(r), u16::from(a));
    }
}
