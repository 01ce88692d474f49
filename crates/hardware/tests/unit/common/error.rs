//! # Error Tests
//!
//! This module contains unit tests for the error taxonomy: message contents,
//! source chaining, and conversions into `SimError`.

use std::error::Error;
use std::io;

use ls8_core::common::addr::Addr;
use ls8_core::common::error::{AluError, DecodeError, LoadError, SimError};
use ls8_core::core::units::alu::AluOp;

#[test]
fn test_unknown_opcode_message_names_opcode_and_pc() {
    let err = DecodeError::UnknownOpcode {
        opcode: 0b1111_1111,
        pc: Addr(0x0C),
    };
    let msg = err.to_string();
    assert!(msg.contains("0b11111111"), "{msg}");
    assert!(msg.contains("0x0c"), "{msg}");
}

#[test]
fn test_invalid_register_message() {
    let err = DecodeError::InvalidRegister {
        index: 9,
        pc: Addr(3),
    };
    let msg = err.to_string();
    assert!(msg.contains('9'), "{msg}");
    assert!(msg.contains("R0-R7"), "{msg}");
}

#[test]
fn test_division_by_zero_names_operation() {
    let err = AluError::DivisionByZero { op: AluOp::Mod };
    assert_eq!(err.to_string(), "MOD by zero");
}

#[test]
fn test_byte_out_of_range_names_line() {
    let err = LoadError::ByteOutOfRange {
        line: 4,
        literal: "100000000".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("line 4:"), "{msg}");
    assert!(msg.contains("100000000"), "{msg}");
}

#[test]
fn test_decode_error_converts_into_sim_error() {
    let err: SimError = DecodeError::UnknownOpcode {
        opcode: 0xFF,
        pc: Addr(0),
    }
    .into();
    assert!(matches!(err, SimError::Decode(_)));
    assert!(err.to_string().starts_with("decode failure:"));
}

#[test]
fn test_load_error_converts_into_sim_error() {
    let err: SimError = LoadError::ImageTooLarge {
        len: 300,
        capacity: 256,
    }
    .into();
    assert!(matches!(err, SimError::Load(_)));
    assert!(err.to_string().contains("300"));
}

#[test]
fn test_arithmetic_error_chains_source() {
    let err = SimError::Arithmetic {
        pc: Addr(6),
        source: AluError::DivisionByZero { op: AluOp::Div },
    };
    assert_eq!(err.to_string(), "arithmetic failure at 0x06: DIV by zero");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "DIV by zero");
}

#[test]
fn test_io_error_converts_into_output() {
    let err: SimError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
    assert!(matches!(err, SimError::Output(_)));
}

#[test]
fn test_step_limit_message() {
    let err = SimError::StepLimitExceeded { limit: 50 };
    assert!(err.to_string().contains("50"));
}
