//! # Stack Tests
//!
//! PUSH pre-decrements `R7` then writes; POP reads then post-increments.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::{Addr, Reg};
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use proptest::prelude::*;

#[test]
fn push_predecrements_then_writes() {
    let mut cpu = Cpu::default();
    cpu.push(0xAB);
    assert_eq!(cpu.regs.sp(), Addr(0xF3));
    assert_eq!(cpu.memory.read(Addr(0xF3)), 0xAB);
    assert_eq!(cpu.peek(), 0xAB);
    assert_eq!(cpu.stack_depth(), 1);
}

#[test]
fn stack_depth_counts_across_address_wrap() {
    let mut config = Config::default();
    config.general.initial_sp = 0x01;
    let mut cpu = Cpu::new(&config);
    cpu.push(1);
    cpu.push(2);
    cpu.push(3);
    assert_eq!(cpu.regs.sp(), Addr(0xFE));
    assert_eq!(cpu.stack_depth(), 3);
    assert_eq!(cpu.stats.max_stack_depth, 3);
}

#[test]
fn pop_reads_then_postincrements() {
    let mut cpu = Cpu::default();
    cpu.push(1);
    cpu.push(2);
    assert_eq!(cpu.pop(), 2);
    assert_eq!(cpu.regs.sp(), Addr(0xF3));
    assert_eq!(cpu.pop(), 1);
    assert_eq!(cpu.regs.sp(), Addr(0xF4));
}

#[test]
fn push_pop_program_round_trips_into_other_register() {
    let image = ProgramBuilder::new()
        .ldi(Reg::R0, 99)
        .push(Reg::R0)
        .ldi(Reg::R0, 0)
        .pop(Reg::R1)
        .prn(Reg::R1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "99\n");
    assert_eq!(ctx.get_reg(Reg::R0), 0);
    assert_eq!(ctx.cpu().regs.sp(), Addr(0xF4));
}

#[test]
fn stack_order_is_lifo() {
    let image = ProgramBuilder::new()
        .ldi(Reg::R0, 1)
        .push(Reg::R0)
        .ldi(Reg::R0, 2)
        .push(Reg::R0)
        .pop(Reg::R1)
        .prn(Reg::R1)
        .pop(Reg::R1)
        .prn(Reg::R1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output_lines(), vec!["2", "1"]);
}

#[test]
fn stack_pointer_wraps_below_zero() {
    let mut cpu = Cpu::default();
    cpu.regs.set_sp(Addr(0));
    cpu.push(7);
    assert_eq!(cpu.regs.sp(), Addr(0xFF));
    assert_eq!(cpu.memory.read(Addr(0xFF)), 7);
    assert_eq!(cpu.pop(), 7);
    assert_eq!(cpu.regs.sp(), Addr(0));
}

#[test]
fn push_r7_stores_pre_decrement_value() {
    let image = ProgramBuilder::new().push(Reg::R7).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.cpu().memory.read(Addr(0xF3)), 0xF4);
}

proptest! {
    #[test]
    fn push_then_pop_restores_value_and_sp(values in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut cpu = Cpu::default();
        for v in &values {
            cpu.push(*v);
        }
        for v in values.iter().rev() {
            prop_assert_eq!(cpu.pop(), *v);
        }
        prop_assert_eq!(cpu.regs.sp(), Addr(0xF4));
    }
}
