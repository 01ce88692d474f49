//! SimStats unit tests.
//!
//! Verifies default initialization, per-category instruction counting, branch
//! outcome tracking, and the counters gathered during a real run.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::Reg;
use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::instruction::{Condition, Instruction};
use ls8_core::stats::SimStats;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.inst_data, 0);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.inst_stack, 0);
    assert_eq!(stats.inst_branch, 0);
    assert_eq!(stats.inst_call, 0);
    assert_eq!(stats.inst_io, 0);
    assert_eq!(stats.inst_system, 0);
    assert_eq!(stats.branches_taken, 0);
    assert_eq!(stats.branches_not_taken, 0);
    assert_eq!(stats.max_stack_depth, 0);
}

#[test]
fn record_counts_by_category() {
    let mut stats = SimStats::default();
    stats.record(
        &Instruction::Ldi {
            reg: Reg::R0,
            imm: 1,
        },
        false,
    );
    stats.record(
        &Instruction::Alu {
            op: AluOp::Add,
            a: Reg::R0,
            b: Reg::R1,
        },
        false,
    );
    stats.record(&Instruction::Push { reg: Reg::R0 }, false);
    stats.record(&Instruction::Call { reg: Reg::R0 }, true);
    stats.record(&Instruction::Prn { reg: Reg::R0 }, false);
    stats.record(&Instruction::Hlt, false);

    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.inst_data, 1);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_stack, 1);
    assert_eq!(stats.inst_call, 1);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_branch, 0);
}

#[test]
fn unconditional_jumps_are_not_branch_outcomes() {
    let mut stats = SimStats::default();
    let jmp = Instruction::Jump {
        cond: Condition::Always,
        reg: Reg::R0,
    };
    stats.record(&jmp, true);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.branches_taken, 0);
    assert_eq!(stats.branches_not_taken, 0);
}

#[test]
fn conditional_jump_outcomes() {
    let mut stats = SimStats::default();
    let jeq = Instruction::Jump {
        cond: Condition::Equal,
        reg: Reg::R0,
    };
    stats.record(&jeq, true);
    stats.record(&jeq, false);
    stats.record(&jeq, false);
    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken, 2);
}

#[test]
fn observe_stack_depth_keeps_maximum() {
    let mut stats = SimStats::default();
    stats.observe_stack_depth(3);
    stats.observe_stack_depth(1);
    assert_eq!(stats.max_stack_depth, 3);
}

#[test]
fn run_populates_stats() {
    let image = ProgramBuilder::new()
        .ldi(Reg::R0, 2)
        .push(Reg::R0)
        .push(Reg::R0)
        .pop(Reg::R1)
        .pop(Reg::R1)
        .mul(Reg::R0, Reg::R1)
        .prn(Reg::R0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run().unwrap();

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.instructions_retired, ctx.cpu().steps);
    assert_eq!(stats.inst_stack, 4);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.max_stack_depth, 2);
}

#[test]
fn failed_instruction_is_not_counted() {
    let image = ProgramBuilder::new().div(Reg::R0, Reg::R1).build();
    let mut ctx = TestContext::new().load_program(&image);
    assert!(ctx.run().is_err());
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

#[test]
fn print_does_not_panic() {
    let mut stats = SimStats::default();
    stats.print();
    stats.record(&Instruction::Nop, false);
    stats.print();
}
