//! # Load and Store Instructions
//!
//! This module implements LDA, LDX, LDY (which update Z and N) and STA, STX,
//! STY (which affect no flags). Stores go through the memory bus, so a store
//! to an I/O register triggers that register's side effects.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

pub(super) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.a = value;
    cpu.set_zn(value);
}

pub(super) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.x = value;
    cpu.set_zn(value);
}

pub(super) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.y = value;
    cpu.set_zn(value);
}

pub(super) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.a;
    cpu.write_operand(operand, value);
}

pub(super) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.x;
    cpu.write_operand(operand, value);
}

pub(super) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.y;
    cpu.write_operand(operand, value);
}
