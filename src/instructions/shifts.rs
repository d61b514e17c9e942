//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory (read-modify-write) and updates
//! C, Z and N.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

pub(super) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.flag_c = (value & 0x80) != 0;
    finish(cpu, operand, value << 1);
}

pub(super) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.flag_c = (value & 0x01) != 0;
    finish(cpu, operand, value >> 1);
}

pub(super) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = (value & 0x80) != 0;
    finish(cpu, operand, (value << 1) | carry_in);
}

pub(super) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = (value & 0x01) != 0;
    finish(cpu, operand, (value >> 1) | carry_in);
}

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, result: u8) {
    cpu.write_operand(operand, result);
    cpu.set_zn(result);
}
