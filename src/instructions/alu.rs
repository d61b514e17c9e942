//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: Add and subtract with carry, binary and NMOS decimal mode
//! - AND / ORA / EOR: Bitwise logic on the accumulator
//! - CMP / CPX / CPY: Register comparisons
//! - BIT: Bit test

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// In decimal mode the NMOS 6502 computes Z from the binary sum, N and V from
/// the intermediate result after the low-nibble adjustment, and C from the
/// final BCD result.
pub(super) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.flag_c as u16;

    let binary = a as u16 + value as u16 + carry_in;

    if !cpu.flag_d {
        let result = binary as u8;
        cpu.flag_c = binary > 0xFF;
        // Overflow: both operands share a sign the result doesn't have
        cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;
        cpu.set_zn(result);
        cpu.a = result;
        return;
    }

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16;
    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }

    cpu.flag_z = (binary as u8) == 0;
    cpu.flag_n = (hi & 0x08) != 0;
    cpu.flag_v = (((hi << 4) as u8 ^ a) & 0x80) != 0 && ((a ^ value) & 0x80) == 0;

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.flag_c = hi > 0x0F;
    cpu.a = ((hi << 4) as u8) | (lo as u8 & 0x0F);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Flags always come from the binary subtraction; in decimal mode only the
/// accumulator result is BCD-adjusted.
pub(super) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let borrow = (!cpu.flag_c) as i16;

    let binary = a as i16 - value as i16 - borrow;
    let result = binary as u8;

    cpu.flag_c = binary >= 0;
    cpu.flag_v = ((a ^ value) & (a ^ result) & 0x80) != 0;
    cpu.set_zn(result);

    if !cpu.flag_d {
        cpu.a = result;
        return;
    }

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }
    cpu.a = ((hi << 4) as u8) | (lo as u8 & 0x0F);
}

/// Executes the AND (Logical AND) instruction.
pub(super) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a & cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(super) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a | cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(super) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a ^ cpu.read_operand(operand);
    cpu.a = result;
    cpu.set_zn(result);
}

pub(super) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.a;
    compare(cpu, register, operand);
}

pub(super) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.x;
    compare(cpu, register, operand);
}

pub(super) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.y;
    compare(cpu, register, operand);
}

/// Shared body of CMP/CPX/CPY: C = register >= value, Z/N from the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of memory.
pub(super) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;
}
