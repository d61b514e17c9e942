//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status (with B and bit 5 set in the pushed copy)
//! - PLA: Pull Accumulator (updates Z and N)
//! - PLP: Pull Processor Status (B and bit 5 are ignored)
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! On the Apple I this page is ordinary RAM.

use crate::{MemoryBus, CPU};

pub(super) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

pub(super) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);
}

pub(super) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pop();
    cpu.a = value;
    cpu.set_zn(value);
}

pub(super) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.set_status(status);
}
