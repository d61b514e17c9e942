//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute, or indirect with the NMOS page-wrap bug
//!   already applied during operand resolution)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - BRK: Force interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F
//!
//! On the Apple I nothing is mapped at $FFFE/F, so BRK lands at $0000.

use crate::addressing::Operand;
use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, CPU};

pub(super) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.pc = target;
    }
}

/// Executes JSR. The pushed return address is the last byte of the JSR
/// instruction; RTS adds one when popping it.
pub(super) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.pc = target;
    }
}

pub(super) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

pub(super) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.set_status(status);
    cpu.pc = cpu.pop_word();
}

pub(super) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC is one past the opcode; BRK skips a padding byte
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);

    cpu.flag_i = true;
    cpu.pc = cpu.memory.read16(IRQ_VECTOR);
}
