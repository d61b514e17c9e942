//! # Branch Instructions
//!
//! This module implements the conditional branches BCC, BCS, BEQ, BNE, BMI,
//! BPL, BVC and BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::Operand;
use crate::opcodes::Instruction;
use crate::{MemoryBus, CPU};

/// Executes a conditional branch. `operand` holds the already computed target.
pub(super) fn branch<M: MemoryBus>(cpu: &mut CPU<M>, instruction: Instruction, operand: Operand) {
    let taken = match instruction {
        Instruction::Bcc => !cpu.flag_c,
        Instruction::Bcs => cpu.flag_c,
        Instruction::Beq => cpu.flag_z,
        Instruction::Bne => !cpu.flag_z,
        Instruction::Bmi => cpu.flag_n,
        Instruction::Bpl => !cpu.flag_n,
        Instruction::Bvc => !cpu.flag_v,
        Instruction::Bvs => cpu.flag_v,
        _ => false,
    };

    let Operand::Address(target) = operand else {
        return;
    };
    if !taken {
        return;
    }

    // PC already points past the branch instruction
    let page_crossed = (cpu.pc & 0xFF00) != (target & 0xFF00);
    cpu.cycles += if page_crossed { 2 } else { 1 };
    cpu.pc = target;
}
