//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. By the time a handler runs, `CPU::step()` has already
//! fetched the opcode, resolved the operand and charged the base cycles, so each
//! handler only applies the instruction's effect on registers, flags and memory.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Operand;
use crate::opcodes::Instruction;
use crate::{MemoryBus, CPU};

/// Applies `instruction` to the CPU using an already resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, instruction: Instruction, operand: Operand) {
    match instruction {
        Instruction::Adc => alu::adc(cpu, operand),
        Instruction::Sbc => alu::sbc(cpu, operand),
        Instruction::And => alu::and(cpu, operand),
        Instruction::Ora => alu::ora(cpu, operand),
        Instruction::Eor => alu::eor(cpu, operand),
        Instruction::Cmp => alu::cmp(cpu, operand),
        Instruction::Cpx => alu::cpx(cpu, operand),
        Instruction::Cpy => alu::cpy(cpu, operand),
        Instruction::Bit => alu::bit(cpu, operand),

        Instruction::Bcc
        | Instruction::Bcs
        | Instruction::Beq
        | Instruction::Bne
        | Instruction::Bmi
        | Instruction::Bpl
        | Instruction::Bvc
        | Instruction::Bvs => branches::branch(cpu, instruction, operand),

        Instruction::Asl => shifts::asl(cpu, operand),
        Instruction::Lsr => shifts::lsr(cpu, operand),
        Instruction::Rol => shifts::rol(cpu, operand),
        Instruction::Ror => shifts::ror(cpu, operand),

        Instruction::Lda => load_store::lda(cpu, operand),
        Instruction::Ldx => load_store::ldx(cpu, operand),
        Instruction::Ldy => load_store::ldy(cpu, operand),
        Instruction::Sta => load_store::sta(cpu, operand),
        Instruction::Stx => load_store::stx(cpu, operand),
        Instruction::Sty => load_store::sty(cpu, operand),

        Instruction::Inc => inc_dec::inc(cpu, operand),
        Instruction::Dec => inc_dec::dec(cpu, operand),
        Instruction::Inx => inc_dec::inx(cpu),
        Instruction::Iny => inc_dec::iny(cpu),
        Instruction::Dex => inc_dec::dex(cpu),
        Instruction::Dey => inc_dec::dey(cpu),

        Instruction::Jmp => control::jmp(cpu, operand),
        Instruction::Jsr => control::jsr(cpu, operand),
        Instruction::Rts => control::rts(cpu),
        Instruction::Rti => control::rti(cpu),
        Instruction::Brk => control::brk(cpu),
        Instruction::Nop | Instruction::Illegal => {}

        Instruction::Pha => stack::pha(cpu),
        Instruction::Php => stack::php(cpu),
        Instruction::Pla => stack::pla(cpu),
        Instruction::Plp => stack::plp(cpu),

        Instruction::Clc => flags::clc(cpu),
        Instruction::Sec => flags::sec(cpu),
        Instruction::Cli => flags::cli(cpu),
        Instruction::Sei => flags::sei(cpu),
        Instruction::Cld => flags::cld(cpu),
        Instruction::Sed => flags::sed(cpu),
        Instruction::Clv => flags::clv(cpu),

        Instruction::Tax => transfer::tax(cpu),
        Instruction::Tay => transfer::tay(cpu),
        Instruction::Txa => transfer::txa(cpu),
        Instruction::Tya => transfer::tya(cpu),
        Instruction::Tsx => transfer::tsx(cpu),
        Instruction::Txs => transfer::txs(cpu),
    }
}
