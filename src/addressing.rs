//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolved
//! operand an instruction works on once its addressing mode has been applied.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes follow an opcode and
/// how the CPU turns them into the value or address an instruction operates on.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X. May cost a cycle on page crossing.
    AbsoluteX,

    /// 16-bit address indexed by Y. May cost a cycle on page crossing.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// The pointer's high byte is fetched from the same page when the pointer
    /// sits at $xxFF.
    Indirect,

    /// Indexed indirect: `($40,X)`. The pointer lives at `(operand + X) & 0xFF`.
    IndirectX,

    /// Indirect indexed: `($40),Y`. Y is added to the pointer read from zero page.
    /// May cost a cycle on page crossing.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Operand of an instruction after its addressing mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Nothing to read or write (implied instructions).
    Implied,
    /// The accumulator itself.
    Accumulator,
    /// A constant taken from the instruction stream.
    Immediate(u8),
    /// An effective memory address. Branches resolve to their target address.
    Address(u16),
}
