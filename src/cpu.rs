//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Opcode trace**: the last opcode fetched, for diagnostics
//!
//! ## Execution Model
//!
//! - `step()`: Execute exactly one instruction
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//! - `reset()`: Reload PC from the reset vector and restore power-on registers
//!
//! Undocumented opcodes execute as one-byte, one-cycle no-ops.

use crate::addressing::{AddressingMode, Operand};
use crate::{instructions, MemoryBus, OPCODE_TABLE};

/// Address of the reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Base address of the hardware stack page.
const STACK_BASE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use apple1::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Last opcode fetched by `step()`
    pub(crate) opcode: u8,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and performs a reset.
    ///
    /// The cycle counter starts at 0.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: RESET_SP,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            opcode: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Re-initializes the registers and loads PC from the reset vector.
    ///
    /// - PC := little-endian word at 0xFFFC/0xFFFD
    /// - SP := 0xFD
    /// - Status := Interrupt Disable set, all other flags clear
    /// - A, X, Y := 0
    ///
    /// Memory contents and the cycle counter are left untouched.
    pub fn reset(&mut self) {
        self.pc = self.memory.read16(RESET_VECTOR);
        self.sp = RESET_SP;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flag_b = false;
        self.set_status(0x24);
        log::debug!("CPU reset, PC=${:04X}", self.pc);
    }

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode byte at PC and advance PC
    /// 2. Look up the opcode in the table
    /// 3. Resolve the operand for the addressing mode (advancing PC past it)
    /// 4. Execute the instruction and add its cycles
    ///
    /// # Examples
    ///
    /// ```
    /// use apple1::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xA9); // LDA #$05
    /// mem.write(0x8001, 0x05);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step();
    /// assert_eq!(cpu.a(), 0x05);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) {
        let opcode = self.fetch_byte();
        self.opcode = opcode;

        let metadata = OPCODE_TABLE[opcode as usize];
        if metadata.is_illegal() {
            log::debug!(
                "illegal opcode ${:02X} at ${:04X}, treated as NOP",
                opcode,
                self.pc.wrapping_sub(1)
            );
        }

        let (operand, page_crossed) = self.resolve_operand(metadata.addressing_mode);

        let mut cycles = metadata.base_cycles as u64;
        if page_crossed && metadata.page_penalty {
            cycles += 1;
        }
        self.cycles = self.cycles.saturating_add(cycles);

        instructions::execute(self, metadata.instruction, operand);
    }

    /// Runs the CPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the number of cycles actually consumed, which may overshoot the
    /// budget by up to one instruction. The counter saturates at `u64::MAX`.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step();
        }

        self.cycles - start_cycles
    }

    // ========== Fetch and Operand Resolution ==========

    fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page; the high byte wraps within zero page.
    fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Consumes the operand bytes for `mode` and returns the resolved operand
    /// along with whether an indexed access crossed a page boundary.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> (Operand, bool) {
        match mode {
            AddressingMode::Implicit => (Operand::Implied, false),
            AddressingMode::Accumulator => (Operand::Accumulator, false),
            AddressingMode::Immediate => (Operand::Immediate(self.fetch_byte()), false),
            AddressingMode::ZeroPage => (Operand::Address(self.fetch_byte() as u16), false),
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                (Operand::Address(zp as u16), false)
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte().wrapping_add(self.y);
                (Operand::Address(zp as u16), false)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let target = self.pc.wrapping_add_signed(offset as i16);
                (Operand::Address(target), false)
            }
            AddressingMode::Absolute => (Operand::Address(self.fetch_word()), false),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (Operand::Address(addr), crosses_page(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (Operand::Address(addr), crosses_page(base, addr))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.memory.read(ptr) as u16;
                // NMOS bug: the high byte is read from the same page
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;
                (Operand::Address((hi << 8) | lo), false)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                (Operand::Address(self.read_zero_page_word(zp)), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_zero_page_word(zp);
                let addr = base.wrapping_add(self.y as u16);
                (Operand::Address(addr), crosses_page(base, addr))
            }
        }
    }

    /// Reads the value an instruction operates on.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.a,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Implied => 0,
        }
    }

    /// Writes a result back to where it came from (accumulator or memory).
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Immediate(_) | Operand::Implied => {}
        }
    }

    // ========== Stack and Flag Helpers ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    /// Updates Z and N from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Unpacks a status byte into the individual flags.
    ///
    /// Bit 5 does not exist in hardware and is ignored; so is the B bit,
    /// which only has meaning in the copy pushed by BRK/PHP.
    pub(crate) fn set_status(&mut self, status: u8) {
        self.flag_n = status & 0b1000_0000 != 0;
        self.flag_v = status & 0b0100_0000 != 0;
        self.flag_d = status & 0b0000_1000 != 0;
        self.flag_i = status & 0b0000_0100 != 0;
        self.flag_z = status & 0b0000_0010 != 0;
        self.flag_c = status & 0b0000_0001 != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the last opcode fetched by `step()`.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (tests, fuzzing, debuggers) ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

fn crosses_page(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}
