//! Tests for shifts, increments/decrements, transfers and flag instructions.

use apple1::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

// ========== Shifts ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);
    cpu.step();
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lsr_memory() {
    let mut cpu = setup_cpu(&[0x46, 0x10]); // LSR $10
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.step();
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_rol_through_carry() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);
    cpu.step();
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_absolute_x() {
    let mut cpu = setup_cpu(&[0x7E, 0x00, 0x30]); // ROR $3000,X
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x3001, 0x03);
    cpu.set_flag_c(true);
    cpu.step();
    assert_eq!(cpu.memory().read(0x3001), 0x81);
    assert!(cpu.flag_c());
    assert_eq!(cpu.cycles(), 7);
}

// ========== Increment / Decrement ==========

#[test]
fn test_inc_memory_wraps() {
    let mut cpu = setup_cpu(&[0xE6, 0x20]); // INC $20
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.step();
    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_dec_memory_negative() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x20]); // DEC $2000
    cpu.step();
    assert_eq!(cpu.memory().read(0x2000), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_index_increments_and_decrements() {
    let mut cpu = setup_cpu(&[0xE8, 0xC8, 0xCA, 0x88, 0x88]); // INX INY DEX DEY DEY
    cpu.set_x(0xFF);
    cpu.step();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.y(), 0x01);

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.step();
    cpu.step();
    assert_eq!(cpu.y(), 0xFF);
    assert_eq!(cpu.cycles(), 10);
}

// ========== Transfers ==========

#[test]
fn test_transfers_set_flags() {
    let mut cpu = setup_cpu(&[0xAA, 0xA8, 0x8A, 0x98]); // TAX TAY TXA TYA
    cpu.set_a(0x80);
    cpu.step();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.y(), 0x80);

    cpu.set_x(0x00);
    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tsx_and_txs() {
    let mut cpu = setup_cpu(&[0xBA, 0x9A]); // TSX ; TXS
    cpu.step();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());

    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.step();
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z(), "TXS affects no flags");
}

// ========== Flags ==========

#[test]
fn test_flag_instructions() {
    // SEC SED SEI CLC CLD CLI CLV
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58, 0xB8]);
    cpu.set_flag_i(false);
    cpu.set_flag_v(true);

    cpu.step();
    cpu.step();
    cpu.step();
    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());

    cpu.step();
    cpu.step();
    cpu.step();
    cpu.step();
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.cycles(), 14);
}

#[test]
fn test_nop_and_illegal_opcodes() {
    let mut cpu = setup_cpu(&[0xEA, 0xFF, 0x02]);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4, "illegal opcodes are one-cycle no-ops");
    assert_eq!(cpu.a(), 0x00);
}
