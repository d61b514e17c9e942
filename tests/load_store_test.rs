//! Tests for loads, stores, and addressing mode resolution through them.

use apple1::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0xA9, 0x80, 0xA9, 0x05]);

    cpu.step();
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step();
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x05);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_absolute_y_no_page_cross() {
    let mut cpu = setup_cpu(&[0xB9, 0x00, 0x20]); // LDA $2000,Y
    cpu.set_y(0x10);
    cpu.memory_mut().write(0x2010, 0x33);
    cpu.step();
    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu(&[0xB9, 0xFF, 0x20]); // LDA $20FF,Y
    cpu.set_y(0x01);
    cpu.memory_mut().write(0x2100, 0x44);
    cpu.step();
    assert_eq!(cpu.a(), 0x44);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_ldx_zero_page_y_wraps() {
    let mut cpu = setup_cpu(&[0xB6, 0xFF]); // LDX $FF,Y
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0001, 0x7E);
    cpu.step();
    assert_eq!(cpu.x(), 0x7E);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu(&[0xBC, 0x00, 0x30]); // LDY $3000,X
    cpu.set_x(0x05);
    cpu.memory_mut().write(0x3005, 0x99);
    cpu.step();
    assert_eq!(cpu.y(), 0x99);
    assert!(cpu.flag_n());
}

#[test]
fn test_sta_absolute_x_fixed_cycles() {
    let mut cpu = setup_cpu(&[0x9D, 0xFF, 0x20]); // STA $20FF,X
    cpu.set_x(0x01);
    cpu.set_a(0x5A);
    cpu.step();
    assert_eq!(cpu.memory().read(0x2100), 0x5A);
    assert_eq!(cpu.cycles(), 5, "stores always take the extra cycle");
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu(&[0x81, 0x10]); // STA ($10,X)
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x0014, 0x00);
    cpu.memory_mut().write(0x0015, 0x40);
    cpu.set_a(0x11);
    cpu.step();
    assert_eq!(cpu.memory().read(0x4000), 0x11);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stores_leave_flags_alone() {
    let mut cpu = setup_cpu(&[0x86, 0x10, 0x84, 0x11]); // STX $10 ; STY $11
    cpu.set_x(0x00);
    cpu.set_y(0x80);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert_eq!(cpu.memory().read(0x0011), 0x80);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sty_zero_page_x_wraps() {
    let mut cpu = setup_cpu(&[0x94, 0xF0]); // STY $F0,X
    cpu.set_x(0x20);
    cpu.set_y(0x12);
    cpu.step();
    assert_eq!(cpu.memory().read(0x0010), 0x12);
}
