//! Tests for ADC and SBC in binary and decimal mode.
//!
//! Decimal results follow the NMOS 6502: the accumulator and carry are valid
//! BCD, Z comes from the binary result.

use apple1::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

fn adc(a: u8, operand: u8, carry: bool, decimal: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu(&[0x69, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.set_flag_d(decimal);
    cpu.step();
    cpu
}

fn sbc(a: u8, operand: u8, carry: bool, decimal: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu(&[0xE9, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.set_flag_d(decimal);
    cpu.step();
    cpu
}

// ========== ADC Binary ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc(0x10, 0x05, false, false);
    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc(0x10, 0x05, true, false);
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_carry_and_zero() {
    let cpu = adc(0xFF, 0x01, false, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_signed_overflow() {
    // 80 + 80 = 160, out of signed range
    let cpu = adc(0x50, 0x50, false, false);
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());

    // -128 + -1 = -129
    let cpu = adc(0x80, 0xFF, false, false);
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_absolute_x_page_cross() {
    // ADC $20F0,X
    let mut cpu = setup_cpu(&[0x7D, 0xF0, 0x20]);
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x2110, 0x03);
    cpu.set_a(0x01);
    cpu.step();
    assert_eq!(cpu.a(), 0x04);
    assert_eq!(cpu.cycles(), 5);
}

// ========== ADC Decimal ==========

#[test]
fn test_adc_decimal_simple() {
    let cpu = adc(0x12, 0x34, false, true);
    assert_eq!(cpu.a(), 0x46);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_digit_carry() {
    let cpu = adc(0x09, 0x01, false, true);
    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_out() {
    // 58 + 46 + 1 = 105
    let cpu = adc(0x58, 0x46, true, true);
    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());

    // 99 + 1 = 100
    let cpu = adc(0x99, 0x01, false, true);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
}

// ========== SBC Binary ==========

#[test]
fn test_sbc_basic() {
    let cpu = sbc(0x05, 0x03, true, false);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c(), "no borrow");
    assert!(!cpu.flag_z());
}

#[test]
fn test_sbc_borrow_in() {
    let cpu = sbc(0x05, 0x03, false, false);
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_sbc_borrow_out() {
    let cpu = sbc(0x00, 0x01, true, false);
    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_overflow() {
    // 80 - (-80) = 160
    let cpu = sbc(0x50, 0xB0, true, false);
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
}

// ========== SBC Decimal ==========

#[test]
fn test_sbc_decimal_simple() {
    let cpu = sbc(0x46, 0x12, true, true);
    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_digit_borrow() {
    // 40 - 13 = 27
    let cpu = sbc(0x40, 0x13, true, true);
    assert_eq!(cpu.a(), 0x27);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_wraps_to_99() {
    let cpu = sbc(0x00, 0x01, true, true);
    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flag_c());
}
