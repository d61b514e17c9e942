//! Fuzz target for a single instruction on the Apple I memory map.
//!
//! Executes one arbitrary instruction from an arbitrary register state with a
//! fuzzed RAM size, then checks that nothing outside RAM changed.

#![no_main]

use apple1::{pia, AddressSpace, ManualClock, MemoryBus, TextScreen, CPU};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const MONITOR: [u8; 252] = [0xA5; 252];
const BASIC: [u8; 4096] = [0x5A; 4096];

#[derive(Debug, Arbitrary)]
struct Registers {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: Registers,
    /// Any size up to the decode limit; larger sizes must be refused
    ram_size: u16,
    reset_address: u16,
    pc: u16,
    instruction: [u8; 3],
    /// Spread over zero page, the stack and the bytes after PC
    ram_fill: Vec<u8>,
}

/// Every byte the CPU can't legally change: everything above RAM except the
/// PIA registers, whose status bits move with the display clock.
fn outside_ram(bus: &AddressSpace<TextScreen, ManualClock>) -> Vec<(u16, u8)> {
    (bus.ram_size()..=0xFFFF)
        .map(|addr| addr as u16)
        .filter(|&addr| !pia::is_port(addr))
        .map(|addr| (addr, bus.read(addr)))
        .collect()
}

fuzz_target!(|input: FuzzInput| {
    let ram_size = input.ram_size as usize;
    let space = match AddressSpace::new(ram_size, &MONITOR, &BASIC, TextScreen::new(), ManualClock::new()) {
        Ok(space) => space.with_reset_address(input.reset_address),
        Err(_) => {
            assert!(ram_size > 0xD00F);
            return;
        }
    };

    let mut cpu = CPU::new(space);
    for (i, &byte) in input.ram_fill.iter().take(ram_size).enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }
    for (i, &byte) in input.instruction.iter().enumerate() {
        cpu.memory_mut().write(input.pc.wrapping_add(i as u16), byte);
    }

    let before = outside_ram(cpu.memory());
    let rejected_before = cpu.memory().rejected_writes();

    cpu.set_pc(input.pc);
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    let status = input.registers.status;
    cpu.set_flag_c(status & 0x01 != 0);
    cpu.set_flag_z(status & 0x02 != 0);
    cpu.set_flag_i(status & 0x04 != 0);
    cpu.set_flag_d(status & 0x08 != 0);
    cpu.set_flag_v(status & 0x40 != 0);
    cpu.set_flag_n(status & 0x80 != 0);

    cpu.step();

    assert!(cpu.cycles() >= 1 && cpu.cycles() <= 7);
    assert_eq!(cpu.status() & 0x30, 0x20);
    assert_eq!(cpu.memory().read16(0xFFFC), input.reset_address);
    assert_eq!(outside_ram(cpu.memory()), before);
    assert!(cpu.memory().rejected_writes() >= rejected_before);
});
