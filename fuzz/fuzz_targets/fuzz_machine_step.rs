//! Fuzz target for the full Apple I machine.
//!
//! Runs arbitrary code from RAM against the real memory map, with arbitrary
//! key presses interleaved, looking for panics in bus decode, the PIA and the
//! display.

#![no_main]

use apple1::{Apple1, HostKey, MachineConfig, ManualClock, TextScreen};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzKey {
    Char(char),
    Return,
    Backspace,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Loaded at 0x0000 and executed from there
    program: Vec<u8>,
    /// Small RAM sizes exercise the unmapped region
    ram_pages: u8,
    keys: Vec<(u8, FuzzKey)>,
    clock_steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let ram_size = (input.ram_pages as usize + 1) * 256;
    let config = MachineConfig::default()
        .with_ram_size(ram_size)
        .with_reset_address(0x0000);
    let clock = ManualClock::new();
    let mut apple = match Apple1::new(config, &[], &[], TextScreen::with_size(40, 24), clock.clone()) {
        Ok(apple) => apple,
        Err(_) => return,
    };

    let program: Vec<u8> = input.program.into_iter().take(ram_size).collect();
    if !program.is_empty() {
        apple.load(0x0000, &program).unwrap();
    }

    let mut keys = input.keys.into_iter().peekable();
    for step in 0..1024u32 {
        while let Some((at, _)) = keys.peek() {
            if u32::from(*at) * 4 > step {
                break;
            }
            if let Some((_, key)) = keys.next() {
                apple.key(match key {
                    FuzzKey::Char(ch) => HostKey::Char(ch),
                    FuzzKey::Return => HostKey::Return,
                    FuzzKey::Backspace => HostKey::Backspace,
                });
            }
        }
        apple.step();
        clock.advance(u64::from(input.clock_steps));
    }

    let screen = apple.display();
    assert!(screen.cursor_row() < screen.rows());
});
