//! # Apple I Machine
//!
//! Ties a [`CPU`] to an [`AddressSpace`] and adds the host-facing pieces:
//! keyboard translation, pacing, and image load/save.
//!
//! The embedder owns the pacing loop. Every [`MachineConfig::tick_interval`]
//! it calls [`Apple1::run_tick`], feeds key events through [`Apple1::key`] or
//! [`Apple1::text_input`], and redraws its display.

use std::path::Path;

use crate::address_space::AddressSpace;
use crate::clock::{Clock, SystemClock};
use crate::config::MachineConfig;
use crate::display::DisplayPort;
use crate::{image, Apple1Error, MemoryBus, CPU};

/// Carriage return as the Apple I keyboard sends it (bit 7 set).
pub const KEY_RETURN: u8 = 0x8D;

/// The Apple I's rubout character, used for backspace.
pub const KEY_RUBOUT: u8 = b'_';

/// A host keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    /// A typed character. Letters are upper-cased; NUL, `_` and non-ASCII are
    /// ignored.
    Char(char),
    Return,
    Backspace,
    /// Resets the CPU. Memory is kept.
    Escape,
}

/// Startup text shown before the monitor prompt.
///
/// ```
/// assert_eq!(apple1::banner(16384), "Apple 1 emulator\n16K RAM\n");
/// ```
pub fn banner(ram_size: usize) -> String {
    format!("Apple 1 emulator\n{}K RAM\n", ram_size / 1024)
}

/// A complete Apple I.
///
/// # Examples
///
/// ```
/// use apple1::{Apple1, MachineConfig, ManualClock, TextScreen};
///
/// let config = MachineConfig::default().with_reset_address(0x0300);
/// let mut apple = Apple1::new(config, &[], &[], TextScreen::new(), ManualClock::new()).unwrap();
///
/// // LDA #'H' ; STA $D012
/// apple.load(0x0300, &[0xA9, b'H', 0x8D, 0x12, 0xD0]).unwrap();
/// apple.step();
/// apple.step();
/// assert_eq!(apple.display().line(0), "H");
/// ```
pub struct Apple1<D: DisplayPort, C: Clock = SystemClock> {
    cpu: CPU<AddressSpace<D, C>>,
    config: MachineConfig,
}

impl<D: DisplayPort, C: Clock> Apple1<D, C> {
    /// Builds the machine and resets the CPU.
    pub fn new(
        config: MachineConfig,
        monitor_rom: &[u8],
        basic_rom: &[u8],
        display: D,
        clock: C,
    ) -> Result<Self, Apple1Error> {
        let mut space = AddressSpace::new(config.ram_size, monitor_rom, basic_rom, display, clock)?
            .with_reset_address(config.reset_address);
        space.io_mut().set_display_delay(config.display_delay);

        let cpu = CPU::new(space);
        log::info!(
            "Apple I with {} bytes RAM, reset at ${:04X}",
            config.ram_size,
            config.reset_address
        );

        Ok(Self { cpu, config })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Executes one instruction.
    pub fn step(&mut self) {
        self.cpu.step();
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one pacing interval's worth of instructions and returns the
    /// cycles consumed.
    pub fn run_tick(&mut self) -> u64 {
        let start = self.cpu.cycles();
        for _ in 0..self.config.steps_per_tick {
            self.cpu.step();
        }
        self.cpu.cycles() - start
    }

    pub fn run_for_cycles(&mut self, cycles: u64) -> u64 {
        self.cpu.run_for_cycles(cycles)
    }

    /// Reads through the bus, with the same side effects as a CPU read.
    pub fn read(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), Apple1Error> {
        self.cpu.memory_mut().load(address, bytes)
    }

    pub fn save(&self, start: u16, end: u16) -> Result<Vec<u8>, Apple1Error> {
        self.cpu.memory().save(start, end)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>, address: u16) -> Result<usize, Apple1Error> {
        image::load_file(self.cpu.memory_mut(), path, address)
    }

    pub fn save_file(
        &self,
        path: impl AsRef<Path>,
        start: u16,
        end: u16,
    ) -> Result<usize, Apple1Error> {
        image::save_file(self.cpu.memory(), path, start, end)
    }

    /// Latches a raw keyboard byte for the CPU.
    pub fn set_keyboard_latch(&mut self, byte: u8) {
        self.cpu.memory().io().set_keyboard_latch(byte);
    }

    /// Applies a host key event.
    pub fn key(&mut self, key: HostKey) {
        match key {
            HostKey::Char(ch) => {
                if !ch.is_ascii() {
                    log::trace!("ignored non-ASCII key {:?}", ch);
                    return;
                }
                let upper = ch.to_ascii_uppercase() as u8;
                if upper == 0 {
                    log::trace!("ignored NUL key");
                    return;
                }
                if upper == KEY_RUBOUT {
                    log::trace!("ignored '_' typed as text");
                    return;
                }
                self.set_keyboard_latch(upper);
            }
            HostKey::Return => self.set_keyboard_latch(KEY_RETURN),
            HostKey::Backspace => self.set_keyboard_latch(KEY_RUBOUT),
            HostKey::Escape => self.reset(),
        }
    }

    /// Applies a text-input event. The latch holds one key, so the last
    /// accepted character wins.
    pub fn text_input(&mut self, text: &str) {
        for ch in text.chars() {
            self.key(HostKey::Char(ch));
        }
    }

    pub fn cpu(&self) -> &CPU<AddressSpace<D, C>> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU<AddressSpace<D, C>> {
        &mut self.cpu
    }

    pub fn address_space(&self) -> &AddressSpace<D, C> {
        self.cpu.memory()
    }

    pub fn display(&self) -> &D {
        self.cpu.memory().display()
    }

    pub fn display_mut(&mut self) -> &mut D {
        self.cpu.memory_mut().display_mut()
    }
}
