//! # Apple I Address Space
//!
//! Decodes the 64KB bus into RAM, the PIA registers and the two ROMs:
//!
//! | Range            | Contents                          | Access     |
//! |------------------|-----------------------------------|------------|
//! | 0x0000-ram_size  | RAM                               | read/write |
//! | 0xD010-0xD013    | KBD, KBDCR, DSP, DSPCR            | see `pia`  |
//! | 0xE000-0xEFFF    | Integer BASIC ROM (4096 bytes)    | read-only  |
//! | 0xFF00-0xFFFB    | Monitor ROM (252 bytes)           | read-only  |
//! | 0xFFFC-0xFFFD    | Reset vector (configured address) | read-only  |
//! | elsewhere        | unmapped, reads 0                 | rejected   |
//!
//! Rejected writes are logged and counted; they never fail the CPU.

use crate::clock::{Clock, SystemClock};
use crate::display::DisplayPort;
use crate::pia::{self, PiaPorts};
use crate::{Apple1Error, MemoryBus};

/// Largest RAM size that stays clear of the I/O registers.
pub const MAX_RAM_SIZE: usize = 0xD00F;

pub const BASIC_ROM_START: u16 = 0xE000;
pub const BASIC_ROM_END: u16 = 0xEFFF;
pub const BASIC_ROM_SIZE: usize = 4096;

pub const MONITOR_ROM_START: u16 = 0xFF00;
pub const MONITOR_ROM_END: u16 = 0xFFFB;
pub const MONITOR_ROM_SIZE: usize = 252;

pub const RESET_VECTOR_LO: u16 = 0xFFFC;
pub const RESET_VECTOR_HI: u16 = 0xFFFD;

/// Reset address used unless configured otherwise (start of the monitor).
pub const DEFAULT_RESET_ADDRESS: u16 = 0xFF00;

/// RAM, ROMs and I/O of an Apple I.
///
/// # Examples
///
/// ```
/// use apple1::{AddressSpace, ManualClock, MemoryBus, TextScreen};
///
/// let mut bus = AddressSpace::new(4096, &[], &[], TextScreen::new(), ManualClock::new()).unwrap();
/// bus.write(0x0200, 0x42);
/// assert_eq!(bus.read(0x0200), 0x42);
/// assert_eq!(bus.read16(0xFFFC), 0xFF00);
/// ```
pub struct AddressSpace<D: DisplayPort, C: Clock = SystemClock> {
    ram: Vec<u8>,
    monitor_rom: Vec<u8>,
    basic_rom: Vec<u8>,
    reset_address: u16,
    io: PiaPorts<D, C>,
    rejected_writes: u64,
}

impl<D: DisplayPort, C: Clock> AddressSpace<D, C> {
    /// Builds the address space.
    ///
    /// `monitor_rom` and `basic_rom` are zero-padded or truncated to 252 and
    /// 4096 bytes. Fails if `ram_size` would overlap the I/O registers.
    pub fn new(
        ram_size: usize,
        monitor_rom: &[u8],
        basic_rom: &[u8],
        display: D,
        clock: C,
    ) -> Result<Self, Apple1Error> {
        if ram_size > MAX_RAM_SIZE {
            return Err(Apple1Error::RamTooLarge {
                size: ram_size,
                max: MAX_RAM_SIZE,
            });
        }

        Ok(Self {
            ram: vec![0; ram_size],
            monitor_rom: fit_rom("monitor", monitor_rom, MONITOR_ROM_SIZE),
            basic_rom: fit_rom("BASIC", basic_rom, BASIC_ROM_SIZE),
            reset_address: DEFAULT_RESET_ADDRESS,
            io: PiaPorts::new(display, clock),
            rejected_writes: 0,
        })
    }

    pub fn with_reset_address(mut self, address: u16) -> Self {
        self.reset_address = address;
        self
    }

    pub fn set_reset_address(&mut self, address: u16) {
        self.reset_address = address;
    }

    pub fn reset_address(&self) -> u16 {
        self.reset_address
    }

    pub fn ram_size(&self) -> usize {
        self.ram.len()
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    /// Number of writes dropped because they targeted ROM or unmapped space.
    pub fn rejected_writes(&self) -> u64 {
        self.rejected_writes
    }

    pub fn io(&self) -> &PiaPorts<D, C> {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut PiaPorts<D, C> {
        &mut self.io
    }

    pub fn display(&self) -> &D {
        self.io.display()
    }

    pub fn display_mut(&mut self) -> &mut D {
        self.io.display_mut()
    }

    /// Copies `bytes` into RAM at `address`.
    ///
    /// Nothing is written unless the whole image fits.
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), Apple1Error> {
        let start = address as usize;
        let ram_size = self.ram.len();

        if bytes.is_empty() {
            return Err(Apple1Error::EmptyImage);
        }
        if start > ram_size {
            return Err(Apple1Error::AddressOutOfRange {
                address: start,
                ram_size,
            });
        }
        if start + bytes.len() > ram_size {
            return Err(Apple1Error::ImageTooLarge {
                address: start,
                len: bytes.len(),
                ram_size,
            });
        }

        self.ram[start..start + bytes.len()].copy_from_slice(bytes);
        log::info!(
            "loaded {} bytes at ${:04X}-${:04X}",
            bytes.len(),
            start,
            start + bytes.len() - 1
        );
        Ok(())
    }

    /// Returns a copy of RAM from `start` through `end` inclusive.
    pub fn save(&self, start: u16, end: u16) -> Result<Vec<u8>, Apple1Error> {
        let ram_size = self.ram.len();

        if end as usize >= ram_size {
            return Err(Apple1Error::AddressOutOfRange {
                address: end as usize,
                ram_size,
            });
        }
        if end < start {
            return Err(Apple1Error::InvalidRange { start, end });
        }

        log::info!("saved ${:04X}-${:04X}", start, end);
        Ok(self.ram[start as usize..=end as usize].to_vec())
    }

    fn reject_write(&mut self, addr: u16, value: u8) {
        self.rejected_writes += 1;
        let region = match addr {
            BASIC_ROM_START..=BASIC_ROM_END => "BASIC ROM",
            MONITOR_ROM_START..=RESET_VECTOR_HI => "monitor ROM",
            _ => "unmapped memory",
        };
        log::warn!(
            "rejected write ${:02X} to {} at ${:04X}",
            value,
            region,
            addr
        );
    }
}

impl<D: DisplayPort, C: Clock> MemoryBus for AddressSpace<D, C> {
    fn read(&self, addr: u16) -> u8 {
        if let Some(&byte) = self.ram.get(addr as usize) {
            return byte;
        }
        if pia::is_port(addr) {
            return self.io.read(addr);
        }

        match addr {
            BASIC_ROM_START..=BASIC_ROM_END => {
                self.basic_rom[(addr - BASIC_ROM_START) as usize]
            }
            MONITOR_ROM_START..=MONITOR_ROM_END => {
                self.monitor_rom[(addr - MONITOR_ROM_START) as usize]
            }
            RESET_VECTOR_LO => self.reset_address as u8,
            RESET_VECTOR_HI => (self.reset_address >> 8) as u8,
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(cell) = self.ram.get_mut(addr as usize) {
            *cell = value;
        } else if pia::is_port(addr) {
            self.io.write(addr, value);
        } else {
            self.reject_write(addr, value);
        }
    }
}

fn fit_rom(name: &str, image: &[u8], size: usize) -> Vec<u8> {
    if !image.is_empty() && image.len() != size {
        log::warn!(
            "{} ROM image is {} bytes, region holds {}; padding or truncating",
            name,
            image.len(),
            size
        );
    }
    let mut rom = vec![0; size];
    let len = image.len().min(size);
    rom[..len].copy_from_slice(&image[..len]);
    rom
}
