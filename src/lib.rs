//! # Apple I Emulator Core
//!
//! An NMOS 6502 CPU wired to the Apple I memory map: RAM from 0x0000, the PIA
//! keyboard/display registers at 0xD010-0xD013, Integer BASIC at 0xE000 and
//! the Woz monitor at 0xFF00.
//!
//! ## Quick Start
//!
//! ```rust
//! use apple1::{Apple1, HostKey, MachineConfig, ManualClock, TextScreen};
//!
//! let monitor = std::fs::read("roms/apple1.rom").unwrap_or_default();
//! let basic = std::fs::read("roms/basic.rom").unwrap_or_default();
//!
//! let mut apple = Apple1::new(
//!     MachineConfig::default(),
//!     &monitor,
//!     &basic,
//!     TextScreen::new(),
//!     ManualClock::new(),
//! )
//! .unwrap();
//!
//! apple.key(HostKey::Return);
//! apple.run_tick();
//! ```
//!
//! ## Architecture
//!
//! - **CPU** (`cpu`, `instructions`, `opcodes`, `addressing`): a table-driven
//!   6502 generic over the `MemoryBus` trait
//! - **AddressSpace** (`address_space`): range decode over RAM, ROMs and I/O
//! - **PIA** (`pia`): keyboard latch, character output and the display busy flag
//! - **Host seams**: `DisplayPort` for output, `Clock` for the busy timing
//! - **Machine** (`machine`): keyboard mapping, pacing and image load/save
//!
//! Everything is single-threaded. Read side effects use `Cell`, so the bus
//! types are `!Sync`.

pub mod address_space;
pub mod addressing;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod display;
pub mod image;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod pia;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use address_space::AddressSpace;
pub use addressing::AddressingMode;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MachineConfig;
pub use cpu::CPU;
pub use display::{DisplayPort, TextScreen};
pub use image::{load_file, parse_hex_address, save_file};
pub use machine::{banner, Apple1, HostKey};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use pia::PiaPorts;

use thiserror::Error;

/// Errors from machine construction and memory image handling.
///
/// CPU execution itself never fails.
#[derive(Debug, Error)]
pub enum Apple1Error {
    #[error("requested RAM exceeds max RAM allowed: {size} > {max}")]
    RamTooLarge { size: usize, max: usize },

    #[error("address ${address:04X} is outside RAM (0-${ram_size:04X})")]
    AddressOutOfRange { address: usize, ram_size: usize },

    #[error("{len}-byte image at ${address:04X} does not fit in {ram_size} bytes of RAM")]
    ImageTooLarge {
        address: usize,
        len: usize,
        ram_size: usize,
    },

    #[error("image is empty")]
    EmptyImage,

    #[error("end address ${end:04X} is before start address ${start:04X}")]
    InvalidRange { start: u16, end: u16 },

    #[error("invalid hex address: {0:?}")]
    InvalidAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
