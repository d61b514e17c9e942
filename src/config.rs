//! Machine configuration.

use std::time::Duration;

use crate::address_space::{DEFAULT_RESET_ADDRESS, MAX_RAM_SIZE};
use crate::pia::DEFAULT_DISPLAY_DELAY;

/// Tunables for an [`Apple1`](crate::Apple1) instance.
///
/// ```
/// use apple1::MachineConfig;
///
/// let config = MachineConfig::default().with_ram_size(8 * 1024);
/// assert_eq!(config.ram_size, 8192);
/// assert_eq!(config.steps_per_tick, 17050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Bytes of RAM mapped from 0x0000. At most 0xD00F.
    pub ram_size: usize,

    /// Address synthesized at the reset vector.
    pub reset_address: u16,

    /// Instructions executed per pacing tick.
    pub steps_per_tick: u32,

    /// Pacing ticks per second.
    pub ticks_per_second: u32,

    /// Display busy time after a character write, in 100 ns clock ticks.
    pub display_delay: u64,
}

impl MachineConfig {
    pub const MAX_RAM_SIZE: usize = MAX_RAM_SIZE;

    pub fn with_ram_size(mut self, ram_size: usize) -> Self {
        self.ram_size = ram_size;
        self
    }

    pub fn with_reset_address(mut self, reset_address: u16) -> Self {
        self.reset_address = reset_address;
        self
    }

    pub fn with_steps_per_tick(mut self, steps: u32) -> Self {
        self.steps_per_tick = steps;
        self
    }

    pub fn with_ticks_per_second(mut self, ticks: u32) -> Self {
        self.ticks_per_second = ticks;
        self
    }

    pub fn with_display_delay(mut self, ticks: u64) -> Self {
        self.display_delay = ticks;
        self
    }

    /// Wall-clock period between pacing ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            ram_size: 16 * 1024,
            reset_address: DEFAULT_RESET_ADDRESS,
            // ~1 MHz at 60 Hz
            steps_per_tick: 17050,
            ticks_per_second: 60,
            display_delay: DEFAULT_DISPLAY_DELAY,
        }
    }
}
