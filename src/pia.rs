//! Keyboard and display registers of the Apple I PIA (6820).
//!
//! The monitor polls four memory-mapped registers:
//!
//! | Address | Register | Read | Write |
//! |---------|----------|------|-------|
//! | 0xD010  | KBD      | `0x80 \| key`, clears the latch; 0x00 if empty | ignored |
//! | 0xD011  | KBDCR    | 0x80 if a key is latched, else 0x00 | ignored |
//! | 0xD012  | DSP      | busy status | character output |
//! | 0xD013  | DSPCR    | busy status | ignored |
//!
//! The busy status is 0x80 until the display delay following the last
//! character write has passed, then 0x00. While a key is waiting, output is
//! never delayed.

use std::cell::Cell;

use crate::clock::Clock;
use crate::display::DisplayPort;

pub const KBD: u16 = 0xD010;
pub const KBDCR: u16 = 0xD011;
pub const DSP: u16 = 0xD012;
pub const DSPCR: u16 = 0xD013;

/// Clock ticks (100 ns) the display stays busy after a character write.
pub const DEFAULT_DISPLAY_DELAY: u64 = 17;

/// True for the four register addresses.
pub fn is_port(addr: u16) -> bool {
    (KBD..=DSPCR).contains(&addr)
}

const CARRIAGE_RETURN: u8 = 0x0D;
const RUBOUT: u8 = 0x5F;

/// Keyboard latch plus display output and timing state.
///
/// Reads take `&self`; the keyboard latch uses interior mutability so that a
/// CPU read of KBD can acknowledge the key.
pub struct PiaPorts<D: DisplayPort, C: Clock> {
    display: D,
    clock: C,
    keyboard_latch: Cell<Option<u8>>,
    next_ready: Option<u64>,
    display_delay: u64,
}

impl<D: DisplayPort, C: Clock> PiaPorts<D, C> {
    pub fn new(display: D, clock: C) -> Self {
        Self {
            display,
            clock,
            keyboard_latch: Cell::new(None),
            next_ready: None,
            display_delay: DEFAULT_DISPLAY_DELAY,
        }
    }

    pub fn set_display_delay(&mut self, ticks: u64) {
        self.display_delay = ticks;
    }

    /// Latches one key for the CPU, replacing any key not yet read.
    pub fn set_keyboard_latch(&self, byte: u8) {
        self.keyboard_latch.set(Some(byte));
    }

    pub fn keyboard_latch(&self) -> Option<u8> {
        self.keyboard_latch.get()
    }

    /// Timestamp after which the display reports ready, if a write happened.
    pub fn next_ready(&self) -> Option<u64> {
        self.next_ready
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Reads a register. Non-register addresses read 0.
    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            KBD => match self.keyboard_latch.take() {
                Some(byte) => 0x80 | byte,
                None => 0x00,
            },
            KBDCR => {
                if self.keyboard_latch.get().is_some() {
                    0x80
                } else {
                    0x00
                }
            }
            DSP | DSPCR => self.display_status(),
            _ => 0x00,
        }
    }

    /// Writes a register. Only DSP has an effect.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            DSP => self.output(value),
            _ => log::trace!("ignored write ${:02X} to I/O register ${:04X}", value, addr),
        }
    }

    fn display_status(&self) -> u8 {
        match self.next_ready {
            Some(ready_at) if self.clock.now() <= ready_at => 0x80,
            _ => 0x00,
        }
    }

    fn output(&mut self, value: u8) {
        let ch = value & 0x7F;

        if ch == CARRIAGE_RETURN {
            self.display.advance_line();
        }

        if ch == RUBOUT {
            self.display.erase_previous_column();
        } else {
            if (32..=95).contains(&ch) {
                self.display.emit_glyph(ch as char);
            }
            if self.display.cursor_column() >= self.display.window_columns() {
                self.display.advance_line();
            }
        }

        let delay = if self.keyboard_latch.get().is_some() {
            0
        } else {
            self.display_delay
        };
        self.next_ready = Some(self.clock.now().saturating_add(delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::display::TextScreen;

    fn ports() -> (PiaPorts<TextScreen, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (PiaPorts::new(TextScreen::new(), clock.clone()), clock)
    }

    #[test]
    fn test_keyboard_read_clears_latch() {
        let (pia, _) = ports();
        pia.set_keyboard_latch(b'A');
        assert_eq!(pia.read(KBDCR), 0x80);
        assert_eq!(pia.read(KBD), 0xC1);
        assert_eq!(pia.read(KBD), 0x00);
        assert_eq!(pia.read(KBDCR), 0x00);
    }

    #[test]
    fn test_ready_before_first_write() {
        let (pia, _) = ports();
        assert_eq!(pia.read(DSP), 0x00);
        assert_eq!(pia.read(DSPCR), 0x00);
    }

    #[test]
    fn test_busy_window_after_write() {
        let (mut pia, clock) = ports();
        clock.set(1000);
        pia.write(DSP, b'A');
        assert_eq!(pia.next_ready(), Some(1017));
        assert_eq!(pia.read(DSP), 0x80);
        clock.set(1017);
        assert_eq!(pia.read(DSPCR), 0x80);
        clock.set(1018);
        assert_eq!(pia.read(DSP), 0x00);
    }

    #[test]
    fn test_no_delay_while_key_waiting() {
        let (mut pia, clock) = ports();
        clock.set(50);
        pia.set_keyboard_latch(b'X');
        pia.write(DSP, b'A');
        assert_eq!(pia.next_ready(), Some(50));
        clock.advance(1);
        assert_eq!(pia.read(DSP), 0x00);
    }

    #[test]
    fn test_high_bit_stripped_on_output() {
        let (mut pia, _) = ports();
        pia.write(DSP, 0xC8); // 'H' | 0x80
        assert_eq!(pia.display().line(0), "H");
    }

    #[test]
    fn test_lowercase_not_drawn() {
        let (mut pia, _) = ports();
        pia.write(DSP, b'a');
        assert_eq!(pia.display().cursor_column(), 0);
    }

    #[test]
    fn test_wrap_at_window_width() {
        let clock = ManualClock::new();
        let mut pia = PiaPorts::new(TextScreen::with_size(4, 4), clock);
        for byte in b"ABCD" {
            pia.write(DSP, *byte);
        }
        assert_eq!(pia.display().cursor_row(), 1);
        assert_eq!(pia.display().cursor_column(), 0);
    }

    #[test]
    fn test_writes_to_other_registers_ignored() {
        let (mut pia, _) = ports();
        pia.write(KBD, 0x41);
        pia.write(KBDCR, 0xFF);
        pia.write(DSPCR, 0xFF);
        assert_eq!(pia.keyboard_latch(), None);
        assert_eq!(pia.next_ready(), None);
    }
}
