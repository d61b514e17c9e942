//! WASM API for the Apple I emulator.
//!
//! Provides JavaScript-callable interfaces for frame pacing, keyboard input,
//! screen text, memory image load/save and CPU state inspection.

use crate::{
    banner, clock::TICKS_PER_SECOND, Apple1, Apple1Error, Clock, DisplayPort, HostKey,
    MachineConfig, TextScreen,
};
use wasm_bindgen::prelude::*;

/// Screen that mirrors every change to a JavaScript callback.
///
/// The callback receives one string per event: the glyph, `"\n"` for a new
/// line, or `"\b"` for an erase.
struct JsDisplay {
    screen: TextScreen,
    on_output: js_sys::Function,
}

impl JsDisplay {
    fn notify(&self, text: &str) {
        let _ = self.on_output.call1(&JsValue::NULL, &JsValue::from_str(text));
    }
}

impl DisplayPort for JsDisplay {
    fn emit_glyph(&mut self, glyph: char) {
        self.screen.emit_glyph(glyph);
        self.notify(glyph.encode_utf8(&mut [0; 4]));
    }

    fn advance_line(&mut self) {
        self.screen.advance_line();
        self.notify("\n");
    }

    fn erase_previous_column(&mut self) {
        let before = self.screen.cursor_column();
        self.screen.erase_previous_column();
        if self.screen.cursor_column() != before {
            self.notify("\u{8}");
        }
    }

    fn cursor_column(&self) -> u16 {
        self.screen.cursor_column()
    }

    fn window_columns(&self) -> u16 {
        self.screen.window_columns()
    }
}

/// Browser wall clock. `Date.now()` has millisecond resolution.
struct JsClock;

impl Clock for JsClock {
    fn now(&self) -> u64 {
        (js_sys::Date::now() * (TICKS_PER_SECOND / 1000) as f64) as u64
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<Apple1Error> for JsError {
    fn from(err: Apple1Error) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Apple1Web {
    machine: Apple1<JsDisplay, JsClock>,
}

#[wasm_bindgen]
impl Apple1Web {
    /// Create an Apple I with `ram_kb` kilobytes of RAM and print the banner.
    #[wasm_bindgen(constructor)]
    pub fn new(
        monitor_rom: &[u8],
        basic_rom: &[u8],
        ram_kb: u32,
        on_output: js_sys::Function,
    ) -> Result<Apple1Web, JsError> {
        let config = MachineConfig::default().with_ram_size(ram_kb as usize * 1024);
        let display = JsDisplay {
            screen: TextScreen::new(),
            on_output,
        };
        let mut machine = Apple1::new(config, monitor_rom, basic_rom, display, JsClock)?;

        let text = banner(config.ram_size);
        machine.display_mut().screen.write_str(&text);
        machine.display().notify(&text);

        Ok(Apple1Web { machine })
    }

    /// Run one pacing interval; returns cycles executed
    pub fn run_frame(&mut self) -> f64 {
        self.machine.run_tick() as f64
    }

    /// Milliseconds between `run_frame` calls
    #[wasm_bindgen(getter)]
    pub fn frame_interval_ms(&self) -> f64 {
        self.machine.config().tick_interval().as_secs_f64() * 1000.0
    }

    /// Execute a single instruction
    pub fn step(&mut self) {
        self.machine.step();
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.machine.run_for_cycles(cycles as u64) as u32
    }

    pub fn reset(&mut self) {
        self.machine.reset();
    }

    // Keyboard

    /// Text typed by the user (one key event's worth)
    pub fn text_input(&mut self, text: &str) {
        self.machine.text_input(text);
    }

    pub fn key_return(&mut self) {
        self.machine.key(HostKey::Return);
    }

    pub fn key_backspace(&mut self) {
        self.machine.key(HostKey::Backspace);
    }

    pub fn key_escape(&mut self) {
        self.machine.key(HostKey::Escape);
    }

    // Screen

    #[wasm_bindgen(getter)]
    pub fn screen_text(&self) -> String {
        self.machine.display().screen.text()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_column(&self) -> u16 {
        self.machine.display().screen.cursor_column()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_row(&self) -> u16 {
        self.machine.display().screen.cursor_row()
    }

    // Memory images

    /// Load a binary image into RAM at a hex address such as "0280"
    pub fn load_image(&mut self, address: &str, bytes: &[u8]) -> Result<(), JsError> {
        let address = crate::parse_hex_address(address)?;
        self.machine.load(address, bytes)?;
        Ok(())
    }

    /// Copy RAM between two hex addresses (inclusive)
    pub fn save_image(&self, start: &str, end: &str) -> Result<Vec<u8>, JsError> {
        let start = crate::parse_hex_address(start)?;
        let end = crate::parse_hex_address(end)?;
        Ok(self.machine.save(start, end)?)
    }

    // Memory access methods. Reads go through the bus, so reading KBD
    // acknowledges a pending key.

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.machine.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.machine.write(addr, value);
    }

    /// Read a 256-byte page of RAM (for a memory viewer)
    pub fn get_ram_page(&self, page: u8) -> Vec<u8> {
        let ram = self.machine.address_space().ram();
        let start = (page as usize) << 8;
        (start..start + 256)
            .map(|addr| ram.get(addr).copied().unwrap_or(0))
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn rejected_writes(&self) -> f64 {
        self.machine.address_space().rejected_writes() as f64
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.machine.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.machine.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.machine.cpu().sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.machine.cpu().status()
    }

    #[wasm_bindgen(getter)]
    pub fn opcode(&self) -> u8 {
        self.machine.cpu().opcode()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.machine.cpu().cycles() as f64 // Convert u64 to f64 for JavaScript
    }
}
