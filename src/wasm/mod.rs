//! WebAssembly bindings for the Apple I emulator.
//!
//! This module provides JavaScript-callable interfaces for running the
//! emulator behind a browser terminal.

pub mod api;

pub use api::Apple1Web;
