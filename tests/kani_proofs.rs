//! Kani formal verification proofs for the Apple I emulator.
//!
//! These proofs use bounded model checking to verify CPU and bus invariants
//! hold for ALL possible inputs.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use apple1::{pia, AddressSpace, FlatMemory, ManualClock, MemoryBus, TextScreen, CPU};

    /// Helper function to create a CPU with reset vector at 0x8000
    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        CPU::new(memory)
    }

    // ========== Stack Address Proofs ==========

    /// Proof: Stack address is always in range 0x0100-0x01FF
    #[kani::proof]
    fn proof_stack_address_always_in_stack_page() {
        let sp: u8 = kani::any();
        let stack_addr: u16 = 0x0100 | (sp as u16);

        kani::assert(
            stack_addr >= 0x0100 && stack_addr <= 0x01FF,
            "Stack address must be in range 0x0100-0x01FF",
        );
    }

    // ========== Status Register Proofs ==========

    /// Proof: PLP never sets B and always reports bit 5
    #[kani::proof]
    #[kani::unwind(2)]
    fn proof_plp_status_shape() {
        let status: u8 = kani::any();
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x28);
        cpu.memory_mut().write(0x01FE, status);
        cpu.step();

        kani::assert(cpu.status() & 0x30 == 0x20, "B clear, bit 5 set");
    }

    // ========== Memory Map Proofs ==========

    /// Proof: the I/O window is exactly the four PIA registers
    #[kani::proof]
    fn proof_port_window() {
        let addr: u16 = kani::any();
        kani::assert(
            pia::is_port(addr) == (0xD010..=0xD013).contains(&addr),
            "is_port matches the register range",
        );
    }

    /// Proof: the reset vector bytes never depend on a write
    #[kani::proof]
    #[kani::unwind(64)]
    fn proof_reset_vector_read_only() {
        let reset: u16 = kani::any();
        let addr: u16 = kani::any();
        let value: u8 = kani::any();

        let mut bus = AddressSpace::new(16, &[], &[], TextScreen::with_size(1, 1), ManualClock::new())
            .unwrap()
            .with_reset_address(reset);
        bus.write(addr, value);

        kani::assert(bus.read16(0xFFFC) == reset, "reset vector is synthesized");
    }
}
