//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete and accurate.

use apple1::{AddressingMode, Instruction, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256);

    let documented = OPCODE_TABLE.iter().filter(|m| !m.is_illegal()).count();
    assert_eq!(documented, 151, "NMOS 6502 has 151 documented opcodes");
}

#[test]
fn test_opcode_table_size_validation() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            (1..=3).contains(&metadata.size_bytes),
            "Opcode 0x{:02X} has invalid size: {}",
            opcode,
            metadata.size_bytes
        );
    }
}

#[test]
fn test_documented_opcodes_cycle_range() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if !metadata.is_illegal() {
            assert!(
                (2..=7).contains(&metadata.base_cycles),
                "Documented opcode 0x{:02X} ({}) has {} cycles",
                opcode,
                metadata.mnemonic,
                metadata.base_cycles
            );
        }
    }
}

#[test]
fn test_illegal_opcodes_are_one_byte_one_cycle() {
    for opcode in [0x02u8, 0x03, 0x1A, 0x80, 0xFF] {
        let metadata = &OPCODE_TABLE[opcode as usize];
        assert!(metadata.is_illegal());
        assert_eq!(metadata.mnemonic, "???");
        assert_eq!(metadata.size_bytes, 1);
        assert_eq!(metadata.base_cycles, 1);
    }
}

#[test]
fn test_known_opcodes() {
    let lda = &OPCODE_TABLE[0xA9];
    assert_eq!(lda.instruction, Instruction::Lda);
    assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
    assert_eq!(lda.base_cycles, 2);
    assert_eq!(lda.size_bytes, 2);

    let jmp_ind = &OPCODE_TABLE[0x6C];
    assert_eq!(jmp_ind.instruction, Instruction::Jmp);
    assert_eq!(jmp_ind.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp_ind.base_cycles, 5);

    let sta_abs_x = &OPCODE_TABLE[0x9D];
    assert_eq!(sta_abs_x.base_cycles, 5);
    assert!(!sta_abs_x.page_penalty, "stores never pay the page crossing cycle");

    let lda_abs_x = &OPCODE_TABLE[0xBD];
    assert_eq!(lda_abs_x.base_cycles, 4);
    assert!(lda_abs_x.page_penalty);

    let inc_abs_x = &OPCODE_TABLE[0xFE];
    assert_eq!(inc_abs_x.base_cycles, 7);
    assert!(!inc_abs_x.page_penalty);
}

#[test]
fn test_mnemonic_matches_instruction() {
    for metadata in OPCODE_TABLE.iter() {
        assert_eq!(metadata.mnemonic, metadata.instruction.mnemonic());
    }
}
