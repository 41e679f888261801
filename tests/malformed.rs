//! Malformed-input integration tests: every corruption yields a typed
//! error and never a partial module.

use spirvscope::prelude::*;
use spirvscope::spirv::{AddressingModel, Capability, MemoryModel};

fn sample_bytes() -> Vec<u8> {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
    builder.build().assemble().unwrap()
}

#[test]
fn empty_input_is_truncated() {
    assert!(matches!(
        Module::from_bytes(&[]),
        Err(Error::Truncated { offset: 0 })
    ));
}

#[test]
fn truncation_anywhere_in_header_is_reported() {
    let bytes = sample_bytes();
    for cut in 0..20 {
        let err = Module::from_bytes(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, Error::Truncated { .. }),
            "cut at {cut} gave {err:?}"
        );
    }
}

#[test]
fn truncation_inside_an_instruction_is_reported() {
    let bytes = sample_bytes();
    // Cut one byte off the final instruction's operands.
    let err = Module::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::Truncated { .. }));

    // Cut a whole operand word off; the declared word count now exceeds
    // the stream.
    let err = Module::from_bytes(&bytes[..bytes.len() - 4]).unwrap_err();
    assert!(matches!(err, Error::Truncated { .. }));
}

#[test]
fn any_magic_bit_flip_is_rejected() {
    let bytes = sample_bytes();
    for bit in 0..32 {
        let mut corrupt = bytes.clone();
        corrupt[bit / 8] ^= 1 << (bit % 8);
        let err = Module::from_bytes(&corrupt).unwrap_err();
        assert!(
            matches!(
                err,
                Error::InvalidMagic(_) | Error::UnsupportedEndianness
            ),
            "bit {bit} gave {err:?}"
        );
    }
}

#[test]
fn byte_swapped_module_is_rejected() {
    let bytes = sample_bytes();
    let swapped: Vec<u8> = bytes
        .chunks_exact(4)
        .flat_map(|w| [w[3], w[2], w[1], w[0]])
        .collect();
    assert!(matches!(
        Module::from_bytes(&swapped),
        Err(Error::UnsupportedEndianness)
    ));
}

#[test]
fn future_major_version_is_rejected() {
    let mut bytes = sample_bytes();
    // Version word is the second header word; major sits in bits 16..24.
    bytes[6] = 9;
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::UnsupportedVersion { major: 9, .. })
    ));
}

#[test]
fn zero_word_count_is_rejected() {
    let mut bytes = sample_bytes();
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::WordCountZero { offset: 40, index: 3 })
    ));
}

#[test]
fn surplus_operand_words_are_rejected() {
    let mut bytes = sample_bytes();
    // OpNop claiming two words, dragging a bogus operand.
    bytes.extend_from_slice(&(2u32 << 16).to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::OperandExceeded { index: 3, .. })
    ));
}

#[test]
fn missing_operand_words_are_rejected() {
    let mut bytes = sample_bytes();
    // OpMemoryModel claiming only two words: one operand short.
    let first = (2u32 << 16) | u32::from(Op::MemoryModel.as_u16());
    bytes.extend_from_slice(&first.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::OperandExpected { index: 3, .. })
    ));
}

#[test]
fn unknown_enum_value_is_rejected() {
    let mut bytes = sample_bytes();
    let first = (2u32 << 16) | u32::from(Op::Capability.as_u16());
    bytes.extend_from_slice(&first.to_le_bytes());
    bytes.extend_from_slice(&0xFFFF_0000u32.to_le_bytes());
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn input_with_partial_trailing_word_is_truncated() {
    let mut bytes = sample_bytes();
    bytes.push(0xAB);
    assert!(matches!(
        Module::from_bytes(&bytes),
        Err(Error::Truncated { .. })
    ));
}
