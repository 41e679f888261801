//! Module encoding back to binary form.
//!
//! [`Encoder`] is the mirror of the decoder: it walks each instruction's
//! grammar entry and emits words, validating at every position that the
//! operand's tag matches the kind the grammar declares. The word count in
//! each instruction's first word is computed from what was actually
//! emitted, never trusted from the caller, so a successfully encoded module
//! always has consistent counts.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::binary::Encoder;
//! use spirvscope::grammar::InstructionTable;
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::Capability;
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! let module = builder.build();
//!
//! let bytes = Encoder::new(InstructionTable::core()).encode(&module)?;
//! assert_eq!(bytes.len(), 5 * 4 + 2 * 4);
//! # Ok::<(), spirvscope::Error>(())
//! ```

use crate::{
    file::io::{split_u64, words_to_bytes},
    grammar::{self, InstructionDef, InstructionTable, OperandKind, OperandQuantifier},
    module::{Instruction, Module, Operand},
    spirv::Word,
    Error, Result,
};

/// Encodes modules against an injected instruction table.
pub struct Encoder<'a> {
    table: &'a InstructionTable,
}

impl<'a> Encoder<'a> {
    /// Create an encoder over the given instruction table.
    #[must_use]
    pub fn new(table: &'a InstructionTable) -> Self {
        Encoder { table }
    }

    /// Encode a module to bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOperand`] when an operand's tag does
    /// not match its grammar position, or [`crate::Error::Malformed`] for
    /// structurally unencodable instructions.
    pub fn encode(&self, module: &Module) -> Result<Vec<u8>> {
        Ok(words_to_bytes(&self.encode_words(module)?))
    }

    /// Encode a module to a word buffer.
    ///
    /// # Errors
    /// Same contract as [`Encoder::encode`].
    pub fn encode_words(&self, module: &Module) -> Result<Vec<Word>> {
        let mut words = vec![
            module.header.magic,
            module.header.version,
            module.header.generator,
            module.header.bound,
            module.header.schema,
        ];

        for inst in &module.instructions {
            self.encode_inst(inst, &mut words)?;
        }

        Ok(words)
    }

    fn encode_inst(&self, inst: &Instruction, out: &mut Vec<Word>) -> Result<()> {
        let start = out.len();
        out.push(0); // count/opcode word, patched below

        match self.table.lookup_opcode(inst.opcode) {
            Some(def) => self.encode_operands(inst, def, out)?,
            None => encode_opaque(inst, out)?,
        }

        let word_count = out.len() - start;
        if word_count > usize::from(u16::MAX) {
            return Err(malformed_error!(
                "Instruction is {} words long, word count field holds at most {}",
                word_count,
                u16::MAX
            ));
        }
        #[allow(clippy::cast_possible_truncation)]
        let packed = ((word_count as Word) << 16) | Word::from(inst.opcode);
        out[start] = packed;

        Ok(())
    }

    fn encode_operands(
        &self,
        inst: &Instruction,
        def: &'static InstructionDef,
        out: &mut Vec<Word>,
    ) -> Result<()> {
        let mut position = 0;

        let mut logical_index = 0;
        while logical_index < def.operands.len() {
            let logical = &def.operands[logical_index];

            match logical.kind {
                OperandKind::IdResultType => {
                    let id = inst.result_type.ok_or(Error::InvalidOperand {
                        mnemonic: def.opname,
                        position,
                        found: "nothing",
                        expected: "IdResultType",
                    })?;
                    out.push(id);
                    logical_index += 1;
                    continue;
                }
                OperandKind::IdResult => {
                    let id = inst.result_id.ok_or(Error::InvalidOperand {
                        mnemonic: def.opname,
                        position,
                        found: "nothing",
                        expected: "IdResult",
                    })?;
                    out.push(id);
                    logical_index += 1;
                    continue;
                }
                _ => {}
            }

            if position < inst.operands.len() {
                position += self.emit_operand(def, logical.kind, &inst.operands, position, out)?;
                match logical.quantifier {
                    OperandQuantifier::One | OperandQuantifier::ZeroOrOne => logical_index += 1,
                    OperandQuantifier::ZeroOrMore => {}
                }
            } else {
                match logical.quantifier {
                    OperandQuantifier::One => {
                        return Err(Error::InvalidOperand {
                            mnemonic: def.opname,
                            position,
                            found: "nothing",
                            expected: logical.kind.name(),
                        });
                    }
                    OperandQuantifier::ZeroOrOne | OperandQuantifier::ZeroOrMore => break,
                }
            }
        }

        if position < inst.operands.len() {
            return Err(Error::InvalidOperand {
                mnemonic: def.opname,
                position,
                found: inst.operands[position].tag_name(),
                expected: "no further operands",
            });
        }

        Ok(())
    }

    /// Emit the operand(s) filling one logical slot; returns how many
    /// entries of `operands` were consumed.
    fn emit_operand(
        &self,
        def: &'static InstructionDef,
        kind: OperandKind,
        operands: &[Operand],
        position: usize,
        out: &mut Vec<Word>,
    ) -> Result<usize> {
        let mismatch = |expected: &'static str| {
            let found = match operands.get(position) {
                Some(operand) => operand.tag_name(),
                None => "nothing",
            };
            Error::InvalidOperand {
                mnemonic: def.opname,
                position,
                found,
                expected,
            }
        };

        let Some(operand) = operands.get(position) else {
            return Err(mismatch(kind.name()));
        };

        match kind {
            OperandKind::IdRef => match operand {
                Operand::IdRef(id) => out.push(*id),
                _ => return Err(mismatch("IdRef")),
            },
            OperandKind::LiteralInteger => match operand {
                Operand::LiteralInt32(value) => out.push(*value),
                _ => return Err(mismatch("LiteralInteger")),
            },
            OperandKind::LiteralString => match operand {
                Operand::LiteralString(string) => push_string_words(string, out),
                _ => return Err(mismatch("LiteralString")),
            },
            OperandKind::LiteralContextDependentNumber => match operand {
                Operand::LiteralInt32(value) => out.push(*value),
                Operand::LiteralFloat32(value) => out.push(value.to_bits()),
                Operand::LiteralInt64(value) => {
                    let (low, high) = split_u64(*value);
                    out.push(low);
                    out.push(high);
                }
                Operand::LiteralFloat64(value) => {
                    let (low, high) = split_u64(value.to_bits());
                    out.push(low);
                    out.push(high);
                }
                _ => return Err(mismatch("LiteralContextDependentNumber")),
            },
            OperandKind::PairLiteralIntegerIdRef
            | OperandKind::PairIdRefLiteralInteger
            | OperandKind::PairIdRefIdRef => {
                return self.emit_pair(def, kind, operands, position, out);
            }
            OperandKind::FunctionControl
            | OperandKind::SelectionControl
            | OperandKind::LoopControl
            | OperandKind::MemoryAccess
            | OperandKind::ImageOperands => {
                let bits = match (kind, operand) {
                    (OperandKind::FunctionControl, Operand::FunctionControl(mask)) => mask.bits(),
                    (OperandKind::SelectionControl, Operand::SelectionControl(mask)) => {
                        mask.bits()
                    }
                    (OperandKind::LoopControl, Operand::LoopControl(mask)) => mask.bits(),
                    (OperandKind::MemoryAccess, Operand::MemoryAccess(mask)) => mask.bits(),
                    (OperandKind::ImageOperands, Operand::ImageOperands(mask)) => mask.bits(),
                    _ => return Err(mismatch(kind.name())),
                };
                out.push(bits);

                let mut consumed = 1;
                let mut remaining_bits = bits;
                while remaining_bits != 0 {
                    let bit = remaining_bits & remaining_bits.wrapping_neg();
                    remaining_bits &= remaining_bits - 1;
                    for param in grammar::mask_bit_parameters(kind, bit) {
                        consumed +=
                            self.emit_operand(def, *param, operands, position + consumed, out)?;
                    }
                }
                return Ok(consumed);
            }
            _ => {
                let value = match (kind, operand) {
                    (OperandKind::SourceLanguage, Operand::SourceLanguage(v)) => *v as Word,
                    (OperandKind::ExecutionModel, Operand::ExecutionModel(v)) => *v as Word,
                    (OperandKind::AddressingModel, Operand::AddressingModel(v)) => *v as Word,
                    (OperandKind::MemoryModel, Operand::MemoryModel(v)) => *v as Word,
                    (OperandKind::ExecutionMode, Operand::ExecutionMode(v)) => *v as Word,
                    (OperandKind::StorageClass, Operand::StorageClass(v)) => *v as Word,
                    (OperandKind::Dim, Operand::Dim(v)) => *v as Word,
                    (OperandKind::ImageFormat, Operand::ImageFormat(v)) => *v as Word,
                    (OperandKind::AccessQualifier, Operand::AccessQualifier(v)) => *v as Word,
                    (OperandKind::Decoration, Operand::Decoration(v)) => *v as Word,
                    (OperandKind::BuiltIn, Operand::BuiltIn(v)) => *v as Word,
                    (OperandKind::Capability, Operand::Capability(v)) => *v as Word,
                    _ => return Err(mismatch(kind.name())),
                };
                out.push(value);

                let mut consumed = 1;
                for param in grammar::enum_parameters(kind, value) {
                    consumed += self.emit_operand(def, *param, operands, position + consumed, out)?;
                }
                return Ok(consumed);
            }
        }

        Ok(1)
    }

    fn emit_pair(
        &self,
        def: &'static InstructionDef,
        kind: OperandKind,
        operands: &[Operand],
        position: usize,
        out: &mut Vec<Word>,
    ) -> Result<usize> {
        let (first_kind, second_kind) = match kind {
            OperandKind::PairLiteralIntegerIdRef => {
                (OperandKind::LiteralInteger, OperandKind::IdRef)
            }
            OperandKind::PairIdRefLiteralInteger => {
                (OperandKind::IdRef, OperandKind::LiteralInteger)
            }
            _ => (OperandKind::IdRef, OperandKind::IdRef),
        };

        let mut consumed = self.emit_operand(def, first_kind, operands, position, out)?;
        consumed += self.emit_operand(def, second_kind, operands, position + consumed, out)?;
        Ok(consumed)
    }
}

fn encode_opaque(inst: &Instruction, out: &mut Vec<Word>) -> Result<()> {
    if inst.result_type.is_some() || inst.result_id.is_some() {
        return Err(malformed_error!(
            "Opaque instruction {} cannot carry result ids",
            inst.opcode
        ));
    }

    for (position, operand) in inst.operands.iter().enumerate() {
        match operand {
            Operand::RawWord(word) => out.push(*word),
            other => {
                return Err(Error::InvalidOperand {
                    mnemonic: "(opaque)",
                    position,
                    found: other.tag_name(),
                    expected: "RawWord",
                });
            }
        }
    }

    Ok(())
}

/// Append a string literal: UTF-8 bytes, NUL terminator, zero padding to the
/// next word boundary.
fn push_string_words(string: &str, out: &mut Vec<Word>) {
    let bytes = string.as_bytes();
    for chunk in bytes.chunks(4) {
        let mut word_bytes = [0u8; 4];
        word_bytes[..chunk.len()].copy_from_slice(chunk);
        out.push(Word::from_le_bytes(word_bytes));
    }
    // A full final chunk leaves no room for the terminator; it gets its own
    // zero word, as does the empty string.
    if bytes.len() % 4 == 0 {
        out.push(0);
    }
}
