//! Grammar-driven module decoding.
//!
//! [`Decoder`] turns a byte or word buffer into a [`Module`]. Decoding is
//! atomic: either every instruction parses, or a typed error comes back and
//! no module is produced. The decoder owns no state between calls; the
//! injected [`InstructionTable`] tells it how to interpret each opcode's
//! operand words.
//!
//! Instructions whose opcode has no table entry are preserved as opaque
//! instructions carrying their raw words, so modules using newer or
//! extension opcodes survive a decode/encode round trip untouched.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::binary::Decoder;
//! use spirvscope::grammar::InstructionTable;
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::Capability;
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! let module = builder.build();
//!
//! let bytes = module.assemble()?;
//! let decoded = Decoder::new(InstructionTable::core()).decode(&bytes)?;
//! assert_eq!(decoded, module);
//! # Ok::<(), spirvscope::Error>(())
//! ```

use std::collections::HashMap;

use super::reader::WordReader;
use crate::{
    file::io::{bytes_to_words, join_u64},
    grammar::{self, InstructionDef, InstructionTable, OperandKind},
    module::{Instruction, Module, ModuleHeader, Operand},
    spirv::{
        self, AccessQualifier, AddressingModel, BuiltIn, Capability, Decoration, Dim,
        ExecutionMode, ExecutionModel, FunctionControl, ImageFormat, ImageOperands, LoopControl,
        MemoryAccess, MemoryModel, Op, SelectionControl, SourceLanguage, StorageClass, Word,
    },
    Error, Result,
};

/// Decodes SPIR-V binaries against an injected instruction table.
pub struct Decoder<'a> {
    table: &'a InstructionTable,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over the given instruction table.
    #[must_use]
    pub fn new(table: &'a InstructionTable) -> Self {
        Decoder { table }
    }

    /// Decode a module from raw bytes.
    ///
    /// # Errors
    /// Any of the decode errors on [`crate::Error`]; see the module docs for
    /// the atomicity contract.
    pub fn decode(&self, data: &[u8]) -> Result<Module> {
        let words = bytes_to_words(data)?;
        self.decode_words(&words)
    }

    /// Decode a module from a word buffer.
    ///
    /// # Errors
    /// Same contract as [`Decoder::decode`].
    pub fn decode_words(&self, words: &[Word]) -> Result<Module> {
        Parser::new(self.table, words).parse()
    }
}

/// Numeric type of an id, tracked to size context-dependent literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericType {
    Integer(u32),
    Float(u32),
}

/// Tracks ids to their numeric types.
///
/// Ids whose type cannot be resolved are silently skipped; the literal
/// parser falls back to a single word for them.
#[derive(Debug, Default)]
struct TypeTracker {
    types: HashMap<Word, NumericType>,
}

impl TypeTracker {
    fn track(&mut self, inst: &Instruction) {
        let Some(rid) = inst.result_id else {
            return;
        };

        match inst.op() {
            Some(Op::TypeInt) => {
                if let Some(Operand::LiteralInt32(width)) = inst.operands.first() {
                    self.types.insert(rid, NumericType::Integer(*width));
                }
            }
            Some(Op::TypeFloat) => {
                if let Some(Operand::LiteralInt32(width)) = inst.operands.first() {
                    self.types.insert(rid, NumericType::Float(*width));
                }
            }
            _ => {
                if let Some(resolved) = inst.result_type.and_then(|t| self.resolve(t)) {
                    self.types.insert(rid, resolved);
                }
            }
        }
    }

    fn resolve(&self, id: Word) -> Option<NumericType> {
        self.types.get(&id).copied()
    }
}

struct Parser<'a> {
    table: &'a InstructionTable,
    reader: WordReader<'a>,
    types: TypeTracker,
    /// 1-based index of the instruction being parsed; 0 means the header.
    inst_index: usize,
}

fn split_word_count_and_opcode(word: Word) -> (u16, u16) {
    #[allow(clippy::cast_possible_truncation)]
    let pair = ((word >> 16) as u16, (word & 0xffff) as u16);
    pair
}

impl<'a> Parser<'a> {
    fn new(table: &'a InstructionTable, words: &'a [Word]) -> Self {
        Parser {
            table,
            reader: WordReader::new(words),
            types: TypeTracker::default(),
            inst_index: 0,
        }
    }

    fn parse(mut self) -> Result<Module> {
        let header = self.parse_header()?;

        let mut instructions = Vec::new();
        while !self.reader.is_at_end() {
            let inst = self.parse_inst()?;
            self.types.track(&inst);
            instructions.push(inst);
        }

        Ok(Module {
            header,
            instructions,
        })
    }

    fn parse_header(&mut self) -> Result<ModuleHeader> {
        let magic = self.reader.word()?;
        if magic != spirv::MAGIC_NUMBER {
            if magic == spirv::MAGIC_NUMBER.swap_bytes() {
                return Err(Error::UnsupportedEndianness);
            }
            return Err(Error::InvalidMagic(magic));
        }

        let version = self.reader.word()?;
        let (major, minor) = spirv::version_split(version);
        if major != 1 {
            return Err(Error::UnsupportedVersion { major, minor });
        }

        let generator = self.reader.word()?;
        let bound = self.reader.word()?;
        let schema = self.reader.word()?;

        Ok(ModuleHeader::new(magic, version, generator, bound, schema))
    }

    fn parse_inst(&mut self) -> Result<Instruction> {
        self.inst_index += 1;
        let inst_offset = self.reader.byte_offset();

        let first = self.reader.word()?;
        let (word_count, opcode) = split_word_count_and_opcode(first);
        if word_count == 0 {
            return Err(Error::WordCountZero {
                offset: inst_offset,
                index: self.inst_index,
            });
        }

        let operand_words = usize::from(word_count) - 1;
        if self.reader.remaining() < operand_words {
            return Err(Error::Truncated {
                offset: self.reader.byte_len(),
            });
        }

        self.reader.set_limit(operand_words);
        let inst = match self.table.lookup_opcode(opcode) {
            Some(def) => {
                let inst = self.parse_operands(def)?;
                if !self.reader.limit_reached() {
                    return Err(Error::OperandExceeded {
                        offset: self.reader.byte_offset(),
                        index: self.inst_index,
                    });
                }
                inst
            }
            None => {
                log::debug!(
                    "opcode {opcode} at byte offset {inst_offset} has no grammar entry, \
                     keeping instruction #{} opaque",
                    self.inst_index
                );
                Instruction::opaque(opcode, self.reader.take_limited())
            }
        };
        self.reader.clear_limit();

        Ok(inst)
    }

    /// Read one word, stamping the current instruction index onto operand
    /// errors coming out of the reader.
    fn word(&mut self) -> Result<Word> {
        match self.reader.word() {
            Err(Error::OperandExpected { offset, .. }) => Err(Error::OperandExpected {
                offset,
                index: self.inst_index,
            }),
            other => other,
        }
    }

    fn parse_operands(&mut self, def: &'static InstructionDef) -> Result<Instruction> {
        let mut result_type = None;
        let mut result_id = None;
        let mut operands = Vec::new();

        let mut logical_index = 0;
        while logical_index < def.operands.len() {
            let logical = &def.operands[logical_index];

            if self.reader.limit_reached() {
                match logical.quantifier {
                    grammar::OperandQuantifier::One => {
                        return Err(Error::OperandExpected {
                            offset: self.reader.byte_offset(),
                            index: self.inst_index,
                        });
                    }
                    grammar::OperandQuantifier::ZeroOrOne
                    | grammar::OperandQuantifier::ZeroOrMore => break,
                }
            }

            match logical.kind {
                OperandKind::IdResultType => result_type = Some(self.word()?),
                OperandKind::IdResult => result_id = Some(self.word()?),
                OperandKind::LiteralContextDependentNumber => {
                    let type_id = result_type.ok_or_else(|| {
                        malformed_error!(
                            "Context-dependent literal without a result type in instruction #{}",
                            self.inst_index
                        )
                    })?;
                    let literal = self.parse_context_literal(type_id)?;
                    operands.push(literal);
                }
                kind => self.parse_operand(kind, &mut operands)?,
            }

            match logical.quantifier {
                grammar::OperandQuantifier::One | grammar::OperandQuantifier::ZeroOrOne => {
                    logical_index += 1;
                }
                grammar::OperandQuantifier::ZeroOrMore => {}
            }
        }

        Ok(Instruction {
            opcode: def.opcode,
            result_type,
            result_id,
            operands,
        })
    }

    /// Decode one concrete operand of the given kind, appending it (and any
    /// parameters its value introduces) to `out`.
    fn parse_operand(&mut self, kind: OperandKind, out: &mut Vec<Operand>) -> Result<()> {
        match kind {
            OperandKind::IdRef => {
                let word = self.word()?;
                out.push(Operand::IdRef(word));
            }
            OperandKind::LiteralInteger => {
                let word = self.word()?;
                out.push(Operand::LiteralInt32(word));
            }
            OperandKind::LiteralString => {
                let string = match self.reader.string() {
                    Err(Error::OperandExpected { offset, .. }) => {
                        return Err(Error::OperandExpected {
                            offset,
                            index: self.inst_index,
                        })
                    }
                    other => other?,
                };
                out.push(Operand::LiteralString(string));
            }
            OperandKind::PairLiteralIntegerIdRef => {
                let literal = self.word()?;
                let id = self.word()?;
                out.push(Operand::LiteralInt32(literal));
                out.push(Operand::IdRef(id));
            }
            OperandKind::PairIdRefLiteralInteger => {
                let id = self.word()?;
                let literal = self.word()?;
                out.push(Operand::IdRef(id));
                out.push(Operand::LiteralInt32(literal));
            }
            OperandKind::PairIdRefIdRef => {
                let first = self.word()?;
                let second = self.word()?;
                out.push(Operand::IdRef(first));
                out.push(Operand::IdRef(second));
            }
            OperandKind::FunctionControl
            | OperandKind::SelectionControl
            | OperandKind::LoopControl
            | OperandKind::MemoryAccess
            | OperandKind::ImageOperands => {
                let word = self.word()?;
                out.push(self.mask_operand(kind, word)?);
                let mut bits = word;
                while bits != 0 {
                    let bit = bits & bits.wrapping_neg();
                    bits &= bits - 1;
                    for param in grammar::mask_bit_parameters(kind, bit) {
                        self.parse_operand(*param, out)?;
                    }
                }
            }
            _ => {
                let word = self.word()?;
                out.push(self.enum_operand(kind, word)?);
                for param in grammar::enum_parameters(kind, word) {
                    self.parse_operand(*param, out)?;
                }
            }
        }

        Ok(())
    }

    fn enum_operand(&self, kind: OperandKind, word: Word) -> Result<Operand> {
        let unknown = || {
            malformed_error!(
                "Unknown {} value {} in instruction #{}",
                kind.name(),
                word,
                self.inst_index
            )
        };

        Ok(match kind {
            OperandKind::SourceLanguage => {
                Operand::SourceLanguage(SourceLanguage::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::ExecutionModel => {
                Operand::ExecutionModel(ExecutionModel::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::AddressingModel => {
                Operand::AddressingModel(AddressingModel::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::MemoryModel => {
                Operand::MemoryModel(MemoryModel::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::ExecutionMode => {
                Operand::ExecutionMode(ExecutionMode::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::StorageClass => {
                Operand::StorageClass(StorageClass::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::Dim => Operand::Dim(Dim::from_repr(word).ok_or_else(unknown)?),
            OperandKind::ImageFormat => {
                Operand::ImageFormat(ImageFormat::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::AccessQualifier => {
                Operand::AccessQualifier(AccessQualifier::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::Decoration => {
                Operand::Decoration(Decoration::from_repr(word).ok_or_else(unknown)?)
            }
            OperandKind::BuiltIn => Operand::BuiltIn(BuiltIn::from_repr(word).ok_or_else(unknown)?),
            OperandKind::Capability => {
                Operand::Capability(Capability::from_repr(word).ok_or_else(unknown)?)
            }
            _ => return Err(unknown()),
        })
    }

    fn mask_operand(&self, kind: OperandKind, word: Word) -> Result<Operand> {
        let unknown = || {
            malformed_error!(
                "Unknown {} bits {:#x} in instruction #{}",
                kind.name(),
                word,
                self.inst_index
            )
        };

        Ok(match kind {
            OperandKind::FunctionControl => {
                Operand::FunctionControl(FunctionControl::from_bits(word).ok_or_else(unknown)?)
            }
            OperandKind::SelectionControl => {
                Operand::SelectionControl(SelectionControl::from_bits(word).ok_or_else(unknown)?)
            }
            OperandKind::LoopControl => {
                Operand::LoopControl(LoopControl::from_bits(word).ok_or_else(unknown)?)
            }
            OperandKind::MemoryAccess => {
                Operand::MemoryAccess(MemoryAccess::from_bits(word).ok_or_else(unknown)?)
            }
            OperandKind::ImageOperands => {
                Operand::ImageOperands(ImageOperands::from_bits(word).ok_or_else(unknown)?)
            }
            _ => return Err(unknown()),
        })
    }

    /// Parse a literal whose word length depends on `type_id`'s definition.
    fn parse_context_literal(&mut self, type_id: Word) -> Result<Operand> {
        let offset = self.reader.byte_offset();

        match self.types.resolve(type_id) {
            Some(NumericType::Integer(width)) if width <= 32 => {
                Ok(Operand::LiteralInt32(self.word()?))
            }
            Some(NumericType::Integer(width)) if width <= 64 => {
                let low = self.word()?;
                let high = self.word()?;
                Ok(Operand::LiteralInt64(join_u64(low, high)))
            }
            Some(NumericType::Float(32)) => Ok(Operand::LiteralFloat32(f32::from_bits(
                self.word()?,
            ))),
            Some(NumericType::Float(64)) => {
                let low = self.word()?;
                let high = self.word()?;
                Ok(Operand::LiteralFloat64(f64::from_bits(join_u64(low, high))))
            }
            // Narrow floats fit one word; their bit pattern is kept raw.
            Some(NumericType::Float(width)) if width < 32 => {
                Ok(Operand::LiteralInt32(self.word()?))
            }
            Some(NumericType::Integer(_) | NumericType::Float(_)) => Err(Error::UnsupportedType {
                offset,
                index: self.inst_index,
            }),
            // Unknown type: treat as a single plain word.
            None => Ok(Operand::LiteralInt32(self.word()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::io::words_to_bytes;
    use crate::spirv::MAGIC_NUMBER;

    fn header_words() -> Vec<Word> {
        vec![MAGIC_NUMBER, spirv::version(1, 0), 0, 0, 0]
    }

    fn inst_word(word_count: u16, op: Op) -> Word {
        (Word::from(word_count) << 16) | Word::from(op.as_u16())
    }

    fn decode(words: &[Word]) -> Result<Module> {
        Decoder::new(InstructionTable::core()).decode_words(words)
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            decode(&[]),
            Err(Error::Truncated { offset: 0 })
        ));
    }

    #[test]
    fn incomplete_header() {
        assert!(matches!(
            decode(&[MAGIC_NUMBER, spirv::version(1, 0)]),
            Err(Error::Truncated { offset: 8 })
        ));
    }

    #[test]
    fn wrong_magic() {
        assert!(matches!(
            decode(&[0xDEAD_BEEF, 0, 0, 0, 0]),
            Err(Error::InvalidMagic(0xDEAD_BEEF))
        ));
    }

    #[test]
    fn swapped_endianness() {
        let words = [MAGIC_NUMBER.swap_bytes(), spirv::version(1, 0), 0, 0, 0];
        assert!(matches!(
            decode(&words),
            Err(Error::UnsupportedEndianness)
        ));
    }

    #[test]
    fn unsupported_version() {
        let words = [MAGIC_NUMBER, spirv::version(2, 0), 0, 0, 0];
        assert!(matches!(
            decode(&words),
            Err(Error::UnsupportedVersion { major: 2, minor: 0 })
        ));
    }

    #[test]
    fn header_only_module() {
        let module = decode(&header_words()).unwrap();
        assert_eq!(module.header.magic, MAGIC_NUMBER);
        assert!(module.instructions.is_empty());
    }

    #[test]
    fn zero_word_count() {
        let mut words = header_words();
        words.push(0);
        assert!(matches!(
            decode(&words),
            Err(Error::WordCountZero { offset: 20, index: 1 })
        ));
    }

    #[test]
    fn declared_count_exceeds_stream() {
        let mut words = header_words();
        words.push(inst_word(3, Op::MemoryModel));
        words.push(0); // one of two declared operand words
        assert!(matches!(
            decode(&words),
            Err(Error::Truncated { offset: 28 })
        ));
    }

    #[test]
    fn one_instruction() {
        let mut words = header_words();
        words.push(inst_word(3, Op::MemoryModel));
        words.push(AddressingModel::Logical as Word);
        words.push(MemoryModel::GLSL450 as Word);

        let module = decode(&words).unwrap();
        assert_eq!(module.instructions.len(), 1);
        let inst = &module.instructions[0];
        assert_eq!(inst.op(), Some(Op::MemoryModel));
        assert_eq!(inst.result_type, None);
        assert_eq!(inst.result_id, None);
        assert_eq!(
            inst.operands,
            vec![
                Operand::AddressingModel(AddressingModel::Logical),
                Operand::MemoryModel(MemoryModel::GLSL450),
            ]
        );
    }

    #[test]
    fn decode_from_bytes() {
        let mut words = header_words();
        words.push(inst_word(2, Op::Capability));
        words.push(Capability::Shader as Word);

        let bytes = words_to_bytes(&words);
        let module = Decoder::new(InstructionTable::core()).decode(&bytes).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![Operand::Capability(Capability::Shader)]
        );
    }

    #[test]
    fn extra_operand() {
        let mut words = header_words();
        words.push(inst_word(2, Op::Nop));
        words.push(0);
        assert!(matches!(
            decode(&words),
            Err(Error::OperandExceeded { offset: 24, index: 1 })
        ));
    }

    #[test]
    fn missing_operand() {
        let mut words = header_words();
        words.push(inst_word(2, Op::MemoryModel));
        words.push(AddressingModel::Logical as Word);
        assert!(matches!(
            decode(&words),
            Err(Error::OperandExpected { offset: 28, index: 1 })
        ));
    }

    #[test]
    fn decoration_with_enum_parameter() {
        let mut words = header_words();
        words.push(inst_word(4, Op::Decorate));
        words.push(5);
        words.push(Decoration::BuiltIn as Word);
        words.push(BuiltIn::InstanceId as Word);

        let module = decode(&words).unwrap();
        let inst = &module.instructions[0];
        assert_eq!(
            inst.operands,
            vec![
                Operand::IdRef(5),
                Operand::Decoration(Decoration::BuiltIn),
                Operand::BuiltIn(BuiltIn::InstanceId),
            ]
        );
    }

    #[test]
    fn decoration_missing_parameter() {
        let mut words = header_words();
        words.push(inst_word(3, Op::Decorate));
        words.push(5);
        words.push(Decoration::BuiltIn as Word);
        assert!(matches!(
            decode(&words),
            Err(Error::OperandExpected { index: 1, .. })
        ));
    }

    #[test]
    fn source_with_all_optional_operands() {
        let mut words = header_words();
        words.push(inst_word(5, Op::Source));
        words.push(SourceLanguage::GLSL as Word);
        words.push(450);
        words.push(6);
        words.push(u32::from_le_bytes(*b"wow\0"));

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![
                Operand::SourceLanguage(SourceLanguage::GLSL),
                Operand::LiteralInt32(450),
                Operand::IdRef(6),
                Operand::LiteralString("wow".to_string()),
            ]
        );
    }

    #[test]
    fn source_without_optional_operands() {
        let mut words = header_words();
        words.push(inst_word(3, Op::Source));
        words.push(SourceLanguage::GLSL as Word);
        words.push(450);

        let module = decode(&words).unwrap();
        assert_eq!(module.instructions[0].operands.len(), 2);
    }

    #[test]
    fn int32_constant_literal() {
        let mut words = header_words();
        words.push(inst_word(4, Op::TypeInt));
        words.push(1); // result id
        words.push(32);
        words.push(1);
        words.push(inst_word(4, Op::Constant));
        words.push(1); // result type
        words.push(2); // result id
        words.push(0x7856_3412);

        let module = decode(&words).unwrap();
        let inst = &module.instructions[1];
        assert_eq!(inst.result_type, Some(1));
        assert_eq!(inst.result_id, Some(2));
        assert_eq!(inst.operands, vec![Operand::LiteralInt32(0x7856_3412)]);
    }

    #[test]
    fn int64_constant_literal() {
        let mut words = header_words();
        words.push(inst_word(4, Op::TypeInt));
        words.push(1);
        words.push(64);
        words.push(1);
        words.push(inst_word(5, Op::Constant));
        words.push(1);
        words.push(2);
        words.push(0x7856_3412);
        words.push(0xEFCD_AB90);

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[1].operands,
            vec![Operand::LiteralInt64(0xEFCD_AB90_7856_3412)]
        );
    }

    #[test]
    fn float_constant_literals() {
        let mut words = header_words();
        words.push(inst_word(3, Op::TypeFloat));
        words.push(1);
        words.push(32);
        words.push(inst_word(4, Op::Constant));
        words.push(1);
        words.push(2);
        words.push(42.42_f32.to_bits());

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[1].operands,
            vec![Operand::LiteralFloat32(42.42)]
        );
    }

    #[test]
    fn float64_constant_literal() {
        let mut words = header_words();
        words.push(inst_word(3, Op::TypeFloat));
        words.push(1);
        words.push(64);
        words.push(inst_word(5, Op::Constant));
        words.push(1);
        words.push(2);
        let bits = (-12.34_f64).to_bits();
        #[allow(clippy::cast_possible_truncation)]
        words.push(bits as u32);
        words.push((bits >> 32) as u32);

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[1].operands,
            vec![Operand::LiteralFloat64(-12.34)]
        );
    }

    #[test]
    fn constant_of_unresolved_type_is_one_word() {
        let mut words = header_words();
        words.push(inst_word(4, Op::Constant));
        words.push(9); // type id never defined
        words.push(2);
        words.push(7);

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![Operand::LiteralInt32(7)]
        );
    }

    #[test]
    fn constant_of_unsupported_width() {
        let mut words = header_words();
        words.push(inst_word(4, Op::TypeInt));
        words.push(1);
        words.push(128);
        words.push(0);
        words.push(inst_word(4, Op::Constant));
        words.push(1);
        words.push(2);
        words.push(7);
        assert!(matches!(
            decode(&words),
            Err(Error::UnsupportedType { index: 2, .. })
        ));
    }

    #[test]
    fn unknown_opcode_is_opaque() {
        let mut words = header_words();
        words.push((3 << 16) | 4242);
        words.push(7);
        words.push(42);

        let module = decode(&words).unwrap();
        let inst = &module.instructions[0];
        assert_eq!(inst.opcode, 4242);
        assert_eq!(inst.op(), None);
        assert_eq!(
            inst.operands,
            vec![Operand::RawWord(7), Operand::RawWord(42)]
        );
    }

    #[test]
    fn unknown_enum_value_rejected() {
        let mut words = header_words();
        words.push(inst_word(2, Op::Capability));
        words.push(0xFFFF);
        assert!(matches!(decode(&words), Err(Error::Malformed { .. })));
    }

    #[test]
    fn memory_access_with_alignment_parameter() {
        let mut words = header_words();
        words.push(inst_word(6, Op::Load));
        words.push(1); // result type
        words.push(2); // result id
        words.push(3); // pointer
        words.push(MemoryAccess::ALIGNED.bits());
        words.push(16); // alignment literal

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![
                Operand::IdRef(3),
                Operand::MemoryAccess(MemoryAccess::ALIGNED),
                Operand::LiteralInt32(16),
            ]
        );
    }

    #[test]
    fn switch_pairs() {
        let mut words = header_words();
        words.push(inst_word(7, Op::Switch));
        words.push(1); // selector
        words.push(2); // default label
        words.push(10);
        words.push(3);
        words.push(20);
        words.push(4);

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![
                Operand::IdRef(1),
                Operand::IdRef(2),
                Operand::LiteralInt32(10),
                Operand::IdRef(3),
                Operand::LiteralInt32(20),
                Operand::IdRef(4),
            ]
        );
    }

    #[test]
    fn phi_pairs_incomplete() {
        let mut words = header_words();
        words.push(inst_word(4, Op::Phi));
        words.push(1);
        words.push(2);
        words.push(3); // half a pair
        assert!(matches!(
            decode(&words),
            Err(Error::OperandExpected { index: 1, .. })
        ));
    }

    #[test]
    fn entry_point_with_interface() {
        let mut words = header_words();
        words.push(inst_word(6, Op::EntryPoint));
        words.push(ExecutionModel::Fragment as Word);
        words.push(4);
        words.push(u32::from_le_bytes(*b"main"));
        words.push(0);
        words.push(9);

        let module = decode(&words).unwrap();
        assert_eq!(
            module.instructions[0].operands,
            vec![
                Operand::ExecutionModel(ExecutionModel::Fragment),
                Operand::IdRef(4),
                Operand::LiteralString("main".to_string()),
                Operand::IdRef(9),
            ]
        );
    }
}
