//! In-memory representation of a SPIR-V module.
//!
//! A [`Module`] is a header plus an ordered instruction list, nothing more;
//! all structure beyond that ordering (sections, functions, blocks) is a
//! property of the instruction stream itself and is preserved exactly as
//! decoded. Modules are constructed wholesale by the decoder or
//! incrementally by [`ModuleBuilder`]; consumers treat them as immutable and
//! produce new modules rather than editing in place.
//!
//! # Key Types
//! - [`Module`] - header + ordered instructions, the unit of decode/encode
//! - [`ModuleHeader`] - the five fixed header words
//! - [`Instruction`] - opcode, optional result slots, operand list
//! - [`Operand`] - closed tagged union over the operand value shapes
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::module::{Instruction, Operand};
//! use spirvscope::spirv::{Capability, Op};
//!
//! let inst = Instruction::new(
//!     Op::Capability,
//!     None,
//!     None,
//!     vec![Operand::Capability(Capability::Shader)],
//! );
//! assert_eq!(inst.opcode, Op::Capability.as_u16());
//! ```

mod builder;

pub use builder::ModuleBuilder;

use std::path::Path;

use crate::{
    binary::{Decoder, Encoder},
    file::File,
    grammar::InstructionTable,
    spirv::{
        self, AccessQualifier, AddressingModel, BuiltIn, Capability, Decoration, Dim,
        ExecutionMode, ExecutionModel, FunctionControl, ImageFormat, ImageOperands, LoopControl,
        MemoryAccess, MemoryModel, SelectionControl, SourceLanguage, StorageClass, Word,
    },
    Result,
};

/// The five fixed words at the start of every module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleHeader {
    /// Magic number; always [`spirv::MAGIC_NUMBER`] after a successful decode
    pub magic: Word,
    /// Version word, major in bits 16..24, minor in bits 8..16
    pub version: Word,
    /// Tool id of the generator that produced the module
    pub generator: Word,
    /// All ids in the module are below this bound
    pub bound: Word,
    /// Reserved schema word
    pub schema: Word,
}

impl ModuleHeader {
    /// Construct a header from its five words in stream order.
    #[must_use]
    pub fn new(magic: Word, version: Word, generator: Word, bound: Word, schema: Word) -> Self {
        ModuleHeader {
            magic,
            version,
            generator,
            bound,
            schema,
        }
    }

    /// The (major, minor) version pair.
    #[must_use]
    pub fn version_split(&self) -> (u8, u8) {
        spirv::version_split(self.version)
    }
}

/// A decoded operand.
///
/// The set of variants is closed on purpose: the encoder matches
/// exhaustively against the grammar kind at each position, so a mismatched
/// tag is a compile-visible code path, not a runtime surprise. `RawWord`
/// carries the words of instructions whose opcode has no grammar entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Reference to an id
    IdRef(Word),
    /// One-word integer literal (also holds sub-32-bit values)
    LiteralInt32(u32),
    /// Two-word integer literal, low word first on the wire
    LiteralInt64(u64),
    /// One-word float literal
    LiteralFloat32(f32),
    /// Two-word float literal, low word first on the wire
    LiteralFloat64(f64),
    /// NUL-terminated, word-padded UTF-8 string literal
    LiteralString(String),
    /// Capability value
    Capability(Capability),
    /// Source language value
    SourceLanguage(SourceLanguage),
    /// Execution model value
    ExecutionModel(ExecutionModel),
    /// Addressing model value
    AddressingModel(AddressingModel),
    /// Memory model value
    MemoryModel(MemoryModel),
    /// Execution mode value
    ExecutionMode(ExecutionMode),
    /// Storage class value
    StorageClass(StorageClass),
    /// Image dimensionality value
    Dim(Dim),
    /// Image format value
    ImageFormat(ImageFormat),
    /// Image access qualifier value
    AccessQualifier(AccessQualifier),
    /// Decoration value
    Decoration(Decoration),
    /// Built-in semantic value
    BuiltIn(BuiltIn),
    /// Function control mask
    FunctionControl(FunctionControl),
    /// Selection control mask
    SelectionControl(SelectionControl),
    /// Loop control mask
    LoopControl(LoopControl),
    /// Memory access mask
    MemoryAccess(MemoryAccess),
    /// Image operand mask
    ImageOperands(ImageOperands),
    /// Uninterpreted word of an opaque instruction
    RawWord(Word),
}

impl Operand {
    /// Human-readable tag name for error reporting.
    #[must_use]
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Operand::IdRef(_) => "IdRef",
            Operand::LiteralInt32(_) => "LiteralInt32",
            Operand::LiteralInt64(_) => "LiteralInt64",
            Operand::LiteralFloat32(_) => "LiteralFloat32",
            Operand::LiteralFloat64(_) => "LiteralFloat64",
            Operand::LiteralString(_) => "LiteralString",
            Operand::Capability(_) => "Capability",
            Operand::SourceLanguage(_) => "SourceLanguage",
            Operand::ExecutionModel(_) => "ExecutionModel",
            Operand::AddressingModel(_) => "AddressingModel",
            Operand::MemoryModel(_) => "MemoryModel",
            Operand::ExecutionMode(_) => "ExecutionMode",
            Operand::StorageClass(_) => "StorageClass",
            Operand::Dim(_) => "Dim",
            Operand::ImageFormat(_) => "ImageFormat",
            Operand::AccessQualifier(_) => "AccessQualifier",
            Operand::Decoration(_) => "Decoration",
            Operand::BuiltIn(_) => "BuiltIn",
            Operand::FunctionControl(_) => "FunctionControl",
            Operand::SelectionControl(_) => "SelectionControl",
            Operand::LoopControl(_) => "LoopControl",
            Operand::MemoryAccess(_) => "MemoryAccess",
            Operand::ImageOperands(_) => "ImageOperands",
            Operand::RawWord(_) => "RawWord",
        }
    }

    /// Number of words this operand occupies on the wire.
    #[must_use]
    pub fn word_len(&self) -> usize {
        match self {
            Operand::LiteralInt64(_) | Operand::LiteralFloat64(_) => 2,
            Operand::LiteralString(s) => s.len() / 4 + 1,
            _ => 1,
        }
    }
}

/// A single instruction: opcode, optional result slots, operands.
///
/// The opcode is kept raw so instructions outside the metadata table are
/// representable; [`Instruction::op`] recovers the typed opcode when it is
/// a known one. The encoded word count is always `1 + result slots +`
/// the operands' word lengths, recomputed at encode time.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Raw 16-bit opcode
    pub opcode: u16,
    /// Type id of the result, for instructions that have one
    pub result_type: Option<Word>,
    /// Result id, for instructions that produce one
    pub result_id: Option<Word>,
    /// Decoded operands in stream order, result slots excluded
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Construct an instruction with a known opcode.
    #[must_use]
    pub fn new(
        op: spirv::Op,
        result_type: Option<Word>,
        result_id: Option<Word>,
        operands: Vec<Operand>,
    ) -> Self {
        Instruction {
            opcode: op.as_u16(),
            result_type,
            result_id,
            operands,
        }
    }

    /// Construct an opaque instruction from a raw opcode and its words.
    ///
    /// Result slots stay empty; without a grammar entry there is no way to
    /// tell which words would be result ids.
    #[must_use]
    pub fn opaque(opcode: u16, words: Vec<Word>) -> Self {
        Instruction {
            opcode,
            result_type: None,
            result_id: None,
            operands: words.into_iter().map(Operand::RawWord).collect(),
        }
    }

    /// The typed opcode, if this instruction's opcode is a known one.
    #[must_use]
    pub fn op(&self) -> Option<spirv::Op> {
        spirv::Op::from_repr(self.opcode)
    }

    /// Total encoded length in words, including the leading count/opcode word.
    #[must_use]
    pub fn word_count(&self) -> usize {
        1 + usize::from(self.result_type.is_some())
            + usize::from(self.result_id.is_some())
            + self.operands.iter().map(Operand::word_len).sum::<usize>()
    }
}

/// A complete module: header plus ordered instruction stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// The five-word header
    pub header: ModuleHeader,
    /// Instructions in stream order
    pub instructions: Vec<Instruction>,
}

impl Module {
    /// Decode a module from raw bytes using the core instruction table.
    ///
    /// Use [`Decoder`] directly to decode against a different table.
    ///
    /// # Errors
    /// Returns the decode errors described on [`crate::Error`]; decoding is
    /// atomic, so any error means no module.
    pub fn from_bytes(data: &[u8]) -> Result<Module> {
        Decoder::new(InstructionTable::core()).decode(data)
    }

    /// Decode a module from a file on disk using the core instruction table.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read, or
    /// any decode error for its contents.
    pub fn from_file(path: &Path) -> Result<Module> {
        let file = File::from_file(path)?;
        Decoder::new(InstructionTable::core()).decode(file.data())
    }

    /// Encode this module back to bytes using the core instruction table.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOperand`] if an operand's tag does not
    /// match the grammar at its position.
    pub fn assemble(&self) -> Result<Vec<u8>> {
        Encoder::new(InstructionTable::core()).encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spirv::Op;

    #[test]
    fn header_version_split() {
        let header = ModuleHeader::new(spirv::MAGIC_NUMBER, spirv::version(1, 3), 0, 8, 0);
        assert_eq!(header.version_split(), (1, 3));
    }

    #[test]
    fn instruction_word_count() {
        let inst = Instruction::new(
            Op::TypeInt,
            None,
            Some(1),
            vec![Operand::LiteralInt32(32), Operand::LiteralInt32(1)],
        );
        assert_eq!(inst.word_count(), 4);

        let inst = Instruction::new(
            Op::Name,
            None,
            None,
            vec![
                Operand::IdRef(5),
                Operand::LiteralString("main".to_string()),
            ],
        );
        // "main" + NUL fills two words
        assert_eq!(inst.word_count(), 4);
    }

    #[test]
    fn string_operand_word_len() {
        assert_eq!(Operand::LiteralString(String::new()).word_len(), 1);
        assert_eq!(Operand::LiteralString("abc".to_string()).word_len(), 1);
        assert_eq!(Operand::LiteralString("abcd".to_string()).word_len(), 2);
        assert_eq!(Operand::LiteralString("abcdefg".to_string()).word_len(), 2);
    }

    #[test]
    fn opaque_instruction() {
        let inst = Instruction::opaque(4242, vec![1, 2, 3]);
        assert_eq!(inst.op(), None);
        assert_eq!(inst.word_count(), 4);
        assert_eq!(inst.operands[0], Operand::RawWord(1));
    }
}
