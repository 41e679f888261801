//! The instruction metadata table: per-opcode operand layouts.
//!
//! The codec and disassembler interpret instruction words through this
//! table. For every opcode it answers: what is the mnemonic, which operand
//! kinds follow the first word, in what order, and with which quantifiers
//! (required / optional / variadic tail). The table contents are the
//! checked-in output of the grammar tooling that tracks the upstream
//! specification; this module only defines the lookup machinery around the
//! static data in [`table`].
//!
//! The table is consumed through [`InstructionTable`], an explicitly
//! constructed read-only lookup object handed to the codec and disassembler
//! constructors. [`InstructionTable::core`] returns the process-wide shared
//! instance for the core instruction set; it is built once and never
//! mutated, so sharing it across threads needs no locking.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::grammar::InstructionTable;
//! use spirvscope::spirv::Op;
//!
//! let table = InstructionTable::core();
//! let def = table.lookup_opcode(Op::MemoryModel.as_u16()).unwrap();
//! assert_eq!(def.opname, "MemoryModel");
//! assert_eq!(def.operands.len(), 2);
//! ```

mod table;

use std::{collections::HashMap, sync::OnceLock};

use crate::spirv::{Decoration, ExecutionMode, ImageOperands, LoopControl, MemoryAccess};

pub use table::CORE_INSTRUCTIONS;

/// The kind of a single logical operand position.
///
/// Kinds fall into four groups: the result slots (`IdResultType`,
/// `IdResult`), plain values (ids, literals, strings), value enums, and
/// bitmasks. Pair kinds cover the instructions whose variadic tail repeats
/// a two-word unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum OperandKind {
    IdResultType,
    IdResult,
    IdRef,
    LiteralInteger,
    LiteralString,
    /// Literal whose word length depends on a type known from context
    /// (`OpConstant`/`OpSpecConstant` result types).
    LiteralContextDependentNumber,
    /// Repeated (literal, id) unit, e.g. `OpSwitch` cases.
    PairLiteralIntegerIdRef,
    /// Repeated (id, literal) unit, e.g. `OpGroupMemberDecorate` targets.
    PairIdRefLiteralInteger,
    /// Repeated (id, id) unit, e.g. `OpPhi` incoming pairs.
    PairIdRefIdRef,
    SourceLanguage,
    ExecutionModel,
    AddressingModel,
    MemoryModel,
    ExecutionMode,
    StorageClass,
    Dim,
    ImageFormat,
    AccessQualifier,
    Decoration,
    BuiltIn,
    Capability,
    FunctionControl,
    SelectionControl,
    LoopControl,
    MemoryAccess,
    ImageOperands,
}

impl OperandKind {
    /// Human-readable kind name for error reporting.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OperandKind::IdResultType => "IdResultType",
            OperandKind::IdResult => "IdResult",
            OperandKind::IdRef => "IdRef",
            OperandKind::LiteralInteger => "LiteralInteger",
            OperandKind::LiteralString => "LiteralString",
            OperandKind::LiteralContextDependentNumber => "LiteralContextDependentNumber",
            OperandKind::PairLiteralIntegerIdRef => "PairLiteralIntegerIdRef",
            OperandKind::PairIdRefLiteralInteger => "PairIdRefLiteralInteger",
            OperandKind::PairIdRefIdRef => "PairIdRefIdRef",
            OperandKind::SourceLanguage => "SourceLanguage",
            OperandKind::ExecutionModel => "ExecutionModel",
            OperandKind::AddressingModel => "AddressingModel",
            OperandKind::MemoryModel => "MemoryModel",
            OperandKind::ExecutionMode => "ExecutionMode",
            OperandKind::StorageClass => "StorageClass",
            OperandKind::Dim => "Dim",
            OperandKind::ImageFormat => "ImageFormat",
            OperandKind::AccessQualifier => "AccessQualifier",
            OperandKind::Decoration => "Decoration",
            OperandKind::BuiltIn => "BuiltIn",
            OperandKind::Capability => "Capability",
            OperandKind::FunctionControl => "FunctionControl",
            OperandKind::SelectionControl => "SelectionControl",
            OperandKind::LoopControl => "LoopControl",
            OperandKind::MemoryAccess => "MemoryAccess",
            OperandKind::ImageOperands => "ImageOperands",
        }
    }
}

/// How many times a logical operand position may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandQuantifier {
    /// Exactly once.
    One,
    /// At most once; absent when the instruction's words run out first.
    ZeroOrOne,
    /// Any number of times; consumes the instruction's remaining words.
    ZeroOrMore,
}

/// One logical operand position in an instruction's grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalOperand {
    /// Operand kind at this position
    pub kind: OperandKind,
    /// Occurrence count for this position
    pub quantifier: OperandQuantifier,
}

/// Grammar entry for a single opcode.
#[derive(Debug, PartialEq, Eq)]
pub struct InstructionDef {
    /// Raw 16-bit opcode value
    pub opcode: u16,
    /// Mnemonic without the `Op` prefix
    pub opname: &'static str,
    /// Ordered logical operand positions
    pub operands: &'static [LogicalOperand],
}

impl InstructionDef {
    /// Returns `true` if the grammar ends in a variadic position.
    #[must_use]
    pub fn has_variadic_tail(&self) -> bool {
        matches!(
            self.operands.last(),
            Some(LogicalOperand {
                quantifier: OperandQuantifier::ZeroOrMore,
                ..
            })
        )
    }
}

/// Read-only lookup over a set of [`InstructionDef`] entries.
///
/// Built once from a static definition slice; both maps borrow the static
/// entries, so lookups hand out `&'static InstructionDef` references that
/// outlive the table itself.
pub struct InstructionTable {
    by_opcode: HashMap<u16, &'static InstructionDef>,
    by_name: HashMap<&'static str, &'static InstructionDef>,
}

impl InstructionTable {
    /// Build a table over the given definitions.
    ///
    /// Later duplicates win, which lets a caller layer extension grammars
    /// over the core set.
    #[must_use]
    pub fn new(defs: &'static [InstructionDef]) -> InstructionTable {
        let mut by_opcode = HashMap::with_capacity(defs.len());
        let mut by_name = HashMap::with_capacity(defs.len());
        for def in defs {
            by_opcode.insert(def.opcode, def);
            by_name.insert(def.opname, def);
        }

        InstructionTable { by_opcode, by_name }
    }

    /// The shared table for the core instruction set.
    pub fn core() -> &'static InstructionTable {
        static CORE: OnceLock<InstructionTable> = OnceLock::new();
        CORE.get_or_init(|| InstructionTable::new(CORE_INSTRUCTIONS))
    }

    /// Look up the grammar entry for a raw opcode.
    #[must_use]
    pub fn lookup_opcode(&self, opcode: u16) -> Option<&'static InstructionDef> {
        self.by_opcode.get(&opcode).copied()
    }

    /// Look up the grammar entry for a mnemonic (without the `Op` prefix).
    #[must_use]
    pub fn lookup_mnemonic(&self, opname: &str) -> Option<&'static InstructionDef> {
        self.by_name.get(opname).copied()
    }

    /// Number of opcodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_opcode.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_opcode.is_empty()
    }
}

/// Trailing operand kinds introduced by a value-enum operand.
///
/// Some enum values extend their instruction with parameters, e.g.
/// `Decoration::Location` is followed by one literal and
/// `ExecutionMode::LocalSize` by three. Values not listed here take no
/// parameters.
#[must_use]
pub fn enum_parameters(kind: OperandKind, value: u32) -> &'static [OperandKind] {
    const LIT: &[OperandKind] = &[OperandKind::LiteralInteger];
    const LIT3: &[OperandKind] = &[
        OperandKind::LiteralInteger,
        OperandKind::LiteralInteger,
        OperandKind::LiteralInteger,
    ];

    match kind {
        OperandKind::Decoration => match Decoration::from_repr(value) {
            Some(
                Decoration::SpecId
                | Decoration::ArrayStride
                | Decoration::MatrixStride
                | Decoration::Stream
                | Decoration::Location
                | Decoration::Component
                | Decoration::Index
                | Decoration::Binding
                | Decoration::DescriptorSet
                | Decoration::Offset
                | Decoration::XfbBuffer
                | Decoration::XfbStride
                | Decoration::InputAttachmentIndex
                | Decoration::Alignment
                // Attribute/mode enums surface as raw literals; they occupy
                // one word each, which is all the codec needs to know.
                | Decoration::FuncParamAttr
                | Decoration::FPRoundingMode
                | Decoration::FPFastMathMode,
            ) => LIT,
            Some(Decoration::BuiltIn) => &[OperandKind::BuiltIn],
            Some(Decoration::LinkageAttributes) => {
                &[OperandKind::LiteralString, OperandKind::LiteralInteger]
            }
            _ => &[],
        },
        OperandKind::ExecutionMode => match ExecutionMode::from_repr(value) {
            Some(
                ExecutionMode::Invocations
                | ExecutionMode::OutputVertices
                | ExecutionMode::VecTypeHint,
            ) => LIT,
            Some(ExecutionMode::LocalSize | ExecutionMode::LocalSizeHint) => LIT3,
            _ => &[],
        },
        _ => &[],
    }
}

/// Trailing operand kinds introduced by a single set bit of a mask operand.
///
/// Bits are processed in ascending order; each contributes its parameters
/// in turn.
#[must_use]
pub fn mask_bit_parameters(kind: OperandKind, bit: u32) -> &'static [OperandKind] {
    const LIT: &[OperandKind] = &[OperandKind::LiteralInteger];
    const ID: &[OperandKind] = &[OperandKind::IdRef];
    const ID2: &[OperandKind] = &[OperandKind::IdRef, OperandKind::IdRef];

    match kind {
        OperandKind::MemoryAccess if bit == MemoryAccess::ALIGNED.bits() => LIT,
        OperandKind::LoopControl if bit == LoopControl::DEPENDENCY_LENGTH.bits() => LIT,
        OperandKind::ImageOperands if bit == ImageOperands::GRAD.bits() => ID2,
        OperandKind::ImageOperands if ImageOperands::from_bits(bit).is_some() => ID,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spirv::Op;

    #[test]
    fn core_table_lookup() {
        let table = InstructionTable::core();
        assert!(!table.is_empty());

        let nop = table.lookup_opcode(Op::Nop.as_u16()).unwrap();
        assert_eq!(nop.opname, "Nop");
        assert!(nop.operands.is_empty());

        let by_name = table.lookup_mnemonic("TypeInt").unwrap();
        assert_eq!(by_name.opcode, Op::TypeInt.as_u16());
        assert_eq!(by_name.operands.len(), 3);
    }

    #[test]
    fn unknown_opcode_misses() {
        let table = InstructionTable::core();
        assert!(table.lookup_opcode(0xFFFF).is_none());
        assert!(table.lookup_mnemonic("NotAnInstruction").is_none());
    }

    #[test]
    fn variadic_tail_flag() {
        let table = InstructionTable::core();
        assert!(table
            .lookup_mnemonic("EntryPoint")
            .unwrap()
            .has_variadic_tail());
        assert!(!table.lookup_mnemonic("MemoryModel").unwrap().has_variadic_tail());
    }

    #[test]
    fn decoration_parameters() {
        let params = enum_parameters(OperandKind::Decoration, Decoration::Location as u32);
        assert_eq!(params, &[OperandKind::LiteralInteger]);

        let params = enum_parameters(OperandKind::Decoration, Decoration::BuiltIn as u32);
        assert_eq!(params, &[OperandKind::BuiltIn]);

        let params = enum_parameters(OperandKind::Decoration, Decoration::Block as u32);
        assert!(params.is_empty());
    }

    #[test]
    fn execution_mode_parameters() {
        let params = enum_parameters(OperandKind::ExecutionMode, ExecutionMode::LocalSize as u32);
        assert_eq!(params.len(), 3);

        let params =
            enum_parameters(OperandKind::ExecutionMode, ExecutionMode::OriginUpperLeft as u32);
        assert!(params.is_empty());
    }

    #[test]
    fn mask_parameters() {
        let params = mask_bit_parameters(OperandKind::MemoryAccess, MemoryAccess::ALIGNED.bits());
        assert_eq!(params, &[OperandKind::LiteralInteger]);

        let params = mask_bit_parameters(OperandKind::ImageOperands, ImageOperands::GRAD.bits());
        assert_eq!(params.len(), 2);

        let params = mask_bit_parameters(OperandKind::MemoryAccess, MemoryAccess::VOLATILE.bits());
        assert!(params.is_empty());
    }
}
