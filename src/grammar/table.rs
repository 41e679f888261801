//! Static grammar entries for the core instruction set.
//!
//! One entry per opcode: mnemonic plus the ordered logical operand list.
//! The data mirrors the upstream specification's instruction index; the
//! layout conventions are:
//!
//! - result type and result id slots come first where present
//! - `opt(..)` marks operands the instruction may omit entirely
//! - `rep(..)` marks a variadic tail consuming the instruction's remaining
//!   words

use super::{InstructionDef, LogicalOperand, OperandKind as K, OperandQuantifier};
use crate::spirv::Op;

const fn one(kind: K) -> LogicalOperand {
    LogicalOperand {
        kind,
        quantifier: OperandQuantifier::One,
    }
}

const fn opt(kind: K) -> LogicalOperand {
    LogicalOperand {
        kind,
        quantifier: OperandQuantifier::ZeroOrOne,
    }
}

const fn rep(kind: K) -> LogicalOperand {
    LogicalOperand {
        kind,
        quantifier: OperandQuantifier::ZeroOrMore,
    }
}

macro_rules! inst {
    ($op:ident, [$($operand:expr),* $(,)?]) => {
        InstructionDef {
            opcode: Op::$op as u16,
            opname: stringify!($op),
            operands: &[$($operand),*],
        }
    };
}

/// Grammar for the core instruction set.
#[rustfmt::skip]
pub static CORE_INSTRUCTIONS: &[InstructionDef] = &[
    // Miscellaneous
    inst!(Nop, []),
    inst!(Undef, [one(K::IdResultType), one(K::IdResult)]),

    // Debug
    inst!(SourceContinued, [one(K::LiteralString)]),
    inst!(Source, [one(K::SourceLanguage), one(K::LiteralInteger), opt(K::IdRef), opt(K::LiteralString)]),
    inst!(SourceExtension, [one(K::LiteralString)]),
    inst!(Name, [one(K::IdRef), one(K::LiteralString)]),
    inst!(MemberName, [one(K::IdRef), one(K::LiteralInteger), one(K::LiteralString)]),
    inst!(String, [one(K::IdResult), one(K::LiteralString)]),
    inst!(Line, [one(K::IdRef), one(K::LiteralInteger), one(K::LiteralInteger)]),
    inst!(NoLine, []),
    inst!(ModuleProcessed, [one(K::LiteralString)]),

    // Extensions
    inst!(Extension, [one(K::LiteralString)]),
    inst!(ExtInstImport, [one(K::IdResult), one(K::LiteralString)]),
    inst!(ExtInst, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::LiteralInteger), rep(K::IdRef)]),

    // Mode setting
    inst!(MemoryModel, [one(K::AddressingModel), one(K::MemoryModel)]),
    inst!(EntryPoint, [one(K::ExecutionModel), one(K::IdRef), one(K::LiteralString), rep(K::IdRef)]),
    inst!(ExecutionMode, [one(K::IdRef), one(K::ExecutionMode)]),
    inst!(Capability, [one(K::Capability)]),

    // Type declarations
    inst!(TypeVoid, [one(K::IdResult)]),
    inst!(TypeBool, [one(K::IdResult)]),
    inst!(TypeInt, [one(K::IdResult), one(K::LiteralInteger), one(K::LiteralInteger)]),
    inst!(TypeFloat, [one(K::IdResult), one(K::LiteralInteger)]),
    inst!(TypeVector, [one(K::IdResult), one(K::IdRef), one(K::LiteralInteger)]),
    inst!(TypeMatrix, [one(K::IdResult), one(K::IdRef), one(K::LiteralInteger)]),
    inst!(TypeImage, [one(K::IdResult), one(K::IdRef), one(K::Dim), one(K::LiteralInteger), one(K::LiteralInteger), one(K::LiteralInteger), one(K::LiteralInteger), one(K::ImageFormat), opt(K::AccessQualifier)]),
    inst!(TypeSampler, [one(K::IdResult)]),
    inst!(TypeSampledImage, [one(K::IdResult), one(K::IdRef)]),
    inst!(TypeArray, [one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(TypeRuntimeArray, [one(K::IdResult), one(K::IdRef)]),
    inst!(TypeStruct, [one(K::IdResult), rep(K::IdRef)]),
    inst!(TypeOpaque, [one(K::IdResult), one(K::LiteralString)]),
    inst!(TypePointer, [one(K::IdResult), one(K::StorageClass), one(K::IdRef)]),
    inst!(TypeFunction, [one(K::IdResult), one(K::IdRef), rep(K::IdRef)]),

    // Constant creation
    inst!(ConstantTrue, [one(K::IdResultType), one(K::IdResult)]),
    inst!(ConstantFalse, [one(K::IdResultType), one(K::IdResult)]),
    inst!(Constant, [one(K::IdResultType), one(K::IdResult), one(K::LiteralContextDependentNumber)]),
    inst!(ConstantComposite, [one(K::IdResultType), one(K::IdResult), rep(K::IdRef)]),
    inst!(ConstantNull, [one(K::IdResultType), one(K::IdResult)]),
    inst!(SpecConstantTrue, [one(K::IdResultType), one(K::IdResult)]),
    inst!(SpecConstantFalse, [one(K::IdResultType), one(K::IdResult)]),
    inst!(SpecConstant, [one(K::IdResultType), one(K::IdResult), one(K::LiteralContextDependentNumber)]),
    inst!(SpecConstantComposite, [one(K::IdResultType), one(K::IdResult), rep(K::IdRef)]),
    inst!(SpecConstantOp, [one(K::IdResultType), one(K::IdResult), one(K::LiteralInteger), rep(K::IdRef)]),

    // Functions
    inst!(Function, [one(K::IdResultType), one(K::IdResult), one(K::FunctionControl), one(K::IdRef)]),
    inst!(FunctionParameter, [one(K::IdResultType), one(K::IdResult)]),
    inst!(FunctionEnd, []),
    inst!(FunctionCall, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), rep(K::IdRef)]),

    // Memory
    inst!(Variable, [one(K::IdResultType), one(K::IdResult), one(K::StorageClass), opt(K::IdRef)]),
    inst!(ImageTexelPointer, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(Load, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), opt(K::MemoryAccess)]),
    inst!(Store, [one(K::IdRef), one(K::IdRef), opt(K::MemoryAccess)]),
    inst!(CopyMemory, [one(K::IdRef), one(K::IdRef), opt(K::MemoryAccess)]),
    inst!(CopyMemorySized, [one(K::IdRef), one(K::IdRef), one(K::IdRef), opt(K::MemoryAccess)]),
    inst!(AccessChain, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), rep(K::IdRef)]),
    inst!(InBoundsAccessChain, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), rep(K::IdRef)]),
    inst!(PtrAccessChain, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), rep(K::IdRef)]),
    inst!(ArrayLength, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::LiteralInteger)]),

    // Annotations
    inst!(Decorate, [one(K::IdRef), one(K::Decoration)]),
    inst!(MemberDecorate, [one(K::IdRef), one(K::LiteralInteger), one(K::Decoration)]),
    inst!(DecorationGroup, [one(K::IdResult)]),
    inst!(GroupDecorate, [one(K::IdRef), rep(K::IdRef)]),
    inst!(GroupMemberDecorate, [one(K::IdRef), rep(K::PairIdRefLiteralInteger)]),

    // Composites
    inst!(VectorExtractDynamic, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(VectorInsertDynamic, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(VectorShuffle, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), rep(K::LiteralInteger)]),
    inst!(CompositeConstruct, [one(K::IdResultType), one(K::IdResult), rep(K::IdRef)]),
    inst!(CompositeExtract, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), rep(K::LiteralInteger)]),
    inst!(CompositeInsert, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), rep(K::LiteralInteger)]),
    inst!(CopyObject, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(Transpose, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),

    // Image
    inst!(SampledImage, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ImageSampleImplicitLod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), opt(K::ImageOperands)]),
    inst!(ImageSampleExplicitLod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::ImageOperands)]),
    inst!(ImageFetch, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), opt(K::ImageOperands)]),
    inst!(ImageRead, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), opt(K::ImageOperands)]),
    inst!(ImageWrite, [one(K::IdRef), one(K::IdRef), one(K::IdRef), opt(K::ImageOperands)]),
    inst!(Image, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ImageQuerySizeLod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ImageQuerySize, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ImageQueryLod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ImageQueryLevels, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ImageQuerySamples, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),

    // Conversion
    inst!(ConvertFToU, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ConvertFToS, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ConvertSToF, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(ConvertUToF, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(UConvert, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(SConvert, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(FConvert, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(QuantizeToF16, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(Bitcast, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),

    // Arithmetic
    inst!(SNegate, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(FNegate, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(IAdd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FAdd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ISub, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FSub, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(IMul, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FMul, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(UDiv, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SDiv, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FDiv, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(UMod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SRem, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SMod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FRem, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FMod, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(VectorTimesScalar, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(MatrixTimesScalar, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(VectorTimesMatrix, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(MatrixTimesVector, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(MatrixTimesMatrix, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(OuterProduct, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(Dot, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(IAddCarry, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ISubBorrow, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(UMulExtended, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SMulExtended, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),

    // Relational and logical
    inst!(Any, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(All, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(IsNan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(IsInf, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(LogicalEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(LogicalNotEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(LogicalOr, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(LogicalAnd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(LogicalNot, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(Select, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(IEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(INotEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(UGreaterThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SGreaterThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(UGreaterThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SGreaterThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ULessThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SLessThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ULessThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(SLessThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdNotEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordNotEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdLessThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordLessThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdGreaterThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordGreaterThan, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdLessThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordLessThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FOrdGreaterThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(FUnordGreaterThanEqual, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),

    // Bit
    inst!(ShiftRightLogical, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ShiftRightArithmetic, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(ShiftLeftLogical, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(BitwiseOr, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(BitwiseXor, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(BitwiseAnd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef)]),
    inst!(Not, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(BitFieldInsert, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(BitFieldSExtract, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(BitFieldUExtract, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(BitReverse, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(BitCount, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),

    // Derivatives
    inst!(DPdx, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(DPdy, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),
    inst!(Fwidth, [one(K::IdResultType), one(K::IdResult), one(K::IdRef)]),

    // Primitive
    inst!(EmitVertex, []),
    inst!(EndPrimitive, []),

    // Barriers and atomics; scope and semantics operands are ids
    inst!(ControlBarrier, [one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(MemoryBarrier, [one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicLoad, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicStore, [one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicExchange, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicCompareExchange, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicIIncrement, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicIDecrement, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicIAdd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicISub, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicSMin, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicUMin, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicSMax, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicUMax, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicAnd, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicOr, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),
    inst!(AtomicXor, [one(K::IdResultType), one(K::IdResult), one(K::IdRef), one(K::IdRef), one(K::IdRef), one(K::IdRef)]),

    // Control flow
    inst!(Phi, [one(K::IdResultType), one(K::IdResult), rep(K::PairIdRefIdRef)]),
    inst!(LoopMerge, [one(K::IdRef), one(K::IdRef), one(K::LoopControl)]),
    inst!(SelectionMerge, [one(K::IdRef), one(K::SelectionControl)]),
    inst!(Label, [one(K::IdResult)]),
    inst!(Branch, [one(K::IdRef)]),
    inst!(BranchConditional, [one(K::IdRef), one(K::IdRef), one(K::IdRef), rep(K::LiteralInteger)]),
    inst!(Switch, [one(K::IdRef), one(K::IdRef), rep(K::PairLiteralIntegerIdRef)]),
    inst!(Kill, []),
    inst!(Return, []),
    inst!(ReturnValue, [one(K::IdRef)]),
    inst!(Unreachable, []),
];
