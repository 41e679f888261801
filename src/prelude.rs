//! # spirvscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used
//! types from the spirvscope library. Import this module to get quick
//! access to the essential types for SPIR-V module analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all spirvscope operations
pub use crate::Error;

/// The result type used throughout spirvscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The structured module representation; decode with `Module::from_bytes`
pub use crate::module::Module;

/// Incremental module construction
pub use crate::module::ModuleBuilder;

/// Low-level module loading
pub use crate::file::File;

// ================================================================================================
// Codec and Disassembly
// ================================================================================================

/// Table-injected decoding
pub use crate::binary::Decoder;

/// Table-injected encoding
pub use crate::binary::Encoder;

/// Textual disassembly
pub use crate::disassembler::Disassembler;

// ================================================================================================
// Instruction Model
// ================================================================================================

/// A single decoded instruction
pub use crate::module::{Instruction, ModuleHeader, Operand};

/// The instruction metadata table
pub use crate::grammar::InstructionTable;

/// The opcode enumeration and the word type
pub use crate::spirv::{Op, Word};
