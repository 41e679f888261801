//! The binary codec: decoding and encoding of SPIR-V modules.
//!
//! Two symmetrical halves built on the same grammar:
//!
//! - [`Decoder`] - bytes or words in, [`crate::module::Module`] out;
//!   all-or-nothing, with typed errors locating the failure
//! - [`Encoder`] - [`crate::module::Module`] in, bytes or words out;
//!   validates operand tags against the grammar and computes word counts
//!   from what it actually emitted
//!
//! Both take the instruction table as an explicit constructor argument; the
//! convenience entry points on `Module` bind them to the core table.
//!
//! # Round-trip guarantee
//!
//! For any module produced by [`Decoder::decode`] on well-formed input,
//! encoding and decoding again yields an equal module. The encoding is
//! byte-identical except for one canonicalization: nonzero padding bytes
//! after a string literal's terminator are ignored on decode and written
//! back as zeros.
//!
//! # Example
//!
//! ```rust
//! use spirvscope::binary::{Decoder, Encoder};
//! use spirvscope::grammar::InstructionTable;
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::{AddressingModel, Capability, MemoryModel};
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
//! let module = builder.build();
//!
//! let table = InstructionTable::core();
//! let bytes = Encoder::new(table).encode(&module)?;
//! let decoded = Decoder::new(table).decode(&bytes)?;
//! assert_eq!(decoded, module);
//! # Ok::<(), spirvscope::Error>(())
//! ```

mod encoder;
mod parser;
mod reader;

pub use encoder::Encoder;
pub use parser::Decoder;
