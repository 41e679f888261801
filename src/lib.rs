// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # spirvscope
//!
//! A cross-platform library for parsing, encoding and disassembling SPIR-V
//! binary modules. Built in pure Rust, `spirvscope` decodes a module's word
//! stream into a structured representation, re-encodes it byte-for-byte,
//! and renders it as human-readable assembly, without requiring any
//! graphics driver or external toolchain.
//!
//! ## Features
//!
//! - **Complete binary codec** - Decode and re-encode module headers and
//!   instruction streams with typed, offset-carrying errors
//! - **Grammar-driven operand model** - Operands are decoded through an
//!   instruction metadata table into a closed tagged union, so encode-time
//!   mismatches are caught by exhaustive matching
//! - **Forward-compatible** - Opcodes outside the table round-trip as
//!   opaque instructions carrying their raw words
//! - **Disassembler** - Two-pass name resolution (`OpName` bindings apply
//!   even when they follow the first use), aligned output, symbolic enum
//!   and mask rendering
//! - **Module builder** - Incremental construction with fresh-id allocation
//!   and automatic id-bound computation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spirvscope::prelude::*;
//! use std::path::Path;
//!
//! let module = Module::from_file(Path::new("shader.spv"))?;
//! println!("{}", Disassembler::new().disassemble(&module));
//! # Ok::<(), spirvscope::Error>(())
//! ```
//!
//! ### Building and encoding a module
//!
//! ```rust
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::{AddressingModel, Capability, MemoryModel};
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
//! let module = builder.build();
//!
//! let bytes = module.assemble()?;
//! assert_eq!(spirvscope::Module::from_bytes(&bytes)?, module);
//! # Ok::<(), spirvscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `spirvscope` is organized into several key modules:
//!
//! - [`spirv`] - Core definitions: the word type, header constants, opcode
//!   and operand-value enumerations
//! - [`grammar`] - The instruction metadata table the codec interprets
//!   operands through, consumed as an injected read-only lookup object
//! - [`module`] - The structured representation: header, instructions,
//!   operands, plus the incremental builder
//! - [`binary`] - The codec itself: [`binary::Decoder`] and
//!   [`binary::Encoder`]
//! - [`disassembler`] - Textual rendering of decoded modules
//! - [`file`] - Module loading (memory-mapped or in-memory) and word-level
//!   I/O helpers
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Decoding is atomic:
//! a malformed module yields a typed error naming the byte offset and
//! instruction index of the problem, never a partial module. Disassembly of
//! a successfully decoded module cannot fail; unknown ids degrade to
//! `%<id>` placeholders and unknown opcodes to raw-word rendering.
//!
//! ## Standards Compliance
//!
//! The binary layout and instruction grammar follow the Khronos SPIR-V
//! specification (unified 1.x). Modules using opcodes beyond the built-in
//! grammar still decode, as opaque instructions, and survive a
//! decode/encode round trip unchanged.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use spirvscope::prelude::*;
///
/// let module = Module::from_file("shader.spv".as_ref())?;
/// let text = Disassembler::new().disassemble(&module);
/// # Ok::<(), spirvscope::Error>(())
/// ```
pub mod prelude;

/// The binary codec: [`binary::Decoder`] and [`binary::Encoder`].
pub mod binary;

/// Textual disassembly of decoded modules.
pub mod disassembler;

/// Module loading and word-level I/O.
pub mod file;

/// The instruction metadata table and its lookup types.
pub mod grammar;

/// The structured module representation and the incremental builder.
pub mod module;

/// Core SPIR-V definitions: words, header constants, enumerations.
pub mod spirv;

/// `spirvscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type
/// is always [`Error`]. Used consistently throughout the crate for all
/// fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `spirvscope` Error type
///
/// The main error type for all operations in this crate; see the variant
/// docs for the failure modes of decoding, encoding and module loading.
pub use error::Error;

/// The structured representation of a SPIR-V module.
///
/// Main entry point: [`Module::from_file`] / [`Module::from_bytes`] to
/// decode, [`Module::assemble`] to encode.
pub use module::Module;

/// Incremental module construction.
pub use module::ModuleBuilder;

/// Textual disassembly.
pub use disassembler::Disassembler;

/// Low-level module loading.
pub use file::File;
