use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all failure modes of the binary codec and the module loading surface.
/// Each variant carries the context needed to pinpoint the failure in the input stream:
/// decode errors report the byte offset and the 1-based index of the instruction being
/// parsed where that is meaningful.
///
/// # Error Categories
///
/// ## Header errors
/// - [`Error::InvalidMagic`] - Leading magic word is not the SPIR-V magic number
/// - [`Error::UnsupportedEndianness`] - Module was written with swapped byte order
/// - [`Error::UnsupportedVersion`] - Version word outside the supported range
///
/// ## Instruction stream errors
/// - [`Error::Truncated`] - Stream ends before a declared word count is satisfied
/// - [`Error::WordCountZero`] - Instruction declares a word count of zero
/// - [`Error::OperandExpected`] - Required operand missing within an instruction
/// - [`Error::OperandExceeded`] - Words left over after all operands were matched
/// - [`Error::UnsupportedType`] - Context-dependent literal with an unsupported bit width
/// - [`Error::Malformed`] - Other structurally invalid input
///
/// ## Encode errors
/// - [`Error::InvalidOperand`] - Operand tag does not match the grammar at its position
/// - [`Error::UnknownMnemonic`] - Mnemonic has no entry in the instruction table
///
/// ## I/O errors
/// - [`Error::FileError`] - Filesystem I/O failures while loading a module
///
/// # Examples
///
/// ```rust,no_run
/// use spirvscope::{Error, Module};
/// use std::path::Path;
///
/// match Module::from_file(Path::new("shader.spv")) {
///     Ok(module) => println!("{} instructions", module.instructions.len()),
///     Err(Error::InvalidMagic(word)) => eprintln!("not a SPIR-V module: {word:#010x}"),
///     Err(Error::Truncated { offset, .. }) => eprintln!("truncated at byte {offset}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The leading magic word does not match the SPIR-V magic number.
    ///
    /// The associated value is the word that was found in place of the magic.
    #[error("Invalid magic number - {0:#010x}")]
    InvalidMagic(u32),

    /// The module was serialized with the opposite byte order.
    ///
    /// The magic number was recognized byte-swapped. Reverse-endian modules
    /// are rejected rather than converted.
    #[error("Unsupported endianness")]
    UnsupportedEndianness,

    /// The version word declares a major version this library does not handle.
    #[error("Unsupported version - {major}.{minor}")]
    UnsupportedVersion {
        /// Major version from the header
        major: u8,
        /// Minor version from the header
        minor: u8,
    },

    /// The input ends before the bytes the header or an instruction's word
    /// count requires.
    ///
    /// Decode is atomic; no partial module is produced when this occurs.
    #[error("Truncated input at byte offset {offset}")]
    Truncated {
        /// Byte offset at which more input was expected
        offset: usize,
    },

    /// An instruction declared a word count of zero.
    #[error("Zero word count for instruction #{index} at byte offset {offset}")]
    WordCountZero {
        /// Byte offset of the instruction's first word
        offset: usize,
        /// 1-based index of the instruction in the stream
        index: usize,
    },

    /// An instruction ended before all required operands were present.
    #[error("Expected more operands for instruction #{index} at byte offset {offset}")]
    OperandExpected {
        /// Byte offset at which the operand was expected
        offset: usize,
        /// 1-based index of the instruction in the stream
        index: usize,
    },

    /// An instruction contained words beyond its grammar's operand list.
    #[error("Found extra operands for instruction #{index} at byte offset {offset}")]
    OperandExceeded {
        /// Byte offset of the first surplus word
        offset: usize,
        /// 1-based index of the instruction in the stream
        index: usize,
    },

    /// A context-dependent literal refers to a type with a bit width the
    /// codec cannot represent (wider than 64 bits).
    #[error("Unsupported literal type for instruction #{index} at byte offset {offset}")]
    UnsupportedType {
        /// Byte offset of the literal
        offset: usize,
        /// 1-based index of the instruction in the stream
        index: usize,
    },

    /// The input is damaged in a way not covered by a more specific variant.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An operand's tag does not match what the instruction's grammar entry
    /// declares for that position.
    ///
    /// Raised at encode time; the decoder can never produce a module that
    /// triggers this.
    #[error("Operand {position} of {mnemonic} has kind {found}, expected {expected}")]
    InvalidOperand {
        /// Mnemonic of the instruction being encoded
        mnemonic: &'static str,
        /// 0-based logical operand position
        position: usize,
        /// Human-readable tag of the operand that was supplied
        found: &'static str,
        /// Human-readable kind the grammar requires
        expected: &'static str,
    },

    /// A mnemonic was looked up that has no entry in the instruction table.
    #[error("Unknown mnemonic - {0}")]
    UnknownMnemonic(String),

    /// File I/O error while loading a module from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
