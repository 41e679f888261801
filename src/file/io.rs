//! Low-level word order and safe reading/writing utilities for SPIR-V binaries.
//!
//! A SPIR-V module is a stream of 32-bit words; the byte order of each word is
//! fixed at serialization time. This module converts between byte buffers and
//! word buffers in little-endian order (the order produced by all mainstream
//! toolchains on little-endian hosts), with bounds-checked reads that report
//! [`crate::Error::Truncated`] instead of panicking, and converts wide
//! literals (64-bit integers, floats) between their value form and their
//! low-word-first word pairs.
//!
//! # Usage Examples
//!
//! ```rust
//! use spirvscope::file::io::{read_word_at, words_to_bytes};
//!
//! let data = [0x03, 0x02, 0x23, 0x07];
//! let mut offset = 0;
//! let word = read_word_at(&data, &mut offset)?;
//! assert_eq!(word, 0x0723_0203);
//! assert_eq!(offset, 4);
//! assert_eq!(words_to_bytes(&[word]), data);
//! # Ok::<(), spirvscope::Error>(())
//! ```

use crate::{Error, Result};

/// Number of bytes in one SPIR-V word.
pub const WORD_BYTES: usize = 4;

/// Read one little-endian word at `*offset`, advancing the offset.
///
/// # Errors
/// Returns [`crate::Error::Truncated`] if fewer than four bytes remain.
pub fn read_word_at(data: &[u8], offset: &mut usize) -> Result<u32> {
    match data.get(*offset..*offset + WORD_BYTES) {
        Some(bytes) => {
            let word = u32::from_le_bytes(bytes.try_into().unwrap_or([0; WORD_BYTES]));
            *offset += WORD_BYTES;
            Ok(word)
        }
        None => Err(Error::Truncated { offset: *offset }),
    }
}

/// Convert a byte buffer into a word buffer.
///
/// # Errors
/// Returns [`crate::Error::Truncated`] if the buffer length is not a
/// multiple of the word size; a trailing partial word means the stream was
/// cut off mid-serialization.
pub fn bytes_to_words(data: &[u8]) -> Result<Vec<u32>> {
    if data.len() % WORD_BYTES != 0 {
        return Err(Error::Truncated {
            offset: data.len() - data.len() % WORD_BYTES,
        });
    }

    Ok(data
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap_or([0; WORD_BYTES])))
        .collect())
}

/// Convert a word buffer into a little-endian byte buffer.
#[must_use]
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * WORD_BYTES);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// Split a 64-bit value into its (low, high) word pair.
///
/// Wide literals are serialized low word first.
#[must_use]
pub fn split_u64(value: u64) -> (u32, u32) {
    #[allow(clippy::cast_possible_truncation)]
    let low = value as u32;
    let high = (value >> 32) as u32;
    (low, high)
}

/// Reassemble a 64-bit value from its (low, high) word pair.
#[must_use]
pub fn join_u64(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_word_advances_offset() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
        let mut offset = 0;
        assert_eq!(read_word_at(&data, &mut offset).unwrap(), 1);
        assert_eq!(read_word_at(&data, &mut offset).unwrap(), 2);
        assert_eq!(offset, 8);
    }

    #[test]
    fn read_word_truncated() {
        let data = [0x01, 0x00];
        let mut offset = 0;
        assert!(matches!(
            read_word_at(&data, &mut offset),
            Err(Error::Truncated { offset: 0 })
        ));
    }

    #[test]
    fn bytes_to_words_rejects_partial_word() {
        let data = [0x01, 0x00, 0x00, 0x00, 0xAA];
        assert!(matches!(
            bytes_to_words(&data),
            Err(Error::Truncated { offset: 4 })
        ));
    }

    #[test]
    fn word_byte_round_trip() {
        let words = vec![0x0723_0203, 0x0001_0600, 0, 42, 0xFFFF_FFFF];
        let bytes = words_to_bytes(&words);
        assert_eq!(bytes_to_words(&bytes).unwrap(), words);
    }

    #[test]
    fn u64_split_join() {
        let value = 0xEFCD_AB90_7856_3412_u64;
        let (low, high) = split_u64(value);
        assert_eq!(low, 0x7856_3412);
        assert_eq!(high, 0xEFCD_AB90);
        assert_eq!(join_u64(low, high), value);
    }
}
