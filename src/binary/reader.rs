//! Word cursor over a decoded word buffer.
//!
//! [`WordReader`] tracks two boundaries: the end of the underlying buffer,
//! and an optional per-instruction limit set from the word count in an
//! instruction's first word. Running into the buffer end is a truncation of
//! the stream; running into the limit means the current instruction's words
//! ran out, which the grammar-driven parser turns into the appropriate
//! operand error.

use crate::{spirv::Word, Error, Result};

const WORD_BYTES: usize = 4;

pub(crate) struct WordReader<'a> {
    words: &'a [Word],
    pos: usize,
    limit: Option<usize>,
}

impl<'a> WordReader<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        WordReader {
            words,
            pos: 0,
            limit: None,
        }
    }

    /// Byte offset of the cursor from the start of the buffer.
    pub(crate) fn byte_offset(&self) -> usize {
        self.pos * WORD_BYTES
    }

    /// Byte length of the whole buffer.
    pub(crate) fn byte_len(&self) -> usize {
        self.words.len() * WORD_BYTES
    }

    /// Words left before the end of the buffer, ignoring any limit.
    pub(crate) fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.words.len()
    }

    /// Restrict reading to the next `count` words.
    pub(crate) fn set_limit(&mut self, count: usize) {
        self.limit = Some(self.pos + count);
    }

    pub(crate) fn clear_limit(&mut self) {
        self.limit = None;
    }

    /// Returns `true` once the current limit has been consumed.
    pub(crate) fn limit_reached(&self) -> bool {
        match self.limit {
            Some(limit) => self.pos >= limit,
            None => self.is_at_end(),
        }
    }

    /// Read the next word.
    ///
    /// Hitting the active limit reports [`Error::OperandExpected`] with a
    /// zero instruction index; the parser rewrites the index before the
    /// error escapes. Hitting the end of the buffer is a stream truncation.
    pub(crate) fn word(&mut self) -> Result<Word> {
        if let Some(limit) = self.limit {
            if self.pos >= limit {
                return Err(Error::OperandExpected {
                    offset: self.byte_offset(),
                    index: 0,
                });
            }
        }
        match self.words.get(self.pos) {
            Some(word) => {
                self.pos += 1;
                Ok(*word)
            }
            None => Err(Error::Truncated {
                offset: self.byte_offset(),
            }),
        }
    }

    /// Consume all words up to the active limit.
    pub(crate) fn take_limited(&mut self) -> Vec<Word> {
        let end = self.limit.unwrap_or(self.words.len()).min(self.words.len());
        let taken = self.words[self.pos..end].to_vec();
        self.pos = end;
        taken
    }

    /// Read a NUL-terminated, word-padded UTF-8 string.
    ///
    /// Consumes words up to and including the one holding the terminator;
    /// padding bytes after the terminator are ignored.
    pub(crate) fn string(&mut self) -> Result<String> {
        let start = self.byte_offset();
        let mut bytes = Vec::new();

        loop {
            if self.limit_reached() {
                return Err(malformed_error!(
                    "Unterminated string literal at byte offset {}",
                    start
                ));
            }
            let word = self.word()?;
            let chunk = word.to_le_bytes();
            if let Some(nul) = chunk.iter().position(|b| *b == 0) {
                bytes.extend_from_slice(&chunk[..nul]);
                break;
            }
            bytes.extend_from_slice(&chunk);
        }

        String::from_utf8(bytes)
            .map_err(|_| malformed_error!("String literal at byte offset {} is not UTF-8", start))
    }
}
