//! Module loading and low-level input access.
//!
//! This module provides [`File`], the owned backing store for a SPIR-V binary
//! being analyzed, and the word-level I/O helpers in [`io`]. A `File` either
//! memory-maps a module from disk or wraps a buffer already in memory; both
//! present the same byte-slice view to the codec.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use spirvscope::file::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("shader.spv"))?;
//! println!("{} bytes", file.len());
//! # Ok::<(), spirvscope::Error>(())
//! ```

pub mod io;

use std::{fs, path::Path};

use memmap2::Mmap;

use crate::Result;

enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// An input SPIR-V binary, backed by a memory map or an owned buffer.
///
/// `File` performs no format validation; it only owns bytes. Validation of
/// the header and instruction stream happens in the codec, so that byte
/// buffers from other sources (network, embedded assets) go through exactly
/// the same checks as files on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use spirvscope::file::File;
///
/// let from_disk = File::from_file("shader.spv".as_ref())?;
/// let from_memory = File::from_mem(std::fs::read("shader.spv")?)?;
/// assert_eq!(from_disk.data(), from_memory.data());
/// # Ok::<(), spirvscope::Error>(())
/// ```
pub struct File {
    backing: Backing,
}

impl File {
    /// Memory-map the module at `path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn from_file(path: &Path) -> Result<File> {
        let file = fs::File::open(path)?;
        // Mapping is read-only; the OS may still observe concurrent writers,
        // which is the same contract the rest of the mmap ecosystem accepts.
        let mmap = unsafe { Mmap::map(&file)? };

        Ok(File {
            backing: Backing::Mapped(mmap),
        })
    }

    /// Wrap an in-memory buffer.
    ///
    /// # Errors
    /// Infallible today; kept fallible so the two constructors stay
    /// interchangeable call sites.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        Ok(File {
            backing: Backing::Owned(data),
        })
    }

    /// Length of the underlying data in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` if the backing buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// The raw bytes of the module.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => mmap,
            Backing::Owned(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mem_exposes_data() {
        let file = File::from_mem(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(file.data(), &[1, 2, 3, 4]);
        assert_eq!(file.len(), 4);
        assert!(!file.is_empty());
    }

    #[test]
    fn from_mem_empty() {
        let file = File::from_mem(Vec::new()).unwrap();
        assert!(file.is_empty());
    }
}
