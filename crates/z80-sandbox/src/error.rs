//! Error type for the Z80 core.

use thiserror::Error;

/// Errors reported by the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The byte has no implemented meaning: either a prefix of an extended
    /// instruction set, or an opcode outside the emulated subset.
    #[error("unsupported opcode ${opcode:02X} at ${pc:04X}")]
    UnsupportedOpcode { pc: u16, opcode: u8 },

    /// Decoding needed bytes beyond the end of the supplied buffer.
    #[error("instruction at offset {offset} needs {needed} byte(s) but only {available} remain")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A block load would run past the end of the address space.
    #[error("cannot load {len} byte(s) at ${address:04X}: past end of memory")]
    InvalidLoadOffset { address: u16, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
