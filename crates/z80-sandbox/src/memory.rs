//! Flat 64 KiB memory owned by the CPU.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.

use std::ops::Range;

use crate::error::{Error, Result};

/// Size of the Z80 address space.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Linear 64 KiB memory.
///
/// All addresses are `u16`, so every access is in range. 16-bit accesses
/// wrap from 0xFFFF to 0x0000.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Zero-filled memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        self.bytes[usize::from(address)]
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[usize::from(address)] = value;
    }

    /// Read a little-endian word.
    #[must_use]
    pub fn read16(&self, address: u16) -> u16 {
        let lo = self.read(address);
        let hi = self.read(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a little-endian word (low byte at `address`).
    pub fn write16(&mut self, address: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(address, lo);
        self.write(address.wrapping_add(1), hi);
    }

    /// Copy `data` into memory starting at `address`.
    ///
    /// Loads never wrap: a block that would run past 0xFFFF is rejected and
    /// memory is left untouched.
    pub fn load(&mut self, address: u16, data: &[u8]) -> Result<()> {
        let start = usize::from(address);
        let end = start
            .checked_add(data.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(Error::InvalidLoadOffset {
                address,
                len: data.len(),
            })?;
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Zero every byte in place.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// The whole address space.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// A window of memory, clamped to the address space.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        let end = range.end.min(MEMORY_SIZE);
        let start = range.start.min(end);
        &self.bytes[start..end]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory").field("size", &MEMORY_SIZE).finish_non_exhaustive()
    }
}
