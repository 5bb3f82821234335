//! Z80 disassembler.
//!
//! Reads the same opcode table as the execution engine, so an instruction's
//! rendered length always matches how far `step` advances PC.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

use std::fmt;

use crate::error::{Error, Result};
use crate::opcodes::{Decoded, OpcodeEntry, Operand, lookup};

/// Disassemble the instruction at `buffer[offset]`.
///
/// Returns the rendered text and the instruction length in bytes. Relative
/// jump targets are resolved as if `buffer` were loaded at address 0.
pub fn render(buffer: &[u8], offset: usize) -> Result<(String, usize)> {
    render_at(buffer, offset, 0)
}

/// Disassemble the instruction at `buffer[offset]`, with `buffer` loaded at
/// address `origin`.
pub fn render_at(buffer: &[u8], offset: usize, origin: u16) -> Result<(String, usize)> {
    let available = buffer.len().saturating_sub(offset);
    let Some(&opcode) = buffer.get(offset) else {
        return Err(Error::BufferUnderrun {
            offset,
            needed: 1,
            available,
        });
    };

    let address = origin.wrapping_add(offset as u16);
    let entry = match lookup(opcode) {
        Decoded::Entry(entry) => entry,
        Decoded::UnimplementedPrefix(_) => {
            return Err(Error::UnsupportedOpcode {
                pc: address,
                opcode,
            });
        }
    };

    let len = usize::from(entry.length());
    if available < len {
        return Err(Error::BufferUnderrun {
            offset,
            needed: len,
            available,
        });
    }

    let operand = &buffer[offset + 1..offset + len];
    Ok((format_entry(entry, operand, address), len))
}

/// Substitute the operand into the entry's template.
fn format_entry(entry: &OpcodeEntry, operand: &[u8], address: u16) -> String {
    let text = match entry.operand {
        Operand::Implied | Operand::RegReg | Operand::RegHl => return entry.mnemonic.to_string(),
        Operand::Imm8 | Operand::Port8 => format!("{:02x}", operand[0]),
        Operand::Imm16 | Operand::Abs16 => {
            format!("#${:04x}", u16::from_le_bytes([operand[0], operand[1]]))
        }
        Operand::Rel8 => {
            let next = address.wrapping_add(u16::from(entry.length()));
            let target = next.wrapping_add_signed(i16::from(operand[0] as i8));
            format!("#${target:04x}")
        }
    };
    entry.mnemonic.replacen('*', &text, 1)
}

/// One disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub address: u16,
    pub bytes: Vec<u8>,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self
            .bytes
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{:04x}  {bytes:<8}  {}", self.address, self.text)
    }
}

/// Iterator over every instruction in a buffer.
///
/// An unsupported byte yields an error and the listing resumes at the next
/// byte. A truncated trailing instruction yields one error and ends it.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    buffer: &'a [u8],
    offset: usize,
    origin: u16,
    done: bool,
}

impl<'a> Listing<'a> {
    /// List `buffer` as if loaded at address 0.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self::at(buffer, 0)
    }

    /// List `buffer` as if loaded at `origin`.
    #[must_use]
    pub const fn at(buffer: &'a [u8], origin: u16) -> Self {
        Self {
            buffer,
            offset: 0,
            origin,
            done: false,
        }
    }
}

impl Iterator for Listing<'_> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.buffer.len() {
            return None;
        }

        let offset = self.offset;
        match render_at(self.buffer, offset, self.origin) {
            Ok((text, len)) => {
                self.offset += len;
                Some(Ok(Line {
                    address: self.origin.wrapping_add(offset as u16),
                    bytes: self.buffer[offset..offset + len].to_vec(),
                    text,
                }))
            }
            Err(err @ Error::UnsupportedOpcode { .. }) => {
                self.offset += 1;
                Some(Err(err))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
