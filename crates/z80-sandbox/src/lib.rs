//! Instruction-level Z80 emulator and disassembler.
//!
//! Each call to `Z80::step()` decodes and executes one complete unprefixed
//! instruction. Decoding, execution and disassembly all read one shared
//! opcode table, so they agree on every instruction's length. The CB, ED, DD
//! and FD extended sets are recognised but not executed: reaching one stops
//! the CPU with a fault.

pub mod alu;
mod cpu;
pub mod disasm;
mod error;
mod flags;
mod memory;
pub mod opcodes;
mod registers;

pub use cpu::{Fault, RunOutcome, StepLimit, StepResult, Z80};
pub use disasm::{Line, Listing, render, render_at};
pub use error::{Error, Result};
pub use flags::{CF, Flags, HF, NF, PF, SF, ZF, parity};
pub use memory::{MEMORY_SIZE, Memory};
pub use opcodes::{Decoded, OPCODES, OpcodeEntry, lookup};
pub use registers::Registers;
