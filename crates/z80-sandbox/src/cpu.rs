//! Z80 CPU core with per-instruction execution.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.

mod execute;

use emu_core::{Cpu, Observable, Value};
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::memory::Memory;
use crate::opcodes::{Decoded, Operand, Prefix, lookup};
use crate::registers::Registers;

/// An opcode the core cannot execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    /// Address of the offending byte.
    pub pc: u16,
    pub opcode: u8,
    /// Set when the byte introduces an extended instruction set.
    pub prefix: Option<Prefix>,
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Error::UnsupportedOpcode {
            pc: fault.pc,
            opcode: fault.opcode,
        }
    }
}

/// Machine state after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Ready for the next instruction.
    Running,
    /// A HALT has executed. Further steps change nothing.
    Halted,
    /// An unsupported opcode was reached. Further steps change nothing.
    Faulted(Fault),
}

impl StepResult {
    /// Turn a fault into an error, for callers that drive the loop with `?`.
    pub fn into_result(self) -> Result<Self> {
        match self {
            Self::Faulted(fault) => Err(fault.into()),
            other => Ok(other),
        }
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Upper bound on the number of instructions `Z80::run` will execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StepLimit(pub u64);

impl StepLimit {
    pub const UNBOUNDED: Self = Self(u64::MAX);
}

impl Default for StepLimit {
    fn default() -> Self {
        Self(1_000_000)
    }
}

/// How a `run` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// `Running` if the step limit was reached first.
    pub result: StepResult,
    /// Instructions executed during this run, including the final HALT.
    pub steps: u64,
}

/// Z80 CPU.
///
/// The CPU owns its 64 KiB of memory. Hosts load code with [`Z80::load`],
/// point PC at it with [`Z80::set_pc`], and drive execution with
/// [`Z80::step`] or [`Z80::run`].
#[derive(Debug, Default)]
pub struct Z80 {
    pub(crate) regs: Registers,
    pub(crate) memory: Memory,
    fault: Option<Fault>,
}

impl Z80 {
    /// Create a new Z80 with zeroed registers and memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero registers, flags and memory and clear any halt or fault.
    ///
    /// The memory buffer is cleared in place, not reallocated.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.memory.clear();
        self.fault = None;
        debug!("reset");
    }

    /// Copy `data` into memory at `address`.
    pub fn load(&mut self, address: u16, data: &[u8]) -> Result<()> {
        self.memory.load(address, data)
    }

    /// Set the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Set the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.regs.sp = value;
    }

    #[must_use]
    pub const fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[must_use]
    pub const fn sp(&self) -> u16 {
        self.regs.sp
    }

    /// Snapshot of all registers.
    #[must_use]
    pub const fn registers(&self) -> Registers {
        self.regs
    }

    #[must_use]
    pub const fn regs(&self) -> &Registers {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Current machine state without stepping.
    #[must_use]
    pub const fn state(&self) -> StepResult {
        if let Some(fault) = self.fault {
            StepResult::Faulted(fault)
        } else if self.regs.halted {
            StepResult::Halted
        } else {
            StepResult::Running
        }
    }

    /// Execute one complete instruction.
    pub fn step(&mut self) -> StepResult {
        if !self.state().is_running() {
            return self.state();
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        let entry = match lookup(opcode) {
            Decoded::Entry(entry) => entry,
            Decoded::UnimplementedPrefix(prefix) => {
                return self.fault(Fault {
                    pc,
                    opcode,
                    prefix: Some(*prefix),
                });
            }
        };
        self.regs.inc_r();

        let data = self.fetch_operand(pc, entry.operand);
        trace!("{pc:04X}: {opcode:02X} {} [{data:04X}]", entry.mnemonic);

        // PC moves past the instruction first; branches overwrite it.
        self.regs.pc = pc.wrapping_add(u16::from(entry.length()));
        self.execute(entry.op, data);

        if self.regs.halted {
            debug!("halted at {pc:04X}");
        }
        self.state()
    }

    /// Step until HALT, a fault, or `limit` instructions.
    pub fn run(&mut self, limit: StepLimit) -> RunOutcome {
        let mut steps = 0;
        let mut result = self.state();
        while result.is_running() && steps < limit.0 {
            result = self.step();
            if !matches!(result, StepResult::Faulted(_)) {
                steps += 1;
            }
        }
        debug!("run stopped after {steps} step(s): {result:?}");
        RunOutcome { result, steps }
    }

    fn fault(&mut self, fault: Fault) -> StepResult {
        warn!(
            "unsupported opcode {:02X} at {:04X}{}",
            fault.opcode,
            fault.pc,
            fault.prefix.map_or(String::new(), |p| format!(" ({p:?} prefix)"))
        );
        self.fault = Some(fault);
        StepResult::Faulted(fault)
    }

    /// Read the operand bytes following the opcode at `pc`.
    fn fetch_operand(&self, pc: u16, operand: Operand) -> u16 {
        let at = pc.wrapping_add(1);
        match operand.byte_count() {
            0 => 0,
            1 => u16::from(self.memory.read(at)),
            _ => self.memory.read16(at),
        }
    }
}

impl Cpu for Z80 {
    type Registers = Registers;
    type Step = StepResult;

    fn step(&mut self) -> StepResult {
        Z80::step(self)
    }

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc)
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.regs.halted
    }

    fn reset(&mut self) {
        Z80::reset(self);
    }
}

/// All query paths supported by the Z80.
const Z80_QUERY_PATHS: &[&str] = &[
    // Main registers
    "a", "f", "b", "c", "d", "e", "h", "l",
    // Register pairs
    "af", "bc", "de", "hl",
    // Alternate registers
    "a'", "f'", "b'", "c'", "d'", "e'", "h'", "l'",
    "af'", "bc'", "de'", "hl'",
    // Index and special registers
    "ix", "iy", "sp", "pc", "i", "r",
    // Flags (individual)
    "flags.s", "flags.z", "flags.h", "flags.p", "flags.n", "flags.c",
    // Interrupt latches
    "iff1", "iff2",
    // Run state
    "halted", "state",
];

impl Observable for Z80 {
    fn query(&self, path: &str) -> Option<Value> {
        let r = &self.regs;
        let value: Value = match path {
            "a" => r.a.into(),
            "f" => r.f.to_byte().into(),
            "b" => r.b.into(),
            "c" => r.c.into(),
            "d" => r.d.into(),
            "e" => r.e.into(),
            "h" => r.h.into(),
            "l" => r.l.into(),

            "af" => r.af().into(),
            "bc" => r.bc().into(),
            "de" => r.de().into(),
            "hl" => r.hl().into(),

            "a'" => r.a_alt.into(),
            "f'" => r.f_alt.to_byte().into(),
            "b'" => r.b_alt.into(),
            "c'" => r.c_alt.into(),
            "d'" => r.d_alt.into(),
            "e'" => r.e_alt.into(),
            "h'" => r.h_alt.into(),
            "l'" => r.l_alt.into(),
            "af'" => r.af_alt().into(),
            "bc'" => r.bc_alt().into(),
            "de'" => r.de_alt().into(),
            "hl'" => r.hl_alt().into(),

            "ix" => r.ix.into(),
            "iy" => r.iy.into(),
            "sp" => r.sp.into(),
            "pc" => r.pc.into(),
            "i" => r.i.into(),
            "r" => r.r.into(),

            "flags.s" => r.f.sign.into(),
            "flags.z" => r.f.zero.into(),
            "flags.h" => r.f.half_carry.into(),
            "flags.p" => r.f.parity_overflow.into(),
            "flags.n" => r.f.subtract.into(),
            "flags.c" => r.f.carry.into(),

            "iff1" => r.iff1.into(),
            "iff2" => r.iff2.into(),

            "halted" => r.halted.into(),
            "state" => match self.state() {
                StepResult::Running => "running".into(),
                StepResult::Halted => "halted".into(),
                StepResult::Faulted(fault) => {
                    format!("faulted: {:02X} at {:04X}", fault.opcode, fault.pc).into()
                }
            },

            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        Z80_QUERY_PATHS
    }
}
