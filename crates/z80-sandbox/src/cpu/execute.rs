//! Instruction execution for the Z80.
//!
//! PC already points at the next instruction when `execute` runs, so
//! relative jumps and pushed return addresses use it directly, and any op
//! that branches simply overwrites it.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

use log::trace;

use crate::alu;
use crate::opcodes::{Condition, Loc8, Op, Reg8, Reg16, StackPair};

use super::Z80;

impl Z80 {
    /// Execute a decoded instruction. `data` holds the operand bytes
    /// (zero-extended for one-byte operands).
    pub(super) fn execute(&mut self, op: Op, data: u16) {
        match op {
            Op::Nop => {}

            Op::Halt => self.regs.halted = true,

            // === 8-bit loads ===
            Op::Ld8(dst, src) => {
                let value = self.read_loc(src, data);
                self.write_loc(dst, value, data);
            }

            // === 16-bit loads ===
            Op::Ld16(rr) => self.set_reg16(rr, data),
            Op::StoreHl => self.memory.write16(data, self.regs.hl()),
            Op::LoadHl => {
                let value = self.memory.read16(data);
                self.regs.set_hl(value);
            }
            Op::LdSpHl => self.regs.sp = self.regs.hl(),

            // === 8-bit arithmetic ===
            Op::Inc8(loc) => {
                let result = alu::inc8(self.read_loc(loc, data), self.regs.f.carry);
                self.write_loc(loc, result.value, data);
                self.regs.f = result.flags;
            }
            Op::Dec8(loc) => {
                let result = alu::dec8(self.read_loc(loc, data), self.regs.f.carry);
                self.write_loc(loc, result.value, data);
                self.regs.f = result.flags;
            }
            Op::Alu(alu_op, src) => {
                let operand = self.read_loc(src, data);
                let result = alu_op.apply(self.regs.a, operand, self.regs.f);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            Op::Rotate(rotate) => {
                let result = rotate.apply(self.regs.a, self.regs.f);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            Op::Daa => {
                let result = alu::daa(self.regs.a, self.regs.f);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            Op::Cpl => {
                let result = alu::cpl(self.regs.a, self.regs.f);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            Op::Scf => self.regs.f = alu::scf(self.regs.f),
            Op::Ccf => self.regs.f = alu::ccf(self.regs.f),

            // === 16-bit arithmetic (no flags for INC/DEC) ===
            Op::Inc16(rr) => {
                let value = self.reg16(rr).wrapping_add(1);
                self.set_reg16(rr, value);
            }
            Op::Dec16(rr) => {
                let value = self.reg16(rr).wrapping_sub(1);
                self.set_reg16(rr, value);
            }
            Op::AddHl(rr) => {
                let (result, flags) = alu::add16(self.regs.hl(), self.reg16(rr), self.regs.f);
                self.regs.set_hl(result);
                self.regs.f = flags;
            }

            // === Jumps, calls, returns ===
            Op::Jp(cond) => {
                if self.condition(cond) {
                    self.regs.pc = data;
                }
            }
            Op::JpHl => self.regs.pc = self.regs.hl(),
            Op::Jr(cond) => {
                if self.condition(cond) {
                    self.jump_relative(data as u8);
                }
            }
            Op::Djnz => {
                self.regs.b = self.regs.b.wrapping_sub(1);
                if self.regs.b != 0 {
                    self.jump_relative(data as u8);
                }
            }
            Op::Call(cond) => {
                if self.condition(cond) {
                    self.push16(self.regs.pc);
                    self.regs.pc = data;
                }
            }
            Op::Ret(cond) => {
                if self.condition(cond) {
                    self.regs.pc = self.pop16();
                }
            }
            Op::Rst(vector) => {
                self.push16(self.regs.pc);
                self.regs.pc = u16::from(vector);
            }

            // === Stack ===
            Op::Push(pair) => {
                let value = self.stack_pair(pair);
                self.push16(value);
            }
            Op::Pop(pair) => {
                let value = self.pop16();
                self.set_stack_pair(pair, value);
            }

            // === Exchanges ===
            Op::ExAf => self.regs.swap_af(),
            Op::Exx => self.regs.swap_banks(),
            Op::ExDeHl => self.regs.swap_de_hl(),
            Op::ExSpHl => {
                let sp = self.regs.sp;
                let lo = self.memory.read(sp);
                let hi = self.memory.read(sp.wrapping_add(1));
                self.memory.write(sp, self.regs.l);
                self.memory.write(sp.wrapping_add(1), self.regs.h);
                self.regs.l = lo;
                self.regs.h = hi;
            }

            // === CPU control ===
            Op::Di => {
                self.regs.iff1 = false;
                self.regs.iff2 = false;
            }
            Op::Ei => {
                self.regs.iff1 = true;
                self.regs.iff2 = true;
            }

            // Nothing is attached to the I/O bus; reads float high.
            Op::In => {
                trace!("IN from port {:02X}: floating bus", data as u8);
                self.regs.a = 0xFF;
            }
            Op::Out => {
                trace!("OUT {:02X} to port {:02X}: discarded", self.regs.a, data as u8);
            }
        }
    }

    /// Evaluate an optional condition; `None` is unconditional.
    fn condition(&self, cond: Option<Condition>) -> bool {
        cond.is_none_or(|c| c.holds(self.regs.f))
    }

    /// Add a signed displacement to PC (which already points past the jump).
    fn jump_relative(&mut self, displacement: u8) {
        self.regs.pc = self
            .regs
            .pc
            .wrapping_add_signed(i16::from(displacement as i8));
    }

    fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::A => self.regs.a,
        }
    }

    fn set_reg8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::A => self.regs.a = value,
        }
    }

    fn read_loc(&self, loc: Loc8, data: u16) -> u8 {
        match loc {
            Loc8::Reg(reg) => self.reg8(reg),
            Loc8::IndHl => self.memory.read(self.regs.hl()),
            Loc8::IndBc => self.memory.read(self.regs.bc()),
            Loc8::IndDe => self.memory.read(self.regs.de()),
            Loc8::Abs => self.memory.read(data),
            Loc8::Imm => data as u8,
        }
    }

    fn write_loc(&mut self, loc: Loc8, value: u8, data: u16) {
        match loc {
            Loc8::Reg(reg) => self.set_reg8(reg, value),
            Loc8::IndHl => self.memory.write(self.regs.hl(), value),
            Loc8::IndBc => self.memory.write(self.regs.bc(), value),
            Loc8::IndDe => self.memory.write(self.regs.de(), value),
            Loc8::Abs => self.memory.write(data, value),
            Loc8::Imm => unreachable!("immediate operand used as a destination"),
        }
    }

    fn reg16(&self, rr: Reg16) -> u16 {
        match rr {
            Reg16::Bc => self.regs.bc(),
            Reg16::De => self.regs.de(),
            Reg16::Hl => self.regs.hl(),
            Reg16::Sp => self.regs.sp,
        }
    }

    fn set_reg16(&mut self, rr: Reg16, value: u16) {
        match rr {
            Reg16::Bc => self.regs.set_bc(value),
            Reg16::De => self.regs.set_de(value),
            Reg16::Hl => self.regs.set_hl(value),
            Reg16::Sp => self.regs.sp = value,
        }
    }

    fn stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::Bc => self.regs.bc(),
            StackPair::De => self.regs.de(),
            StackPair::Hl => self.regs.hl(),
            StackPair::Af => self.regs.af(),
        }
    }

    fn set_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::Bc => self.regs.set_bc(value),
            StackPair::De => self.regs.set_de(value),
            StackPair::Hl => self.regs.set_hl(value),
            StackPair::Af => self.regs.set_af(value),
        }
    }

    /// Push a word: high byte at SP-1, low byte at SP-2.
    fn push16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, lo);
    }

    /// Pop a word: low byte from SP, high byte from SP+1.
    fn pop16(&mut self) -> u16 {
        let lo = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
