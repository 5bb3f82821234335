//! Opcode metadata table.
//!
//! One entry per unprefixed opcode byte. The execution engine reads `op`, the
//! disassembler reads `mnemonic`, and both take the instruction length from
//! `operand`, so the two can never disagree about where the next instruction
//! starts.
//!
//! Extended instruction sets hang off the four prefix bytes. Supporting one
//! means giving its prefix a second-level table of the same shape.

use crate::alu::{AluOp, Rotate};
use crate::flags::Flags;

/// An 8-bit register operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

/// Where an 8-bit value is read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loc8 {
    Reg(Reg8),
    /// `(HL)`
    IndHl,
    /// `(BC)`
    IndBc,
    /// `(DE)`
    IndDe,
    /// `(nn)` - absolute address from the operand bytes.
    Abs,
    /// `n` - immediate operand byte. Never a destination.
    Imm,
}

/// A 16-bit register pair as used by `LD rr,nn`, `INC rr`, `DEC rr` and
/// `ADD HL,rr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg16 {
    Bc,
    De,
    Hl,
    Sp,
}

/// A register pair as used by `PUSH` and `POP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPair {
    Bc,
    De,
    Hl,
    Af,
}

/// Condition codes in encoding order (bits 3-5 of the opcode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Nz,
    Z,
    Nc,
    C,
    /// Parity odd (P/V clear).
    Po,
    /// Parity even (P/V set).
    Pe,
    /// Plus (sign clear).
    P,
    /// Minus (sign set).
    M,
}

/// The flag a condition code reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFlag {
    Zero,
    Carry,
    ParityOverflow,
    Sign,
}

impl ConditionFlag {
    #[must_use]
    pub const fn read(self, flags: Flags) -> bool {
        match self {
            Self::Zero => flags.zero,
            Self::Carry => flags.carry,
            Self::ParityOverflow => flags.parity_overflow,
            Self::Sign => flags.sign,
        }
    }
}

/// Flag and required value for each condition, in encoding order.
const CONDITIONS: [(ConditionFlag, bool); 8] = [
    (ConditionFlag::Zero, false),
    (ConditionFlag::Zero, true),
    (ConditionFlag::Carry, false),
    (ConditionFlag::Carry, true),
    (ConditionFlag::ParityOverflow, false),
    (ConditionFlag::ParityOverflow, true),
    (ConditionFlag::Sign, false),
    (ConditionFlag::Sign, true),
];

impl Condition {
    /// The flag this condition tests and the value it must have.
    #[must_use]
    pub const fn requirement(self) -> (ConditionFlag, bool) {
        CONDITIONS[self as usize]
    }

    /// True if the branch is taken under `flags`.
    #[must_use]
    pub const fn holds(self, flags: Flags) -> bool {
        let (flag, required) = self.requirement();
        flag.read(flags) == required
    }
}

/// The operation an opcode performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Nop,
    Halt,
    /// `LD dst,src` for every 8-bit form.
    Ld8(Loc8, Loc8),
    /// `LD rr,nn`
    Ld16(Reg16),
    /// `LD (nn),HL`
    StoreHl,
    /// `LD HL,(nn)`
    LoadHl,
    /// `LD SP,HL`
    LdSpHl,
    Inc8(Loc8),
    Dec8(Loc8),
    Inc16(Reg16),
    Dec16(Reg16),
    /// `ADD HL,rr`
    AddHl(Reg16),
    /// Accumulator arithmetic/logic against a register, `(HL)` or immediate.
    Alu(AluOp, Loc8),
    Rotate(Rotate),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jp(Option<Condition>),
    /// `JP (HL)`
    JpHl,
    Jr(Option<Condition>),
    Djnz,
    Call(Option<Condition>),
    Ret(Option<Condition>),
    /// Restart to the given page-zero vector.
    Rst(u8),
    Push(StackPair),
    Pop(StackPair),
    /// `EX AF,AF'`
    ExAf,
    Exx,
    /// `EX DE,HL`
    ExDeHl,
    /// `EX (SP),HL`
    ExSpHl,
    Di,
    Ei,
    /// `IN A,(n)`
    In,
    /// `OUT (n),A`
    Out,
}

/// Operand addressing form. Fixes how many bytes follow the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand, or only implicit registers.
    Implied,
    /// Register to register.
    RegReg,
    /// Register to or from memory at `(HL)`.
    RegHl,
    /// Immediate byte.
    Imm8,
    /// Immediate word, little-endian.
    Imm16,
    /// Absolute address, little-endian, used as a memory operand.
    Abs16,
    /// Signed displacement from the following instruction.
    Rel8,
    /// I/O port number.
    Port8,
}

impl Operand {
    /// Number of operand bytes following the opcode.
    #[must_use]
    pub const fn byte_count(self) -> u8 {
        match self {
            Self::Implied | Self::RegReg | Self::RegHl => 0,
            Self::Imm8 | Self::Rel8 | Self::Port8 => 1,
            Self::Imm16 | Self::Abs16 => 2,
        }
    }
}

/// Broad instruction grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Load,
    Arithmetic,
    ControlFlow,
    Stack,
    Exchange,
    Control,
}

/// The prefix bytes of the extended instruction sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// Bit operations.
    Cb,
    /// Extended instructions.
    Ed,
    /// IX-indexed forms.
    Dd,
    /// IY-indexed forms.
    Fd,
}

/// Metadata for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub opcode: u8,
    /// Render template. `*` marks where the formatted operand goes.
    pub mnemonic: &'static str,
    pub operand: Operand,
    pub category: Category,
    pub op: Op,
}

impl OpcodeEntry {
    /// Instruction length in bytes, including the opcode.
    #[must_use]
    pub const fn length(&self) -> u8 {
        1 + self.operand.byte_count()
    }
}

/// Result of looking up an opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Entry(OpcodeEntry),
    /// First byte of an extended instruction this core does not implement.
    UnimplementedPrefix(Prefix),
}

/// Look up the metadata for an opcode byte.
#[must_use]
pub fn lookup(opcode: u8) -> &'static Decoded {
    &OPCODES[usize::from(opcode)]
}

/// The full unprefixed opcode table, indexed by opcode byte.
pub static OPCODES: [Decoded; 256] = table::OPCODES;

mod table {
    use super::Category::{Arithmetic, Control, ControlFlow, Exchange, Load, Stack};
    use super::Operand::{Abs16, Imm8, Imm16, Implied, Port8, RegHl, RegReg, Rel8};
    use super::{
        AluOp, Category, Condition, Decoded, Loc8, Op, OpcodeEntry, Operand, Prefix, Reg8, Reg16,
        Rotate, StackPair,
    };

    const B: Loc8 = Loc8::Reg(Reg8::B);
    const C: Loc8 = Loc8::Reg(Reg8::C);
    const D: Loc8 = Loc8::Reg(Reg8::D);
    const E: Loc8 = Loc8::Reg(Reg8::E);
    const H: Loc8 = Loc8::Reg(Reg8::H);
    const L: Loc8 = Loc8::Reg(Reg8::L);
    const A: Loc8 = Loc8::Reg(Reg8::A);
    const HL_IND: Loc8 = Loc8::IndHl;
    const BC_IND: Loc8 = Loc8::IndBc;
    const DE_IND: Loc8 = Loc8::IndDe;
    const ABS: Loc8 = Loc8::Abs;
    const IMM: Loc8 = Loc8::Imm;

    const fn entry(
        opcode: u8,
        mnemonic: &'static str,
        operand: Operand,
        category: Category,
        op: Op,
    ) -> Decoded {
        Decoded::Entry(OpcodeEntry {
            opcode,
            mnemonic,
            operand,
            category,
            op,
        })
    }

    #[rustfmt::skip]
    pub(super) const OPCODES: [Decoded; 256] = [
        // 0x00
        entry(0x00, "nop", Implied, Control, Op::Nop),
        entry(0x01, "ld bc,*", Imm16, Load, Op::Ld16(Reg16::Bc)),
        entry(0x02, "ld (bc),a", Implied, Load, Op::Ld8(BC_IND, A)),
        entry(0x03, "inc bc", Implied, Arithmetic, Op::Inc16(Reg16::Bc)),
        entry(0x04, "inc b", Implied, Arithmetic, Op::Inc8(B)),
        entry(0x05, "dec b", Implied, Arithmetic, Op::Dec8(B)),
        entry(0x06, "ld b,*", Imm8, Load, Op::Ld8(B, IMM)),
        entry(0x07, "rlca", Implied, Arithmetic, Op::Rotate(Rotate::Rlca)),
        entry(0x08, "ex af,af'", Implied, Exchange, Op::ExAf),
        entry(0x09, "add hl,bc", Implied, Arithmetic, Op::AddHl(Reg16::Bc)),
        entry(0x0A, "ld a,(bc)", Implied, Load, Op::Ld8(A, BC_IND)),
        entry(0x0B, "dec bc", Implied, Arithmetic, Op::Dec16(Reg16::Bc)),
        entry(0x0C, "inc c", Implied, Arithmetic, Op::Inc8(C)),
        entry(0x0D, "dec c", Implied, Arithmetic, Op::Dec8(C)),
        entry(0x0E, "ld c,*", Imm8, Load, Op::Ld8(C, IMM)),
        entry(0x0F, "rrca", Implied, Arithmetic, Op::Rotate(Rotate::Rrca)),
        // 0x10
        entry(0x10, "djnz *", Rel8, ControlFlow, Op::Djnz),
        entry(0x11, "ld de,*", Imm16, Load, Op::Ld16(Reg16::De)),
        entry(0x12, "ld (de),a", Implied, Load, Op::Ld8(DE_IND, A)),
        entry(0x13, "inc de", Implied, Arithmetic, Op::Inc16(Reg16::De)),
        entry(0x14, "inc d", Implied, Arithmetic, Op::Inc8(D)),
        entry(0x15, "dec d", Implied, Arithmetic, Op::Dec8(D)),
        entry(0x16, "ld d,*", Imm8, Load, Op::Ld8(D, IMM)),
        entry(0x17, "rla", Implied, Arithmetic, Op::Rotate(Rotate::Rla)),
        entry(0x18, "jr *", Rel8, ControlFlow, Op::Jr(None)),
        entry(0x19, "add hl,de", Implied, Arithmetic, Op::AddHl(Reg16::De)),
        entry(0x1A, "ld a,(de)", Implied, Load, Op::Ld8(A, DE_IND)),
        entry(0x1B, "dec de", Implied, Arithmetic, Op::Dec16(Reg16::De)),
        entry(0x1C, "inc e", Implied, Arithmetic, Op::Inc8(E)),
        entry(0x1D, "dec e", Implied, Arithmetic, Op::Dec8(E)),
        entry(0x1E, "ld e,*", Imm8, Load, Op::Ld8(E, IMM)),
        entry(0x1F, "rra", Implied, Arithmetic, Op::Rotate(Rotate::Rra)),
        // 0x20
        entry(0x20, "jr nz,*", Rel8, ControlFlow, Op::Jr(Some(Condition::Nz))),
        entry(0x21, "ld hl,*", Imm16, Load, Op::Ld16(Reg16::Hl)),
        entry(0x22, "ld (*),hl", Abs16, Load, Op::StoreHl),
        entry(0x23, "inc hl", Implied, Arithmetic, Op::Inc16(Reg16::Hl)),
        entry(0x24, "inc h", Implied, Arithmetic, Op::Inc8(H)),
        entry(0x25, "dec h", Implied, Arithmetic, Op::Dec8(H)),
        entry(0x26, "ld h,*", Imm8, Load, Op::Ld8(H, IMM)),
        entry(0x27, "daa", Implied, Arithmetic, Op::Daa),
        entry(0x28, "jr z,*", Rel8, ControlFlow, Op::Jr(Some(Condition::Z))),
        entry(0x29, "add hl,hl", Implied, Arithmetic, Op::AddHl(Reg16::Hl)),
        entry(0x2A, "ld hl,(*)", Abs16, Load, Op::LoadHl),
        entry(0x2B, "dec hl", Implied, Arithmetic, Op::Dec16(Reg16::Hl)),
        entry(0x2C, "inc l", Implied, Arithmetic, Op::Inc8(L)),
        entry(0x2D, "dec l", Implied, Arithmetic, Op::Dec8(L)),
        entry(0x2E, "ld l,*", Imm8, Load, Op::Ld8(L, IMM)),
        entry(0x2F, "cpl", Implied, Arithmetic, Op::Cpl),
        // 0x30
        entry(0x30, "jr nc,*", Rel8, ControlFlow, Op::Jr(Some(Condition::Nc))),
        entry(0x31, "ld sp,*", Imm16, Load, Op::Ld16(Reg16::Sp)),
        entry(0x32, "ld (*),a", Abs16, Load, Op::Ld8(ABS, A)),
        entry(0x33, "inc sp", Implied, Arithmetic, Op::Inc16(Reg16::Sp)),
        entry(0x34, "inc (hl)", RegHl, Arithmetic, Op::Inc8(HL_IND)),
        entry(0x35, "dec (hl)", RegHl, Arithmetic, Op::Dec8(HL_IND)),
        entry(0x36, "ld (hl),*", Imm8, Load, Op::Ld8(HL_IND, IMM)),
        entry(0x37, "scf", Implied, Arithmetic, Op::Scf),
        entry(0x38, "jr c,*", Rel8, ControlFlow, Op::Jr(Some(Condition::C))),
        entry(0x39, "add hl,sp", Implied, Arithmetic, Op::AddHl(Reg16::Sp)),
        entry(0x3A, "ld a,(*)", Abs16, Load, Op::Ld8(A, ABS)),
        entry(0x3B, "dec sp", Implied, Arithmetic, Op::Dec16(Reg16::Sp)),
        entry(0x3C, "inc a", Implied, Arithmetic, Op::Inc8(A)),
        entry(0x3D, "dec a", Implied, Arithmetic, Op::Dec8(A)),
        entry(0x3E, "ld a,*", Imm8, Load, Op::Ld8(A, IMM)),
        entry(0x3F, "ccf", Implied, Arithmetic, Op::Ccf),
        // 0x40
        entry(0x40, "ld b,b", RegReg, Load, Op::Ld8(B, B)),
        entry(0x41, "ld b,c", RegReg, Load, Op::Ld8(B, C)),
        entry(0x42, "ld b,d", RegReg, Load, Op::Ld8(B, D)),
        entry(0x43, "ld b,e", RegReg, Load, Op::Ld8(B, E)),
        entry(0x44, "ld b,h", RegReg, Load, Op::Ld8(B, H)),
        entry(0x45, "ld b,l", RegReg, Load, Op::Ld8(B, L)),
        entry(0x46, "ld b,(hl)", RegHl, Load, Op::Ld8(B, HL_IND)),
        entry(0x47, "ld b,a", RegReg, Load, Op::Ld8(B, A)),
        entry(0x48, "ld c,b", RegReg, Load, Op::Ld8(C, B)),
        entry(0x49, "ld c,c", RegReg, Load, Op::Ld8(C, C)),
        entry(0x4A, "ld c,d", RegReg, Load, Op::Ld8(C, D)),
        entry(0x4B, "ld c,e", RegReg, Load, Op::Ld8(C, E)),
        entry(0x4C, "ld c,h", RegReg, Load, Op::Ld8(C, H)),
        entry(0x4D, "ld c,l", RegReg, Load, Op::Ld8(C, L)),
        entry(0x4E, "ld c,(hl)", RegHl, Load, Op::Ld8(C, HL_IND)),
        entry(0x4F, "ld c,a", RegReg, Load, Op::Ld8(C, A)),
        // 0x50
        entry(0x50, "ld d,b", RegReg, Load, Op::Ld8(D, B)),
        entry(0x51, "ld d,c", RegReg, Load, Op::Ld8(D, C)),
        entry(0x52, "ld d,d", RegReg, Load, Op::Ld8(D, D)),
        entry(0x53, "ld d,e", RegReg, Load, Op::Ld8(D, E)),
        entry(0x54, "ld d,h", RegReg, Load, Op::Ld8(D, H)),
        entry(0x55, "ld d,l", RegReg, Load, Op::Ld8(D, L)),
        entry(0x56, "ld d,(hl)", RegHl, Load, Op::Ld8(D, HL_IND)),
        entry(0x57, "ld d,a", RegReg, Load, Op::Ld8(D, A)),
        entry(0x58, "ld e,b", RegReg, Load, Op::Ld8(E, B)),
        entry(0x59, "ld e,c", RegReg, Load, Op::Ld8(E, C)),
        entry(0x5A, "ld e,d", RegReg, Load, Op::Ld8(E, D)),
        entry(0x5B, "ld e,e", RegReg, Load, Op::Ld8(E, E)),
        entry(0x5C, "ld e,h", RegReg, Load, Op::Ld8(E, H)),
        entry(0x5D, "ld e,l", RegReg, Load, Op::Ld8(E, L)),
        entry(0x5E, "ld e,(hl)", RegHl, Load, Op::Ld8(E, HL_IND)),
        entry(0x5F, "ld e,a", RegReg, Load, Op::Ld8(E, A)),
        // 0x60
        entry(0x60, "ld h,b", RegReg, Load, Op::Ld8(H, B)),
        entry(0x61, "ld h,c", RegReg, Load, Op::Ld8(H, C)),
        entry(0x62, "ld h,d", RegReg, Load, Op::Ld8(H, D)),
        entry(0x63, "ld h,e", RegReg, Load, Op::Ld8(H, E)),
        entry(0x64, "ld h,h", RegReg, Load, Op::Ld8(H, H)),
        entry(0x65, "ld h,l", RegReg, Load, Op::Ld8(H, L)),
        entry(0x66, "ld h,(hl)", RegHl, Load, Op::Ld8(H, HL_IND)),
        entry(0x67, "ld h,a", RegReg, Load, Op::Ld8(H, A)),
        entry(0x68, "ld l,b", RegReg, Load, Op::Ld8(L, B)),
        entry(0x69, "ld l,c", RegReg, Load, Op::Ld8(L, C)),
        entry(0x6A, "ld l,d", RegReg, Load, Op::Ld8(L, D)),
        entry(0x6B, "ld l,e", RegReg, Load, Op::Ld8(L, E)),
        entry(0x6C, "ld l,h", RegReg, Load, Op::Ld8(L, H)),
        entry(0x6D, "ld l,l", RegReg, Load, Op::Ld8(L, L)),
        entry(0x6E, "ld l,(hl)", RegHl, Load, Op::Ld8(L, HL_IND)),
        entry(0x6F, "ld l,a", RegReg, Load, Op::Ld8(L, A)),
        // 0x70
        entry(0x70, "ld (hl),b", RegHl, Load, Op::Ld8(HL_IND, B)),
        entry(0x71, "ld (hl),c", RegHl, Load, Op::Ld8(HL_IND, C)),
        entry(0x72, "ld (hl),d", RegHl, Load, Op::Ld8(HL_IND, D)),
        entry(0x73, "ld (hl),e", RegHl, Load, Op::Ld8(HL_IND, E)),
        entry(0x74, "ld (hl),h", RegHl, Load, Op::Ld8(HL_IND, H)),
        entry(0x75, "ld (hl),l", RegHl, Load, Op::Ld8(HL_IND, L)),
        entry(0x76, "halt", Implied, Control, Op::Halt),
        entry(0x77, "ld (hl),a", RegHl, Load, Op::Ld8(HL_IND, A)),
        entry(0x78, "ld a,b", RegReg, Load, Op::Ld8(A, B)),
        entry(0x79, "ld a,c", RegReg, Load, Op::Ld8(A, C)),
        entry(0x7A, "ld a,d", RegReg, Load, Op::Ld8(A, D)),
        entry(0x7B, "ld a,e", RegReg, Load, Op::Ld8(A, E)),
        entry(0x7C, "ld a,h", RegReg, Load, Op::Ld8(A, H)),
        entry(0x7D, "ld a,l", RegReg, Load, Op::Ld8(A, L)),
        entry(0x7E, "ld a,(hl)", RegHl, Load, Op::Ld8(A, HL_IND)),
        entry(0x7F, "ld a,a", RegReg, Load, Op::Ld8(A, A)),
        // 0x80
        entry(0x80, "add a,b", RegReg, Arithmetic, Op::Alu(AluOp::Add, B)),
        entry(0x81, "add a,c", RegReg, Arithmetic, Op::Alu(AluOp::Add, C)),
        entry(0x82, "add a,d", RegReg, Arithmetic, Op::Alu(AluOp::Add, D)),
        entry(0x83, "add a,e", RegReg, Arithmetic, Op::Alu(AluOp::Add, E)),
        entry(0x84, "add a,h", RegReg, Arithmetic, Op::Alu(AluOp::Add, H)),
        entry(0x85, "add a,l", RegReg, Arithmetic, Op::Alu(AluOp::Add, L)),
        entry(0x86, "add a,(hl)", RegHl, Arithmetic, Op::Alu(AluOp::Add, HL_IND)),
        entry(0x87, "add a,a", RegReg, Arithmetic, Op::Alu(AluOp::Add, A)),
        entry(0x88, "adc a,b", RegReg, Arithmetic, Op::Alu(AluOp::Adc, B)),
        entry(0x89, "adc a,c", RegReg, Arithmetic, Op::Alu(AluOp::Adc, C)),
        entry(0x8A, "adc a,d", RegReg, Arithmetic, Op::Alu(AluOp::Adc, D)),
        entry(0x8B, "adc a,e", RegReg, Arithmetic, Op::Alu(AluOp::Adc, E)),
        entry(0x8C, "adc a,h", RegReg, Arithmetic, Op::Alu(AluOp::Adc, H)),
        entry(0x8D, "adc a,l", RegReg, Arithmetic, Op::Alu(AluOp::Adc, L)),
        entry(0x8E, "adc a,(hl)", RegHl, Arithmetic, Op::Alu(AluOp::Adc, HL_IND)),
        entry(0x8F, "adc a,a", RegReg, Arithmetic, Op::Alu(AluOp::Adc, A)),
        // 0x90
        entry(0x90, "sub b", RegReg, Arithmetic, Op::Alu(AluOp::Sub, B)),
        entry(0x91, "sub c", RegReg, Arithmetic, Op::Alu(AluOp::Sub, C)),
        entry(0x92, "sub d", RegReg, Arithmetic, Op::Alu(AluOp::Sub, D)),
        entry(0x93, "sub e", RegReg, Arithmetic, Op::Alu(AluOp::Sub, E)),
        entry(0x94, "sub h", RegReg, Arithmetic, Op::Alu(AluOp::Sub, H)),
        entry(0x95, "sub l", RegReg, Arithmetic, Op::Alu(AluOp::Sub, L)),
        entry(0x96, "sub (hl)", RegHl, Arithmetic, Op::Alu(AluOp::Sub, HL_IND)),
        entry(0x97, "sub a", RegReg, Arithmetic, Op::Alu(AluOp::Sub, A)),
        entry(0x98, "sbc a,b", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, B)),
        entry(0x99, "sbc a,c", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, C)),
        entry(0x9A, "sbc a,d", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, D)),
        entry(0x9B, "sbc a,e", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, E)),
        entry(0x9C, "sbc a,h", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, H)),
        entry(0x9D, "sbc a,l", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, L)),
        entry(0x9E, "sbc a,(hl)", RegHl, Arithmetic, Op::Alu(AluOp::Sbc, HL_IND)),
        entry(0x9F, "sbc a,a", RegReg, Arithmetic, Op::Alu(AluOp::Sbc, A)),
        // 0xA0
        entry(0xA0, "and b", RegReg, Arithmetic, Op::Alu(AluOp::And, B)),
        entry(0xA1, "and c", RegReg, Arithmetic, Op::Alu(AluOp::And, C)),
        entry(0xA2, "and d", RegReg, Arithmetic, Op::Alu(AluOp::And, D)),
        entry(0xA3, "and e", RegReg, Arithmetic, Op::Alu(AluOp::And, E)),
        entry(0xA4, "and h", RegReg, Arithmetic, Op::Alu(AluOp::And, H)),
        entry(0xA5, "and l", RegReg, Arithmetic, Op::Alu(AluOp::And, L)),
        entry(0xA6, "and (hl)", RegHl, Arithmetic, Op::Alu(AluOp::And, HL_IND)),
        entry(0xA7, "and a", RegReg, Arithmetic, Op::Alu(AluOp::And, A)),
        entry(0xA8, "xor b", RegReg, Arithmetic, Op::Alu(AluOp::Xor, B)),
        entry(0xA9, "xor c", RegReg, Arithmetic, Op::Alu(AluOp::Xor, C)),
        entry(0xAA, "xor d", RegReg, Arithmetic, Op::Alu(AluOp::Xor, D)),
        entry(0xAB, "xor e", RegReg, Arithmetic, Op::Alu(AluOp::Xor, E)),
        entry(0xAC, "xor h", RegReg, Arithmetic, Op::Alu(AluOp::Xor, H)),
        entry(0xAD, "xor l", RegReg, Arithmetic, Op::Alu(AluOp::Xor, L)),
        entry(0xAE, "xor (hl)", RegHl, Arithmetic, Op::Alu(AluOp::Xor, HL_IND)),
        entry(0xAF, "xor a", RegReg, Arithmetic, Op::Alu(AluOp::Xor, A)),
        // 0xB0
        entry(0xB0, "or b", RegReg, Arithmetic, Op::Alu(AluOp::Or, B)),
        entry(0xB1, "or c", RegReg, Arithmetic, Op::Alu(AluOp::Or, C)),
        entry(0xB2, "or d", RegReg, Arithmetic, Op::Alu(AluOp::Or, D)),
        entry(0xB3, "or e", RegReg, Arithmetic, Op::Alu(AluOp::Or, E)),
        entry(0xB4, "or h", RegReg, Arithmetic, Op::Alu(AluOp::Or, H)),
        entry(0xB5, "or l", RegReg, Arithmetic, Op::Alu(AluOp::Or, L)),
        entry(0xB6, "or (hl)", RegHl, Arithmetic, Op::Alu(AluOp::Or, HL_IND)),
        entry(0xB7, "or a", RegReg, Arithmetic, Op::Alu(AluOp::Or, A)),
        entry(0xB8, "cp b", RegReg, Arithmetic, Op::Alu(AluOp::Cp, B)),
        entry(0xB9, "cp c", RegReg, Arithmetic, Op::Alu(AluOp::Cp, C)),
        entry(0xBA, "cp d", RegReg, Arithmetic, Op::Alu(AluOp::Cp, D)),
        entry(0xBB, "cp e", RegReg, Arithmetic, Op::Alu(AluOp::Cp, E)),
        entry(0xBC, "cp h", RegReg, Arithmetic, Op::Alu(AluOp::Cp, H)),
        entry(0xBD, "cp l", RegReg, Arithmetic, Op::Alu(AluOp::Cp, L)),
        entry(0xBE, "cp (hl)", RegHl, Arithmetic, Op::Alu(AluOp::Cp, HL_IND)),
        entry(0xBF, "cp a", RegReg, Arithmetic, Op::Alu(AluOp::Cp, A)),
        // 0xC0
        entry(0xC0, "ret nz", Implied, ControlFlow, Op::Ret(Some(Condition::Nz))),
        entry(0xC1, "pop bc", Implied, Stack, Op::Pop(StackPair::Bc)),
        entry(0xC2, "jp nz,*", Imm16, ControlFlow, Op::Jp(Some(Condition::Nz))),
        entry(0xC3, "jp *", Imm16, ControlFlow, Op::Jp(None)),
        entry(0xC4, "call nz,*", Imm16, ControlFlow, Op::Call(Some(Condition::Nz))),
        entry(0xC5, "push bc", Implied, Stack, Op::Push(StackPair::Bc)),
        entry(0xC6, "add a,*", Imm8, Arithmetic, Op::Alu(AluOp::Add, IMM)),
        entry(0xC7, "rst 00h", Implied, ControlFlow, Op::Rst(0x00)),
        entry(0xC8, "ret z", Implied, ControlFlow, Op::Ret(Some(Condition::Z))),
        entry(0xC9, "ret", Implied, ControlFlow, Op::Ret(None)),
        entry(0xCA, "jp z,*", Imm16, ControlFlow, Op::Jp(Some(Condition::Z))),
        Decoded::UnimplementedPrefix(Prefix::Cb),
        entry(0xCC, "call z,*", Imm16, ControlFlow, Op::Call(Some(Condition::Z))),
        entry(0xCD, "call *", Imm16, ControlFlow, Op::Call(None)),
        entry(0xCE, "adc a,*", Imm8, Arithmetic, Op::Alu(AluOp::Adc, IMM)),
        entry(0xCF, "rst 08h", Implied, ControlFlow, Op::Rst(0x08)),
        // 0xD0
        entry(0xD0, "ret nc", Implied, ControlFlow, Op::Ret(Some(Condition::Nc))),
        entry(0xD1, "pop de", Implied, Stack, Op::Pop(StackPair::De)),
        entry(0xD2, "jp nc,*", Imm16, ControlFlow, Op::Jp(Some(Condition::Nc))),
        entry(0xD3, "out (*),a", Port8, Control, Op::Out),
        entry(0xD4, "call nc,*", Imm16, ControlFlow, Op::Call(Some(Condition::Nc))),
        entry(0xD5, "push de", Implied, Stack, Op::Push(StackPair::De)),
        entry(0xD6, "sub *", Imm8, Arithmetic, Op::Alu(AluOp::Sub, IMM)),
        entry(0xD7, "rst 10h", Implied, ControlFlow, Op::Rst(0x10)),
        entry(0xD8, "ret c", Implied, ControlFlow, Op::Ret(Some(Condition::C))),
        entry(0xD9, "exx", Implied, Exchange, Op::Exx),
        entry(0xDA, "jp c,*", Imm16, ControlFlow, Op::Jp(Some(Condition::C))),
        entry(0xDB, "in a,(*)", Port8, Control, Op::In),
        entry(0xDC, "call c,*", Imm16, ControlFlow, Op::Call(Some(Condition::C))),
        Decoded::UnimplementedPrefix(Prefix::Dd),
        entry(0xDE, "sbc a,*", Imm8, Arithmetic, Op::Alu(AluOp::Sbc, IMM)),
        entry(0xDF, "rst 18h", Implied, ControlFlow, Op::Rst(0x18)),
        // 0xE0
        entry(0xE0, "ret po", Implied, ControlFlow, Op::Ret(Some(Condition::Po))),
        entry(0xE1, "pop hl", Implied, Stack, Op::Pop(StackPair::Hl)),
        entry(0xE2, "jp po,*", Imm16, ControlFlow, Op::Jp(Some(Condition::Po))),
        entry(0xE3, "ex (sp),hl", Implied, Exchange, Op::ExSpHl),
        entry(0xE4, "call po,*", Imm16, ControlFlow, Op::Call(Some(Condition::Po))),
        entry(0xE5, "push hl", Implied, Stack, Op::Push(StackPair::Hl)),
        entry(0xE6, "and *", Imm8, Arithmetic, Op::Alu(AluOp::And, IMM)),
        entry(0xE7, "rst 20h", Implied, ControlFlow, Op::Rst(0x20)),
        entry(0xE8, "ret pe", Implied, ControlFlow, Op::Ret(Some(Condition::Pe))),
        entry(0xE9, "jp (hl)", Implied, ControlFlow, Op::JpHl),
        entry(0xEA, "jp pe,*", Imm16, ControlFlow, Op::Jp(Some(Condition::Pe))),
        entry(0xEB, "ex de,hl", Implied, Exchange, Op::ExDeHl),
        entry(0xEC, "call pe,*", Imm16, ControlFlow, Op::Call(Some(Condition::Pe))),
        Decoded::UnimplementedPrefix(Prefix::Ed),
        entry(0xEE, "xor *", Imm8, Arithmetic, Op::Alu(AluOp::Xor, IMM)),
        entry(0xEF, "rst 28h", Implied, ControlFlow, Op::Rst(0x28)),
        // 0xF0
        entry(0xF0, "ret p", Implied, ControlFlow, Op::Ret(Some(Condition::P))),
        entry(0xF1, "pop af", Implied, Stack, Op::Pop(StackPair::Af)),
        entry(0xF2, "jp p,*", Imm16, ControlFlow, Op::Jp(Some(Condition::P))),
        entry(0xF3, "di", Implied, Control, Op::Di),
        entry(0xF4, "call p,*", Imm16, ControlFlow, Op::Call(Some(Condition::P))),
        entry(0xF5, "push af", Implied, Stack, Op::Push(StackPair::Af)),
        entry(0xF6, "or *", Imm8, Arithmetic, Op::Alu(AluOp::Or, IMM)),
        entry(0xF7, "rst 30h", Implied, ControlFlow, Op::Rst(0x30)),
        entry(0xF8, "ret m", Implied, ControlFlow, Op::Ret(Some(Condition::M))),
        entry(0xF9, "ld sp,hl", Implied, Load, Op::LdSpHl),
        entry(0xFA, "jp m,*", Imm16, ControlFlow, Op::Jp(Some(Condition::M))),
        entry(0xFB, "ei", Implied, Control, Op::Ei),
        entry(0xFC, "call m,*", Imm16, ControlFlow, Op::Call(Some(Condition::M))),
        Decoded::UnimplementedPrefix(Prefix::Fd),
        entry(0xFE, "cp *", Imm8, Arithmetic, Op::Alu(AluOp::Cp, IMM)),
        entry(0xFF, "rst 38h", Implied, ControlFlow, Op::Rst(0x38)),
    ];
}
