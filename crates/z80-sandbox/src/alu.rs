//! ALU operations for the Z80.
//!
//! Every function is pure: it takes operand values (and the incoming flags
//! where some flags must survive the operation) and returns the result with
//! the complete new flag set.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.
#![allow(clippy::verbose_bit_mask)] // Clearer to read mask comparisons.

use crate::flags::Flags;

/// Result of an ALU operation with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub flags: Flags,
}

/// The eight accumulator operations selected by bits 3-5 of `ALU A,r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    /// Apply to the accumulator. `Cp` returns the accumulator unchanged.
    #[must_use]
    pub fn apply(self, a: u8, operand: u8, flags: Flags) -> AluResult {
        match self {
            Self::Add => add8(a, operand, false),
            Self::Adc => add8(a, operand, flags.carry),
            Self::Sub => sub8(a, operand, false),
            Self::Sbc => sub8(a, operand, flags.carry),
            Self::And => and8(a, operand),
            Self::Xor => xor8(a, operand),
            Self::Or => or8(a, operand),
            Self::Cp => cp8(a, operand),
        }
    }
}

/// Add two bytes with optional carry, returning result and flags.
#[must_use]
pub fn add8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let result16 = u16::from(a) + u16::from(b) + u16::from(c);
    let result = result16 as u8;

    let mut flags = Flags::sz(result);
    flags.half_carry = (a & 0x0F) + (b & 0x0F) + c > 0x0F;
    // Both operands same sign, result different sign
    flags.parity_overflow = ((a ^ b) & 0x80 == 0) && ((a ^ result) & 0x80 != 0);
    flags.carry = result16 > 0xFF;

    AluResult { value: result, flags }
}

/// Subtract two bytes with optional borrow, returning result and flags.
#[must_use]
pub fn sub8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let result = a.wrapping_sub(b).wrapping_sub(c);

    let mut flags = Flags::sz(result);
    flags.subtract = true;
    // Borrow from bit 4
    flags.half_carry = (a & 0x0F) < (b & 0x0F) + c;
    // Operands different sign, result same sign as subtrahend
    flags.parity_overflow = ((a ^ b) & 0x80 != 0) && ((b ^ result) & 0x80 == 0);
    flags.carry = u16::from(a) < u16::from(b) + u16::from(c);

    AluResult { value: result, flags }
}

/// AND operation.
#[must_use]
pub fn and8(a: u8, b: u8) -> AluResult {
    let result = a & b;
    let mut flags = Flags::szp(result);
    flags.half_carry = true;
    AluResult { value: result, flags }
}

/// OR operation.
#[must_use]
pub fn or8(a: u8, b: u8) -> AluResult {
    let result = a | b;
    AluResult {
        value: result,
        flags: Flags::szp(result),
    }
}

/// XOR operation.
#[must_use]
pub fn xor8(a: u8, b: u8) -> AluResult {
    let result = a ^ b;
    AluResult {
        value: result,
        flags: Flags::szp(result),
    }
}

/// Compare (subtract without storing result).
#[must_use]
pub fn cp8(a: u8, b: u8) -> AluResult {
    AluResult {
        value: a,
        flags: sub8(a, b, false).flags,
    }
}

/// Increment byte. Carry passes through untouched.
#[must_use]
pub fn inc8(a: u8, carry: bool) -> AluResult {
    let result = a.wrapping_add(1);

    let mut flags = Flags::sz(result);
    flags.half_carry = a & 0x0F == 0x0F;
    flags.parity_overflow = a == 0x7F;
    flags.carry = carry;

    AluResult { value: result, flags }
}

/// Decrement byte. Carry passes through untouched.
#[must_use]
pub fn dec8(a: u8, carry: bool) -> AluResult {
    let result = a.wrapping_sub(1);

    let mut flags = Flags::sz(result);
    flags.subtract = true;
    flags.half_carry = a & 0x0F == 0x00;
    flags.parity_overflow = a == 0x80;
    flags.carry = carry;

    AluResult { value: result, flags }
}

/// 16-bit add for `ADD HL,rr`.
///
/// Only H, N and C change; S, Z and P/V are carried over from `flags`.
#[must_use]
pub fn add16(a: u16, b: u16, flags: Flags) -> (u16, Flags) {
    let result32 = u32::from(a) + u32::from(b);
    let result = result32 as u16;

    let flags = Flags {
        // Half-carry from bit 11
        half_carry: (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF,
        subtract: false,
        carry: result32 > 0xFFFF,
        ..flags
    };

    (result, flags)
}

/// Decimal-adjust the accumulator after BCD add or subtract.
#[must_use]
pub fn daa(a: u8, flags: Flags) -> AluResult {
    let mut correction = 0;
    let mut carry = flags.carry;

    if flags.half_carry || a & 0x0F > 0x09 {
        correction |= 0x06;
    }
    if flags.carry || a > 0x99 {
        correction |= 0x60;
        carry = true;
    }

    let result = if flags.subtract {
        a.wrapping_sub(correction)
    } else {
        a.wrapping_add(correction)
    };

    let mut out = Flags::szp(result);
    out.half_carry = if flags.subtract {
        flags.half_carry && a & 0x0F < 0x06
    } else {
        a & 0x0F > 0x09
    };
    out.subtract = flags.subtract;
    out.carry = carry;

    AluResult { value: result, flags: out }
}

/// Complement the accumulator.
#[must_use]
pub fn cpl(a: u8, flags: Flags) -> AluResult {
    AluResult {
        value: !a,
        flags: Flags {
            half_carry: true,
            subtract: true,
            ..flags
        },
    }
}

/// Set carry flag.
#[must_use]
pub fn scf(flags: Flags) -> Flags {
    Flags {
        half_carry: false,
        subtract: false,
        carry: true,
        ..flags
    }
}

/// Complement carry flag. H takes the old carry.
#[must_use]
pub fn ccf(flags: Flags) -> Flags {
    Flags {
        half_carry: flags.carry,
        subtract: false,
        carry: !flags.carry,
        ..flags
    }
}

/// The four accumulator rotates (`RLCA`, `RRCA`, `RLA`, `RRA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotate {
    /// Rotate left circular (bit 7 -> carry and bit 0).
    Rlca,
    /// Rotate right circular (bit 0 -> carry and bit 7).
    Rrca,
    /// Rotate left through carry.
    Rla,
    /// Rotate right through carry.
    Rra,
}

impl Rotate {
    /// Rotate the accumulator. S, Z and P/V are preserved; H and N cleared.
    #[must_use]
    pub fn apply(self, a: u8, flags: Flags) -> AluResult {
        let old_carry = u8::from(flags.carry);
        let (value, carry_out) = match self {
            Self::Rlca => (a.rotate_left(1), a >> 7),
            Self::Rrca => (a.rotate_right(1), a & 1),
            Self::Rla => ((a << 1) | old_carry, a >> 7),
            Self::Rra => ((a >> 1) | (old_carry << 7), a & 1),
        };

        AluResult {
            value,
            flags: Flags {
                half_carry: false,
                subtract: false,
                carry: carry_out != 0,
                ..flags
            },
        }
    }
}
