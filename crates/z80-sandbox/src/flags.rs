//! Z80 flag register.
//!
//! Flags are held as independent booleans. The packed byte layout only
//! exists at the `PUSH AF` / `POP AF` boundary and for observation.

/// Sign flag (bit 7) - set if result is negative.
pub const SF: u8 = 0b1000_0000;

/// Zero flag (bit 6) - set if result is zero.
pub const ZF: u8 = 0b0100_0000;

/// Half-carry flag (bit 4) - carry from bit 3 to bit 4.
pub const HF: u8 = 0b0001_0000;

/// Parity/Overflow flag (bit 2) - parity or overflow depending on instruction.
pub const PF: u8 = 0b0000_0100;

/// Add/Subtract flag (bit 1) - set if last operation was subtraction.
pub const NF: u8 = 0b0000_0010;

/// Carry flag (bit 0) - carry out of bit 7.
pub const CF: u8 = 0b0000_0001;

/// The six architectural flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    pub sign: bool,
    pub zero: bool,
    pub half_carry: bool,
    pub parity_overflow: bool,
    pub subtract: bool,
    pub carry: bool,
}

impl Flags {
    /// Pack into the F register layout. Bits 3 and 5 are always zero.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        let mut f = 0;
        if self.sign {
            f |= SF;
        }
        if self.zero {
            f |= ZF;
        }
        if self.half_carry {
            f |= HF;
        }
        if self.parity_overflow {
            f |= PF;
        }
        if self.subtract {
            f |= NF;
        }
        if self.carry {
            f |= CF;
        }
        f
    }

    /// Unpack from the F register layout, ignoring bits 3 and 5.
    #[must_use]
    pub const fn from_byte(f: u8) -> Self {
        Self {
            sign: f & SF != 0,
            zero: f & ZF != 0,
            half_carry: f & HF != 0,
            parity_overflow: f & PF != 0,
            subtract: f & NF != 0,
            carry: f & CF != 0,
        }
    }

    /// Sign and zero derived from an 8-bit result; everything else clear.
    #[must_use]
    pub const fn sz(value: u8) -> Self {
        Self {
            sign: value & 0x80 != 0,
            zero: value == 0,
            half_carry: false,
            parity_overflow: false,
            subtract: false,
            carry: false,
        }
    }

    /// Like [`Flags::sz`], with parity of the result in P/V.
    #[must_use]
    pub const fn szp(value: u8) -> Self {
        let mut f = Self::sz(value);
        f.parity_overflow = parity(value);
        f
    }
}

/// Compute parity of a byte (true if even number of 1 bits).
#[must_use]
pub const fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}
