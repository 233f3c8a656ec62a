//! The fixed two-bit constant multipliers: 0, 1, x and x + 1.
//!
//! Bit-serial and windowed multiplication schemes consume a multiplier two
//! bits at a time; each window value selects one of these four fixed
//! multipliers. The set is closed and known at compile time, so it is an
//! enumerated tag dispatching to four pure functions rather than anything
//! dynamic.

use crate::field::Gf2p127;
use std::ops::Mul;

/// A field constant expressible in two bits.
///
/// The discriminant is the constant's coefficient pattern: `0b10` is the
/// polynomial `x`, `0b11` is `x + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Constant {
    /// Multiplication by 0: annihilates the input.
    Zero = 0b00,
    /// Multiplication by 1: the identity.
    One = 0b01,
    /// Multiplication by `x`: doubling, with reduction on degree-126 inputs.
    X = 0b10,
    /// Multiplication by `x + 1`: the sum of the previous two.
    XPlusOne = 0b11,
}

impl Constant {
    /// All four constants, in selector order.
    pub const ALL: [Self; 4] = [Self::Zero, Self::One, Self::X, Self::XPlusOne];

    /// Multiplies `a` by the constant.
    #[inline]
    pub fn mul(self, a: Gf2p127) -> Gf2p127 {
        match self {
            Self::Zero => Gf2p127::ZERO,
            Self::One => a,
            Self::X => a.mul_x(),
            Self::XPlusOne => a.mul_x() + a,
        }
    }
}

/// The constant as a field element: 0, 1, x or x + 1.
impl From<Constant> for Gf2p127 {
    #[inline]
    fn from(constant: Constant) -> Self {
        Self::from(u64::from(constant as u8))
    }
}

impl Mul<Constant> for Gf2p127 {
    type Output = Self;

    #[inline]
    fn mul(self, constant: Constant) -> Self::Output {
        constant.mul(self)
    }
}
