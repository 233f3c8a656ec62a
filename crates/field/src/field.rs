//! The GF(2^127) element type and its ring operations.

use crate::backend::karatsuba::{karatsuba1, karatsuba2, reduce};
use num_traits::{One, Zero};
use rand::Rng;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

/// An element of GF(2^127): a polynomial over GF(2) of degree at most 126.
///
/// Coefficients live in a `u128` container, bit `k` holding the coefficient
/// of `x^k`. Bit 127 is always zero; every producing operation preserves
/// this, so the type has exactly `2^127` distinct values and equality is
/// bit-exact comparison of the container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gf2p127(u128);

impl Gf2p127 {
    /// The additive identity.
    pub const ZERO: Self = Self(0);

    /// The multiplicative identity, the polynomial `1`.
    pub const ONE: Self = Self(1);

    /// Mask selecting the 127 coefficient bits of the container.
    pub(crate) const MASK: u128 = (1 << 127) - 1;

    /// Creates an element from its coefficient bits.
    ///
    /// Bit 127 of `value` is discarded: the container invariant admits no
    /// degree-127 coefficient.
    #[inline(always)]
    pub const fn new(value: u128) -> Self {
        Self(value & Self::MASK)
    }

    /// Returns the coefficient bits of the element.
    #[inline(always)]
    pub const fn into_inner(self) -> u128 {
        self.0
    }

    /// Multiplies the element by the polynomial `x` (doubling).
    ///
    /// Shifts every coefficient up by one degree. When the degree-126
    /// coefficient was set the shift would produce `x^127`, which folds back
    /// as `x^63 + 1`. Branch-free: the overflow bit gates the fold mask.
    #[inline]
    pub const fn mul_x(self) -> Self {
        let shifted = self.0 << 1;
        // The shifted-out bit 127 is exactly the original degree-126
        // coefficient, since bit 127 of the container is always zero.
        let over = shifted >> 127;
        Self(shifted ^ (over << 127) ^ (over << 63) ^ over)
    }

    /// Multiplies the element by a single-bit coefficient.
    ///
    /// Returns `self` when `bit` is true and [`Self::ZERO`] otherwise,
    /// computed by masking rather than branching.
    #[inline]
    pub const fn mul_bit(self, bit: bool) -> Self {
        Self(self.0 & (bit as u128).wrapping_neg())
    }

    /// Samples a uniformly random field element.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen::<u128>() & Self::MASK)
    }
}

/// Lifts a machine word into the field.
///
/// No reduction is needed: any `u64` is already far below the modulus.
impl From<u64> for Gf2p127 {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl Add<Self> for Gf2p127 {
    type Output = Self;

    /// Addition in characteristic 2 is XOR of the coefficient bits.
    #[inline(always)]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, other: Self) -> Self::Output {
        Self(self.0 ^ other.0)
    }
}

impl Add<&Self> for Gf2p127 {
    type Output = Self;

    #[inline(always)]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, other: &Self) -> Self::Output {
        Self(self.0 ^ other.0)
    }
}

impl AddAssign for Gf2p127 {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub<Self> for Gf2p127 {
    type Output = Self;

    /// Subtraction coincides with addition: every element is its own
    /// additive inverse.
    #[inline(always)]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, other: Self) -> Self::Output {
        self + other
    }
}

impl Neg for Gf2p127 {
    type Output = Self;

    /// Negation is a no-op in characteristic 2.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        self
    }
}

impl Mul<Self> for Gf2p127 {
    type Output = Self;

    /// Full field multiplication, constant-shape.
    ///
    /// Three carry-less products (Karatsuba), a fold into the 254-bit
    /// intermediate and a two-step reduction modulo `x^127 + x^63 + 1`.
    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        let (h, m, l) = karatsuba1(self.0, other.0);
        let (hi, lo) = karatsuba2(h, m, l);
        Self(reduce(hi, lo))
    }
}

impl Mul<&Self> for Gf2p127 {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self::Output {
        self * *other
    }
}

impl MulAssign for Gf2p127 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl Zero for Gf2p127 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for Gf2p127 {
    fn one() -> Self {
        Self::ONE
    }
}
