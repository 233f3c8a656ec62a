//! Karatsuba multiplication and reduction for GF(2^127).
//!
//! A full 127x127-bit product is assembled from three carry-less
//! 64x64 -> 128-bit products ([`karatsuba1`]), folded into a 254-bit
//! intermediate ([`karatsuba2`]) and reduced modulo
//! `f(x) = x^127 + x^63 + 1` ([`reduce`]). Every step is straight-line
//! XOR/shift code over the [`clmul`] primitive.

use super::clmul;

/// First Karatsuba step: the three partial products of `a * b`.
///
/// Splits each operand into 64-bit halves `(a0, a1)`, `(b0, b1)` and
/// computes:
/// - `h = a1 * b1` (high product)
/// - `m = (a0 ^ a1) * (b0 ^ b1)` (middle product)
/// - `l = a0 * b0` (low product)
///
/// One multiply is saved over the schoolbook four: the cross term
/// `a0*b1 ^ a1*b0` is recovered from `m ^ h ^ l` in [`karatsuba2`].
#[inline]
pub(crate) fn karatsuba1(a: u128, b: u128) -> (u128, u128, u128) {
    let (a0, a1) = (a as u64, (a >> 64) as u64);
    let (b0, b1) = (b as u64, (b >> 64) as u64);
    let h = clmul(a1, b1);
    let m = clmul(a0 ^ a1, b0 ^ b1);
    let l = clmul(a0, b0);
    (h, m, l)
}

/// Second Karatsuba step: combines the partial products into the 254-bit
/// product `hi * x^128 + lo`.
///
/// The cross term `t = m ^ h ^ l` sits at bit offset 64, so its low half
/// folds into the top of `lo` and its high half into the bottom of `hi`.
#[inline]
pub(crate) fn karatsuba2(h: u128, m: u128, l: u128) -> (u128, u128) {
    let t = m ^ h ^ l;
    let hi = h ^ (t >> 64);
    let lo = l ^ (t << 64);
    (hi, lo)
}

/// Reduces the 254-bit product `hi * x^128 + lo` modulo
/// `f(x) = x^127 + x^63 + 1`.
///
/// From the modulus, `x^127 = x^63 + 1` and therefore `x^128 = x^64 + x`.
/// The fold runs twice: the first pass folds `hi` down, the second folds the
/// bits the first pass pushed past position 127 (`hi >> 64`, from the
/// `hi << 64` term). The surviving degree-127 coefficient is then cleared
/// with the `x^127 = x^63 + 1` substitution. Branch-free; the result is the
/// unique representative below `2^127`.
#[inline]
pub(crate) fn reduce(hi: u128, lo: u128) -> u128 {
    // x^128 * hi = (x^64 + x) * hi
    let mut acc = lo ^ (hi << 64) ^ (hi << 1);
    // Bits of hi << 64 that overflowed the 128-bit container, folded with
    // the same identity. `carry` has at most 62 bits, so this pass is exact.
    let carry = hi >> 64;
    acc ^= (carry << 64) ^ (carry << 1);
    // x^127 = x^63 + 1
    let top = acc >> 127;
    acc ^ (top << 127) ^ (top << 63) ^ top
}
