//! Platform carry-less multiplication capability.
//!
//! The general multiplier is built on a single primitive: a carry-less
//! 64x64 -> 128-bit product, where bit `k` of the result is the XOR over all
//! `i + j = k` of `a[i] & b[j]`. This is a CPU capability, not a library
//! concern: on x86_64 it is the PCLMULQDQ instruction, on aarch64 the NEON
//! `PMULL` instruction. Targets without such an instruction fail to compile;
//! the field contract does not include a slower software substitute.

pub mod karatsuba;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!(
    "gf2p127-field requires a carry-less multiply instruction \
     (PCLMULQDQ on x86_64 or PMULL on aarch64)"
);

/// Carry-less product of two 64-bit polynomials over GF(2).
#[inline]
pub fn clmul(a: u64, b: u64) -> u128 {
    // The instruction is assumed present on every supported target
    // (PCLMULQDQ since Westmere, PMULL on every armv8 with the crypto
    // extension); unsupported architectures are rejected at compile time.
    unsafe { clmul_impl(a, b) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "pclmulqdq")]
unsafe fn clmul_impl(a: u64, b: u64) -> u128 {
    use std::arch::x86_64::{_mm_clmulepi64_si128, _mm_set_epi64x};
    let a = _mm_set_epi64x(0, a as i64);
    let b = _mm_set_epi64x(0, b as i64);
    // Multiply the low 64-bit lanes; the __m128i result is the full
    // 128-bit polynomial product, reinterpreted as a little-endian u128.
    std::mem::transmute(_mm_clmulepi64_si128::<0x00>(a, b))
}

#[cfg(target_arch = "aarch64")]
#[inline]
#[target_feature(enable = "neon,aes")]
unsafe fn clmul_impl(a: u64, b: u64) -> u128 {
    std::arch::aarch64::vmull_p64(a, b)
}
