//! Arithmetic for the binary field GF(2^127).
//!
//! The field is GF(2)\[x\] modulo the irreducible trinomial
//! `f(x) = x^127 + x^63 + 1`. An element is a 127-bit polynomial stored in a
//! `u128` (low 64 bits hold the coefficients of `x^0..x^63`, high 64 bits the
//! coefficients of `x^64..x^126`; bit 127 of the container is always zero).
//!
//! Addition is XOR. General multiplication is a Karatsuba decomposition over
//! the CPU carry-less multiply instruction followed by a two-step reduction
//! modulo `f(x)`; there is no software fallback, so the crate only builds on
//! targets that provide such an instruction (see [`backend`]).
//!
//! Every operation is a pure function over small `Copy` values: no heap, no
//! shared state, no data-dependent branches in the multipliers.

pub mod backend;
pub mod constant;
pub mod field;
mod fmt;

pub use constant::Constant;
pub use field::Gf2p127;
pub use fmt::ParseGf2p127Error;
