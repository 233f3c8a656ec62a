//! Textual renderings of field elements, for debugging and tests.
//!
//! Two forms: a human-readable sum of powers of two ([`std::fmt::Display`])
//! and a fixed-width 32-digit hexadecimal form ([`std::fmt::LowerHex`]) that
//! round-trips through [`std::str::FromStr`].

use crate::field::Gf2p127;
use std::{fmt, str::FromStr};

/// Renders the element as a sum of powers of two.
///
/// Bit 0 prints as a leading `1` or `0`; every further set bit `k` appends
/// `" + 2^k"`. Inspection only, not meant to round-trip.
impl fmt::Display for Gf2p127 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.into_inner();
        write!(f, "{}", bits & 1)?;
        for k in 1..128 {
            if (bits >> k) & 1 == 1 {
                write!(f, " + 2^{k}")?;
            }
        }
        Ok(())
    }
}

/// Renders the element as exactly 32 hex digits, high half first.
impl fmt::LowerHex for Gf2p127 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.into_inner())
    }
}

/// Failure modes of parsing the 32-digit hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGf2p127Error {
    /// The input was not exactly 32 characters long.
    #[display("expected exactly 32 hex digits")]
    Length,
    /// The input contained a character outside `[0-9a-fA-F]`.
    #[display("invalid hex digit")]
    Digit,
    /// The encoded value had bit 127 set, which no field element has.
    #[display("bit 127 set: not a canonical field element")]
    NonCanonical,
}

/// Parses the 32-digit hex form produced by the `LowerHex` impl.
impl FromStr for Gf2p127 {
    type Err = ParseGf2p127Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseGf2p127Error::Length);
        }
        // from_str_radix alone is too lenient (it admits a sign prefix).
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseGf2p127Error::Digit);
        }
        let hi = u64::from_str_radix(&s[..16], 16).map_err(|_| ParseGf2p127Error::Digit)?;
        let lo = u64::from_str_radix(&s[16..], 16).map_err(|_| ParseGf2p127Error::Digit)?;
        let value = (u128::from(hi) << 64) | u128::from(lo);
        if value >> 127 != 0 {
            return Err(ParseGf2p127Error::NonCanonical);
        }
        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_zero_and_one() {
        assert_eq!(Gf2p127::ZERO.to_string(), "0");
        assert_eq!(Gf2p127::ONE.to_string(), "1");
    }

    #[test]
    fn test_show_low_bits() {
        // 0b101 = 1 + x^2
        assert_eq!(Gf2p127::from(0b101_u64).to_string(), "1 + 2^2");
        // 0b110 = x + x^2, bit 0 clear
        assert_eq!(Gf2p127::from(0b110_u64).to_string(), "0 + 2^1 + 2^2");
    }

    #[test]
    fn test_show_high_half() {
        assert_eq!(Gf2p127::new(1 << 64).to_string(), "0 + 2^64");
        assert_eq!(Gf2p127::new((1 << 126) | 1).to_string(), "1 + 2^126");
    }

    #[test]
    fn test_hex_fixed_width() {
        assert_eq!(format!("{:x}", Gf2p127::ONE), "00000000000000000000000000000001");
        assert_eq!(format!("{:x}", Gf2p127::ZERO), "00000000000000000000000000000000");
        assert_eq!(
            format!("{:x}", Gf2p127::new(Gf2p127::MASK)),
            "7fffffffffffffffffffffffffffffff"
        );

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = Gf2p127::random(&mut rng);
            assert_eq!(format!("{a:x}").len(), 32);
        }
    }

    #[test]
    fn test_hex_high_half_first() {
        let a = Gf2p127::new((0x0123_4567_89AB_CDEF << 64) | 0xFEDC_BA98_7654_3210);
        assert_eq!(format!("{a:x}"), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = Gf2p127::random(&mut rng);
            let parsed: Gf2p127 = format!("{a:x}").parse().unwrap();
            assert_eq!(parsed, a);
        }
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!("".parse::<Gf2p127>(), Err(ParseGf2p127Error::Length));
        assert_eq!("1".parse::<Gf2p127>(), Err(ParseGf2p127Error::Length));
        assert_eq!(
            "000000000000000000000000000000001".parse::<Gf2p127>(),
            Err(ParseGf2p127Error::Length)
        );
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert_eq!(
            "0000000000000000000000000000000g".parse::<Gf2p127>(),
            Err(ParseGf2p127Error::Digit)
        );
        // A sign prefix is not a hex digit.
        assert_eq!(
            "+0000000000000000000000000000001".parse::<Gf2p127>(),
            Err(ParseGf2p127Error::Digit)
        );
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        assert_eq!(
            "80000000000000000000000000000000".parse::<Gf2p127>(),
            Err(ParseGf2p127Error::NonCanonical)
        );
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let parsed: Gf2p127 = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(parsed.into_inner(), (0x0123_4567_89AB_CDEF << 64) | 0xFEDC_BA98_7654_3210);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseGf2p127Error::Length.to_string(), "expected exactly 32 hex digits");
        assert_eq!(ParseGf2p127Error::Digit.to_string(), "invalid hex digit");
    }
}
