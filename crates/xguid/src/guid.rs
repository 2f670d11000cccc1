//! The Guid value type and its textual codec
//!
//! A `Guid` is 16 order-significant bytes passed around by value. The
//! canonical text form is 8-4-4-4-12 lowercase hex, 36 characters:
//!
//! ```text
//! xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//! ```
//!
//! The parser is lenient about hyphen placement (hyphens are skipped
//! wherever they appear) but strict about digit count and validity.
//! Malformed input never produces an error: the value collapses to
//! `Guid::ZERO` and is only distinguishable through `is_valid`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Byte ranges of the five hyphen-separated groups in canonical form
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// A 128-bit globally unique identifier.
///
/// Equality is bytewise, ordering is lexicographic with index 0 most
/// significant, and hashing is consistent with equality, so `Guid` works
/// as a key in both hashed and ordered containers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Guid {
    bytes: [u8; 16],
}

impl Guid {
    /// The all-zero sentinel.
    ///
    /// Doubles as "explicitly empty" and "construction failed" - the two
    /// are indistinguishable by design, and a genuinely random all-zero
    /// generation (probability ~2^-128) is likewise reported as invalid.
    pub const ZERO: Guid = Guid { bytes: [0; 16] };

    /// Create a guid from exactly 16 bytes, copied verbatim.
    #[inline]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Guid { bytes }
    }

    /// Create a guid from a byte slice.
    ///
    /// Any length other than 16 yields `Guid::ZERO`; no error is raised.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match <[u8; 16]>::try_from(bytes) {
            Ok(bytes) => Guid { bytes },
            Err(_) => Guid::ZERO,
        }
    }

    /// Assemble a guid from two big-endian 64-bit halves.
    ///
    /// `hi` supplies bytes 0..8, `lo` bytes 8..16. This matches the
    /// most/least-significant-bits split used by managed-runtime UUID APIs.
    pub const fn from_u64_pair(hi: u64, lo: u64) -> Self {
        let h = hi.to_be_bytes();
        let l = lo.to_be_bytes();
        Guid {
            bytes: [
                h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], l[0], l[1], l[2], l[3], l[4],
                l[5], l[6], l[7],
            ],
        }
    }

    /// Split into big-endian 64-bit halves, inverse of `from_u64_pair`.
    #[inline]
    pub fn to_u64_pair(self) -> (u64, u64) {
        let hi = u64::from_be_bytes(self.bytes[0..8].try_into().unwrap());
        let lo = u64::from_be_bytes(self.bytes[8..16].try_into().unwrap());
        (hi, lo)
    }

    /// Parse a guid from hyphenated or bare hex text.
    ///
    /// Hyphens are skipped wherever they appear; the remaining characters
    /// must be exactly 32 hex digits (case-insensitive). Anything else -
    /// an invalid character, too few digits, a dangling half-pair, or a
    /// 17th byte - yields `Guid::ZERO`. This constructor never errors;
    /// callers distinguish failure only through `is_valid`.
    pub fn parse(text: &str) -> Self {
        let mut bytes = [0u8; 16];
        let mut next = 0usize;
        let mut pending: Option<u8> = None;

        for ch in text.bytes() {
            if ch == b'-' {
                continue;
            }
            // Bail the instant a 17th byte would start or a non-hex
            // character shows up.
            if next >= 16 {
                return Guid::ZERO;
            }
            let digit = match hex_digit(ch) {
                Some(d) => d,
                None => return Guid::ZERO,
            };
            match pending.take() {
                None => pending = Some(digit),
                Some(hi) => {
                    bytes[next] = (hi << 4) | digit;
                    next += 1;
                }
            }
        }

        // Fewer than 16 complete pairs means the string was bad.
        if next < 16 {
            return Guid::ZERO;
        }
        Guid { bytes }
    }

    /// Access the underlying bytes.
    #[inline]
    pub const fn bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Consume the guid, returning its bytes.
    #[inline]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.bytes
    }

    /// True iff this guid is not the all-zero sentinel.
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Guid::ZERO
    }

    /// Exchange the contents of two guids in place. No allocation.
    #[inline]
    pub fn swap(&mut self, other: &mut Guid) {
        std::mem::swap(&mut self.bytes, &mut other.bytes);
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Guid::new(bytes)
    }
}

impl From<&str> for Guid {
    fn from(text: &str) -> Self {
        Guid::parse(text)
    }
}

impl Hash for Guid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Two u64 halves; equal bytes give equal halves, so the
        // equal-implies-equal-hash law holds.
        let (hi, lo) = self.to_u64_pair();
        state.write_u64(hi);
        state.write_u64(lo);
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (start, end)) in GROUPS.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            for byte in &self.bytes[*start..*end] {
                write!(f, "{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}

/// Decode one hex digit, case-insensitive.
#[inline]
const fn hex_digit(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    const CANONICAL: &str = "7bcd757f-5b10-4f9b-af69-1a1f226f3b3e";

    #[test]
    fn test_parse_format_roundtrip() {
        let guid = Guid::parse(CANONICAL);
        assert!(guid.is_valid());
        assert_eq!(guid.to_string(), CANONICAL);
    }

    #[test]
    fn test_matching_strings_parse_equal() {
        let a = Guid::parse(CANONICAL);
        let b = Guid::parse(CANONICAL);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_strings_parse_unequal() {
        let a = Guid::parse(CANONICAL);
        let b = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27");
        assert_ne!(a, b);
    }

    #[test]
    fn test_hyphen_placement_is_ignored() {
        let bare = Guid::parse("0102030405060708090a0b0c0d0e0fdd");
        let hyphenated = Guid::parse("01020304-0506-0708-090a-0b0c0d0e0fdd");
        assert_eq!(bare, hyphenated);
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let upper = Guid::parse("7BCD757F-5B10-4F9B-AF69-1A1F226F3B3E");
        assert_eq!(upper, Guid::parse(CANONICAL));
        // Rendering is always lowercase
        assert_eq!(upper.to_string(), CANONICAL);
    }

    #[test]
    fn test_bytes_and_string_construct_same_value() {
        let bytes = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0xdd,
        ];
        let from_bytes = Guid::new(bytes);
        let from_string = Guid::parse("0102030405060708090a0b0c0d0e0fdd");
        assert_eq!(from_bytes, from_string);
        assert_eq!(from_bytes.bytes(), &bytes);
    }

    #[test]
    fn test_default_is_zero_and_invalid() {
        let empty = Guid::default();
        assert_eq!(empty, Guid::ZERO);
        assert!(!empty.is_valid());
    }

    #[test]
    fn test_one_missing_character_collapses_to_zero() {
        // 35 chars, ends mid-pair
        let guid = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d2");
        assert_eq!(guid, Guid::ZERO);
        assert!(!guid.is_valid());
    }

    #[test]
    fn test_one_extra_character_collapses_to_zero() {
        // 37 chars, a 17th byte would start
        let guid = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27a");
        assert_eq!(guid, Guid::ZERO);
        assert!(!guid.is_valid());
    }

    #[test]
    fn test_non_hex_input_collapses_to_zero() {
        let guid = Guid::parse("!!bad-guid-string!!");
        assert_eq!(guid, Guid::ZERO);
        assert!(!guid.is_valid());
    }

    #[test]
    fn test_wrong_length_byte_slices_collapse_to_zero() {
        let too_few = Guid::from_bytes(&[1, 2, 3, 4]);
        assert_eq!(too_few, Guid::ZERO);
        assert!(!too_few.is_valid());

        let too_many: Vec<u8> = (1..=17).collect();
        let guid = Guid::from_bytes(&too_many);
        assert_eq!(guid, Guid::ZERO);
        assert!(!guid.is_valid());

        let exact: Vec<u8> = (1..=16).collect();
        assert!(Guid::from_bytes(&exact).is_valid());
    }

    #[test]
    fn test_ordering_is_byte_lexicographic() {
        let lower = Guid::parse("7bcd757f-5b10-4f9b-af69-1a1f226f3b31");
        let higher = Guid::parse("7bcd757f-5b10-4f9b-af69-1a1f226f3b3e");
        assert!(lower < higher);
        assert!(higher > lower);
        assert_ne!(lower, higher);

        // Index 0 dominates
        let big_head = Guid::new([0xff; 16]);
        let small_head = Guid::new([0x00; 16]);
        assert!(small_head < big_head);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let a0 = Guid::parse(CANONICAL);
        let b0 = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27");
        let mut a = a0;
        let mut b = b0;

        a.swap(&mut b);

        assert_eq!(a, b0);
        assert_eq!(b, a0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_usable_as_hash_map_key() {
        let k1 = Guid::parse(CANONICAL);
        let k2 = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27");

        let mut map = HashMap::new();
        map.insert(k1, 1);
        map.insert(k2, 2);

        assert_eq!(map.get(&k1), Some(&1));
        assert_eq!(map.get(&k2), Some(&2));
        assert_eq!(map.get(&Guid::parse(CANONICAL)), Some(&1));
    }

    #[test]
    fn test_u64_pair_roundtrip() {
        let guid = Guid::parse(CANONICAL);
        let (hi, lo) = guid.to_u64_pair();
        assert_eq!(Guid::from_u64_pair(hi, lo), guid);

        // Big-endian split: hi covers bytes 0..8
        let guid = Guid::from_u64_pair(0x0102030405060708, 0x090a0b0c0d0e0fdd);
        assert_eq!(guid, Guid::parse("0102030405060708090a0b0c0d0e0fdd"));
    }

    #[test]
    fn test_debug_wraps_canonical_form() {
        let guid = Guid::parse(CANONICAL);
        assert_eq!(format!("{:?}", guid), format!("Guid({})", CANONICAL));
    }

    proptest! {
        #[test]
        fn prop_format_parse_roundtrip(bytes in any::<[u8; 16]>()) {
            let guid = Guid::new(bytes);
            prop_assert_eq!(Guid::parse(&guid.to_string()), guid);
        }

        #[test]
        fn prop_formatted_length_is_36(bytes in any::<[u8; 16]>()) {
            prop_assert_eq!(Guid::new(bytes).to_string().len(), 36);
        }

        #[test]
        fn prop_non_hex_garbage_never_validates(text in "[g-z!@#$%^&*]{1,64}") {
            prop_assert!(!Guid::parse(&text).is_valid());
        }
    }
}
