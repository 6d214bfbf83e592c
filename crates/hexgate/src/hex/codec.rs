use crate::hex::DecodeError;

const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";
const NO_VALUE: u8 = 255;
const BITS_PER_DIGIT: usize = 4;

/// Number of hex digits encoding one 32-bit word.
pub const WORD_HEX_DIGITS: usize = 8;

/// Lookup table for hex digit decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Allow lower-case letters
    while i < 16 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Decodes a fixed-length field of 8 hex digits into a `u32`.
///
/// Digits are accumulated most-significant first, so `"80000000"` decodes to
/// `0x8000_0000`. Upper and lower case letters are both accepted.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if `field` is not exactly
///   [`WORD_HEX_DIGITS`] bytes.
/// - [`DecodeError::InvalidDigit`] for the first byte that is not a hex digit.
///
/// # Example
/// ```
/// use hexgate::decode_word;
///
/// assert_eq!(decode_word(b"0000002a"), Ok(42));
/// assert_eq!(decode_word(b"FFFFFFFF"), Ok(u32::MAX));
/// ```
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn decode_word(field: &[u8]) -> Result<u32, DecodeError> {
    if field.len() != WORD_HEX_DIGITS {
        return Err(DecodeError::InvalidLength { len: field.len() });
    }

    let mut acc = 0_u32;
    for (index, &byte) in field.iter().enumerate() {
        let val = LOOKUP[usize::from(byte)];
        if val == NO_VALUE {
            return Err(DecodeError::InvalidDigit { byte, index });
        }
        acc = (acc << BITS_PER_DIGIT) | u32::from(val);
    }

    Ok(acc)
}

/// Renders `word` as 8 upper-case hex digits, most-significant first.
///
/// This is the inverse of [`decode_word`] and produces exactly the format a
/// producer is expected to write to the input stream.
#[must_use]
pub const fn encode_word(word: u32) -> [u8; WORD_HEX_DIGITS] {
    let mut out = [0_u8; WORD_HEX_DIGITS];
    let mut i = 0;
    while i < WORD_HEX_DIGITS {
        let shift = (WORD_HEX_DIGITS - 1 - i) * BITS_PER_DIGIT;
        out[i] = ALPHABET[((word >> shift) & 0xF) as usize];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn decode_known_words() {
        assert_eq!(decode_word(b"00000000"), Ok(0));
        assert_eq!(decode_word(b"FFFFFFFF"), Ok(4_294_967_295));
        assert_eq!(decode_word(b"00000001"), Ok(1));
        assert_eq!(decode_word(b"80000000"), Ok(2_147_483_648));
        assert_eq!(decode_word(b"12345678"), Ok(0x1234_5678));
    }

    #[test]
    fn decode_accepts_lowercase_characters() {
        let val_upper = decode_word(b"ABCDEF01").unwrap();
        let val_lower = decode_word(b"abcdef01").unwrap();

        assert_eq!(val_upper, val_lower);
        assert_eq!(val_upper, 0xABCD_EF01);
    }

    #[test]
    fn decode_accepts_mixed_case_characters() {
        assert_eq!(decode_word(b"aBcDeF01"), decode_word(b"ABCDEF01"));
    }

    #[test]
    fn decode_inverts_encode() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let edges = [0, 1, u32::MAX, 0x8000_0000, 0x7FFF_FFFF, 0xFF00_FF00];
        for v in edges.into_iter().chain((0..10_000).map(|_| rng.random())) {
            let upper = encode_word(v);
            assert_eq!(decode_word(&upper), Ok(v), "upper: {v:#010x}");

            let lower = upper.to_ascii_lowercase();
            assert_eq!(decode_word(&lower), Ok(v), "lower: {v:#010x}");
        }
    }

    #[test]
    fn encode_is_zero_padded_big_endian() {
        assert_eq!(&encode_word(1), b"00000001");
        assert_eq!(&encode_word(0xDEAD_BEEF), b"DEADBEEF");
    }

    #[test]
    fn decode_returns_error_for_invalid_character() {
        assert_eq!(
            decode_word(b"0000000G"),
            Err(DecodeError::InvalidDigit {
                byte: b'G',
                index: 7
            })
        );
        // Characters the upper-case mask would fold onto digits are still
        // rejected.
        assert_eq!(
            decode_word(b"\x10\x10\x10\x10\x10\x10\x10\x10"),
            Err(DecodeError::InvalidDigit {
                byte: 0x10,
                index: 0
            })
        );
        assert_eq!(
            decode_word(b"1234 678"),
            Err(DecodeError::InvalidDigit {
                byte: b' ',
                index: 4
            })
        );
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode_word(b"1234567"),
            Err(DecodeError::InvalidLength { len: 7 })
        );
        assert_eq!(
            decode_word(b"123456789"),
            Err(DecodeError::InvalidLength { len: 9 })
        );
        assert_eq!(decode_word(b""), Err(DecodeError::InvalidLength { len: 0 }));
    }
}
