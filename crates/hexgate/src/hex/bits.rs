/// Reverses the bit order of `n`: bit 0 is swapped with bit 31, bit 1 with
/// bit 30, and so on.
///
/// Runs as a fixed swap network of adjacent bits, pairs, nibbles, bytes and
/// half-words, so the cost does not depend on the input.
///
/// # Example
/// ```
/// use hexgate::reverse_bits;
///
/// assert_eq!(reverse_bits(1), 0x8000_0000);
/// assert_eq!(reverse_bits(0x0000_00F0), 0x0F00_0000);
/// ```
#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn reverse_bits(mut n: u32) -> u32 {
    n = ((n >> 1) & 0x5555_5555) | ((n << 1) & 0xAAAA_AAAA);
    n = ((n >> 2) & 0x3333_3333) | ((n << 2) & 0xCCCC_CCCC);
    n = ((n >> 4) & 0x0F0F_0F0F) | ((n << 4) & 0xF0F0_F0F0);
    n = ((n >> 8) & 0x00FF_00FF) | ((n << 8) & 0xFF00_FF00);
    n.rotate_left(16)
}
