use std::io::BufRead;

use rand::RngCore;
use rand::rand_core::impls;

use crate::StreamRng;

/// Lets a [`StreamRng`] stand in for any `rand` generator.
///
/// `next_u64` places the first word in the low half, and `fill_bytes` writes
/// each word in little-endian order, as `rand_core` does for 32-bit
/// generators. A failed refill is fatal, as with [`StreamRng::next_raw_word`].
impl<R: BufRead> RngCore for StreamRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.next_raw_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
