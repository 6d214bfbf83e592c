/// `1 / 2^32`: scales a 32-bit word into `[0, 1)`.
pub const INV_2_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// The two entry points a statistical test battery pulls values through.
///
/// This abstraction lets a harness drive the stream adapter, or a mocked
/// source in tests, without knowing where the words come from. Neither method
/// can fail: a source that runs dry must terminate instead of returning.
///
/// # Example
/// ```
/// use hexgate::UniformSource;
///
/// struct Counter(u32);
/// impl UniformSource for Counter {
///     fn next_raw_word(&mut self) -> u32 {
///         self.0 = self.0.wrapping_add(1);
///         self.0
///     }
/// }
///
/// let mut src = Counter(0);
/// assert_eq!(src.next_raw_word(), 1);
/// assert_eq!(src.next_fraction(), 2.0 / 4_294_967_296.0);
/// ```
pub trait UniformSource {
    /// Returns the next 32-bit word.
    fn next_raw_word(&mut self) -> u32;

    /// Returns the next word scaled into `[0, 1)`.
    fn next_fraction(&mut self) -> f64 {
        f64::from(self.next_raw_word()) * INV_2_POW_32
    }
}
