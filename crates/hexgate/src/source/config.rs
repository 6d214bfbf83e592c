use core::num::NonZeroUsize;

/// Default number of words decoded per refill.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(256).unwrap();

/// Largest accepted [`AdapterConfig::capacity`], in words.
///
/// A block of this size takes 192 MiB: 64 MiB of decoded words plus 128 MiB
/// of hex text.
pub const MAX_CAPACITY: usize = 1 << 24;

/// Name reported for a generator that was not given one.
pub const DEFAULT_NAME: &str = "UnknownRng";

/// Immutable settings of a [`StreamRng`].
///
/// [`StreamRng`]: crate::StreamRng
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Display name used in battery reports. Has no effect on the values.
    pub name: String,
    /// Serve every word with its bit order reversed.
    pub reverse_bits: bool,
    /// Number of words decoded per refill, at most [`MAX_CAPACITY`].
    pub capacity: NonZeroUsize,
}

impl AdapterConfig {
    /// Creates a config with the given display name and default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_reverse_bits(mut self, reverse_bits: bool) -> Self {
        self.reverse_bits = reverse_bits;
        self
    }

    #[must_use]
    pub const fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            reverse_bits: false,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
