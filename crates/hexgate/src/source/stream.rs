use std::io::{BufRead, ErrorKind};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    fatal::{FatalHandler, exit_on_fatal},
    hex::{WORD_HEX_DIGITS, decode_word, reverse_bits},
    source::{AdapterConfig, INV_2_POW_32, MAX_CAPACITY, UniformSource},
};

/// A uniform random source fed by a stream of hex-encoded 32-bit words.
///
/// Words are decoded a block at a time into a fixed-capacity lookahead buffer
/// and served one by one. A new block is read from `R` exactly when the
/// buffer has been fully served, so a call blocks on I/O only once per
/// `capacity` words.
///
/// The input is a run of 8-digit big-endian hex fields with no separators
/// between them. ASCII whitespace anywhere in the stream is skipped, so
/// newline-terminated blocks of any length are accepted.
///
/// ## States
/// - **Exhausted** (initial): the next call triggers a refill.
/// - **Ready**: at least one decoded word is buffered.
///
/// A refill that cannot produce a full block is fatal for the infallible
/// accessors ([`Self::next_raw_word`], [`Self::next_fraction`]): they hand
/// the error to the configured [`FatalHandler`], which never returns. The
/// `try_*` variants return the error instead. Once a refill has failed the
/// adapter should be discarded.
///
/// # Example
/// ```
/// use core::num::NonZeroUsize;
/// use hexgate::{AdapterConfig, StreamRng};
///
/// let input = "0000000100000002\n";
/// let config = AdapterConfig::new("doc").with_capacity(NonZeroUsize::new(2).unwrap());
/// let mut rng = StreamRng::new(input.as_bytes(), config);
///
/// assert_eq!(rng.next_raw_word(), 1);
/// assert_eq!(rng.next_fraction(), 2.0 / 4_294_967_296.0);
/// ```
pub struct StreamRng<R> {
    reader: R,
    config: AdapterConfig,
    words: Box<[u32]>,
    text: Box<[u8]>,
    cursor: usize,
    refills: u64,
    served: u64,
    on_fatal: FatalHandler,
}

impl<R: BufRead> StreamRng<R> {
    /// Creates an adapter in the exhausted state; nothing is read until the
    /// first word is requested.
    ///
    /// # Panics
    ///
    /// If `config.capacity` exceeds [`MAX_CAPACITY`].
    pub fn new(reader: R, config: AdapterConfig) -> Self {
        let capacity = config.capacity.get();
        assert!(
            capacity <= MAX_CAPACITY,
            "capacity of {capacity} words exceeds the maximum of {MAX_CAPACITY}"
        );
        Self {
            reader,
            words: vec![0; capacity].into_boxed_slice(),
            text: vec![0; capacity * WORD_HEX_DIGITS].into_boxed_slice(),
            cursor: capacity,
            refills: 0,
            served: 0,
            on_fatal: exit_on_fatal,
            config,
        }
    }

    /// Creates an adapter with [`AdapterConfig::default`].
    pub fn from_reader(reader: R) -> Self {
        Self::new(reader, AdapterConfig::default())
    }

    /// Replaces the handler invoked when a refill fails inside
    /// [`Self::next_raw_word`] or [`Self::next_fraction`].
    #[must_use]
    pub fn with_fatal_handler(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = handler;
        self
    }

    /// Returns the next word, reading and decoding a new block first if the
    /// buffer is exhausted.
    ///
    /// Never returns on a failed refill; see [`FatalHandler`].
    #[inline]
    pub fn next_raw_word(&mut self) -> u32 {
        match self.try_next_raw_word() {
            Ok(word) => word,
            Err(err) => (self.on_fatal)(&err),
        }
    }

    /// Returns the next word scaled into `[0, 1)`.
    ///
    /// Bit reversal, when configured, is applied to the word before scaling.
    /// Never returns on a failed refill; see [`FatalHandler`].
    #[inline]
    pub fn next_fraction(&mut self) -> f64 {
        f64::from(self.next_raw_word()) * INV_2_POW_32
    }

    /// A fallible version of [`Self::next_raw_word`].
    ///
    /// # Errors
    ///
    /// Any [`Error`] raised while refilling the buffer.
    #[inline]
    pub fn try_next_raw_word(&mut self) -> Result<u32> {
        if self.cursor == self.words.len() {
            self.refill()?;
        }
        let word = self.words[self.cursor];
        self.cursor += 1;
        self.served += 1;
        if self.config.reverse_bits {
            Ok(reverse_bits(word))
        } else {
            Ok(word)
        }
    }

    /// A fallible version of [`Self::next_fraction`].
    ///
    /// # Errors
    ///
    /// Any [`Error`] raised while refilling the buffer.
    #[inline]
    pub fn try_next_fraction(&mut self) -> Result<f64> {
        self.try_next_raw_word()
            .map(|word| f64::from(word) * INV_2_POW_32)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub const fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Number of successful refills so far.
    pub const fn refills(&self) -> u64 {
        self.refills
    }

    /// Number of words served so far.
    pub const fn served(&self) -> u64 {
        self.served
    }

    /// `true` when the next request triggers a refill.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.words.len()
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(refills = self.refills))
    )]
    fn refill(&mut self) -> Result<()> {
        let expected = self.text.len();
        let got = self.read_block()?;
        if got == 0 {
            return Err(Error::StreamExhausted {
                refills: self.refills,
            });
        }
        if got < expected {
            return Err(Error::ShortBlock { expected, got });
        }

        for (slot, (word, field)) in self
            .words
            .iter_mut()
            .zip(self.text.chunks_exact(WORD_HEX_DIGITS))
            .enumerate()
        {
            *word = decode_word(field).map_err(|source| Error::MalformedWord { slot, source })?;
        }

        self.cursor = 0;
        self.refills += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(refills = self.refills, "buffer refilled");

        Ok(())
    }

    /// Copies hex characters into `text` until it is full or the stream
    /// ends, skipping ASCII whitespace. Returns the number copied.
    fn read_block(&mut self) -> Result<usize> {
        let mut filled = 0;
        while filled < self.text.len() {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }

            let mut consumed = 0;
            for &byte in available {
                if filled == self.text.len() {
                    break;
                }
                consumed += 1;
                if !byte.is_ascii_whitespace() {
                    self.text[filled] = byte;
                    filled += 1;
                }
            }
            self.reader.consume(consumed);
        }
        Ok(filled)
    }
}

impl<R: BufRead> UniformSource for StreamRng<R> {
    fn next_raw_word(&mut self) -> u32 {
        Self::next_raw_word(self)
    }

    fn next_fraction(&mut self) -> f64 {
        Self::next_fraction(self)
    }
}

impl<R> core::fmt::Debug for StreamRng<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StreamRng")
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("refills", &self.refills)
            .field("served", &self.served)
            .finish_non_exhaustive()
    }
}
