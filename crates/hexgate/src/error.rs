//! Error types for the stream adapter.
//!
//! ## Error Cases
//! - `StreamExhausted`: the reader ended exactly where a new block should
//!   start.
//! - `ShortBlock`: the reader ended in the middle of a block.
//! - `MalformedWord`: a field of the block is not valid hex.
//! - `Io`: the reader failed.
//! - `InvalidName`: a generator name cannot be handed to C code.
//!
//! None of these are recoverable mid-battery. The infallible accessors route
//! them to a [`crate::FatalHandler`].

use crate::hex::DecodeError;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `hexgate` can produce.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No more data was available when a refill was attempted.
    #[error("input stream exhausted after {refills} refills")]
    StreamExhausted { refills: u64 },

    /// The stream ended after `got` of the `expected` hex digits of a block.
    #[error("short block: expected {expected} hex digits, got {got}")]
    ShortBlock { expected: usize, got: usize },

    /// The field decoded into buffer slot `slot` is not a valid word.
    #[error("malformed word in slot {slot}: {source}")]
    MalformedWord {
        slot: usize,
        #[source]
        source: DecodeError,
    },

    /// Reading from the underlying stream failed.
    #[error("failed to read input stream: {0}")]
    Io(#[from] std::io::Error),

    /// The generator name contains an interior NUL byte.
    #[error("generator name contains a NUL byte at position {position}")]
    InvalidName { position: usize },
}
