/// Errors produced while decoding a single hex-encoded word.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The field was not exactly [`WORD_HEX_DIGITS`] bytes long.
    ///
    /// [`WORD_HEX_DIGITS`]: crate::WORD_HEX_DIGITS
    #[error("invalid length: {len}")]
    InvalidLength { len: usize },

    /// A byte outside `0-9`, `A-F` and `a-f` was found at `index`.
    #[error("invalid hex digit {byte:#04x} at index {index}")]
    InvalidDigit { byte: u8, index: usize },
}
