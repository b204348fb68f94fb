//! Error types for SICS coding.

use thiserror::Error;

/// Error variants for SICS operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a symbol that the alphabet index has no code for.
    #[error("symbol at position {position} has no code in the alphabet index")]
    UnknownSymbol {
        /// Offset of the offending symbol in the input sequence.
        position: usize,
    },

    /// The stream formed a code that the alphabet index does not map.
    #[error("code `{code}` ending at position {position} has no symbol in the alphabet index")]
    UnknownCode {
        /// The complete code that failed to resolve.
        code: String,
        /// Byte offset of the terminal digit in the stream.
        position: usize,
    },

    /// The stream ended in the middle of a code.
    #[error("stream truncated: {pending} continuation digit(s) without a terminal digit")]
    TruncatedStream {
        /// Number of `f` digits still waiting for a terminal digit.
        pending: usize,
    },

    /// The stream contains a character outside `0-9a-f`.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// Byte offset of the character in the stream.
        position: usize,
    },

    /// A code string is not of the form `f*[0-9a-e]`.
    #[error("malformed code: {0:?}")]
    InvalidCode(String),

    /// The same code was given twice when building an index.
    #[error("code `{code}` is mapped more than once")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },

    /// Two codes were mapped to the same symbol.
    #[error("symbol mapped by code `{code}` is already mapped by another code")]
    DuplicateSymbol {
        /// The second code claiming the symbol.
        code: String,
    },
}

/// A specialized Result type for SICS operations.
pub type Result<T> = std::result::Result<T, Error>;
