//! SICS decoder.
//!
//! Codes are `f*` followed by one terminal digit, so every terminal digit in
//! the stream closes exactly one code. The decoder scans left to right,
//! counting pending `f` digits, and resolves a code the moment its terminal
//! digit arrives. No lookahead, no backtracking.

use std::hash::Hash;

use crate::code::{is_terminal_digit, CONTINUATION};
use crate::error::{Error, Result};
use crate::index::AlphabetIndex;

/// Resolves a compressed stream through an [`AlphabetIndex`].
pub struct SicsDecoder<'a, S> {
    index: &'a AlphabetIndex<S>,
}

impl<'a, S: Eq + Hash + Clone> SicsDecoder<'a, S> {
    /// Create a decoder borrowing the index the stream was encoded with.
    pub fn new(index: &'a AlphabetIndex<S>) -> Self {
        Self { index }
    }

    /// Decode a stream into its symbol sequence.
    pub fn decode(&self, stream: &str) -> Result<Vec<S>> {
        let mut out = Vec::new();
        self.decode_with(stream, |symbol| out.push(symbol.clone()))?;
        Ok(out)
    }

    /// Decode a stream, handing each symbol to `emit` in order.
    ///
    /// # Errors
    /// - `Error::InvalidDigit` for a character outside `0-9a-f`.
    /// - `Error::UnknownCode` for a code the index does not map.
    /// - `Error::TruncatedStream` if the stream ends on `f` digits.
    ///
    /// Symbols emitted before an error are not retracted.
    pub fn decode_with<F>(&self, stream: &str, mut emit: F) -> Result<()>
    where
        F: FnMut(&S),
    {
        let mut pending = 0usize;
        for (position, digit) in stream.char_indices() {
            if digit == CONTINUATION {
                pending += 1;
                continue;
            }
            if !is_terminal_digit(digit) {
                return Err(Error::InvalidDigit { digit, position });
            }
            // The pending `f`s are ASCII, so the code is the byte range
            // ending at this digit.
            let code = &stream[position - pending..=position];
            let symbol = self.index.symbol_of(code).ok_or_else(|| Error::UnknownCode {
                code: code.to_owned(),
                position,
            })?;
            emit(symbol);
            pending = 0;
        }
        if pending > 0 {
            return Err(Error::TruncatedStream { pending });
        }
        Ok(())
    }
}
