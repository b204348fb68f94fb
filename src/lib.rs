//! # SICS: Self-delimiting nibble codes
//!
//! *Frequency-ranked variable-length coding with a base-15 numeral.*
//!
//! ## Intuition First
//!
//! Write numbers in hexadecimal, but give up one digit. The digits `0`-`e`
//! close a number; `f` means "this number continues into the next nibble".
//! Counting then goes `0 .. e`, `f0 .. fe`, `ff0 .. ffe`, and so on: fifteen
//! one-nibble codes, fifteen two-nibble codes, fifteen three-nibble codes.
//!
//! Rank the characters of a message by how often they occur, hand out codes
//! in that order, and the most common characters get the shortest codes.
//! Because `f` never closes a code, a concatenation of codes splits back
//! into codes without separators.
//!
//! ## The Problem
//!
//! A variable-length code needs two properties to be usable:
//! - **Determinism**: the same message always gets the same alphabet, so
//!   equal counts need a fixed tie-break rather than hash order.
//! - **Unique decodability**: the decoder must find code boundaries on its
//!   own, one pass, without lookahead.
//!
//! SICS gets the second property for free from the code shape (`f*` then a
//! terminal digit). It is a prefix code: no code is a prefix of another.
//!
//! ## Mathematical Formulation
//!
//! The `n`-th code has `⌊n / 15⌋` continuation digits followed by the
//! terminal digit with value `n mod 15`:
//!
//! ```text
//! code(n)  = "f" * ⌊n / 15⌋ ++ digit(n mod 15)
//! len(n)   = ⌊n / 15⌋ + 1 nibbles
//! ```
//!
//! Symbols are ranked by count descending, ties broken by first occurrence,
//! and symbol of rank `n` is assigned `code(n)`.
//!
//! ## Complexity Analysis
//!
//! - **Ranking**: $O(N + k \log k)$ for `N` symbols, `k` distinct.
//! - **Encoding / decoding**: $O(N)$ hash lookups; the decoder keeps a single
//!   counter of pending `f` digits as state.
//!
//! ## Failure Modes
//!
//! 1. **Missing index**: the alphabet cannot be recovered from the stream;
//!    the [`AlphabetIndex`] must travel with it.
//! 2. **Large alphabets**: code length grows linearly with rank, so wide
//!    alphabets with flat distributions can expand rather than compress.
//!
//! ## Usage
//!
//! ```
//! let (stream, index) = sics::compress("abcc")?;
//! assert_eq!(stream, "1200");
//! assert_eq!(sics::decompress(&stream, &index)?, "abcc");
//! # Ok::<(), sics::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::hash::Hash;

use tracing::debug;

pub mod code;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod index;

pub use code::{increment, Code};
pub use decoder::SicsDecoder;
pub use encoder::SicsEncoder;
pub use error::{Error, Result};
pub use frequency::{build_index, FrequencyTable};
pub use index::AlphabetIndex;

/// Compress text, returning the stream and the index needed to reverse it.
pub fn compress(input: &str) -> Result<(String, AlphabetIndex<char>)> {
    let encoder = SicsEncoder::from_symbols(input.chars());
    let stream = encoder.encode(input.chars())?;
    debug!(
        chars = input.chars().count(),
        alphabet = encoder.index().len(),
        stream_len = stream.len(),
        "compressed"
    );
    Ok((stream, encoder.into_index()))
}

/// Reverse [`compress`].
pub fn decompress(stream: &str, index: &AlphabetIndex<char>) -> Result<String> {
    let mut text = String::with_capacity(stream.len());
    SicsDecoder::new(index).decode_with(stream, |&c| text.push(c))?;
    debug!(
        stream_len = stream.len(),
        alphabet = index.len(),
        chars = text.chars().count(),
        "decompressed"
    );
    Ok(text)
}

/// Compress an arbitrary symbol sequence.
pub fn compress_symbols<S>(symbols: &[S]) -> Result<(String, AlphabetIndex<S>)>
where
    S: Eq + Hash + Clone,
{
    let encoder = SicsEncoder::from_symbols(symbols.iter().cloned());
    let stream = encoder.encode(symbols)?;
    debug!(
        symbols = symbols.len(),
        alphabet = encoder.index().len(),
        stream_len = stream.len(),
        "compressed"
    );
    Ok((stream, encoder.into_index()))
}

/// Reverse [`compress_symbols`].
pub fn decompress_symbols<S>(stream: &str, index: &AlphabetIndex<S>) -> Result<Vec<S>>
where
    S: Eq + Hash + Clone,
{
    let symbols = SicsDecoder::new(index).decode(stream)?;
    debug!(
        stream_len = stream.len(),
        alphabet = index.len(),
        symbols = symbols.len(),
        "decompressed"
    );
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_abcc() {
        let (stream, index) = compress("abcc").unwrap();
        assert_eq!(stream, "1200");
        assert_eq!(
            index,
            AlphabetIndex::from_codes([("0", 'c'), ("1", 'a'), ("2", 'b')]).unwrap()
        );
        assert_eq!(decompress(&stream, &index).unwrap(), "abcc");
    }

    #[test]
    fn test_compress_empty() {
        let (stream, index) = compress("").unwrap();
        assert_eq!(stream, "");
        assert!(index.is_empty());
        assert_eq!(decompress("", &AlphabetIndex::new()).unwrap(), "");
    }

    #[test]
    fn test_symbols_roundtrip() {
        let data = b"abracadabra".to_vec();
        let (stream, index) = compress_symbols(&data).unwrap();
        assert_eq!(index.code_of(&b'a').unwrap().as_str(), "0");
        assert_eq!(decompress_symbols(&stream, &index).unwrap(), data);
    }
}
