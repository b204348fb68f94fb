//! SICS encoder.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::frequency::build_index;
use crate::index::AlphabetIndex;

/// Replaces each symbol with its code from an [`AlphabetIndex`].
pub struct SicsEncoder<S> {
    index: AlphabetIndex<S>,
}

impl<S: Eq + Hash + Clone> SicsEncoder<S> {
    /// Create an encoder over an existing index.
    pub fn new(index: AlphabetIndex<S>) -> Self {
        Self { index }
    }

    /// Create an encoder whose index is ranked from `symbols` themselves.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(build_index(symbols))
    }

    /// Encode a symbol sequence into a compressed stream.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for the first symbol the index has no
    /// code for.
    pub fn encode<I, B>(&self, symbols: I) -> Result<String>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        let mut stream = String::new();
        for (position, symbol) in symbols.into_iter().enumerate() {
            let code = self
                .index
                .code_of(symbol.borrow())
                .ok_or(Error::UnknownSymbol { position })?;
            stream.push_str(code.as_str());
        }
        Ok(stream)
    }

    /// The index codes are drawn from.
    pub fn index(&self) -> &AlphabetIndex<S> {
        &self.index
    }

    /// Release the index, which the caller needs to decode the stream later.
    pub fn into_index(self) -> AlphabetIndex<S> {
        self.index
    }
}
