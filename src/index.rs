//! The alphabet index: a bijection between symbols and codes.
//!
//! One index is derived per compressed message and must travel with the
//! stream; the stream alone does not determine it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::code::Code;
use crate::error::{Error, Result};

/// Symbol ↔ code mapping for one message.
///
/// Holds both directions, so the same value serves the encoder (symbol to
/// code) and the decoder (code to symbol).
#[derive(Clone, Debug)]
pub struct AlphabetIndex<S> {
    codes: HashMap<S, Code>,
    symbols: HashMap<Code, S>,
}

impl<S> AlphabetIndex<S> {
    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the alphabet has no symbols (empty input).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the symbol a code stands for.
    ///
    /// Accepts `&str` as well as `&Code`.
    pub fn symbol_of(&self, code: &str) -> Option<&S> {
        self.symbols.get(code)
    }

    /// Entries in code order.
    pub fn entries(&self) -> Vec<(&Code, &S)> {
        let mut entries: Vec<_> = self.symbols.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<S: Eq + Hash + Clone> AlphabetIndex<S> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
            symbols: HashMap::new(),
        }
    }

    /// Assign `0`, `1`, ... in stepper order to already-ranked symbols.
    ///
    /// Callers pass each symbol once.
    pub(crate) fn from_ranking<I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut index = Self::new();
        let mut next = Code::zero();
        for symbol in ranked {
            let code = next;
            next = code.successor();
            index.codes.insert(symbol.clone(), code.clone());
            index.symbols.insert(code, symbol);
        }
        index
    }

    /// Build an index from explicit code → symbol pairs.
    ///
    /// This is how a translator received alongside a stream is turned back
    /// into an index. Codes need not be contiguous, but each code and each
    /// symbol may appear only once.
    pub fn from_codes<C, I>(pairs: I) -> Result<Self>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = (C, S)>,
    {
        let mut index = Self::new();
        for (code, symbol) in pairs {
            let code: Code = code.as_ref().parse()?;
            if index.symbols.contains_key(&code) {
                return Err(Error::DuplicateCode {
                    code: code.into(),
                });
            }
            match index.codes.entry(symbol.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::DuplicateSymbol {
                        code: code.into(),
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(code.clone());
                }
            }
            index.symbols.insert(code, symbol);
        }
        Ok(index)
    }

    /// Look up the code assigned to a symbol.
    pub fn code_of(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }
}

impl<S: Eq + Hash + Clone> Default for AlphabetIndex<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> PartialEq for AlphabetIndex<S> {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl<S: Eq + Hash> Eq for AlphabetIndex<S> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;
    use std::hash::Hash;

    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::AlphabetIndex;
    use crate::code::Code;

    /// Serialized as a `{code: symbol}` map in code order.
    impl<S: Serialize> Serialize for AlphabetIndex<S> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            let entries = self.entries();
            let mut map = serializer.serialize_map(Some(entries.len()))?;
            for (code, symbol) in entries {
                map.serialize_entry(code, symbol)?;
            }
            map.end()
        }
    }

    impl<'de, S> Deserialize<'de> for AlphabetIndex<S>
    where
        S: Deserialize<'de> + Eq + Hash + Clone,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let pairs = BTreeMap::<Code, S>::deserialize(deserializer)?;
            AlphabetIndex::from_codes(pairs).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ranking_assigns_stepper_order() {
        let symbols: Vec<u32> = (0..40).collect();
        let index = AlphabetIndex::from_ranking(symbols.clone());
        assert_eq!(index.len(), 40);
        assert_eq!(index.code_of(&0).unwrap().as_str(), "0");
        assert_eq!(index.code_of(&14).unwrap().as_str(), "e");
        assert_eq!(index.code_of(&15).unwrap().as_str(), "f0");
        assert_eq!(index.code_of(&30).unwrap().as_str(), "ff0");
        for (rank, (code, symbol)) in index.entries().into_iter().enumerate() {
            assert_eq!(code.rank(), rank);
            assert_eq!(*symbol, symbols[rank]);
        }
    }

    #[test]
    fn test_symbol_of_accepts_str() {
        let index = AlphabetIndex::from_codes([("0", 'a'), ("ff0", 'b')]).unwrap();
        assert_eq!(index.symbol_of("0"), Some(&'a'));
        assert_eq!(index.symbol_of("ff0"), Some(&'b'));
        assert_eq!(index.symbol_of("1"), None);
        assert_eq!(index.code_of(&'b').map(Code::as_str), Some("ff0"));
    }

    #[test]
    fn test_from_codes_rejects_duplicates() {
        assert_eq!(
            AlphabetIndex::from_codes([("0", 'a'), ("1", 'a')]),
            Err(Error::DuplicateSymbol { code: "1".into() })
        );
        assert_eq!(
            AlphabetIndex::from_codes([("0", 'a'), ("0", 'b')]),
            Err(Error::DuplicateCode { code: "0".into() })
        );
        assert_eq!(
            AlphabetIndex::from_codes([("f", 'a')]),
            Err(Error::InvalidCode("f".into()))
        );
    }

    #[test]
    fn test_empty_index() {
        let index: AlphabetIndex<char> = AlphabetIndex::default();
        assert!(index.is_empty());
        assert!(index.entries().is_empty());
        assert_eq!(index, AlphabetIndex::from_ranking(Vec::new()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_translator_form() {
        let index = AlphabetIndex::from_ranking(vec!['c', 'a', 'b']);
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"0":"c","1":"a","2":"b"}"#);

        let back: AlphabetIndex<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);

        let bad = serde_json::from_str::<AlphabetIndex<char>>(r#"{"0":"a","f":"b"}"#);
        assert!(bad.is_err());
        let dup = serde_json::from_str::<AlphabetIndex<char>>(r#"{"0":"a","1":"a"}"#);
        assert!(dup.is_err());
    }
}
