//! Symbol frequency counting and alphabet ranking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::index::AlphabetIndex;

/// Occurrence counts per distinct symbol, kept in first-occurrence order.
#[derive(Clone, Debug)]
pub struct FrequencyTable<S> {
    slots: HashMap<S, usize>,
    entries: Vec<(S, usize)>, // (symbol, count), first occurrence first
    total: usize,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    /// Count every symbol of `symbols`.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self {
            slots: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        };
        for symbol in symbols {
            table.total += 1;
            match table.slots.entry(symbol) {
                Entry::Occupied(slot) => table.entries[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    table.entries.push((slot.key().clone(), 1));
                    slot.insert(table.entries.len() - 1);
                }
            }
        }
        table
    }

    /// Occurrences of `symbol`, zero if it never appeared.
    pub fn count(&self, symbol: &S) -> usize {
        self.slots.get(symbol).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of symbols counted, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(symbol, count)` pairs in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }

    /// Distinct symbols, most frequent first.
    ///
    /// Equal counts keep first-occurrence order: the symbol seen earlier in
    /// the input ranks higher. The sort is stable over `entries`, so the
    /// result never depends on hash order.
    pub fn ranked(&self) -> Vec<&S> {
        let mut order: Vec<&(S, usize)> = self.entries.iter().collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order.into_iter().map(|(symbol, _)| symbol).collect()
    }

    /// Assign codes in rank order, starting at `0`.
    pub fn into_index(self) -> AlphabetIndex<S> {
        let ranked: Vec<S> = self.ranked().into_iter().cloned().collect();
        AlphabetIndex::from_ranking(ranked)
    }
}

/// Count `symbols` and build their alphabet index.
pub fn build_index<S, I>(symbols: I) -> AlphabetIndex<S>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    let table = FrequencyTable::from_symbols(symbols);
    trace!(
        symbols = table.total(),
        distinct = table.len(),
        "built frequency table"
    );
    table.into_index()
}
