//! Mission keys and their projection onto the cipher alphabet.

use std::fmt::{self, Display};

use crate::{
    Symbol,
    containers::{SymbolSet, SymbolSetIter},
};

/// A mission key and its alphabet projection.
///
/// Only the projection matters for grid construction: the key is uppercased,
/// characters outside the alphabet are dropped, and every symbol after its first
/// occurrence is discarded. The raw text is kept for reference.
///
/// # Examples
///
/// ```
/// use rovercomm_core::MissionKey;
///
/// let key = MissionKey::new("Mars 2025!");
/// assert_eq!(key.to_string(), "MARS205");
/// assert_eq!(key.raw(), "Mars 2025!");
/// assert_eq!(key.remaining().count(), 29);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissionKey {
    raw: String,
    symbols: Vec<Symbol>,
    used: SymbolSet,
}

impl MissionKey {
    /// Projects a raw key onto the alphabet.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut used = SymbolSet::EMPTY;
        let symbols = raw
            .chars()
            .filter_map(Symbol::from_char)
            .filter(|&symbol| used.insert(symbol))
            .collect();
        Self {
            raw: raw.to_owned(),
            symbols,
            used,
        }
    }

    /// Returns the key as it was given.
    #[must_use]
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the deduplicated key symbols in order of first occurrence.
    #[must_use]
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns `true` if the key contains no alphabet symbols.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the alphabet symbols absent from the key, in alphabet order.
    #[must_use]
    pub fn remaining(&self) -> SymbolSetIter {
        SymbolSet::FULL.difference(self.used).iter()
    }

    /// Returns the grid fill sequence: key symbols, then the remaining symbols.
    pub fn fill_sequence(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied().chain(self.remaining())
    }
}

impl Display for MissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            Display::fmt(symbol, f)?;
        }
        Ok(())
    }
}
