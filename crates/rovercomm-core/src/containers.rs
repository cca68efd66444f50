//! Fixed-size containers addressed through [`Index36Semantics`].
//!
//! - [`Array36`] - a 36-element array indexed by a semantic value
//! - [`SymbolSet`] - a 36-bit set of alphabet symbols
//!
//! [`Index36Semantics`]: crate::index::Index36Semantics

use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::{
    Symbol,
    index::{Index36, Index36Semantics, SymbolSemantics},
};

/// A 36-element array indexed by values of `S::Value`.
///
/// # Examples
///
/// ```
/// use rovercomm_core::{Coordinate, containers::Array36, index::CoordinateSemantics};
///
/// let mut array = Array36::<u8, CoordinateSemantics>::from_array([0; 36]);
/// array[Coordinate::new(1, 2)] = 7;
/// assert_eq!(array[Coordinate::new(1, 2)], 7);
/// assert_eq!(array.as_array()[8], 7);
/// ```
pub struct Array36<T, S> {
    array: [T; 36],
    _marker: PhantomData<fn() -> S>,
}

impl<T, S> Array36<T, S> {
    /// Creates an array from its raw slots in index order.
    #[must_use]
    #[inline]
    pub const fn from_array(array: [T; 36]) -> Self {
        Self {
            array,
            _marker: PhantomData,
        }
    }

    /// Returns the raw slots in index order.
    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; 36] {
        &self.array
    }
}

impl<T, S> Array36<T, S>
where
    S: Index36Semantics,
{
    /// Returns an iterator over `(value, element)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (S::Value, &T)> + '_ {
        Index36::all().map(|index| (S::from_index(index), &self.array[usize::from(index.index())]))
    }
}

impl<T, S> Index<S::Value> for Array36<T, S>
where
    S: Index36Semantics,
{
    type Output = T;

    #[inline]
    fn index(&self, value: S::Value) -> &T {
        &self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T, S> IndexMut<S::Value> for Array36<T, S>
where
    S: Index36Semantics,
{
    #[inline]
    fn index_mut(&mut self, value: S::Value) -> &mut T {
        &mut self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T: Clone, S> Clone for Array36<T, S> {
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T: Copy, S> Copy for Array36<T, S> {}

impl<T: PartialEq, S> PartialEq for Array36<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq, S> Eq for Array36<T, S> {}

impl<T: Hash, S> Hash for Array36<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.array.hash(state);
    }
}

impl<T: Debug, S> Debug for Array36<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.array).finish()
    }
}

/// A set of alphabet symbols backed by a 36-bit mask.
///
/// Iteration yields symbols in alphabet order.
///
/// # Examples
///
/// ```
/// use rovercomm_core::{Symbol, containers::SymbolSet};
///
/// let mut set = SymbolSet::EMPTY;
/// let m = Symbol::from_char('M').unwrap();
/// assert!(set.insert(m));
/// assert!(!set.insert(m));
/// assert!(set.contains(m));
///
/// let rest = SymbolSet::FULL.difference(set);
/// assert_eq!(rest.len(), 35);
/// assert!(!rest.contains(m));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbolSet {
    bits: u64,
}

impl SymbolSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of every alphabet symbol.
    pub const FULL: Self = Self {
        bits: (1 << 36) - 1,
    };

    /// Returns `true` if the symbol is in the set.
    #[must_use]
    #[inline]
    pub fn contains(self, symbol: Symbol) -> bool {
        self.bits & SymbolSemantics::to_index(symbol).bit() != 0
    }

    /// Inserts a symbol, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        let bit = SymbolSemantics::to_index(symbol).bit();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Returns the symbols in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the number of symbols in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the symbols in alphabet order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> SymbolSetIter {
        SymbolSetIter { bits: self.bits }
    }
}

impl IntoIterator for SymbolSet {
    type Item = Symbol;
    type IntoIter = SymbolSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

/// Iterator over the symbols of a [`SymbolSet`].
#[derive(Debug, Clone)]
pub struct SymbolSetIter {
    bits: u64,
}

impl Iterator for SymbolSetIter {
    type Item = Symbol;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(SymbolSemantics::from_index(Index36::new(index)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for SymbolSetIter {}
impl ExactSizeIterator for SymbolSetIter {}
