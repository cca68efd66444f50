//! Splitting messages into substitution groups.

use std::{
    fmt::{self, Display},
    iter::{self, FusedIterator},
    slice::Chunks,
};

use rovercomm_core::Symbol;

/// A substitution unit: two symbols, or the trailing symbol of an odd-length
/// message.
///
/// No filler symbol is ever inserted, so a pair may hold the same symbol twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Group {
    /// Two consecutive symbols.
    Pair(Symbol, Symbol),
    /// The final symbol of an odd-length message.
    Single(Symbol),
}

impl Group {
    /// Returns the number of symbols in the group (1 or 2).
    #[must_use]
    #[inline]
    pub const fn symbol_count(self) -> usize {
        match self {
            Group::Pair(..) => 2,
            Group::Single(_) => 1,
        }
    }

    /// Returns the symbols of the group in order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        let (first, second) = match self {
            Group::Pair(a, b) => (a, Some(b)),
            Group::Single(a) => (a, None),
        };
        iter::once(first).chain(second)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            Display::fmt(&symbol, f)?;
        }
        Ok(())
    }
}

/// Iterator over the non-overlapping groups of a message.
///
/// Created by [`Message::digraphs`](crate::Message::digraphs).
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::{Group, Message};
///
/// let message = Message::prepare("ROVER");
/// let groups: Vec<String> = message.digraphs().map(|g| g.to_string()).collect();
/// assert_eq!(groups, ["RO", "VE", "R"]);
/// assert!(message.digraphs().last().unwrap().is_single());
/// ```
#[derive(Debug, Clone)]
pub struct Digraphs<'a> {
    chunks: Chunks<'a, Symbol>,
}

impl<'a> Digraphs<'a> {
    pub(crate) fn new(symbols: &'a [Symbol]) -> Self {
        Self {
            chunks: symbols.chunks(2),
        }
    }

    #[inline]
    fn group(chunk: &[Symbol]) -> Group {
        match *chunk {
            [a, b] => Group::Pair(a, b),
            [a] => Group::Single(a),
            _ => unreachable!("chunks(2) yields one or two symbols"),
        }
    }
}

impl Iterator for Digraphs<'_> {
    type Item = Group;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Self::group)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for Digraphs<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(Self::group)
    }
}

impl FusedIterator for Digraphs<'_> {}
impl ExactSizeIterator for Digraphs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn sym(c: char) -> Symbol {
        Symbol::from_char(c).unwrap()
    }

    #[test]
    fn test_even_length_has_only_pairs() {
        let message = Message::prepare("ABCD");
        let groups: Vec<_> = message.digraphs().collect();
        assert_eq!(
            groups,
            [Group::Pair(sym('A'), sym('B')), Group::Pair(sym('C'), sym('D'))]
        );
    }

    #[test]
    fn test_odd_length_ends_with_single() {
        let message = Message::prepare("ROVERAT5N");
        let mut groups = message.digraphs();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups.next_back(), Some(Group::Single(sym('N'))));
        assert_eq!(groups.len(), 4);
        assert!(groups.all(|g| g.is_pair()));
    }

    #[test]
    fn test_identical_symbols_are_not_split() {
        let message = Message::prepare("LLAMA");
        let groups: Vec<String> = message.digraphs().map(|g| g.to_string()).collect();
        assert_eq!(groups, ["LL", "AM", "A"]);
    }

    #[test]
    fn test_restartable() {
        let message = Message::prepare("HELLO");
        let first: Vec<_> = message.digraphs().collect();
        let second: Vec<_> = message.digraphs().collect();
        assert_eq!(first, second);

        let mut iter = message.digraphs();
        let _ = iter.next();
        let resumed = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_message_has_no_groups() {
        let message = Message::prepare("   ");
        assert_eq!(message.digraphs().next(), None);
        assert_eq!(message.digraphs().len(), 0);
    }

    #[test]
    fn test_group_symbols() {
        let pair = Group::Pair(sym('X'), sym('7'));
        assert_eq!(pair.symbol_count(), 2);
        assert_eq!(pair.symbols().collect::<Vec<_>>(), [sym('X'), sym('7')]);
        let single = Group::Single(sym('Q'));
        assert_eq!(single.symbol_count(), 1);
        assert_eq!(single.to_string(), "Q");
    }
}
