//! Errors reported by grid construction and symbol lookup.

use crate::{Coordinate, Symbol};

/// A grid layout that is not a bijection onto the alphabet.
///
/// Grids derived from a mission key never produce this error; it signals a broken
/// builder or an invalid explicit layout passed to [`Grid::from_rows`].
///
/// [`Grid::from_rows`]: crate::Grid::from_rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// The fill sequence did not provide exactly 36 symbols.
    #[display("grid fill produced {count} symbols, expected 36")]
    WrongCellCount {
        /// Number of symbols produced.
        count: usize,
    },
    /// A symbol occupies more than one cell.
    #[display("symbol {symbol} appears at both {first} and {second}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: Symbol,
        /// Cell of the first occurrence.
        first: Coordinate,
        /// Cell of the second occurrence.
        second: Coordinate,
    },
}

/// A lookup for a character that is not part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LookupError {
    /// The character has no cell in the grid.
    #[display("character {ch:?} is not in the cipher alphabet")]
    UnknownSymbol {
        /// The rejected character.
        ch: char,
    },
}
