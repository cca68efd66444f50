//! Inverse lookup from symbols to grid coordinates.

use crate::{
    Coordinate, Grid, Symbol,
    containers::Array36,
    error::LookupError,
    index::SymbolSemantics,
};

/// Precomputed mapping from every alphabet symbol to its cell in a [`Grid`].
///
/// The index is derived once from a grid and never changes. Because a grid is a
/// bijection, every symbol has exactly one coordinate, so [`lookup`](Self::lookup)
/// is total.
///
/// # Examples
///
/// ```
/// use rovercomm_core::{Coordinate, Grid, MissionKey, PositionIndex, Symbol};
///
/// let grid = Grid::from_mission_key(&MissionKey::new("MARS2025"))?;
/// let index = PositionIndex::new(&grid);
///
/// let r = Symbol::from_char('R').unwrap();
/// assert_eq!(index.lookup(r), Coordinate::new(0, 2));
/// assert!(index.lookup_char('?').is_err());
/// # Ok::<(), rovercomm_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    coords: Array36<Coordinate, SymbolSemantics>,
}

impl PositionIndex {
    /// Builds the index for a grid.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let mut coords = Array36::<Coordinate, SymbolSemantics>::from_array(Coordinate::ALL);
        for (coord, symbol) in grid.iter() {
            coords[symbol] = coord;
        }
        Self { coords }
    }

    /// Returns the coordinate of a symbol.
    #[must_use]
    #[inline]
    pub fn lookup(&self, symbol: Symbol) -> Coordinate {
        self.coords[symbol]
    }

    /// Returns the coordinates of two symbols, resolved independently.
    ///
    /// Equal symbols yield equal coordinates.
    #[must_use]
    #[inline]
    pub fn lookup_pair(&self, first: Symbol, second: Symbol) -> (Coordinate, Coordinate) {
        (self.lookup(first), self.lookup(second))
    }

    /// Returns the coordinate of a character.
    ///
    /// Lowercase letters are accepted and looked up as their uppercase symbol.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownSymbol`] if the character is not in the cipher
    /// alphabet.
    pub fn lookup_char(&self, ch: char) -> Result<Coordinate, LookupError> {
        Symbol::from_char(ch)
            .map(|symbol| self.lookup(symbol))
            .ok_or(LookupError::UnknownSymbol { ch })
    }
}
