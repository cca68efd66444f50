//! The 6×6 cipher grid.
//!
//! A [`Grid`] places every alphabet symbol in exactly one cell. Grids are built from
//! a [`MissionKey`] (key symbols first, then the rest of the alphabet, row-major) or
//! from explicit rows, and both paths verify the bijection before returning.
//!
//! # Examples
//!
//! ```
//! use rovercomm_core::{Coordinate, Grid, MissionKey};
//!
//! let grid = Grid::from_mission_key(&MissionKey::new("MARS2025"))?;
//! assert_eq!(grid[Coordinate::new(0, 0)].as_char(), 'M');
//! assert_eq!(grid.to_string().lines().next(), Some("M A R S 2 0"));
//! # Ok::<(), rovercomm_core::ConfigurationError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{
    Coordinate, MissionKey, Symbol,
    containers::Array36,
    error::ConfigurationError,
    index::{CoordinateSemantics, SymbolSemantics},
};

/// Immutable 6×6 arrangement of the cipher alphabet.
///
/// Grids compare by content. A new mission key needs a new grid; there is no way to
/// mutate one after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Array36<Symbol, CoordinateSemantics>,
}

impl Grid {
    /// Builds the grid for a mission key.
    ///
    /// The deduplicated key symbols fill the grid row-major, followed by the
    /// remaining alphabet symbols in alphabet order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the fill does not form a bijection onto the
    /// alphabet. This cannot happen for a correct [`MissionKey`] projection.
    pub fn from_mission_key(key: &MissionKey) -> Result<Self, ConfigurationError> {
        let mut cells = [Symbol::ALL[0]; 36];
        let mut count = 0;
        for symbol in key.fill_sequence() {
            if count == cells.len() {
                return Err(ConfigurationError::WrongCellCount { count: count + 1 });
            }
            cells[count] = symbol;
            count += 1;
        }
        if count != cells.len() {
            return Err(ConfigurationError::WrongCellCount { count });
        }
        Self::from_cells(cells)
    }

    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateSymbol`] if any symbol appears in more
    /// than one cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use rovercomm_core::{ConfigurationError, Grid, Symbol};
    ///
    /// let mut rows = [[Symbol::ALL[0]; 6]; 6];
    /// for (i, symbol) in Symbol::ALL.into_iter().enumerate() {
    ///     rows[i / 6][i % 6] = symbol;
    /// }
    /// assert!(Grid::from_rows(rows).is_ok());
    ///
    /// rows[5][5] = rows[0][0];
    /// assert!(matches!(
    ///     Grid::from_rows(rows),
    ///     Err(ConfigurationError::DuplicateSymbol { .. })
    /// ));
    /// ```
    pub fn from_rows(rows: [[Symbol; 6]; 6]) -> Result<Self, ConfigurationError> {
        let mut cells = [Symbol::ALL[0]; 36];
        cells.copy_from_slice(rows.as_flattened());
        Self::from_cells(cells)
    }

    fn from_cells(cells: [Symbol; 36]) -> Result<Self, ConfigurationError> {
        let cells = Array36::<Symbol, CoordinateSemantics>::from_array(cells);
        let mut seen = Array36::<Option<Coordinate>, SymbolSemantics>::from_array([None; 36]);
        for (coord, &symbol) in cells.iter() {
            if let Some(first) = seen[symbol] {
                return Err(ConfigurationError::DuplicateSymbol {
                    symbol,
                    first,
                    second: coord,
                });
            }
            seen[symbol] = Some(coord);
        }
        // 36 cells without duplicates cover all 36 symbols.
        Ok(Self { cells })
    }

    /// Returns the symbol at a coordinate.
    #[must_use]
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Symbol {
        self.cells[coord]
    }

    /// Returns one row of the grid.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-5.
    #[must_use]
    pub fn row(&self, row: u8) -> [Symbol; 6] {
        std::array::from_fn(|col| self.cells[Coordinate::new(row, axis_u8(col))])
    }

    /// Returns a deep copy of all rows.
    #[must_use]
    pub fn rows(&self) -> [[Symbol; 6]; 6] {
        std::array::from_fn(|row| self.row(axis_u8(row)))
    }

    /// Returns a deep copy of all rows as characters.
    #[must_use]
    pub fn to_char_rows(&self) -> [[char; 6]; 6] {
        self.rows().map(|row| row.map(Symbol::as_char))
    }

    /// Returns an iterator over `(coordinate, symbol)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Symbol)> + '_ {
        self.cells.iter().map(|(coord, &symbol)| (coord, symbol))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn axis_u8(i: usize) -> u8 {
    debug_assert!(i < 6);
    i as u8
}

impl Index<Coordinate> for Grid {
    type Output = Symbol;

    #[inline]
    fn index(&self, coord: Coordinate) -> &Symbol {
        &self.cells[coord]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, symbol) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                Display::fmt(symbol, f)?;
            }
        }
        Ok(())
    }
}
