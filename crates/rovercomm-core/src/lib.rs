//! Core data structures for the rover communication cipher.
//!
//! This crate provides the value types the cipher is built from: the 36-symbol
//! alphabet, grid coordinates, the keyed 6×6 grid and its inverse index. The
//! substitution rules themselves live in `rovercomm-cipher`.
//!
//! # Overview
//!
//! 1. **Alphabet** - [`symbol`]: [`Symbol`] values for `A`-`Z` and `0`-`9`
//! 2. **Coordinates** - [`coordinate`]: [`Coordinate`] and the pairwise
//!    [`EqualityClass`]
//! 3. **Index semantics and containers** - [`index`] and [`containers`]: the
//!    36-slot tables behind [`Grid`] and [`PositionIndex`], plus [`SymbolSet`]
//! 4. **Grid construction** - [`key`] and [`grid`]: [`MissionKey`] projection and
//!    the bijection-checked [`Grid`]
//! 5. **Lookup** - [`position_index`]: [`PositionIndex`], symbol → coordinate
//!
//! [`SymbolSet`]: containers::SymbolSet
//!
//! # Examples
//!
//! ```
//! use rovercomm_core::{Coordinate, Grid, MissionKey, PositionIndex, Symbol};
//!
//! let grid = Grid::from_mission_key(&MissionKey::new("MARS2025"))?;
//! let index = PositionIndex::new(&grid);
//!
//! let five = Symbol::from_char('5').unwrap();
//! assert_eq!(index.lookup(five), Coordinate::new(1, 0));
//! # Ok::<(), rovercomm_core::ConfigurationError>(())
//! ```

pub mod containers;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod index;
pub mod key;
pub mod position_index;
pub mod symbol;

// Re-export commonly used types
pub use self::{
    coordinate::{Coordinate, EqualityClass, GRID_SIZE},
    error::{ConfigurationError, LookupError},
    grid::Grid,
    key::MissionKey,
    position_index::PositionIndex,
    symbol::{ALPHABET, Symbol},
};
