//! Index types and semantics for 36-element containers.
//!
//! The cipher grid and its inverse are both 36-element tables. They differ only in
//! what addresses a slot: the grid is addressed by [`Coordinate`] (row-major), the
//! position index by [`Symbol`] (alphabet order). This module provides the shared
//! index type and the semantics that map each key type onto it.
//!
//! # Index Types
//!
//! - [`Index36`] - Index into 36-element containers (range 0-35)
//!
//! # Semantics
//!
//! - [`CoordinateSemantics`] - Maps [`Coordinate`] to indices in row-major order
//! - [`SymbolSemantics`] - Maps [`Symbol`] to its position in the alphabet
//!
//! [`Coordinate`]: crate::Coordinate
//! [`Symbol`]: crate::Symbol
//!
//! # Examples
//!
//! ```
//! use rovercomm_core::{
//!     Coordinate,
//!     index::{CoordinateSemantics, Index36Semantics},
//! };
//!
//! let coord = Coordinate::new(2, 3);
//! let idx = CoordinateSemantics::to_index(coord);
//! assert_eq!(idx.index(), 15); // row 2, column 3 -> 2*6 + 3
//!
//! assert_eq!(CoordinateSemantics::from_index(idx), coord);
//! ```

pub use self::index_36::*;

mod index_36;
