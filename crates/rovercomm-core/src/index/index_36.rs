use crate::{Coordinate, Symbol};

/// An index in the range 0-35.
///
/// This type represents a valid slot of a 36-element container such as
/// [`Array36`](crate::containers::Array36) or [`SymbolSet`](crate::containers::SymbolSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index36 {
    index: u8,
}

impl Index36 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-35.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 36);
        Self { index }
    }

    /// Returns the underlying index value (0-35).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    pub(crate) const fn bit(self) -> u64 {
        1 << self.index
    }

    /// Returns an iterator over all 36 valid indices (0-35).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rovercomm_core::index::Index36;
    /// let indices: Vec<_> = Index36::all().collect();
    /// assert_eq!(indices.len(), 36);
    /// assert_eq!(indices[35].index(), 35);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..36).map(Index36::new)
    }
}

/// Defines the semantics for mapping values to indices in 36-element containers.
///
/// Implementors define how user-facing values are converted to and from internal
/// indices (0-35).
pub trait Index36Semantics {
    /// The type of values addressing the container.
    type Value;

    /// Converts a value to an index.
    fn to_index(value: Self::Value) -> Index36;

    /// Converts an index back to a value.
    fn from_index(index: Index36) -> Self::Value;
}

/// Semantics for grid coordinates in row-major order.
///
/// `(row, col)` maps to `row * 6 + col`.
///
/// # Examples
///
/// ```
/// use rovercomm_core::{
///     Coordinate,
///     index::{CoordinateSemantics, Index36, Index36Semantics},
/// };
///
/// assert_eq!(CoordinateSemantics::to_index(Coordinate::new(0, 0)).index(), 0);
/// assert_eq!(CoordinateSemantics::to_index(Coordinate::new(5, 5)).index(), 35);
/// assert_eq!(
///     CoordinateSemantics::from_index(Index36::new(7)),
///     Coordinate::new(1, 1),
/// );
/// ```
#[derive(Debug)]
pub struct CoordinateSemantics;

impl Index36Semantics for CoordinateSemantics {
    type Value = Coordinate;

    fn to_index(value: Self::Value) -> Index36 {
        Index36::new(value.row() * 6 + value.col())
    }

    fn from_index(index: Index36) -> Self::Value {
        Coordinate::new(index.index() / 6, index.index() % 6)
    }
}

/// Semantics for alphabet symbols.
///
/// A symbol maps to its position in [`ALPHABET`](crate::ALPHABET).
#[derive(Debug)]
pub struct SymbolSemantics;

impl Index36Semantics for SymbolSemantics {
    type Value = Symbol;

    fn to_index(value: Self::Value) -> Index36 {
        Index36::new(value.index())
    }

    fn from_index(index: Index36) -> Self::Value {
        Symbol::from_index(index.index())
    }
}
