//! Grid coordinates and their pairwise classification.

use std::fmt::{self, Display};

/// Side length of the cipher grid.
pub const GRID_SIZE: u8 = 6;

/// A cell of the 6×6 cipher grid, addressed by `(row, col)`.
///
/// Both components are in the range 0-5. Coordinates are plain values compared by
/// content.
///
/// # Examples
///
/// ```
/// use rovercomm_core::{Coordinate, EqualityClass};
///
/// let a = Coordinate::new(0, 5);
/// assert_eq!(a.offset(0, 1), Coordinate::new(0, 0)); // wraps around
///
/// let b = Coordinate::new(3, 5);
/// assert_eq!(a.classify(b), EqualityClass::SameColumn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Array containing all 36 coordinates in row-major order.
    pub const ALL: [Self; 36] = {
        let mut all = [Self { row: 0, col: 0 }; 36];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 36 {
            all[i] = Self {
                row: (i / 6) as u8,
                col: (i % 6) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-5.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "Coordinate out of range");
        Self { row, col }
    }

    /// Returns the row (0-5).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-5).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Moves by `(d_row, d_col)`, wrapping around the grid edges.
    #[must_use]
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: wrap(self.row, d_row),
            col: wrap(self.col, d_col),
        }
    }

    /// Classifies how this coordinate relates to `other`.
    ///
    /// Rows are compared before columns, so a coordinate compared with itself is
    /// [`EqualityClass::SameRow`].
    #[must_use]
    #[inline]
    pub const fn classify(self, other: Self) -> EqualityClass {
        if self.row == other.row {
            EqualityClass::SameRow
        } else if self.col == other.col {
            EqualityClass::SameColumn
        } else {
            EqualityClass::NoMatch
        }
    }
}

#[expect(clippy::cast_sign_loss)]
fn wrap(value: u8, delta: i8) -> u8 {
    // rem_euclid is never negative
    let step = delta.rem_euclid(6) as u8;
    (value + step) % GRID_SIZE
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relationship between two grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum EqualityClass {
    /// Rows and columns both differ.
    NoMatch,
    /// Rows are equal (this includes identical coordinates).
    SameRow,
    /// Columns are equal and rows differ.
    SameColumn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Coordinate::ALL[0], Coordinate::new(0, 0));
        assert_eq!(Coordinate::ALL[6], Coordinate::new(1, 0));
        assert_eq!(Coordinate::ALL[35], Coordinate::new(5, 5));
    }

    #[test]
    fn test_offset_wraps_both_ways() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.offset(-1, -1), Coordinate::new(5, 5));
        assert_eq!(Coordinate::new(5, 5).offset(1, 1), corner);
        assert_eq!(Coordinate::new(2, 5).offset(0, 1), Coordinate::new(2, 0));
        assert_eq!(Coordinate::new(2, 0).offset(0, -1), Coordinate::new(2, 5));
        assert_eq!(Coordinate::new(3, 3).offset(0, 0), Coordinate::new(3, 3));
    }

    #[test]
    fn test_classify() {
        let a = Coordinate::new(1, 2);
        assert_eq!(a.classify(Coordinate::new(1, 4)), EqualityClass::SameRow);
        assert_eq!(a.classify(Coordinate::new(4, 2)), EqualityClass::SameColumn);
        assert_eq!(a.classify(Coordinate::new(4, 4)), EqualityClass::NoMatch);
        assert!(a.classify(a).is_same_row());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(4, 1).to_string(), "(4, 1)");
    }

    #[test]
    #[should_panic(expected = "Coordinate out of range")]
    fn test_new_rejects_row_6() {
        let _ = Coordinate::new(6, 0);
    }
}
