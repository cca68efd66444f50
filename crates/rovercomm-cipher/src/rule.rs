//! Substitution rules and their dispatch.
//!
//! A group is substituted according to where its symbols sit in the grid:
//!
//! | Group                      | Rule                        | Encode        | Decode        |
//! |----------------------------|-----------------------------|---------------|---------------|
//! | trailing single            | [`Rule::Diagonal`]          | `(r-1, c-1)`  | `(r+1, c+1)`  |
//! | pair, [`NoMatch`]          | [`Rule::Rectangle`]         | swap columns  | swap columns  |
//! | pair, [`SameRow`]          | [`Rule::Row`]               | `c+1`         | `c-1`         |
//! | pair, [`SameColumn`]       | [`Rule::Column`]            | `r+1`         | `r-1`         |
//!
//! All shifts wrap modulo 6.
//!
//! [`NoMatch`]: rovercomm_core::EqualityClass::NoMatch
//! [`SameRow`]: rovercomm_core::EqualityClass::SameRow
//! [`SameColumn`]: rovercomm_core::EqualityClass::SameColumn

use rovercomm_core::{Coordinate, EqualityClass, Grid, PositionIndex, Symbol};

use crate::Group;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Direction {
    /// Plaintext to ciphertext.
    #[display("encode")]
    Encode,
    /// Ciphertext to plaintext.
    #[display("decode")]
    Decode,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Encode => Direction::Decode,
            Direction::Decode => Direction::Encode,
        }
    }

    /// Shift applied along a shared row or column.
    #[inline]
    const fn step(self) -> i8 {
        match self {
            Direction::Encode => 1,
            Direction::Decode => -1,
        }
    }
}

/// The substitution applied to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// Pair on different rows and columns: each symbol takes the other's column.
    #[display("rectangle")]
    Rectangle,
    /// Pair on one row: both symbols shift along the row.
    #[display("row")]
    Row,
    /// Pair on one column: both symbols shift along the column.
    #[display("column")]
    Column,
    /// Trailing single symbol: shifts diagonally.
    #[display("diagonal")]
    Diagonal,
}

impl Rule {
    /// Every rule, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Rectangle, Self::Row, Self::Column, Self::Diagonal];

    /// Returns the rule used for a pair with the given classification.
    #[must_use]
    #[inline]
    pub const fn for_class(class: EqualityClass) -> Self {
        match class {
            EqualityClass::NoMatch => Rule::Rectangle,
            EqualityClass::SameRow => Rule::Row,
            EqualityClass::SameColumn => Rule::Column,
        }
    }

    /// Returns the position of this rule in [`Rule::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Applies substitution rules against a grid and its position index.
///
/// The engine borrows both tables; it holds no state of its own.
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::{Direction, Group, Rule, RuleEngine};
/// use rovercomm_core::{Grid, MissionKey, PositionIndex, Symbol};
///
/// let grid = Grid::from_mission_key(&MissionKey::new("MARS2025"))?;
/// let index = PositionIndex::new(&grid);
/// let rules = RuleEngine::new(&grid, &index);
///
/// let r = Symbol::from_char('R').unwrap();
/// let a = Symbol::from_char('A').unwrap();
/// let group = Group::Pair(r, a);
/// assert_eq!(rules.rule_for(group), Rule::Row);
/// assert_eq!(rules.apply(group, Direction::Encode).to_string(), "SR");
/// # Ok::<(), rovercomm_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    grid: &'a Grid,
    index: &'a PositionIndex,
}

impl<'a> RuleEngine<'a> {
    /// Creates a rule engine over a grid and its index.
    ///
    /// `index` must have been built from `grid`.
    #[must_use]
    pub fn new(grid: &'a Grid, index: &'a PositionIndex) -> Self {
        debug_assert_eq!(*index, PositionIndex::new(grid));
        Self { grid, index }
    }

    /// Returns the rule that [`apply`](Self::apply) uses for a group.
    #[must_use]
    pub fn rule_for(&self, group: Group) -> Rule {
        match group {
            Group::Single(_) => Rule::Diagonal,
            Group::Pair(a, b) => {
                let (p, q) = self.index.lookup_pair(a, b);
                Rule::for_class(p.classify(q))
            }
        }
    }

    /// Substitutes one group in the given direction.
    #[must_use]
    pub fn apply(&self, group: Group, direction: Direction) -> Group {
        let (rule, output) = self.apply_traced(group, direction);
        log::trace!("{direction} {group} -> {output} ({rule})");
        output
    }

    /// Substitutes one group and reports the rule that was used.
    #[must_use]
    pub fn apply_traced(&self, group: Group, direction: Direction) -> (Rule, Group) {
        match group {
            Group::Single(a) => (Rule::Diagonal, Group::Single(self.diagonal(a, direction))),
            Group::Pair(a, b) => {
                let (p, q) = self.index.lookup_pair(a, b);
                match p.classify(q) {
                    EqualityClass::NoMatch => (Rule::Rectangle, self.rectangle(p, q)),
                    EqualityClass::SameRow => {
                        let d = direction.step();
                        (Rule::Row, self.shift_pair(p, q, 0, d))
                    }
                    EqualityClass::SameColumn => {
                        let d = direction.step();
                        (Rule::Column, self.shift_pair(p, q, d, 0))
                    }
                }
            }
        }
    }

    fn rectangle(&self, p: Coordinate, q: Coordinate) -> Group {
        Group::Pair(
            self.grid[Coordinate::new(q.row(), p.col())],
            self.grid[Coordinate::new(p.row(), q.col())],
        )
    }

    fn shift_pair(&self, p: Coordinate, q: Coordinate, d_row: i8, d_col: i8) -> Group {
        Group::Pair(
            self.grid[p.offset(d_row, d_col)],
            self.grid[q.offset(d_row, d_col)],
        )
    }

    fn diagonal(&self, symbol: Symbol, direction: Direction) -> Symbol {
        // Encoding moves up-left, decoding moves down-right.
        let d = -direction.step();
        self.grid[self.index.lookup(symbol).offset(d, d)]
    }
}
