//! Cipher alphabet symbols.

use std::fmt::{self, Display};

/// The cipher alphabet in its canonical order: `A` to `Z`, then `0` to `9`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const ALPHABET_BYTES: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A single symbol of the 36-symbol cipher alphabet.
///
/// A `Symbol` stores its position in [`ALPHABET`], so every value of this type is
/// a valid alphabet member. Symbols order the same way as the alphabet does.
///
/// # Examples
///
/// ```
/// use rovercomm_core::Symbol;
///
/// let symbol = Symbol::from_char('r').unwrap();
/// assert_eq!(symbol.as_char(), 'R');
/// assert_eq!(symbol.index(), 17);
///
/// let digit = Symbol::from_char('5').unwrap();
/// assert_eq!(digit.index(), 31);
///
/// assert_eq!(Symbol::from_char(' '), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    index: u8,
}

impl Symbol {
    /// Number of symbols in the alphabet.
    pub const COUNT: usize = 36;

    /// Array containing every symbol in alphabet order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rovercomm_core::Symbol;
    ///
    /// assert_eq!(Symbol::ALL.len(), 36);
    /// assert_eq!(Symbol::ALL[0].as_char(), 'A');
    /// assert_eq!(Symbol::ALL[25].as_char(), 'Z');
    /// assert_eq!(Symbol::ALL[26].as_char(), '0');
    /// assert_eq!(Symbol::ALL[35].as_char(), '9');
    /// ```
    pub const ALL: [Self; 36] = {
        let mut all = [Self { index: 0 }; 36];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 36 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a symbol from its position in [`ALPHABET`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-35.
    #[must_use]
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 36, "Symbol index must be 0-35");
        Self { index }
    }

    /// Converts a character into a symbol.
    ///
    /// The character is accepted when its uppercase form is exactly one character
    /// of [`ALPHABET`]. Everything else yields `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Self::from_upper(u),
            _ => None,
        }
    }

    fn from_upper(c: char) -> Option<Self> {
        let index = match c {
            'A'..='Z' => u32::from(c) - u32::from('A'),
            '0'..='9' => u32::from(c) - u32::from('0') + 26,
            _ => return None,
        };
        u8::try_from(index).ok().map(Self::from_index)
    }

    /// Returns the position of this symbol in [`ALPHABET`] (0-35).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the uppercase character of this symbol.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        ALPHABET_BYTES[self.index as usize] as char
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}
