//! Message normalization.
//!
//! Raw text is projected onto the cipher alphabet before it is split into digraphs.
//! Characters whose uppercase form is not an alphabet symbol are dropped without
//! error.

use std::fmt::{self, Display};

use rovercomm_core::Symbol;

use crate::digraph::Digraphs;

/// A normalized message: a sequence of alphabet symbols.
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::Message;
///
/// let message = Message::prepare("Rover at 5N");
/// assert_eq!(message.to_string(), "ROVERAT5N");
/// assert_eq!(message.len(), 9);
/// assert_eq!(message.digraphs().len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message {
    symbols: Vec<Symbol>,
}

impl Message {
    /// Normalizes raw text into a message.
    #[must_use]
    pub fn prepare(raw: &str) -> Self {
        raw.chars().filter_map(Symbol::from_char).collect()
    }

    /// Returns the symbols of the message.
    #[must_use]
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the message has no symbols.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns an iterator over the message's substitution groups.
    ///
    /// Each call starts a fresh pass from the beginning of the message.
    #[must_use]
    #[inline]
    pub fn digraphs(&self) -> Digraphs<'_> {
        Digraphs::new(&self.symbols)
    }
}

impl From<Vec<Symbol>> for Message {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromIterator<Symbol> for Message {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            Display::fmt(symbol, f)?;
        }
        Ok(())
    }
}

/// Projects raw text onto the cipher alphabet.
///
/// Letters are uppercased; every character outside the alphabet is dropped.
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::prepare_message;
///
/// assert_eq!(prepare_message("Rover at 5N"), "ROVERAT5N");
/// assert_eq!(prepare_message("... --- ..."), "");
/// ```
#[must_use]
pub fn prepare_message(raw: &str) -> String {
    Message::prepare(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_drops_unsupported_characters() {
        assert_eq!(prepare_message("a-b c_d\te\n1!2?3"), "ABCDE123");
        assert_eq!(prepare_message("Grüße"), "GRE");
        assert_eq!(prepare_message(""), "");
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let once = prepare_message("Sol 42: dust storm, hold position.");
        assert_eq!(once, "SOL42DUSTSTORMHOLDPOSITION");
        assert_eq!(prepare_message(&once), once);
    }

    #[test]
    fn test_message_collects_symbols() {
        let message: Message = "AB9".chars().filter_map(Symbol::from_char).collect();
        assert_eq!(message.len(), 3);
        assert!(!message.is_empty());
        assert_eq!(message, Message::prepare("a b 9"));
        assert!(Message::default().is_empty());
    }
}
