//! Property-based tests for grid construction and lookup.
//!
//! Mission keys are arbitrary strings, so these properties cover keys with
//! punctuation, non-ASCII text, repeated symbols and no usable symbols at all.

use proptest::prelude::*;
use rovercomm_core::{Grid, MissionKey, PositionIndex, Symbol, containers::SymbolSet};

// =============================================================================
// Grid Construction
// =============================================================================

proptest! {
    /// Every key yields a grid containing each symbol exactly once.
    #[test]
    fn prop_grid_is_bijection(key in any::<String>()) {
        let grid = Grid::from_mission_key(&MissionKey::new(&key)).unwrap();
        let symbols: SymbolSet = grid.iter().map(|(_, s)| s).collect();
        prop_assert_eq!(symbols.len(), Symbol::COUNT);
        prop_assert_eq!(grid.iter().count(), 36);
    }

    /// The same key always yields the same grid.
    #[test]
    fn prop_grid_is_deterministic(key in any::<String>()) {
        let a = Grid::from_mission_key(&MissionKey::new(&key)).unwrap();
        let b = Grid::from_mission_key(&MissionKey::new(&key)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// The grid starts with the key projection, in order.
    #[test]
    fn prop_grid_starts_with_key(key in "[a-zA-Z0-9 ,.!]{0,48}") {
        let key = MissionKey::new(&key);
        let grid = Grid::from_mission_key(&key).unwrap();
        let prefix: Vec<Symbol> = grid.iter().map(|(_, s)| s).take(key.symbols().len()).collect();
        prop_assert_eq!(prefix.as_slice(), key.symbols());
    }

    /// Uppercase and lowercase spellings of a key build the same grid.
    #[test]
    fn prop_key_is_case_insensitive(key in "[a-zA-Z0-9]{0,24}") {
        let lower = Grid::from_mission_key(&MissionKey::new(&key.to_ascii_lowercase())).unwrap();
        let upper = Grid::from_mission_key(&MissionKey::new(&key.to_ascii_uppercase())).unwrap();
        prop_assert_eq!(lower, upper);
    }
}

// =============================================================================
// Position Index
// =============================================================================

proptest! {
    /// The position index is the inverse of the grid.
    #[test]
    fn prop_index_inverts_grid(key in any::<String>()) {
        let grid = Grid::from_mission_key(&MissionKey::new(&key)).unwrap();
        let index = PositionIndex::new(&grid);
        for symbol in Symbol::ALL {
            prop_assert_eq!(grid[index.lookup(symbol)], symbol);
        }
        for (coord, symbol) in grid.iter() {
            prop_assert_eq!(index.lookup(symbol), coord);
        }
    }

    /// Characters outside the alphabet are rejected by the lookup.
    #[test]
    fn prop_lookup_rejects_non_alphabet(ch in "[^a-zA-Z0-9]") {
        let grid = Grid::from_mission_key(&MissionKey::new("")).unwrap();
        let index = PositionIndex::new(&grid);
        let ch = ch.chars().next().unwrap();
        prop_assume!(Symbol::from_char(ch).is_none());
        prop_assert!(index.lookup_char(ch).is_err());
    }
}
