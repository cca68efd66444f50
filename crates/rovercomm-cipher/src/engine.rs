use rovercomm_core::{ConfigurationError, Grid, MissionKey, PositionIndex};

use crate::{Direction, Message, Rule, RuleEngine};

/// Statistics collected while transforming a message.
///
/// Tracks how many groups each [`Rule`] substituted.
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::{CipherEngine, Rule, RuleStats};
///
/// let engine = CipherEngine::new("MARS2025")?;
/// let mut stats = RuleStats::new();
/// let encoded = engine.encode_with_stats("Rover at 5N", &mut stats);
///
/// assert_eq!(encoded, "PA5ZSRENL");
/// assert_eq!(stats.applications(Rule::Rectangle), 3);
/// assert_eq!(stats.applications(Rule::Row), 1);
/// assert_eq!(stats.applications(Rule::Diagonal), 1);
/// assert_eq!(stats.total_groups(), 5);
/// # Ok::<(), rovercomm_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStats {
    applications: [usize; 4],
}

impl RuleStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            applications: [0; 4],
        }
    }

    /// Returns how many groups the rule substituted.
    #[must_use]
    pub const fn applications(&self, rule: Rule) -> usize {
        self.applications[rule.index()]
    }

    /// Returns the total number of groups substituted.
    #[must_use]
    pub fn total_groups(&self) -> usize {
        self.applications.iter().sum()
    }

    /// Returns `(rule, count)` pairs in [`Rule::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, usize)> + '_ {
        Rule::ALL.into_iter().map(|rule| (rule, self.applications(rule)))
    }

    fn record(&mut self, rule: Rule) {
        self.applications[rule.index()] += 1;
    }
}

/// The rover communication cipher, keyed by a mission key.
///
/// Construction derives the grid and its position index once; both are read-only
/// afterwards, so an engine can be shared between threads without locking. A new
/// mission key needs a new engine.
///
/// # Examples
///
/// ```
/// use rovercomm_cipher::CipherEngine;
///
/// let engine = CipherEngine::new("MARS2025")?;
///
/// assert_eq!(engine.grid_chars()[0], ['M', 'A', 'R', 'S', '2', '0']);
/// assert_eq!(engine.prepare_message("Rover at 5N"), "ROVERAT5N");
///
/// let encoded = engine.encode("Rover at 5N");
/// assert_eq!(encoded, "PA5ZSRENL");
/// assert_eq!(engine.decode(&encoded), "ROVERAT5N");
/// # Ok::<(), rovercomm_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CipherEngine {
    key: MissionKey,
    grid: Grid,
    index: PositionIndex,
}

impl CipherEngine {
    /// Creates an engine for a mission key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the derived grid is not a bijection onto the
    /// alphabet.
    pub fn new(mission_key: &str) -> Result<Self, ConfigurationError> {
        Self::from_mission_key(MissionKey::new(mission_key))
    }

    /// Creates an engine from an already projected mission key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the derived grid is not a bijection onto the
    /// alphabet.
    pub fn from_mission_key(key: MissionKey) -> Result<Self, ConfigurationError> {
        let grid = Grid::from_mission_key(&key)?;
        let index = PositionIndex::new(&grid);
        log::debug!(
            "built cipher grid from {} key symbols, first row {:?}",
            key.symbols().len(),
            grid.row(0).map(char::from),
        );
        Ok(Self { key, grid, index })
    }

    /// Returns the mission key this engine was built from.
    #[must_use]
    pub fn mission_key(&self) -> &MissionKey {
        &self.key
    }

    /// Returns a copy of the grid.
    ///
    /// The copy is independent of the engine; the engine's grid cannot be changed
    /// through it.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Returns a copy of the grid as rows of characters.
    #[must_use]
    pub fn grid_chars(&self) -> [[char; 6]; 6] {
        self.grid.to_char_rows()
    }

    /// Projects raw text onto the cipher alphabet.
    ///
    /// See [`prepare_message`](crate::prepare_message).
    #[must_use]
    pub fn prepare_message(&self, text: &str) -> String {
        crate::prepare_message(text)
    }

    /// Encodes text.
    ///
    /// The text is normalized first; characters outside the alphabet are dropped.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        self.transform(text, Direction::Encode)
    }

    /// Decodes text.
    ///
    /// Well-formed ciphertext contains only alphabet symbols; anything else is
    /// dropped before decoding.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        self.transform(text, Direction::Decode)
    }

    /// Encodes text and records rule usage into `stats`.
    pub fn encode_with_stats(&self, text: &str, stats: &mut RuleStats) -> String {
        self.transform_with_stats(text, Direction::Encode, stats)
    }

    /// Decodes text and records rule usage into `stats`.
    pub fn decode_with_stats(&self, text: &str, stats: &mut RuleStats) -> String {
        self.transform_with_stats(text, Direction::Decode, stats)
    }

    /// Encodes a normalized message.
    #[must_use]
    pub fn encode_message(&self, message: &Message) -> Message {
        self.transform_message(message, Direction::Encode, &mut RuleStats::new())
    }

    /// Decodes a normalized message.
    #[must_use]
    pub fn decode_message(&self, message: &Message) -> Message {
        self.transform_message(message, Direction::Decode, &mut RuleStats::new())
    }

    /// Transforms text in the given direction.
    #[must_use]
    pub fn transform(&self, text: &str, direction: Direction) -> String {
        self.transform_with_stats(text, direction, &mut RuleStats::new())
    }

    /// Transforms text in the given direction and records rule usage into `stats`.
    pub fn transform_with_stats(
        &self,
        text: &str,
        direction: Direction,
        stats: &mut RuleStats,
    ) -> String {
        let message = Message::prepare(text);
        self.transform_message(&message, direction, stats).to_string()
    }

    fn transform_message(
        &self,
        message: &Message,
        direction: Direction,
        stats: &mut RuleStats,
    ) -> Message {
        let rules = RuleEngine::new(&self.grid, &self.index);
        let output: Message = message
            .digraphs()
            .flat_map(|group| {
                let (rule, substituted) = rules.apply_traced(group, direction);
                log::trace!("{direction} {group} -> {substituted} ({rule})");
                stats.record(rule);
                substituted.symbols()
            })
            .collect();
        debug_assert_eq!(output.len(), message.len());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_engine() -> CipherEngine {
        CipherEngine::new("MARS2025").unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let engine = reference_engine();
        assert_eq!(engine.grid_chars()[0], ['M', 'A', 'R', 'S', '2', '0']);
        assert_eq!(engine.encode("Rover at 5N"), "PA5ZSRENL");
        assert_eq!(engine.decode("PA5ZSRENL"), "ROVERAT5N");
    }

    #[test]
    fn test_mission_key_is_kept() {
        let engine = reference_engine();
        assert_eq!(engine.mission_key().raw(), "MARS2025");
        assert_eq!(engine.mission_key().to_string(), "MARS205");
    }

    #[test]
    fn test_grid_is_a_defensive_copy() {
        let engine = reference_engine();
        let mut chars = engine.grid_chars();
        chars[0][0] = 'X';
        assert_eq!(engine.grid_chars()[0][0], 'M');

        let grid = engine.grid();
        assert_eq!(grid, engine.grid());
        assert_eq!(grid.to_char_rows(), engine.grid_chars());
    }

    #[test]
    fn test_encode_normalizes_input() {
        let engine = reference_engine();
        assert_eq!(engine.encode("rover AT 5n!!"), engine.encode("ROVERAT5N"));
        assert_eq!(engine.encode(""), "");
        assert_eq!(engine.encode("?!"), "");
    }

    #[test]
    fn test_round_trip_with_repeated_symbols() {
        let engine = CipherEngine::new("Olympus Mons").unwrap();
        for plaintext in ["BALLOON", "AAAA", "ZZ99ZZ", "X", "SOL42DUSTSTORM"] {
            let encoded = engine.encode(plaintext);
            assert_eq!(encoded.len(), plaintext.len());
            assert_eq!(engine.decode(&encoded), plaintext);
        }
    }

    #[test]
    fn test_odd_length_trailing_symbol() {
        // Alphabet-order grid: 'N' sits at (2, 1), so it encodes to (1, 0) = 'G'.
        let engine = CipherEngine::new("").unwrap();
        let encoded = engine.encode("AHN");
        assert_eq!(encoded, "GBG");
        assert_eq!(engine.decode("GBG"), "AHN");
    }

    #[test]
    fn test_message_api_matches_string_api() {
        let engine = reference_engine();
        let message = Message::prepare("Rover at 5N");
        let encoded = engine.encode_message(&message);
        assert_eq!(encoded.to_string(), "PA5ZSRENL");
        assert_eq!(engine.decode_message(&encoded), message);
    }

    #[test]
    fn test_stats_accumulate() {
        let engine = CipherEngine::new("").unwrap();
        let mut stats = RuleStats::new();
        let _ = engine.encode_with_stats("AHEFA4Q", &mut stats);
        let _ = engine.decode_with_stats("AA", &mut stats);
        let counts: Vec<_> = stats.iter().collect();
        assert_eq!(
            counts,
            [
                (Rule::Rectangle, 1),
                (Rule::Row, 2),
                (Rule::Column, 1),
                (Rule::Diagonal, 1),
            ]
        );
        assert_eq!(stats.total_groups(), 5);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CipherEngine>();
    }
}
