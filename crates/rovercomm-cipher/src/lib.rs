//! Digraph substitution cipher over a keyed 6×6 grid.
//!
//! This crate implements the rover communication cipher on top of the value types
//! in `rovercomm-core`. A message is normalized onto the 36-symbol alphabet, split
//! into two-symbol groups (with a possible trailing single), and each group is
//! substituted according to where its symbols sit in the grid.
//!
//! # Pipeline
//!
//! ```text
//! mission key ─► MissionKey ─► Grid ─► PositionIndex
//!                                 │          │
//! text ─► Message ─► Digraphs ─► RuleEngine ─┘ ─► concatenated output
//! ```
//!
//! - [`Message`] / [`prepare_message`]: normalization
//! - [`Digraphs`] / [`Group`]: pair generation
//! - [`RuleEngine`] / [`Rule`] / [`Direction`]: substitution
//! - [`CipherEngine`]: the public entry point
//!
//! No padding is inserted: identical adjacent symbols form a pair of their own, and
//! an odd-length message ends with a single symbol shifted diagonally.
//!
//! # Examples
//!
//! ```
//! use rovercomm_cipher::CipherEngine;
//!
//! let engine = CipherEngine::new("MARS2025")?;
//! let encoded = engine.encode("Rover at 5N");
//! assert_eq!(encoded, "PA5ZSRENL");
//! assert_eq!(engine.decode(&encoded), "ROVERAT5N");
//! # Ok::<(), rovercomm_core::ConfigurationError>(())
//! ```

pub use rovercomm_core::{ConfigurationError, LookupError};

pub use self::{
    digraph::{Digraphs, Group},
    engine::{CipherEngine, RuleStats},
    message::{Message, prepare_message},
    rule::{Direction, Rule, RuleEngine},
};

mod digraph;
mod engine;
mod message;
mod rule;
