use thiserror::Error;

use super::Card;

/// This is the core error type for the library. It uses `thiserror` to
/// provide readable error messages.
///
/// Every error is terminal to the call that raised it. Scoring is a pure
/// function so retrying with the same input gives the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerScoreError {
    /// A card rank or score field is outside of its domain.
    #[error("Value out of range: {0}")]
    Range(String),
    #[error("Expected 7 cards, was given {0}")]
    CardCount(usize),
    #[error("Expected a card, found {0:?}")]
    CardType(String),
    #[error("Expected all cards unique, found two instances of {0}")]
    CardUniqueness(Card),
    #[error("Invalid side cards: {0}")]
    SideCard(String),
    /// The value, secondary value and side cards don't fit the score class.
    #[error("Inconsistent score: {0}")]
    ScoreClass(String),
    #[error("Attempted to draw {requested} card(s) from a deck of {remaining} card(s)")]
    Empty { requested: usize, remaining: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
