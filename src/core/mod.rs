//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors for everything in the crate.
mod error;
/// Export the error type.
pub use self::error::PokerScoreError;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Score classes, validated scores and how they compare.
mod score;
/// Export the score types.
pub use self::score::{HandScore, ScoreClass};

/// Turning a score into a sentence.
mod describe;
/// Export the formatter and the card list helper.
pub use self::describe::{Description, join_cards};

/// Picking the best 5 cards out of 7.
mod scored_hand;
/// Export the trait and the result.
pub use self::scored_hand::{ScoredHand, Scoreable};
