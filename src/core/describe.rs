//! Human readable messages for hand scores.
use std::fmt::{self, Write};

use super::{Card, HandScore, ScoreClass, Suit, Value};

/// A borrowed view of a score that prints as a sentence.
///
/// The suit is only used by the flush classes, it's where the flush was
/// made. When it's missing the " in {suit}" part is left out.
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    score: &'a HandScore,
    flush_suit: Option<Suit>,
}

impl HandScore {
    /// Describe this score in plain English.
    ///
    /// ```
    /// use hand_scorer::core::{HandScore, ScoreClass, Suit};
    ///
    /// let full = HandScore::new(ScoreClass::FullHouse, 7, 2, vec![]).unwrap();
    /// assert_eq!("Full house: Sevens full of Twos", full.describe(None));
    ///
    /// let royal = HandScore::new(ScoreClass::RoyalFlush, 0, 0, vec![]).unwrap();
    /// assert_eq!("Royal flush in Clubs", royal.describe(Some(Suit::Clubs)));
    /// ```
    pub fn describe(&self, flush_suit: Option<Suit>) -> String {
        self.description(flush_suit).to_string()
    }

    /// Same as `describe` without allocating until printed.
    pub fn description(&self, flush_suit: Option<Suit>) -> Description<'_> {
        Description {
            score: self,
            flush_suit,
        }
    }
}

impl Description<'_> {
    fn value(&self) -> Value {
        // Only a royal flush goes without a value and it never asks.
        self.score.value().unwrap_or(Value::Ace)
    }

    fn secondary(&self) -> Value {
        self.score.secondary_value().unwrap_or(Value::Two)
    }

    fn write_suit(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flush_suit {
            Some(suit) => write!(f, " in {suit}"),
            None => Ok(()),
        }
    }
}

/// ", King kicker" for one card or ", Nine, Seven, Five side cards".
fn write_side_cards(f: &mut fmt::Formatter<'_>, side_cards: &[Card]) -> fmt::Result {
    match side_cards {
        [] => Ok(()),
        [kicker] => write!(f, ", {} kicker", kicker.value.name()),
        cards => {
            for card in cards {
                f.write_str(", ")?;
                f.write_str(card.value.name())?;
            }
            f.write_str(" side cards")
        }
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_cards = self.score.side_cards();
        match self.score.score_class() {
            ScoreClass::RoyalFlush => {
                f.write_str("Royal flush")?;
                self.write_suit(f)
            }
            ScoreClass::StraightFlush => {
                f.write_str("Straight flush")?;
                self.write_suit(f)?;
                write!(f, ", {} high", self.value().name())
            }
            ScoreClass::FourOfAKind => {
                write!(f, "Four {}", self.value().plural())?;
                write_side_cards(f, side_cards)
            }
            ScoreClass::FullHouse => write!(
                f,
                "Full house: {} full of {}",
                self.value().plural(),
                self.secondary().plural()
            ),
            ScoreClass::Flush => {
                f.write_str("Flush")?;
                self.write_suit(f)?;
                write!(f, ", {} high", self.value().name())?;
                // The first side card is the high card named above.
                write_side_cards(f, side_cards.get(1..).unwrap_or_default())
            }
            ScoreClass::Straight => write!(f, "Straight, {} high", self.value().name()),
            ScoreClass::ThreeOfAKind => {
                write!(f, "Three {}", self.value().plural())?;
                write_side_cards(f, side_cards)
            }
            ScoreClass::TwoPair => {
                write!(
                    f,
                    "Two pair: {} over {}",
                    self.value().plural(),
                    self.secondary().plural()
                )?;
                write_side_cards(f, side_cards)
            }
            ScoreClass::Pair => {
                write!(f, "Pair of {}", self.value().plural())?;
                write_side_cards(f, side_cards)
            }
            ScoreClass::HighCard => {
                write!(f, "High Card: {} high", self.value().name())?;
                write_side_cards(f, side_cards.get(1..).unwrap_or_default())
            }
        }
    }
}

/// Join cards as `AS, KD, 10C` for printing hands.
pub fn join_cards(cards: &[Card]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String can't fail.
        let _ = write!(out, "{card}");
    }
    out
}
