use rand::Rng;
use rand::seq::index;
use tracing::{Level, event};

use crate::core::card::{Card, Suit, Value};
use crate::core::error::PokerScoreError;

/// Deck struct holding the cards that haven't been drawn yet.
///
/// Cards are drawn uniformly at random and without replacement, so no two
/// draws from the same deck can ever hand out the same card. The deck has
/// a single owner; share it behind a lock if several threads deal from it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage. Order carries no meaning.
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the default 52 card deck
    ///
    /// ```
    /// use hand_scorer::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for s in Suit::suits() {
            for v in Value::values() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Same as `len`, the number of cards left to draw.
    pub fn remaining(&self) -> usize {
        self.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator over the cards still in the deck.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Remove and return one card picked uniformly at random.
    ///
    /// ```
    /// use hand_scorer::core::Deck;
    ///
    /// let mut rng = rand::rng();
    /// let mut deck = Deck::new();
    /// let card = deck.draw_one(&mut rng).unwrap();
    ///
    /// assert_eq!(51, deck.len());
    /// assert!(!deck.contains(&card));
    /// ```
    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PokerScoreError> {
        if self.cards.is_empty() {
            return Err(PokerScoreError::Empty {
                requested: 1,
                remaining: 0,
            });
        }
        let idx = rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        event!(Level::TRACE, %card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Remove and return `n` distinct cards picked uniformly at random.
    ///
    /// Either all `n` cards are drawn or, when fewer than `n` remain, the
    /// deck is left untouched and `Empty` is returned.
    pub fn draw_n<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, PokerScoreError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(PokerScoreError::Empty {
                requested: n,
                remaining,
            });
        }

        // Remove from the back so the earlier indices stay valid.
        let mut picked = index::sample(rng, remaining, n).into_vec();
        picked.sort_unstable_by(|a, b| b.cmp(a));
        let drawn: Vec<Card> = picked
            .into_iter()
            .map(|idx| self.cards.swap_remove(idx))
            .collect();

        event!(Level::TRACE, n, remaining = self.cards.len(), "drew cards");
        Ok(drawn)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_new_is_full_and_unique() {
        let d = Deck::new();
        assert_eq!(52, d.len());
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Hearts)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Hearts);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
        assert_eq!(51, d.remaining());
    }

    #[test_log::test]
    fn test_draw_one_removes() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut d = Deck::new();
        let c = d.draw_one(&mut rng).unwrap();
        assert_eq!(51, d.len());
        assert!(!d.contains(&c));
    }

    #[test]
    fn test_draw_all_then_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut d = Deck::new();
        let mut seen = HashSet::new();
        while !d.is_empty() {
            assert!(seen.insert(d.draw_one(&mut rng).unwrap()));
        }
        assert_eq!(52, seen.len());
        assert_eq!(
            Err(PokerScoreError::Empty {
                requested: 1,
                remaining: 0
            }),
            d.draw_one(&mut rng)
        );
    }

    #[test_log::test]
    fn test_draw_n() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut d = Deck::new();
        let cards = d.draw_n(7, &mut rng).unwrap();
        assert_eq!(7, cards.len());
        assert_eq!(45, d.len());

        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(7, unique.len());
        for c in &cards {
            assert!(!d.contains(c));
        }
    }

    #[test]
    fn test_draw_n_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut d = Deck::new();
        assert!(d.draw_n(0, &mut rng).unwrap().is_empty());
        assert_eq!(52, d.len());
    }

    #[test]
    fn test_draw_n_too_many_leaves_deck_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut d = Deck::new();
        d.draw_n(50, &mut rng).unwrap();
        assert_eq!(
            Err(PokerScoreError::Empty {
                requested: 3,
                remaining: 2
            }),
            d.draw_n(3, &mut rng)
        );
        assert_eq!(2, d.len());
        assert_eq!(2, d.draw_n(2, &mut rng).unwrap().len());
        assert!(d.is_empty());
    }
}
