use std::cmp::Ordering;

use rand::Rng;
use tracing::{Level, event};

use crate::core::{Card, Deck, PokerScoreError, ScoredHand, join_cards};

/// How a showdown ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One player holds the best hand.
    Winner(usize),
    /// These players split, lowest index first.
    Tie(Vec<usize>),
}

/// One dealt round of hold'em: two hole cards per player and a shared
/// board of five.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Showdown {
    board: Vec<Card>,
    hole_cards: Vec<[Card; 2]>,
    hands: Vec<ScoredHand>,
}

impl Showdown {
    /// Hole cards per player.
    pub const HOLE_CARDS: usize = 2;
    /// Community cards.
    pub const BOARD_CARDS: usize = 5;

    /// Build a showdown from cards that are already known.
    ///
    /// Every player's seven cards are scored right away, so any duplicate
    /// between a player's cards and the board is reported here.
    ///
    /// ```
    /// use hand_scorer::core::Card;
    /// use hand_scorer::holdem::{Outcome, Showdown};
    ///
    /// let card = |s: &str| -> Card { s.parse().unwrap() };
    /// let board = ["KH", "QH", "JH", "2C", "7D"].map(card).to_vec();
    /// let players = vec![["AH", "10H"].map(card), ["KS", "KD"].map(card)];
    /// let showdown = Showdown::new(board, players).unwrap();
    /// assert_eq!(Outcome::Winner(0), showdown.outcome());
    /// ```
    pub fn new(board: Vec<Card>, hole_cards: Vec<[Card; 2]>) -> Result<Self, PokerScoreError> {
        if hole_cards.len() < 2 {
            return Err(PokerScoreError::InvalidArgument(format!(
                "a showdown needs at least two players, found {}",
                hole_cards.len()
            )));
        }
        if board.len() != Self::BOARD_CARDS {
            return Err(PokerScoreError::CardCount(board.len() + Self::HOLE_CARDS));
        }

        let hands = hole_cards
            .iter()
            .map(|hole| ScoredHand::new(board.iter().chain(hole.iter()).copied()))
            .collect::<Result<Vec<_>, _>>()?;

        // Cards shared between two players can't be seen per hand.
        let mut all: Vec<Card> = board.clone();
        all.extend(hole_cards.iter().flatten().copied());
        all.sort_unstable();
        if let Some(w) = all.windows(2).find(|w| w[0] == w[1]) {
            return Err(PokerScoreError::CardUniqueness(w[0]));
        }

        for (idx, (hole, hand)) in hole_cards.iter().zip(&hands).enumerate() {
            event!(
                Level::DEBUG,
                player = idx,
                hole = %join_cards(hole),
                score = %hand.describe(),
                "scored player"
            );
        }

        Ok(Self {
            board,
            hole_cards,
            hands,
        })
    }

    /// Deal a new round out of `deck`. Hole cards go out first then the
    /// board, as they would at a table.
    pub fn deal<R: Rng + ?Sized>(
        deck: &mut Deck,
        players: usize,
        rng: &mut R,
    ) -> Result<Self, PokerScoreError> {
        if players < 2 {
            return Err(PokerScoreError::InvalidArgument(format!(
                "a showdown needs at least two players, found {players}"
            )));
        }
        let needed = players * Self::HOLE_CARDS + Self::BOARD_CARDS;
        if needed > deck.remaining() {
            return Err(PokerScoreError::Empty {
                requested: needed,
                remaining: deck.remaining(),
            });
        }

        let mut hole_cards = Vec::with_capacity(players);
        for _ in 0..players {
            hole_cards.push([deck.draw_one(rng)?, deck.draw_one(rng)?]);
        }
        let board = deck.draw_n(Self::BOARD_CARDS, rng)?;
        event!(Level::DEBUG, board = %join_cards(&board), players, "dealt round");

        Self::new(board, hole_cards)
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn hole_cards(&self) -> &[[Card; 2]] {
        &self.hole_cards
    }

    /// Each player's best hand, in seat order.
    pub fn hands(&self) -> &[ScoredHand] {
        &self.hands
    }

    /// The seats holding the best score. More than one means a split.
    pub fn winners(&self) -> Vec<usize> {
        let mut winners: Vec<usize> = Vec::new();
        for (idx, hand) in self.hands.iter().enumerate() {
            match winners.first().map(|&w| hand.compare(&self.hands[w])) {
                None | Some(Ordering::Equal) => winners.push(idx),
                Some(Ordering::Greater) => {
                    winners.clear();
                    winners.push(idx);
                }
                Some(Ordering::Less) => {}
            }
        }
        winners
    }

    pub fn outcome(&self) -> Outcome {
        let winners = self.winners();
        let outcome = match winners.as_slice() {
            [only] => Outcome::Winner(*only),
            _ => Outcome::Tie(winners),
        };
        event!(Level::DEBUG, ?outcome, "showdown");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::ScoreClass;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    fn hole(s: &str) -> [Card; 2] {
        let c = cards(s);
        [c[0], c[1]]
    }

    #[test_log::test]
    fn test_deal() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut deck = Deck::new();
        let showdown = Showdown::deal(&mut deck, 2, &mut rng).unwrap();

        assert_eq!(52 - 9, deck.len());
        assert_eq!(5, showdown.board().len());
        assert_eq!(2, showdown.hole_cards().len());
        assert_eq!(2, showdown.hands().len());
        for hand in showdown.hands() {
            assert_eq!(5, hand.played_cards().len());
            assert_eq!(Ok(()), hand.score().validate());
        }
        assert!(!showdown.winners().is_empty());
    }

    #[test]
    fn test_deal_many_players() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new();
        let showdown = Showdown::deal(&mut deck, 23, &mut rng).unwrap();
        assert_eq!(1, deck.len());
        assert_eq!(23, showdown.hands().len());
    }

    #[test]
    fn test_deal_errors() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new();
        assert!(matches!(
            Showdown::deal(&mut deck, 1, &mut rng),
            Err(PokerScoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            Showdown::deal(&mut deck, 24, &mut rng),
            Err(PokerScoreError::Empty {
                requested: 53,
                remaining: 52
            })
        ));
        // Nothing was drawn by the failed deals.
        assert_eq!(52, deck.len());
    }

    #[test]
    fn test_winner() {
        let showdown = Showdown::new(
            cards("KH QH JH 2C 7D"),
            vec![hole("AH 10H"), hole("KS KD")],
        )
        .unwrap();
        assert_eq!(
            ScoreClass::RoyalFlush,
            showdown.hands()[0].score().score_class()
        );
        assert_eq!(
            ScoreClass::ThreeOfAKind,
            showdown.hands()[1].score().score_class()
        );
        assert_eq!(vec![0], showdown.winners());
        assert_eq!(Outcome::Winner(0), showdown.outcome());
    }

    #[test]
    fn test_kicker_decides() {
        let showdown = Showdown::new(
            cards("AS AD 9C 5H 2D"),
            vec![hole("KC 3S"), hole("QC 3H"), hole("KD 4S")],
        )
        .unwrap();
        // Pair of aces for everyone, K 9 5 beats Q 9 5 and ties K 9 5.
        assert_eq!(Outcome::Tie(vec![0, 2]), showdown.outcome());
    }

    #[test]
    fn test_board_plays() {
        let showdown = Showdown::new(
            cards("10H 9C 8D 7S 6H"),
            vec![hole("2C 3D"), hole("2D 4C")],
        )
        .unwrap();
        assert_eq!(Outcome::Tie(vec![0, 1]), showdown.outcome());
    }

    #[test]
    fn test_shared_card_rejected() {
        assert_eq!(
            Err(PokerScoreError::CardUniqueness(cards("2C")[0])),
            Showdown::new(
                cards("10H 9C 8D 7S 6H"),
                vec![hole("2C 3D"), hole("2C 4C")],
            )
            .map(|s| s.winners())
        );
    }

    #[test]
    fn test_short_board() {
        assert!(matches!(
            Showdown::new(cards("10H 9C 8D 7S"), vec![hole("2C 3D"), hole("2D 4C")]),
            Err(PokerScoreError::CardCount(6))
        ));
    }
}
