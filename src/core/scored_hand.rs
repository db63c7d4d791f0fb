use std::cmp::Ordering;
use std::str::FromStr;

use tracing::{Level, event};

use super::{Card, HandScore, PokerScoreError, ScoreClass, Suit, Value};

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Five consecutive ranks starting at Two.
const LOW_RUN: u16 = 0b1_1111;

/// The rank bits a straight topping at `top` needs.
fn run_mask(top: Value) -> u16 {
    if top == Value::Five {
        WHEEL
    } else {
        LOW_RUN << (top.index() - 4)
    }
}

/// The values of a straight from the top down. The wheel ends in the ace.
fn run_values(top: Value) -> [Value; 5] {
    let i = top.index();
    if top == Value::Five {
        [Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace]
    } else {
        std::array::from_fn(|k| Value::from_index(i - k))
    }
}

/// The highest value with its bit set.
fn highest(mask: u16) -> Option<Value> {
    if mask == 0 {
        None
    } else {
        Some(Value::from_index((15 - mask.leading_zeros()) as usize))
    }
}

fn bit(v: Value) -> u16 {
    1 << v.index()
}

/// Given a bitset of ranks find the highest straight in it.
///
/// Returns None if the ranks don't contain five in a row.
fn straight_high(value_set: u16) -> Option<Value> {
    Value::values()
        .into_iter()
        .rev()
        .take_while(|v| *v >= Value::Five)
        .find(|v| value_set & run_mask(*v) == run_mask(*v))
}

/// Rank and suit histograms over seven cards.
///
/// Everything is indexed by `Value::index` and `Suit::index`, so walking
/// any of these is deterministic.
#[derive(Debug, Default)]
struct Histograms {
    /// rank -> count
    value_to_count: [u8; 13],
    /// count -> set of ranks with exactly that many cards
    count_to_value: [u16; 5],
    /// suit -> set of ranks in that suit
    suit_value_sets: [u16; 4],
    /// every rank present
    value_set: u16,
}

impl Histograms {
    fn new(cards: &[Card]) -> Self {
        let mut h = Self::default();
        for c in cards {
            h.value_to_count[c.value.index()] += 1;
            h.suit_value_sets[c.suit.index()] |= bit(c.value);
            h.value_set |= bit(c.value);
        }
        // Now rotate the value to count map.
        for (idx, &count) in h.value_to_count.iter().enumerate() {
            h.count_to_value[usize::from(count)] |= 1 << idx;
        }
        h
    }

    /// At most one suit can hold five of seven cards.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits()
            .into_iter()
            .find(|s| self.suit_value_sets[s.index()].count_ones() >= 5)
    }

    /// Straight flushes can only top out at most two ranks below the
    /// highest straight across all suits, so check those three.
    fn straight_flush_high(&self, suit: Suit, straight: Value) -> Option<Value> {
        let suited = self.suit_value_sets[suit.index()];
        let top = straight.index();
        (top.saturating_sub(2)..=top)
            .rev()
            .map(Value::from_index)
            .filter(|v| *v >= Value::Five)
            .find(|v| suited & run_mask(*v) == run_mask(*v))
    }
}

/// The best five card hand out of seven cards.
///
/// `played_cards` holds the five cards making the hand, primary group
/// first and kickers after, and `unplayed_cards` the two left over from
/// highest to lowest. Together they are exactly the seven input cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredHand {
    played_cards: Vec<Card>,
    unplayed_cards: Vec<Card>,
    score: HandScore,
    flush_suit: Option<Suit>,
}

impl ScoredHand {
    /// How many cards are scored.
    pub const CARD_COUNT: usize = 7;
    /// How many of them make the hand.
    pub const PLAYED_COUNT: usize = 5;

    /// Score seven distinct cards.
    ///
    /// The order of the input doesn't matter. Fails with `CardCount` for
    /// anything other than seven cards and `CardUniqueness` if a card is
    /// repeated.
    ///
    /// ```
    /// use hand_scorer::core::{Card, ScoreClass, ScoredHand};
    ///
    /// let cards: Vec<Card> = ["AC", "KC", "QC", "JC", "10C", "2D", "3H"]
    ///     .iter()
    ///     .map(|c| c.parse().unwrap())
    ///     .collect();
    /// let hand = ScoredHand::new(cards).unwrap();
    ///
    /// assert_eq!(ScoreClass::RoyalFlush, hand.score().score_class());
    /// assert_eq!("Royal flush in Clubs", hand.describe());
    /// ```
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, PokerScoreError> {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        if cards.len() != Self::CARD_COUNT {
            return Err(PokerScoreError::CardCount(cards.len()));
        }

        // Highest first. Everything below picks cards from the front.
        cards.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(PokerScoreError::CardUniqueness(w[0]));
        }

        let hand = Self::classify(&cards);
        event!(
            Level::TRACE,
            class = ?hand.score.score_class(),
            value = hand.score.value_rank(),
            "scored seven cards"
        );
        Ok(hand)
    }

    /// `sorted` holds seven distinct cards, highest first.
    fn classify(sorted: &[Card]) -> Self {
        let h = Histograms::new(sorted);
        let flush_suit = h.flush_suit();
        let straight = straight_high(h.value_set);

        if let (Some(suit), Some(high)) = (flush_suit, straight) {
            if let Some(top) = h.straight_flush_high(suit, high) {
                let played = run_values(top).map(|v| Card::new(v, suit)).to_vec();
                let score = if top == Value::Ace {
                    HandScore::new_unchecked(ScoreClass::RoyalFlush, None, None, vec![])
                } else {
                    HandScore::new_unchecked(ScoreClass::StraightFlush, Some(top), None, vec![])
                };
                return Self::finish(sorted, played, score, Some(suit));
            }
        }

        if let Some(quads) = highest(h.count_to_value[4]) {
            let mut played = of_value(sorted, quads);
            let side = kickers(sorted, &played, 1);
            played.extend_from_slice(&side);
            let score =
                HandScore::new_unchecked(ScoreClass::FourOfAKind, Some(quads), None, side);
            return Self::finish(sorted, played, score, None);
        }

        let trips = highest(h.count_to_value[3]);
        if let Some(set) = trips {
            // A second set can fill the full house too.
            let others = (h.count_to_value[3] & !bit(set)) | h.count_to_value[2];
            if let Some(pair) = highest(others) {
                let mut played = of_value(sorted, set);
                played.extend(of_value(sorted, pair).into_iter().take(2));
                let score = HandScore::new_unchecked(
                    ScoreClass::FullHouse,
                    Some(set),
                    Some(pair),
                    vec![],
                );
                return Self::finish(sorted, played, score, None);
            }
        }

        if let Some(suit) = flush_suit {
            let played: Vec<Card> = sorted
                .iter()
                .filter(|c| c.suit == suit)
                .take(Self::PLAYED_COUNT)
                .copied()
                .collect();
            let score = HandScore::new_unchecked(
                ScoreClass::Flush,
                Some(played[0].value),
                None,
                played.clone(),
            );
            return Self::finish(sorted, played, score, Some(suit));
        }

        if let Some(high) = straight {
            // For each rank of the run play the highest suit, any other
            // copies of that rank stay unplayed.
            let played = run_values(high)
                .into_iter()
                .filter_map(|v| sorted.iter().find(|c| c.value == v).copied())
                .collect();
            let score = HandScore::new_unchecked(ScoreClass::Straight, Some(high), None, vec![]);
            return Self::finish(sorted, played, score, None);
        }

        if let Some(set) = trips {
            let mut played = of_value(sorted, set);
            let side = kickers(sorted, &played, 2);
            played.extend_from_slice(&side);
            let score = HandScore::new_unchecked(ScoreClass::ThreeOfAKind, Some(set), None, side);
            return Self::finish(sorted, played, score, None);
        }

        let pairs = h.count_to_value[2];
        if let Some(high_pair) = highest(pairs) {
            if let Some(low_pair) = highest(pairs & !bit(high_pair)) {
                let mut played = of_value(sorted, high_pair);
                played.extend(of_value(sorted, low_pair));
                let side = kickers(sorted, &played, 1);
                played.extend_from_slice(&side);
                let score = HandScore::new_unchecked(
                    ScoreClass::TwoPair,
                    Some(high_pair),
                    Some(low_pair),
                    side,
                );
                return Self::finish(sorted, played, score, None);
            }

            let mut played = of_value(sorted, high_pair);
            let side = kickers(sorted, &played, 3);
            played.extend_from_slice(&side);
            let score = HandScore::new_unchecked(ScoreClass::Pair, Some(high_pair), None, side);
            return Self::finish(sorted, played, score, None);
        }

        let played = sorted[..Self::PLAYED_COUNT].to_vec();
        let score = HandScore::new_unchecked(
            ScoreClass::HighCard,
            Some(played[0].value),
            None,
            played.clone(),
        );
        Self::finish(sorted, played, score, None)
    }

    fn finish(
        sorted: &[Card],
        played_cards: Vec<Card>,
        score: HandScore,
        flush_suit: Option<Suit>,
    ) -> Self {
        let unplayed_cards: Vec<Card> = sorted
            .iter()
            .filter(|c| !played_cards.contains(c))
            .copied()
            .collect();
        debug_assert_eq!(Self::PLAYED_COUNT, played_cards.len());
        debug_assert_eq!(Self::CARD_COUNT - Self::PLAYED_COUNT, unplayed_cards.len());
        Self {
            played_cards,
            unplayed_cards,
            score,
            flush_suit,
        }
    }

    /// The five cards making the hand.
    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    /// The two cards left out, highest first.
    pub fn unplayed_cards(&self) -> &[Card] {
        &self.unplayed_cards
    }

    pub fn score(&self) -> &HandScore {
        &self.score
    }

    /// The suit of the flush, for the three flush classes.
    pub fn flush_suit(&self) -> Option<Suit> {
        self.flush_suit
    }

    /// Describe the hand, naming the suit for flushes.
    pub fn describe(&self) -> String {
        self.score.describe(self.flush_suit)
    }

    /// Compare the scores of two hands. `Greater` means `self` wins.
    pub fn compare(&self, other: &ScoredHand) -> Ordering {
        self.score.compare(&other.score)
    }
}

/// Parse seven cards separated by whitespace or commas and score them.
///
/// The count is checked before any token is parsed, then every token
/// must be a card, then the cards must be unique.
impl FromStr for ScoredHand {
    type Err = PokerScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != Self::CARD_COUNT {
            return Err(PokerScoreError::CardCount(tokens.len()));
        }
        let cards = tokens
            .into_iter()
            .map(Card::from_str)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(cards)
    }
}

/// Every card of one value, highest suit first.
fn of_value(sorted: &[Card], value: Value) -> Vec<Card> {
    sorted.iter().filter(|c| c.value == value).copied().collect()
}

/// The `n` highest cards that aren't already played.
fn kickers(sorted: &[Card], played: &[Card], n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| !played.contains(c))
        .take(n)
        .copied()
        .collect()
}

/// Can these cards be scored? There are default implementations for
/// slices, arrays and `Vec<Card>`.
pub trait Scoreable {
    /// The cards to score.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Find the best five card hand out of exactly seven cards.
    ///
    /// # Examples
    /// ```
    /// use hand_scorer::core::{Card, ScoreClass, Scoreable};
    ///
    /// let cards: Vec<Card> = "7S KS 2S JD JC JH JS"
    ///     .split(' ')
    ///     .map(|c| c.parse().unwrap())
    ///     .collect();
    /// let hand = cards.score().unwrap();
    /// assert_eq!(ScoreClass::FourOfAKind, hand.score().score_class());
    /// ```
    fn score(&self) -> Result<ScoredHand, PokerScoreError> {
        ScoredHand::new(self.cards())
    }
}

impl Scoreable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Scoreable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Scoreable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
