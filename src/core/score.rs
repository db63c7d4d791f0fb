use std::cmp::Ordering;

use super::{Card, PokerScoreError, Value};

/// All the different possible score classes, weakest first.
///
/// The derived ordering is the poker ranking: a `FourOfAKind` beats any
/// `Flush` no matter the cards involved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum ScoreClass {
    /// The lowest class.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to Ace of the same suit.
    RoyalFlush = 9,
}

const CLASSES: [ScoreClass; 10] = [
    ScoreClass::HighCard,
    ScoreClass::Pair,
    ScoreClass::TwoPair,
    ScoreClass::ThreeOfAKind,
    ScoreClass::Straight,
    ScoreClass::Flush,
    ScoreClass::FullHouse,
    ScoreClass::FourOfAKind,
    ScoreClass::StraightFlush,
    ScoreClass::RoyalFlush,
];

impl ScoreClass {
    /// Every class, weakest first.
    pub const fn classes() -> [ScoreClass; 10] {
        CLASSES
    }

    /// How many side cards a score of this class carries.
    pub const fn side_card_count(self) -> usize {
        match self {
            ScoreClass::RoyalFlush
            | ScoreClass::StraightFlush
            | ScoreClass::FullHouse
            | ScoreClass::Straight => 0,
            ScoreClass::FourOfAKind | ScoreClass::TwoPair => 1,
            ScoreClass::ThreeOfAKind => 2,
            ScoreClass::Pair => 3,
            ScoreClass::Flush | ScoreClass::HighCard => 5,
        }
    }

    /// Does this class carry a secondary value?
    pub const fn has_secondary_value(self) -> bool {
        matches!(self, ScoreClass::TwoPair | ScoreClass::FullHouse)
    }
}

impl TryFrom<u8> for ScoreClass {
    type Error = PokerScoreError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        CLASSES.get(usize::from(idx)).copied().ok_or_else(|| {
            PokerScoreError::Range(format!(
                "score class must be between 0 and 9, found {idx}"
            ))
        })
    }
}

/// The score of a five card hand.
///
/// `value` is the rank that defines the class (the pair, the trips, the
/// top of the straight), `secondary_value` the second group for two pair
/// and full house, and `side_cards` the kickers from highest to lowest.
///
/// Scores are ordered class first, then value, then secondary value,
/// then side card ranks one by one. Suits are never looked at, so two
/// scores that only differ in the suits of their kickers are equal and
/// the hands tie.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct HandScore {
    score_class: ScoreClass,
    value: Option<Value>,
    secondary_value: Option<Value>,
    side_cards: Vec<Card>,
}

fn value_from_raw(field: &str, raw: u8) -> Result<Option<Value>, PokerScoreError> {
    match raw {
        0 => Ok(None),
        r if (Value::MIN_RANK..=Value::MAX_RANK).contains(&r) => Value::from_rank(r).map(Some),
        r => Err(PokerScoreError::Range(format!(
            "{field} must be 0 or between 2 and 14, found {r}"
        ))),
    }
}

impl HandScore {
    /// Build a score from raw fields, checking that they are consistent.
    ///
    /// A `value` or `secondary_value` of 0 means the field is unused.
    ///
    /// ```
    /// use hand_scorer::core::{HandScore, PokerScoreError, ScoreClass};
    ///
    /// let straight = HandScore::new(ScoreClass::Straight, 9, 0, vec![]).unwrap();
    /// assert_eq!(9, straight.value_rank());
    ///
    /// let bad = HandScore::new(ScoreClass::Straight, 9, 4, vec![]);
    /// assert!(matches!(bad, Err(PokerScoreError::ScoreClass(_))));
    /// ```
    pub fn new(
        score_class: ScoreClass,
        value: u8,
        secondary_value: u8,
        side_cards: Vec<Card>,
    ) -> Result<Self, PokerScoreError> {
        let score = Self {
            score_class,
            value: value_from_raw("value", value)?,
            secondary_value: value_from_raw("secondary_value", secondary_value)?,
            side_cards,
        };
        score.validate()?;
        Ok(score)
    }

    /// Same as `new` but taking the class as its 0..=9 index.
    pub fn from_raw(
        score_class: u8,
        value: u8,
        secondary_value: u8,
        side_cards: Vec<Card>,
    ) -> Result<Self, PokerScoreError> {
        Self::new(
            ScoreClass::try_from(score_class)?,
            value,
            secondary_value,
            side_cards,
        )
    }

    /// Used by the classifier, which only ever builds consistent scores.
    pub(crate) fn new_unchecked(
        score_class: ScoreClass,
        value: Option<Value>,
        secondary_value: Option<Value>,
        side_cards: Vec<Card>,
    ) -> Self {
        let score = Self {
            score_class,
            value,
            secondary_value,
            side_cards,
        };
        debug_assert_eq!(Ok(()), score.validate());
        score
    }

    /// Check the invariants that tie the fields to the score class.
    ///
    /// This knows nothing about how hands are classified, which makes it
    /// useful to double check the classifier.
    pub fn validate(&self) -> Result<(), PokerScoreError> {
        let side_count = self.side_cards.len();
        if side_count > 5 || side_count == 4 {
            return Err(PokerScoreError::SideCard(format!(
                "there must be 0, 1, 2, 3 or 5 side cards, found {side_count}"
            )));
        }
        for w in self.side_cards.windows(2) {
            if w[0].value < w[1].value || w[0] == w[1] {
                return Err(PokerScoreError::SideCard(format!(
                    "side cards must be distinct and sorted highest first, found {} before {}",
                    w[0], w[1]
                )));
            }
        }

        let class = self.score_class;
        if side_count != class.side_card_count() {
            return Err(PokerScoreError::ScoreClass(format!(
                "{class:?} needs {} side card(s), found {side_count}",
                class.side_card_count()
            )));
        }

        match (self.value, self.secondary_value) {
            (Some(_), Some(_)) if !class.has_secondary_value() => {
                Err(PokerScoreError::ScoreClass(format!(
                    "a secondary value can only occur with TwoPair and FullHouse, seen with {class:?}"
                )))
            }
            (None, Some(_)) => Err(PokerScoreError::ScoreClass(
                "secondary_value should not be non-zero with value equal to 0".to_string(),
            )),
            (Some(_), None) if class.has_secondary_value() => Err(PokerScoreError::ScoreClass(
                format!("secondary_value must be non-zero for {class:?}"),
            )),
            (Some(_), None) if class == ScoreClass::RoyalFlush => Err(
                PokerScoreError::ScoreClass("value must be zero for RoyalFlush".to_string()),
            ),
            (None, None) if class != ScoreClass::RoyalFlush => {
                Err(PokerScoreError::ScoreClass(format!(
                    "value can only be 0 with RoyalFlush, seen with {class:?}"
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn score_class(&self) -> ScoreClass {
        self.score_class
    }

    /// The defining rank, `None` only for a royal flush.
    pub fn value(&self) -> Option<Value> {
        self.value
    }

    pub fn secondary_value(&self) -> Option<Value> {
        self.secondary_value
    }

    /// `value` as a raw rank with 0 meaning unused.
    pub fn value_rank(&self) -> u8 {
        self.value.map_or(0, Value::rank)
    }

    /// `secondary_value` as a raw rank with 0 meaning unused.
    pub fn secondary_value_rank(&self) -> u8 {
        self.secondary_value.map_or(0, Value::rank)
    }

    pub fn side_cards(&self) -> &[Card] {
        &self.side_cards
    }

    /// Three way comparison. `Greater` means `self` wins, `Less` means
    /// `other` wins and `Equal` is a tie.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use hand_scorer::core::{HandScore, ScoreClass};
    ///
    /// let royal = HandScore::new(ScoreClass::RoyalFlush, 0, 0, vec![]).unwrap();
    /// let kings = HandScore::new(ScoreClass::StraightFlush, 13, 0, vec![]).unwrap();
    /// assert_eq!(Ordering::Greater, royal.compare(&kings));
    /// ```
    pub fn compare(&self, other: &HandScore) -> Ordering {
        self.score_class
            .cmp(&other.score_class)
            .then_with(|| self.value.cmp(&other.value))
            .then_with(|| self.secondary_value.cmp(&other.secondary_value))
            .then_with(|| {
                self.side_cards
                    .iter()
                    .map(|c| c.value)
                    .cmp(other.side_cards.iter().map(|c| c.value))
            })
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for HandScore {}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_class_cmp() {
        assert!(ScoreClass::HighCard < ScoreClass::RoyalFlush);
        assert!(ScoreClass::HighCard < ScoreClass::FourOfAKind);
        assert!(ScoreClass::Flush < ScoreClass::FullHouse);
        assert!(ScoreClass::Straight < ScoreClass::Flush);
    }

    #[test]
    fn test_class_from_index() {
        for (i, c) in ScoreClass::classes().iter().enumerate() {
            assert_eq!(*c, ScoreClass::try_from(i as u8).unwrap());
        }
        assert!(matches!(
            ScoreClass::try_from(10),
            Err(PokerScoreError::Range(_))
        ));
        assert!(matches!(
            HandScore::from_raw(10, 0, 0, vec![]),
            Err(PokerScoreError::Range(_))
        ));
    }

    #[test]
    fn test_value_range() {
        for bad in [1, 15, 20] {
            assert!(matches!(
                HandScore::new(ScoreClass::Straight, bad, 0, vec![]),
                Err(PokerScoreError::Range(_))
            ));
            assert!(matches!(
                HandScore::new(ScoreClass::FullHouse, 7, bad, vec![]),
                Err(PokerScoreError::Range(_))
            ));
        }
    }

    #[test]
    fn test_too_many_side_cards() {
        let side = cards("2C 3C 4D 5D 6H 7H");
        assert!(matches!(
            HandScore::new(ScoreClass::HighCard, 7, 0, side),
            Err(PokerScoreError::SideCard(_))
        ));
    }

    #[test]
    fn test_four_side_cards() {
        let side = cards("5D 4D 3C 2C");
        assert!(matches!(
            HandScore::new(ScoreClass::HighCard, 5, 0, side),
            Err(PokerScoreError::SideCard(_))
        ));
    }

    #[test]
    fn test_unsorted_side_cards() {
        let side = cards("5D 9C 4D");
        assert!(matches!(
            HandScore::new(ScoreClass::Pair, 8, 0, side),
            Err(PokerScoreError::SideCard(_))
        ));
        let side = cards("9C 9C 4D");
        assert!(matches!(
            HandScore::new(ScoreClass::Pair, 8, 0, side),
            Err(PokerScoreError::SideCard(_))
        ));
    }

    #[test]
    fn test_side_card_count_per_class() {
        for class in ScoreClass::classes() {
            for count in [0, 1, 2, 3, 5] {
                let side = cards("AS KS QS JS 9S")[..count].to_vec();
                let (value, secondary) = match class {
                    ScoreClass::RoyalFlush => (0, 0),
                    c if c.has_secondary_value() => (8, 7),
                    _ => (8, 0),
                };
                let res = HandScore::new(class, value, secondary, side);
                if count == class.side_card_count() {
                    assert!(res.is_ok(), "{class:?} with {count} side cards");
                } else {
                    assert!(
                        matches!(res, Err(PokerScoreError::ScoreClass(_))),
                        "{class:?} with {count} side cards"
                    );
                }
            }
        }
    }

    #[test]
    fn test_value_combinations() {
        // Secondary value without a value.
        assert!(matches!(
            HandScore::new(ScoreClass::FullHouse, 0, 7, vec![]),
            Err(PokerScoreError::ScoreClass(_))
        ));
        // Secondary value on a class without one.
        assert!(matches!(
            HandScore::new(ScoreClass::Straight, 9, 7, vec![]),
            Err(PokerScoreError::ScoreClass(_))
        ));
        // Missing secondary value.
        assert!(matches!(
            HandScore::new(ScoreClass::FullHouse, 9, 0, vec![]),
            Err(PokerScoreError::ScoreClass(_))
        ));
        // Royal flush has no value.
        assert!(matches!(
            HandScore::new(ScoreClass::RoyalFlush, 14, 0, vec![]),
            Err(PokerScoreError::ScoreClass(_))
        ));
        // Everything else needs one.
        assert!(matches!(
            HandScore::new(ScoreClass::StraightFlush, 0, 0, vec![]),
            Err(PokerScoreError::ScoreClass(_))
        ));
        assert!(HandScore::new(ScoreClass::RoyalFlush, 0, 0, vec![]).is_ok());
    }

    #[test]
    fn test_class_beats_values() {
        let quads = HandScore::new(ScoreClass::FourOfAKind, 2, 0, cards("3C")).unwrap();
        let flush =
            HandScore::new(ScoreClass::Flush, 14, 0, cards("AS KS QS JS 9S")).unwrap();
        assert_eq!(Ordering::Greater, quads.compare(&flush));
        assert_eq!(Ordering::Less, flush.compare(&quads));
        assert!(quads > flush);
    }

    #[test]
    fn test_values_then_side_cards() {
        let aces = HandScore::new(ScoreClass::Pair, 14, 0, cards("9C 5D 3H")).unwrap();
        let kings = HandScore::new(ScoreClass::Pair, 13, 0, cards("QC JD 10H")).unwrap();
        assert!(aces > kings);

        let aces_better_kicker =
            HandScore::new(ScoreClass::Pair, 14, 0, cards("9C 5D 4H")).unwrap();
        assert!(aces_better_kicker > aces);

        let over = HandScore::new(ScoreClass::TwoPair, 10, 9, cards("2C")).unwrap();
        let under = HandScore::new(ScoreClass::TwoPair, 10, 8, cards("AC")).unwrap();
        assert!(over > under);
    }

    #[test]
    fn test_suits_do_not_matter() {
        let a = HandScore::new(ScoreClass::Pair, 14, 0, cards("9C 5D 3H")).unwrap();
        let b = HandScore::new(ScoreClass::Pair, 14, 0, cards("9S 5S 3S")).unwrap();
        assert_eq!(Ordering::Equal, a.compare(&b));
        assert_eq!(a, b);
        assert_eq!(Suit::Clubs, a.side_cards()[0].suit);
    }

    #[test]
    fn test_wheel_loses_to_six_high() {
        let wheel = HandScore::new(ScoreClass::Straight, 5, 0, vec![]).unwrap();
        let six = HandScore::new(ScoreClass::Straight, 6, 0, vec![]).unwrap();
        assert!(six > wheel);
    }
}
