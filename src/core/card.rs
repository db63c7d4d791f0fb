use std::fmt;
use std::str::FromStr;

use super::PokerScoreError;

/// Card rank or value.
/// The discriminant is the face rank, so Two is 2 and Ace is 14.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// 10
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Lowest face rank a card can have.
    pub const MIN_RANK: u8 = 2;
    /// Highest face rank a card can have.
    pub const MAX_RANK: u8 = 14;

    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// ```
    /// use hand_scorer::core::Value;
    ///
    /// assert_eq!(13, Value::values().len());
    /// assert_eq!(Value::Ace, Value::values()[12]);
    /// ```
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Convert a face rank in `2..=14` into a value.
    ///
    /// ```
    /// use hand_scorer::core::{PokerScoreError, Value};
    ///
    /// assert_eq!(Value::Jack, Value::from_rank(11).unwrap());
    /// assert!(matches!(Value::from_rank(1), Err(PokerScoreError::Range(_))));
    /// ```
    pub fn from_rank(rank: u8) -> Result<Self, PokerScoreError> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return Err(PokerScoreError::Range(format!(
                "card rank must be between 2 and 14, found {rank}"
            )));
        }
        Ok(VALUES[usize::from(rank - Self::MIN_RANK)])
    }

    /// The face rank, 2 for a Two up to 14 for an Ace.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Zero based offset used to index rank histograms.
    pub(crate) const fn index(self) -> usize {
        (self as u8 - Self::MIN_RANK) as usize
    }

    /// Inverse of `index`. Callers only pass offsets below 13.
    pub(crate) const fn from_index(idx: usize) -> Value {
        VALUES[idx]
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The English name of the value, used when describing hands.
    pub const fn name(self) -> &'static str {
        match self {
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Ten => "Ten",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        }
    }

    /// Plural of the name, "Sevens full of Sixes".
    pub const fn plural(self) -> &'static str {
        match self {
            Value::Two => "Twos",
            Value::Three => "Threes",
            Value::Four => "Fours",
            Value::Five => "Fives",
            Value::Six => "Sixes",
            Value::Seven => "Sevens",
            Value::Eight => "Eights",
            Value::Nine => "Nines",
            Value::Ten => "Tens",
            Value::Jack => "Jacks",
            Value::Queen => "Queens",
            Value::King => "Kings",
            Value::Ace => "Aces",
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = PokerScoreError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Value::from_rank(rank)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Jack => f.write_str("J"),
            Value::Queen => f.write_str("Q"),
            Value::King => f.write_str("K"),
            Value::Ace => f.write_str("A"),
            v => write!(f, "{}", v.rank()),
        }
    }
}

/// Enum for the four different suits.
///
/// The ordering Clubs < Diamonds < Hearts < Spades only exists so that
/// sorting cards is deterministic. Suits never make one hand stronger
/// than another.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Clubs = 0,
    /// Diamonds
    Diamonds = 1,
    /// Hearts
    Hearts = 2,
    /// Spades
    Spades = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Parse the full name of a suit, "Clubs" or "clubs".
    pub fn from_name(name: &str) -> Option<Suit> {
        SUITS
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Upper case initial used when printing a card.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards are ordered by value first and suit second. That is the total
/// order used whenever the "highest" cards are picked: sort, then walk
/// from the back.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Create a card from a suit and a raw face rank.
    ///
    /// ```
    /// use hand_scorer::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_new(Suit::Clubs, 4).unwrap();
    /// assert_eq!(Card::new(Value::Four, Suit::Clubs), card);
    /// assert!(Card::try_new(Suit::Spades, 15).is_err());
    /// ```
    pub fn try_new(suit: Suit, rank: u8) -> Result<Self, PokerScoreError> {
        Ok(Self::new(Value::from_rank(rank)?, suit))
    }
}

impl fmt::Display for Card {
    /// Rank followed by the suit initial: `4C`, `10H`, `AS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit.to_char())
    }
}

/// Parse `AS`, `10h` or `Td` style cards.
impl FromStr for Card {
    type Err = PokerScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let bad = || PokerScoreError::CardType(token.to_string());

        let mut chars = token.chars();
        let suit = chars.next_back().and_then(Suit::from_char).ok_or_else(bad)?;
        let value = match chars.as_str() {
            "10" => Value::Ten,
            rest => {
                let mut rank_chars = rest.chars();
                match (rank_chars.next(), rank_chars.next()) {
                    (Some(c), None) => Value::from_char(c).ok_or_else(bad)?,
                    _ => return Err(bad()),
                }
            }
        };
        Ok(Card::new(value, suit))
    }
}
