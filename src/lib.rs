//! Seven card poker hand scoring.
//!
//! Give it the seven cards a hold'em player can use and it finds the best
//! five, tells which class of hand they make, keeps the values and kickers
//! needed to break ties, and orders the results so a winner can be called.
//!
//! ```
//! use std::cmp::Ordering;
//! use hand_scorer::core::{ScoreClass, ScoredHand};
//!
//! let royal: ScoredHand = "AC KC QC JC 10C 2D 3H".parse().unwrap();
//! let king_high: ScoredHand = "KH QH JH 10H 9H 2D 3C".parse().unwrap();
//!
//! assert_eq!(ScoreClass::RoyalFlush, royal.score().score_class());
//! assert_eq!(Ordering::Greater, royal.compare(&king_high));
//! assert_eq!("Straight flush in Hearts, King high", king_high.describe());
//! ```

/// Cards, decks, scores and the seven card classifier. Everything in core
/// is agnostic to how the cards were dealt.
pub mod core;
/// Dealing and settling a hold'em round.
pub mod holdem;
