#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hand_scorer;
use hand_scorer::core::{Card, Scoreable};
use std::cmp::Ordering;

fuzz_target!(|cards: [Card; 7]| {
    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted.dedup();

    match cards.score() {
        Ok(hand) => {
            assert_eq!(7, sorted.len());
            assert_eq!(Ok(()), hand.score().validate());

            let mut used: Vec<Card> = hand
                .played_cards()
                .iter()
                .chain(hand.unplayed_cards())
                .copied()
                .collect();
            used.sort();
            assert_eq!(sorted, used);

            let mut reversed = cards;
            reversed.reverse();
            let again = reversed.score().unwrap();
            assert_eq!(Ordering::Equal, hand.compare(&again));
            assert_eq!(hand.describe(), again.describe());
        }
        Err(_) => assert!(sorted.len() < 7),
    }
});
