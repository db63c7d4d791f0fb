#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hand_scorer;
use hand_scorer::core::ScoredHand;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = s.parse::<ScoredHand>() {
            assert_eq!(Ok(()), h.score().validate());
            assert_eq!(5, h.played_cards().len());
            assert_eq!(2, h.unplayed_cards().len());
        }
    }
});
